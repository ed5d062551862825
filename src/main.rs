use clap::Parser;
use labelsheet::{
    ExecutorKind, ItemsPerPage, LabelRequest, LabelSetSummary, PipelineBuilder, PipelineError, PrintParams,
};
use log::info;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Builds a QR label sheet from a record file and prints a JSON summary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file holding the resource(s), purchase or wishlist
    #[arg(short, long)]
    data: PathBuf,

    /// Record shape: resource, purchase or wishlist
    #[arg(short, long)]
    shape: String,

    /// Labels per page (10, 12, 16, 18, 21, 24 or 27)
    #[arg(short, long)]
    items_per_page: Option<String>,

    /// Comma-separated field paths to print
    #[arg(short, long)]
    fields: Option<String>,

    /// JSON object mapping field path to caption
    #[arg(short, long)]
    labels: Option<String>,

    /// Label configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the summary here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Encode QR codes on one thread
    #[arg(long)]
    sequential: bool,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    // Reuse the query-string rules for the optional settings.
    let params = PrintParams {
        items_per_page: args.items_per_page,
        fields: args.fields,
        labels: args.labels,
        ..PrintParams::default()
    };
    let mut request = LabelRequest::for_discriminator(&args.shape)?;
    request.items_per_page = ItemsPerPage::parse_lenient(params.items_per_page.as_deref());
    request.fields = params.field_list();
    request.labels = params.label_map()?;

    let mut builder = PipelineBuilder::new();
    if let Some(path) = &args.config {
        info!("Loading configuration from {}", path.display());
        builder = builder.with_config_file(path)?;
    }
    if args.sequential {
        builder = builder.with_executor(ExecutorKind::Sequential);
    }
    let pipeline = builder.build()?;

    info!("Loading data from {}", args.data.display());
    let data: Value = serde_json::from_str(&fs::read_to_string(&args.data)?)?;

    let set = pipeline.build_labels_async(data, request).await?;
    let summary = LabelSetSummary::from(&set);

    match &args.out {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &summary)?;
            writer.flush()?;
            info!("Wrote {} labels to {}", set.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &summary)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

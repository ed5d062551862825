//! Resolves field paths against loosely-typed JSON records.
use crate::ast::FieldPath;
use serde_json::Value;

/// Selects every value addressed by `path` inside `record`.
///
/// Segments are applied left to right. A sequence met with path remaining is
/// fanned out: each element is resolved against the same remaining path and
/// the results are concatenated in element order, so nested sequences
/// flatten into one list. A scalar or a missing key with path remaining
/// contributes nothing; that is not an error.
pub fn select<'a>(record: &'a Value, path: &FieldPath) -> Vec<&'a Value> {
    let mut out = Vec::new();
    select_into(record, path.segments(), &mut out);
    out
}

/// Convenience wrapper that parses `path` first. Syntactically invalid paths
/// select nothing.
pub fn select_str<'a>(record: &'a Value, path: &str) -> Vec<&'a Value> {
    FieldPath::parse(path)
        .map(|p| select(record, &p))
        .unwrap_or_default()
}

fn select_into<'a>(current: &'a Value, remaining: &[String], out: &mut Vec<&'a Value>) {
    let Some((head, tail)) = remaining.split_first() else {
        out.push(current);
        return;
    };

    match current {
        Value::Array(elements) => {
            for element in elements {
                select_into(element, remaining, out);
            }
        }
        Value::Object(map) => {
            if let Some(next) = map.get(head) {
                select_into(next, tail, out);
            }
        }
        _ => {}
    }
}

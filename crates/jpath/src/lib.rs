//! Field paths over JSON records and the formatting rules for printing them.
//!
//! A [`FieldPath`] such as `system.name` addresses values inside an
//! arbitrarily nested record. [`select`] resolves it, flattening any arrays
//! it passes through, and [`ValueFormatter`] turns the resulting values into
//! one printable string.

pub mod ast;
pub mod engine;
pub mod error;
pub mod format;
mod parser;

// --- Public API ---
pub use ast::FieldPath;
pub use engine::{select, select_str};
pub use error::JPathError;
pub use format::{
    DEFAULT_PLACEHOLDER, DEFAULT_TRUNCATE_AT, OBJECT_DISPLAY_KEYS, ValueFormatter, format_value,
    is_present, object_display, to_text,
};
pub use parser::parse_field_path;

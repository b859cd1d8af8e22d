//! Runtime configuration resolved from flags and environment

pub mod formatter;

pub use formatter::{formatter_from_config, select_formatter, FormatterSource};

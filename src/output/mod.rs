//! Report rendering in console, JSON, and markdown form.

pub mod formatter;

pub use formatter::{
    ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, ReportGenerator,
};

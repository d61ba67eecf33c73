//! CLI interface for the ATS scorer.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(about = "Rule-based ATS compatibility scoring for resumes")]
#[command(
    long_about = "Score a resume against a job description using the same heuristics ATS parsers apply: contact details, job-title match, skill coverage, formatting, readability, and web presence"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to the resume file (TXT, MD)
        #[arg(long)]
        cv: PathBuf,

        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Target job title
        #[arg(short, long)]
        title: String,

        /// Company name
        #[arg(long)]
        company: Option<String>,

        /// The source document contains tables
        #[arg(long)]
        has_tables: bool,

        /// The source document contains images
        #[arg(long)]
        has_images: bool,

        /// Output detailed per-category findings
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format.
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {format}. Supported: console, json, markdown"
        )),
    }
}

/// Validate file extension.
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(parse_output_format("json").is_ok());
        assert!(parse_output_format("MD").is_ok());
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(Path::new("cv.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["txt"]).is_err());
    }
}

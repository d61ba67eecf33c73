//! ATS scorer: rule-based resume scoring against job descriptions

use ats_scorer::analysis::{FormatFlags, JobContext};
use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::Config;
use ats_scorer::error::{AtsError, Result};
use ats_scorer::input;
use ats_scorer::output::formatter::{save_report_to_file, ReportGenerator};
use ats_scorer::ScoringEngine;
use clap::Parser;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            cv,
            job,
            title,
            company,
            has_tables,
            has_images,
            detailed,
            output,
            save,
        } => {
            info!("Starting ATS compatibility analysis");

            cli::validate_file_extension(&cv, &["txt", "md", "markdown"])
                .map_err(|e| AtsError::InvalidInput(format!("CV file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md", "markdown"])
                .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(AtsError::InvalidInput)?;

            let cv_text = input::extract_text(&cv)?;
            let job_text = input::extract_text(&job)?;
            info!(
                "Extracted {} chars of CV text, {} chars of job text",
                cv_text.len(),
                job_text.len()
            );

            let mut job_context = JobContext::new(job_text, title);
            job_context.company = company;

            let flags = FormatFlags {
                has_tables,
                has_images,
            };

            let engine = ScoringEngine::with_weights(config.scoring.clone())?;
            let result = engine.analyze(&cv_text, &job_context, flags);

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
            );
            let rendered = generator.generate_report(&result, output_format)?;

            if let Some(path) = save {
                save_report_to_file(&rendered, &path)?;
                println!("Report saved to {}", path.display());
            } else {
                println!("{}", rendered);
            }

            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    AtsError::Configuration(format!("failed to serialize config: {e}"))
                })?;
                println!("{}", content);
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                Config::reset()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

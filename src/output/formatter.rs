//! Output formatters for analysis results with console, JSON, and
//! markdown support.

use crate::analysis::{Category, Severity};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::AnalysisResult;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis result into a printable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured consumers.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharable reports.
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the individual formatters behind one entry point.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Human-readable category label for report headings.
fn category_label(category: Category) -> &'static str {
    match category {
        Category::Contact => "Contact Information",
        Category::JobTitle => "Job Title Match",
        Category::Skill => "Skill Matching",
        Category::Formatting => "Formatting",
        Category::Readability => "Readability",
        Category::WebPresence => "Web Presence",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn severity_marker(&self, severity: Severity) -> String {
        let (marker, color) = match severity {
            Severity::Ok => ("✓", Color::Green),
            Severity::Weak => ("~", Color::Yellow),
            Severity::Missing => ("✗", Color::Red),
        };
        self.colorize(marker, color)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.overall_score,
            self.format_score_badge(report.overall_score)
        ));

        output.push_str(&self.format_header("Score Breakdown", 2));
        for category in &report.categories {
            let score = category.score.round() as u8;
            output.push_str(&format!(
                "  {:<20} {:>3}% (weight: {:.0}%)\n",
                category_label(category.category),
                score,
                category.category.weight() * 100.0
            ));
        }

        if !report.missing_elements.is_empty() {
            output.push_str(&self.format_header("🚨 Missing Elements", 2));
            for element in &report.missing_elements {
                output.push_str(&format!("  • {}\n", self.colorize(element, Color::Red)));
            }
        }

        if !report.keyword_suggestions.is_empty() {
            output.push_str(&self.format_header("🔍 Keyword Suggestions", 2));
            output.push_str(&format!("  {}\n", report.keyword_suggestions.join(", ")));
        }

        if !report.recommendations.is_empty() {
            output.push_str(&self.format_header("📋 Top Recommendations", 2));
            for (i, rec) in report.recommendations.iter().take(10).enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, rec));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("📊 Detailed Findings", 2));
            for category in &report.categories {
                output.push_str(&self.format_header(category_label(category.category), 3));
                for finding in &category.findings {
                    output.push_str(&format!(
                        "  {} {} ({:.0} pts)\n",
                        self.severity_marker(finding.severity),
                        finding.message,
                        finding.points
                    ));
                }
            }
        }

        output.push('\n');
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String> {
        let mut content = String::new();

        content.push_str("# ATS Compatibility Analysis\n\n");
        content.push_str(&format!("**Overall Score:** {}%\n\n", report.overall_score));

        content.push_str("## Score Breakdown\n\n");
        content.push_str("| Category | Score | Weight |\n");
        content.push_str("|----------|-------|--------|\n");
        for category in &report.categories {
            content.push_str(&format!(
                "| {} | {}% | {:.0}% |\n",
                category_label(category.category),
                category.score.round() as u8,
                category.category.weight() * 100.0
            ));
        }
        content.push('\n');

        if !report.missing_elements.is_empty() {
            content.push_str("## Missing Elements\n\n");
            for element in &report.missing_elements {
                content.push_str(&format!("- {}\n", element));
            }
            content.push('\n');
        }

        if !report.keyword_suggestions.is_empty() {
            content.push_str("## Keyword Suggestions\n\n");
            for keyword in &report.keyword_suggestions {
                content.push_str(&format!("- `{}`\n", keyword));
            }
            content.push('\n');
        }

        if !report.recommendations.is_empty() {
            content.push_str("## Recommendations\n\n");
            for (i, rec) in report.recommendations.iter().enumerate() {
                content.push_str(&format!("{}. {}\n", i + 1, rec));
            }
            content.push('\n');
        }

        content.push_str("## Detailed Findings\n\n");
        for category in &report.categories {
            content.push_str(&format!("### {}\n\n", category_label(category.category)));
            for finding in &category.findings {
                let marker = match finding.severity {
                    Severity::Ok => "✓",
                    Severity::Weak => "~",
                    Severity::Missing => "✗",
                };
                content.push_str(&format!(
                    "- {} {} ({:.0} pts)\n",
                    marker, finding.message, finding.points
                ));
            }
            content.push('\n');
        }

        if self.include_metadata {
            content.push_str("---\n");
            content.push_str(&format!(
                "Generated by ats-scorer v{} on {}\n",
                env!("CARGO_PKG_VERSION"),
                chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
            ));
        }

        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(
        &self,
        report: &AnalysisResult,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::{CategoryWeights, ScoringEngine};
    use crate::analysis::{FormatFlags, JobContext};
    use crate::report::build;

    fn sample_report() -> AnalysisResult {
        let engine = ScoringEngine::new().unwrap();
        let job = JobContext::new("Requirements: Rust, Docker", "Engineer");
        engine.analyze(
            "John Doe\njohn@example.com\n\nExperience\n- Built services in Rust",
            &job,
            FormatFlags::default(),
        )
    }

    #[test]
    fn test_console_output_without_colors_is_plain() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Overall Score:"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_json_output_round_trips() {
        let report = sample_report();
        let formatter = JsonFormatter::new(true);
        let json = formatter.format_report(&report).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_markdown_has_breakdown_table() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("| Category | Score | Weight |"));
        assert!(output.contains("Skill Matching"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::new();
        let report = build(Vec::new(), &CategoryWeights::default());
        assert!(generator
            .generate_report(&report, OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
    }
}

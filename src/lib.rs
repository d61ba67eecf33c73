//! ATS scorer library: rule-based resume scoring against job descriptions.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod patterns;
pub mod report;
pub mod segmenter;

pub use analysis::engine::{CategoryWeights, ScoringEngine};
pub use analysis::{Category, FormatFlags, JobContext};
pub use config::Config;
pub use error::{AtsError, Result};
pub use report::AnalysisResult;

/// One-shot analysis with default weights. Builds a fresh engine per
/// call; reuse [`ScoringEngine`] when scoring many CVs.
pub fn analyze(
    cv_text: &str,
    job_description: &str,
    job_title: &str,
    company: Option<&str>,
    flags: FormatFlags,
) -> Result<AnalysisResult> {
    let engine = ScoringEngine::new()?;
    let mut job = JobContext::new(job_description, job_title);
    if let Some(company) = company {
        job = job.with_company(company);
    }
    Ok(engine.analyze(cv_text, &job, flags))
}

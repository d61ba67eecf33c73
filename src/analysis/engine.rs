//! Scoring engine: runs the six category analyzers over a segmented CV
//! and aggregates their results into a final report.

use crate::analysis::contact::ContactAnalyzer;
use crate::analysis::formatting::FormattingAnalyzer;
use crate::analysis::job_title::JobTitleAnalyzer;
use crate::analysis::readability::ReadabilityAnalyzer;
use crate::analysis::skills::SkillAnalyzer;
use crate::analysis::web_presence::WebPresenceAnalyzer;
use crate::analysis::{Analyzer, Category, FormatFlags, JobContext};
use crate::error::{AtsError, Result};
use crate::patterns::PatternLibrary;
use crate::report::{self, AnalysisResult};
use crate::segmenter::segment;
use log::info;
use serde::{Deserialize, Serialize};

/// Per-category weights applied by the aggregator. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub contact: f64,
    pub job_title: f64,
    pub skill: f64,
    pub formatting: f64,
    pub readability: f64,
    pub web_presence: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            contact: Category::Contact.weight(),
            job_title: Category::JobTitle.weight(),
            skill: Category::Skill.weight(),
            formatting: Category::Formatting.weight(),
            readability: Category::Readability.weight(),
            web_presence: Category::WebPresence.weight(),
        }
    }
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Contact => self.contact,
            Category::JobTitle => self.job_title,
            Category::Skill => self.skill,
            Category::Formatting => self.formatting,
            Category::Readability => self.readability,
            Category::WebPresence => self.web_presence,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let total: f64 = Category::all().iter().map(|c| self.get(*c)).sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(AtsError::Configuration(format!(
                "category weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

/// The scoring engine. Holds only the immutable pattern library, so a
/// single instance serves any number of concurrent analysis calls.
pub struct ScoringEngine {
    patterns: PatternLibrary,
    weights: CategoryWeights,
}

impl ScoringEngine {
    pub fn new() -> Result<Self> {
        Self::with_weights(CategoryWeights::default())
    }

    pub fn with_weights(weights: CategoryWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            patterns: PatternLibrary::new()?,
            weights,
        })
    }

    /// Score a CV against a job context. Never fails: malformed or empty
    /// input degrades to low scores with explanatory findings.
    pub fn analyze(
        &self,
        cv_text: &str,
        job: &JobContext,
        flags: FormatFlags,
    ) -> AnalysisResult {
        let doc = segment(cv_text);

        // Fixed order; the analyzers are independent pure functions, so
        // the aggregate is identical regardless of evaluation order.
        let analyzers: [&dyn Analyzer; 6] = [
            &ContactAnalyzer,
            &JobTitleAnalyzer,
            &SkillAnalyzer,
            &FormattingAnalyzer,
            &ReadabilityAnalyzer,
            &WebPresenceAnalyzer,
        ];

        let categories = analyzers
            .iter()
            .map(|analyzer| analyzer.analyze(&self.patterns, &doc, job, flags))
            .collect();

        let result = report::build(categories, &self.weights);
        info!(
            "ATS analysis complete: overall score {}/100",
            result.overall_score
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_validate() {
        assert!(CategoryWeights::default().validate().is_ok());
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let weights = CategoryWeights {
            contact: 0.9,
            ..CategoryWeights::default()
        };
        assert!(ScoringEngine::with_weights(weights).is_err());
    }

    #[test]
    fn test_scores_stay_in_range() {
        let engine = ScoringEngine::new().unwrap();
        let job = JobContext::new("Rust developer wanted", "Rust Developer");
        for cv in ["", "short", "email@x.com 555-1234\nSummary\nRust Developer"] {
            let result = engine.analyze(cv, &job, FormatFlags::default());
            assert!(result.overall_score <= 100);
            for score in result.category_scores.values() {
                assert!(*score <= 100);
            }
        }
    }
}

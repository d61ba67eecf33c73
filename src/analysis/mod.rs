//! Category analyzers and the shared scoring types they produce.

pub mod contact;
pub mod engine;
pub mod formatting;
pub mod job_title;
pub mod readability;
pub mod skills;
pub mod web_presence;

use crate::patterns::PatternLibrary;
use crate::segmenter::CvDocument;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The six scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Contact,
    JobTitle,
    Skill,
    Formatting,
    Readability,
    WebPresence,
}

impl Category {
    /// Fixed evaluation and reporting order.
    pub fn all() -> [Category; 6] {
        [
            Category::Contact,
            Category::JobTitle,
            Category::Skill,
            Category::Formatting,
            Category::Readability,
            Category::WebPresence,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Contact => "contact",
            Category::JobTitle => "job_title",
            Category::Skill => "skill",
            Category::Formatting => "formatting",
            Category::Readability => "readability",
            Category::WebPresence => "web_presence",
        }
    }

    /// Weight of this category in the overall score. Sums to 1.0 across
    /// all six categories.
    pub fn weight(&self) -> f64 {
        match self {
            Category::Contact => 0.15,
            Category::JobTitle => 0.20,
            Category::Skill => 0.25,
            Category::Formatting => 0.15,
            Category::Readability => 0.15,
            Category::WebPresence => 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Missing,
    Weak,
    Ok,
}

/// One diagnostic observation tied to a rubric point delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    /// Points this finding accounts for: earned for `Ok`, foregone for
    /// `Missing`/`Weak`.
    pub points: f64,
}

/// An actionable edit, ranked later by the points it would recover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub message: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    /// Rubric point sum clamped to [0, 100].
    pub score: f64,
    pub findings: Vec<Finding>,
    pub suggestions: Vec<Suggestion>,
    /// Skills required by the job but absent from the CV. Populated only
    /// by the skill analyzer; feeds the final keyword suggestions.
    pub keyword_gaps: Vec<String>,
}

impl CategoryResult {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            score: 0.0,
            findings: Vec::new(),
            suggestions: Vec::new(),
            keyword_gaps: Vec::new(),
        }
    }

    /// Record a rubric component that earned its points.
    pub fn earned(&mut self, points: f64, message: impl Into<String>) {
        self.score += points;
        self.findings.push(Finding {
            severity: Severity::Ok,
            message: message.into(),
            points,
        });
    }

    /// Record partial credit for a rubric component.
    pub fn partial(&mut self, earned: f64, full: f64, message: impl Into<String>, advice: impl Into<String>) {
        self.score += earned;
        self.findings.push(Finding {
            severity: Severity::Weak,
            message: message.into(),
            points: full - earned,
        });
        self.suggestions.push(Suggestion {
            message: advice.into(),
            points: full - earned,
        });
    }

    /// Record a rubric component that earned nothing.
    pub fn missing(&mut self, full: f64, message: impl Into<String>, advice: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Missing,
            message: message.into(),
            points: full,
        });
        self.suggestions.push(Suggestion {
            message: advice.into(),
            points: full,
        });
    }

    /// Clamp the accumulated score into [0, 100].
    pub fn finish(mut self) -> Self {
        self.score = self.score.clamp(0.0, 100.0);
        self
    }
}

/// Immutable per-call job context supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobContext {
    pub description: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
}

impl JobContext {
    pub fn new(description: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            title: title.into(),
            company: None,
            location: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// Document-conversion metadata the core never infers itself. Plain-text
/// input leaves both flags false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatFlags {
    pub has_tables: bool,
    pub has_images: bool,
}

/// A category rubric: a pure function of the segmented CV and job
/// context. Implementations share no state and may run in any order.
pub trait Analyzer {
    fn category(&self) -> Category;

    fn analyze(
        &self,
        patterns: &PatternLibrary,
        doc: &CvDocument,
        job: &JobContext,
        flags: FormatFlags,
    ) -> CategoryResult;
}

/// Lowercased word tokens, Unicode-segmented.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = Category::all().iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_clamps() {
        let mut result = CategoryResult::new(Category::Contact);
        result.earned(80.0, "a");
        result.earned(45.0, "b");
        assert_eq!(result.finish().score, 100.0);
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Senior Developer, Cairo"), vec!["senior", "developer", "cairo"]);
    }
}

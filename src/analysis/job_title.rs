//! Job-title rubric: exact match, summary placement, token overlap, and
//! seniority-tier relevance.

use crate::analysis::{tokenize, Analyzer, Category, CategoryResult, FormatFlags, JobContext};
use crate::patterns::{PatternLibrary, SeniorityTier};
use crate::segmenter::{CvDocument, SectionKind};
use std::collections::HashSet;

const EXACT_POINTS: f64 = 40.0;
const SUMMARY_POINTS: f64 = 15.0;
const OVERLAP_POINTS: f64 = 20.0;
const INDUSTRY_POINTS: f64 = 25.0;

pub struct JobTitleAnalyzer;

impl Analyzer for JobTitleAnalyzer {
    fn category(&self) -> Category {
        Category::JobTitle
    }

    fn analyze(
        &self,
        _patterns: &PatternLibrary,
        doc: &CvDocument,
        job: &JobContext,
        _flags: FormatFlags,
    ) -> CategoryResult {
        let mut result = CategoryResult::new(Category::JobTitle);
        let title = job.title.trim();

        // Absent context is never a penalty.
        if title.is_empty() {
            result.earned(100.0, "no target job title supplied");
            return result.finish();
        }

        let title_lower = title.to_lowercase();
        let cv_lower = doc.raw.to_lowercase();
        let exact = cv_lower.contains(&title_lower);

        if exact {
            result.earned(EXACT_POINTS, format!("exact job title '{title}' found in CV"));
        } else {
            result.missing(
                EXACT_POINTS,
                format!("exact job title '{title}' not found in CV"),
                format!("Include the exact job title '{title}' in your CV"),
            );
        }

        let title_tokens = tokenize(&title_lower);
        let summary = doc.section(&SectionKind::Summary).unwrap_or("");
        let summary_lower = summary.to_lowercase();
        if summary_matches(&summary_lower, &title_lower, &title_tokens) {
            result.earned(SUMMARY_POINTS, "job title present in summary section");
        } else {
            result.missing(
                SUMMARY_POINTS,
                "job title not mentioned in summary section",
                format!("Mention '{title}' in your summary section"),
            );
        }

        // Partial token overlap. An exact match already accounts for every
        // title token, so only unmatched tokens could contribute -- which
        // leaves nothing once the exact component fired.
        if !exact {
            let cv_tokens: HashSet<String> = tokenize(&cv_lower).into_iter().collect();
            let matched = title_tokens
                .iter()
                .filter(|t| cv_tokens.contains(*t))
                .count();
            let fraction = if title_tokens.is_empty() {
                0.0
            } else {
                matched as f64 / title_tokens.len() as f64
            };
            let earned = OVERLAP_POINTS * fraction;
            if fraction >= 1.0 {
                result.earned(earned, "all job-title words appear in the CV");
            } else {
                result.partial(
                    earned,
                    OVERLAP_POINTS,
                    format!(
                        "only {matched}/{} words from the job title appear in the CV",
                        title_tokens.len()
                    ),
                    "Work the wording of the target job title into your CV",
                );
            }
        }

        let tier = SeniorityTier::infer(title);
        let tier_hit = tier
            .industry_keywords()
            .iter()
            .any(|kw| cv_lower.contains(kw));
        if tier_hit {
            result.earned(
                INDUSTRY_POINTS,
                format!("CV language matches {tier:?}-level expectations"),
            );
        } else {
            result.missing(
                INDUSTRY_POINTS,
                format!("no {tier:?}-level industry keywords found"),
                format!(
                    "Add language that signals {tier:?}-level scope, e.g. {}",
                    tier.industry_keywords()[..3].join(", ")
                ),
            );
        }

        result.finish()
    }
}

/// Summary counts when it holds the whole title or at least half of its
/// words.
fn summary_matches(summary_lower: &str, title_lower: &str, title_tokens: &[String]) -> bool {
    if summary_lower.is_empty() || title_tokens.is_empty() {
        return false;
    }
    if summary_lower.contains(title_lower) {
        return true;
    }
    let matched = title_tokens
        .iter()
        .filter(|t| summary_lower.contains(t.as_str()))
        .count();
    matched * 2 >= title_tokens.len()
}

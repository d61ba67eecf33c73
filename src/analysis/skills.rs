//! Skill-gap rubric: required-skill coverage, measurable results,
//! industry keyword density, and technical depth.

use crate::analysis::{Analyzer, Category, CategoryResult, FormatFlags, JobContext};
use crate::patterns::PatternLibrary;
use crate::segmenter::CvDocument;
use log::debug;

const MATCH_POINTS: f64 = 50.0;
const MEASURABLE_POINTS: f64 = 10.0;
const DENSITY_POINTS: f64 = 20.0;
const DEPTH_POINTS: f64 = 20.0;

/// Distinct industry matches granting full density credit.
const DENSITY_CAP: usize = 5;
/// Measurable-result spans granting full credit.
const MEASURABLE_TARGET: usize = 5;

pub struct SkillAnalyzer;

impl Analyzer for SkillAnalyzer {
    fn category(&self) -> Category {
        Category::Skill
    }

    fn analyze(
        &self,
        patterns: &PatternLibrary,
        doc: &CvDocument,
        job: &JobContext,
        _flags: FormatFlags,
    ) -> CategoryResult {
        let mut result = CategoryResult::new(Category::Skill);
        let cv = &doc.raw;

        let required = extract_required_skills(patterns, &job.description);
        debug!("required skills from job description: {required:?}");

        if required.is_empty() {
            // Nothing to match against is not the candidate's fault.
            result.earned(
                MATCH_POINTS,
                "no skill requirements detected in the job description",
            );
        } else {
            let (present, absent): (Vec<_>, Vec<_>) = required
                .iter()
                .partition(|skill| patterns.contains_skill(cv, skill));
            let fraction = present.len() as f64 / required.len() as f64;
            let earned = MATCH_POINTS * fraction;
            if absent.is_empty() {
                result.earned(earned, format!("all {} required skills present", required.len()));
            } else {
                let preview = absent
                    .iter()
                    .take(5)
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                result.partial(
                    earned,
                    MATCH_POINTS,
                    format!(
                        "matched {}/{} required skills; missing: {preview}",
                        present.len(),
                        required.len()
                    ),
                    format!("Add missing skills from the job description: {preview}"),
                );
                result.keyword_gaps = absent.into_iter().cloned().collect();
            }
        }

        let measurable = patterns.count_measurable_results(cv);
        if measurable >= MEASURABLE_TARGET {
            result.earned(
                MEASURABLE_POINTS,
                format!("{measurable} measurable results found"),
            );
        } else if measurable > 0 {
            result.partial(
                (2 * measurable) as f64,
                MEASURABLE_POINTS,
                format!("only {measurable} measurable results found (recommended: 5+)"),
                "Quantify more achievements with numbers, percentages, or amounts",
            );
        } else {
            result.missing(
                MEASURABLE_POINTS,
                "no measurable results found",
                "Include measurable results such as \"reduced load time by 30%\"",
            );
        }

        let distinct = patterns.industry_matches(cv);
        let density_earned = DENSITY_POINTS * (distinct.min(DENSITY_CAP) as f64 / DENSITY_CAP as f64);
        if distinct >= DENSITY_CAP {
            result.earned(
                DENSITY_POINTS,
                format!("{distinct} industry keywords present"),
            );
        } else if distinct > 0 {
            result.partial(
                density_earned,
                DENSITY_POINTS,
                format!("only {distinct} industry keywords present"),
                "Weave more industry terminology into your experience bullets",
            );
        } else {
            result.missing(
                DENSITY_POINTS,
                "no industry keywords found",
                "Use standard industry terminology from your field",
            );
        }

        let cv_skills = patterns.skill_matches(cv);
        if cv_skills.is_empty() {
            result.missing(
                DEPTH_POINTS,
                "no recognizable skills found in CV",
                "List concrete technical skills in a dedicated Skills section",
            );
        } else if patterns.has_depth_signal(cv) {
            result.earned(
                DEPTH_POINTS,
                "skills appear with version or experience qualifiers",
            );
        } else {
            result.partial(
                DEPTH_POINTS / 2.0,
                DEPTH_POINTS,
                "skills listed without depth signals",
                "Pair key skills with versions or years of experience",
            );
        }

        result.finish()
    }
}

/// Required skills: curated-vocabulary matches over the whole description,
/// plus short verbatim items mined from an explicit requirements block.
fn extract_required_skills(patterns: &PatternLibrary, description: &str) -> Vec<String> {
    let mut required = patterns.skill_matches(description);

    for item in requirements_block_items(description) {
        if !required.contains(&item) {
            required.push(item);
        }
    }
    required
}

/// Bullet/keyword items under a "Requirements"/"Skills" style heading.
/// Items are kept verbatim (lowercased) when they are short phrases.
fn requirements_block_items(description: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut in_block = false;

    for line in description.lines() {
        let trimmed = line.trim();
        let label = trimmed.trim_end_matches(':').to_lowercase();
        if matches!(
            label.as_str(),
            "requirements" | "required skills" | "skills" | "qualifications" | "must have"
        ) {
            in_block = true;
            continue;
        }
        if in_block {
            if trimmed.is_empty() {
                in_block = false;
                continue;
            }
            let unbulleted = trimmed.trim_start_matches(['-', '*', '•', '·']).trim();
            for part in unbulleted.split([',', ';', '/', '|']) {
                let cleaned: String = part
                    .trim()
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();
                let word_count = cleaned.split_whitespace().count();
                if (2..40).contains(&cleaned.len())
                    && word_count <= 4
                    && cleaned.chars().any(|c| c.is_alphabetic())
                {
                    items.push(cleaned);
                }
            }
        }
    }
    items
}

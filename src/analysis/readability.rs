//! Readability rubric: paragraph length, negative language, tone, and
//! structure clarity.

use crate::analysis::formatting::is_bullet_line;
use crate::analysis::{Analyzer, Category, CategoryResult, FormatFlags, JobContext};
use crate::patterns::PatternLibrary;
use crate::segmenter::{CvDocument, SectionKind};

const PARAGRAPH_POINTS: f64 = 30.0;
const NEGATIVE_POINTS: f64 = 15.0;
const CASUAL_POINTS: f64 = 10.0;
const ACTION_VERB_POINTS: f64 = 15.0;
const STRUCTURE_POINTS: f64 = 30.0;

const MAX_PARAGRAPH_WORDS: usize = 40;
const NEGATIVE_CAP: usize = 5;

pub struct ReadabilityAnalyzer;

impl Analyzer for ReadabilityAnalyzer {
    fn category(&self) -> Category {
        Category::Readability
    }

    fn analyze(
        &self,
        patterns: &PatternLibrary,
        doc: &CvDocument,
        _job: &JobContext,
        _flags: FormatFlags,
    ) -> CategoryResult {
        let mut result = CategoryResult::new(Category::Readability);

        if doc.raw.trim().is_empty() {
            result.missing(100.0, "CV text is empty", "Provide CV content to analyze");
            return result.finish();
        }

        score_paragraphs(doc, &mut result);
        score_negative_language(doc, &mut result);
        score_tone(patterns, doc, &mut result);
        score_structure(doc, &mut result);

        result.finish()
    }
}

fn score_paragraphs(doc: &CvDocument, result: &mut CategoryResult) {
    let paragraphs = doc.paragraphs();
    let total = paragraphs.len();
    if total == 0 {
        result.earned(PARAGRAPH_POINTS, "paragraph lengths are fine");
        return;
    }
    let passing = paragraphs
        .iter()
        .filter(|p| p.split_whitespace().count() <= MAX_PARAGRAPH_WORDS)
        .count();
    if passing == total {
        result.earned(PARAGRAPH_POINTS, "all paragraphs within 40 words");
    } else {
        let fraction = passing as f64 / total as f64;
        result.partial(
            PARAGRAPH_POINTS * fraction,
            PARAGRAPH_POINTS,
            format!("{} of {total} paragraphs exceed 40 words", total - passing),
            "Shorten paragraphs to under 40 words for better readability",
        );
    }
}

fn score_negative_language(doc: &CvDocument, result: &mut CategoryResult) {
    let lower = doc.raw.to_lowercase();
    // Whole words only: "nevertheless" and "slack" are not negative.
    let occurrences: usize = PatternLibrary::negative_terms()
        .iter()
        .map(|term| crate::patterns::count_word_bounded(&lower, term))
        .sum();
    if occurrences == 0 {
        result.earned(NEGATIVE_POINTS, "no negative language found");
    } else {
        let capped = occurrences.min(NEGATIVE_CAP);
        let earned = NEGATIVE_POINTS * (1.0 - capped as f64 / NEGATIVE_CAP as f64);
        result.partial(
            earned,
            NEGATIVE_POINTS,
            format!("{occurrences} negative terms found"),
            "Remove negative language and focus on positive achievements",
        );
    }
}

fn score_tone(patterns: &PatternLibrary, doc: &CvDocument, result: &mut CategoryResult) {
    let lower = doc.raw.to_lowercase();
    let casual = PatternLibrary::casual_markers()
        .iter()
        .any(|marker| lower.contains(marker));
    if casual {
        result.missing(
            CASUAL_POINTS,
            "casual first-person phrasing found",
            "Replace casual first-person phrasing with direct statements",
        );
    } else {
        result.earned(CASUAL_POINTS, "no casual phrasing");
    }

    let bullets: Vec<&str> = doc
        .raw
        .lines()
        .map(str::trim)
        .filter(|line| is_bullet_line(line))
        .collect();
    if bullets.is_empty() {
        result.earned(ACTION_VERB_POINTS, "no bullets to check for action verbs");
        return;
    }
    let passing = bullets
        .iter()
        .filter(|bullet| bullet_leads_with_action_verb(patterns, bullet))
        .count();
    if passing == bullets.len() {
        result.earned(ACTION_VERB_POINTS, "all bullets lead with action verbs");
    } else {
        let fraction = passing as f64 / bullets.len() as f64;
        result.partial(
            ACTION_VERB_POINTS * fraction,
            ACTION_VERB_POINTS,
            format!(
                "{} of {} bullets do not lead with an action verb",
                bullets.len() - passing,
                bullets.len()
            ),
            "Start each bullet with an action verb such as \"built\" or \"led\"",
        );
    }
}

fn bullet_leads_with_action_verb(patterns: &PatternLibrary, bullet: &str) -> bool {
    bullet
        .trim_start_matches(['-', '*', '•', '·', '–'])
        .split_whitespace()
        .next()
        .map(|word| {
            let word: String = word.chars().filter(|c| c.is_alphabetic()).collect();
            patterns.is_action_verb(&word)
        })
        .unwrap_or(false)
}

/// Structure clarity: bullet coverage of the experience section (or the
/// whole document when no experience section exists).
fn score_structure(doc: &CvDocument, result: &mut CategoryResult) {
    let scope = doc.section(&SectionKind::Experience).unwrap_or(&doc.raw);
    let lines: Vec<&str> = scope
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        result.missing(
            STRUCTURE_POINTS,
            "no experience content to assess",
            "Describe your experience in bullet points",
        );
        return;
    }
    let bulleted = lines.iter().filter(|l| is_bullet_line(l)).count();
    let coverage = bulleted as f64 / lines.len() as f64;
    if coverage >= 0.5 {
        result.earned(STRUCTURE_POINTS, "experience is structured with bullets");
    } else {
        result.partial(
            (STRUCTURE_POINTS * coverage * 2.0).min(STRUCTURE_POINTS),
            STRUCTURE_POINTS,
            format!(
                "bullets cover only {bulleted} of {} experience lines",
                lines.len()
            ),
            "Convert experience descriptions into bullet points",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;

    fn run(cv: &str) -> CategoryResult {
        let patterns = PatternLibrary::new().unwrap();
        let doc = segment(cv);
        let job = JobContext::new("", "");
        ReadabilityAnalyzer.analyze(&patterns, &doc, &job, FormatFlags::default())
    }

    #[test]
    fn test_clean_bulleted_cv_scores_full() {
        let result = run(
            "Jane\n\nExperience\n- Built the billing service\n- Led a team of four\n\nSkills\nRust, Python",
        );
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_long_paragraph_penalized() {
        let long = "word ".repeat(50);
        let result = run(&format!("Experience\n{long}"));
        assert!(result
            .findings
            .iter()
            .any(|f| f.message.contains("exceed 40 words")));
    }

    #[test]
    fn test_negative_language_penalized() {
        let clean = run("Experience\n- Built things that worked");
        let negative = run("Experience\n- Never failed but struggled with a weak stack");
        assert!(negative.score < clean.score);
    }

    #[test]
    fn test_negative_terms_match_whole_words_only() {
        let result = run(
            "Experience\n- Delivered on time; nevertheless kept the slack channel posted",
        );
        assert!(result
            .findings
            .iter()
            .any(|f| f.message == "no negative language found"));
    }

    #[test]
    fn test_prose_experience_loses_structure_credit() {
        let result = run("Experience\nI worked on various projects over the years.\nIt went well overall.");
        assert!(result
            .findings
            .iter()
            .any(|f| f.message.contains("bullets cover only 0")));
    }

    #[test]
    fn test_empty_cv_scores_zero() {
        let result = run("");
        assert_eq!(result.score, 0.0);
    }
}

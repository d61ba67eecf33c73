//! Formatting rubric: date consistency, tables/images flags, standard
//! headings, and layout cleanliness.

use crate::analysis::{Analyzer, Category, CategoryResult, FormatFlags, JobContext};
use crate::patterns::PatternLibrary;
use crate::segmenter::{CvDocument, SectionKind};

const DATE_POINTS: f64 = 20.0;
const TABLE_POINTS: f64 = 15.0;
const IMAGE_POINTS: f64 = 20.0;
const HEADING_POINTS: f64 = 15.0;
const LAYOUT_POINTS: f64 = 30.0;

const BULLET_MARKERS: [char; 5] = ['-', '*', '•', '·', '–'];

pub struct FormattingAnalyzer;

impl Analyzer for FormattingAnalyzer {
    fn category(&self) -> Category {
        Category::Formatting
    }

    fn analyze(
        &self,
        patterns: &PatternLibrary,
        doc: &CvDocument,
        _job: &JobContext,
        flags: FormatFlags,
    ) -> CategoryResult {
        let mut result = CategoryResult::new(Category::Formatting);

        if doc.raw.trim().is_empty() {
            result.missing(100.0, "CV text is empty", "Provide CV content to analyze");
            return result.finish();
        }

        score_dates(patterns, doc, &mut result);

        if flags.has_tables {
            result.missing(
                TABLE_POINTS,
                "tables detected",
                "Remove tables and use simple text formatting for ATS compatibility",
            );
        } else {
            result.earned(TABLE_POINTS, "no tables detected");
        }

        if flags.has_images {
            result.missing(
                IMAGE_POINTS,
                "images detected",
                "Remove images; ATS parsers cannot read them",
            );
        } else {
            result.earned(IMAGE_POINTS, "no images detected");
        }

        score_headings(doc, &mut result);
        score_layout(doc, &mut result);

        result.finish()
    }
}

fn score_dates(patterns: &PatternLibrary, doc: &CvDocument, result: &mut CategoryResult) {
    let candidates = patterns.date_candidates(&doc.raw);
    if candidates.is_empty() {
        // Nothing date-shaped is vacuously consistent.
        result.earned(DATE_POINTS, "no date formatting issues");
        return;
    }
    let conforming = candidates
        .iter()
        .filter(|c| patterns.classify_date(c).is_some())
        .count();
    if conforming == candidates.len() {
        result.earned(
            DATE_POINTS,
            format!("all {conforming} dates use a standard format"),
        );
    } else {
        let fraction = conforming as f64 / candidates.len() as f64;
        result.partial(
            DATE_POINTS * fraction,
            DATE_POINTS,
            format!(
                "{} of {} dates use a non-standard format",
                candidates.len() - conforming,
                candidates.len()
            ),
            "Use standard date formats: MM/YYYY, Month YYYY, or MM/DD/YYYY",
        );
    }
}

fn score_headings(doc: &CvDocument, result: &mut CategoryResult) {
    if !doc.has_headings() {
        result.partial(
            0.0,
            HEADING_POINTS,
            "non-standard section headings",
            "Use standard section headings: Summary, Experience, Education, Skills",
        );
        return;
    }
    let expected = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
    ];
    let found = expected
        .iter()
        .filter(|kind| doc.section(kind).is_some())
        .count();
    if found == expected.len() {
        result.earned(HEADING_POINTS, "all standard section headings present");
    } else {
        let missing: Vec<String> = expected
            .iter()
            .filter(|kind| doc.section(kind).is_none())
            .map(|kind| kind.to_string())
            .collect();
        let fraction = found as f64 / expected.len() as f64;
        result.partial(
            HEADING_POINTS * fraction,
            HEADING_POINTS,
            format!("missing standard sections: {}", missing.join(", ")),
            format!("Add the missing sections: {}", missing.join(", ")),
        );
    }
}

/// Clean-layout heuristic: bullet markers should carry the list-like
/// lines of the content sections.
fn score_layout(doc: &CvDocument, result: &mut CategoryResult) {
    let lines = list_like_lines(doc);
    if lines.is_empty() {
        result.earned(LAYOUT_POINTS, "layout is clean");
        return;
    }
    let bulleted = lines.iter().filter(|l| is_bullet_line(l)).count();
    let coverage = bulleted as f64 / lines.len() as f64;
    if coverage > 0.5 {
        result.earned(LAYOUT_POINTS, "consistent bullet-point layout");
    } else {
        result.partial(
            (LAYOUT_POINTS * coverage * 2.0).min(LAYOUT_POINTS),
            LAYOUT_POINTS,
            format!(
                "only {bulleted} of {} content lines use bullet points",
                lines.len()
            ),
            "Use bullet points for experience and skill entries",
        );
    }
}

fn list_like_lines(doc: &CvDocument) -> Vec<String> {
    let content_kinds = [
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Projects,
    ];
    let mut lines: Vec<String> = content_kinds
        .iter()
        .filter_map(|kind| doc.section(kind))
        .flat_map(|content| content.lines())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    if lines.is_empty() {
        lines = doc
            .sections
            .iter()
            .flat_map(|s| s.content.lines())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
    }
    lines
}

pub(crate) fn is_bullet_line(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| BULLET_MARKERS.contains(&c))
}

//! Splits raw CV text into logical sections by heading detection.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Text before the first detected heading; expected to hold contact info.
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    /// Whole document when no headings were found.
    Body,
    Other(String),
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Header => write!(f, "Header"),
            SectionKind::Summary => write!(f, "Summary"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Education => write!(f, "Education"),
            SectionKind::Skills => write!(f, "Skills"),
            SectionKind::Projects => write!(f, "Projects"),
            SectionKind::Certifications => write!(f, "Certifications"),
            SectionKind::Body => write!(f, "Body"),
            SectionKind::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub content: String,
}

/// An immutable CV document: the raw text plus its detected sections.
/// Constructed fresh per analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct CvDocument {
    pub raw: String,
    pub sections: Vec<Section>,
}

/// Standard heading vocabulary, case-insensitive. Synonyms map onto the
/// canonical section kinds an ATS expects.
fn heading_kind(line: &str) -> Option<SectionKind> {
    let normalized = line
        .trim()
        .trim_end_matches([':', ';', '.', '-', '—'])
        .trim()
        .to_lowercase();
    let kind = match normalized.as_str() {
        "summary" | "profile" | "objective" | "about" | "about me" | "overview" => {
            SectionKind::Summary
        }
        "experience" | "work experience" | "professional experience" | "employment"
        | "employment history" | "career" => SectionKind::Experience,
        "education" | "academic background" | "qualifications" => SectionKind::Education,
        "skills" | "technical skills" | "core competencies" | "expertise" => SectionKind::Skills,
        "projects" | "portfolio" | "notable projects" => SectionKind::Projects,
        "certifications" | "certificates" | "licenses" => SectionKind::Certifications,
        "languages" | "contact" | "interests" | "awards" | "publications" => {
            SectionKind::Other(capitalize(&normalized))
        }
        _ => return None,
    };
    Some(kind)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Segment raw CV text into sections. Never fails: a document with no
/// detectable headings comes back as a single `Body` section, and empty
/// input yields one empty `Body` section.
pub fn segment(raw_text: &str) -> CvDocument {
    let mut sections: Vec<Section> = Vec::new();
    let mut current_kind = SectionKind::Header;
    let mut current_lines: Vec<&str> = Vec::new();
    let mut found_heading = false;

    for line in raw_text.lines() {
        if let Some(kind) = heading_kind(line) {
            sections.push(Section {
                kind: current_kind,
                content: current_lines.join("\n").trim().to_string(),
            });
            current_kind = kind;
            current_lines = Vec::new();
            found_heading = true;
        } else {
            current_lines.push(line);
        }
    }
    sections.push(Section {
        kind: current_kind,
        content: current_lines.join("\n").trim().to_string(),
    });

    if !found_heading {
        return CvDocument {
            raw: raw_text.to_string(),
            sections: vec![Section {
                kind: SectionKind::Body,
                content: raw_text.trim().to_string(),
            }],
        };
    }

    CvDocument {
        raw: raw_text.to_string(),
        sections,
    }
}

impl CvDocument {
    /// Content of the first section of the given kind.
    pub fn section(&self, kind: &SectionKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| &s.kind == kind)
            .map(|s| s.content.as_str())
    }

    /// True when at least one standard heading was detected.
    pub fn has_headings(&self) -> bool {
        self.sections
            .iter()
            .any(|s| !matches!(s.kind, SectionKind::Header | SectionKind::Body))
    }

    /// Text to scan for contact details: the header block when headings
    /// were detected, otherwise the whole body.
    pub fn contact_text(&self) -> &str {
        self.section(&SectionKind::Header)
            .or_else(|| self.section(&SectionKind::Body))
            .unwrap_or("")
    }

    /// Blank-line-delimited paragraph blocks of the raw text.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.raw
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let doc = segment(
            "John Doe\njohn@x.com\n\nSummary\nSeasoned engineer.\n\nSkills:\nRust, Python",
        );
        assert_eq!(doc.section(&SectionKind::Header), Some("John Doe\njohn@x.com"));
        assert_eq!(doc.section(&SectionKind::Summary), Some("Seasoned engineer."));
        assert_eq!(doc.section(&SectionKind::Skills), Some("Rust, Python"));
        assert!(doc.has_headings());
    }

    #[test]
    fn test_heading_with_punctuation_and_case() {
        assert_eq!(heading_kind("EXPERIENCE:"), Some(SectionKind::Experience));
        assert_eq!(heading_kind("  Work Experience  "), Some(SectionKind::Experience));
        assert_eq!(heading_kind("Experienced sailor"), None);
    }

    #[test]
    fn test_no_headings_yields_single_body() {
        let doc = segment("just a block of text\nwith no structure");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].kind, SectionKind::Body);
        assert!(!doc.has_headings());
        assert_eq!(doc.contact_text(), "just a block of text\nwith no structure");
    }

    #[test]
    fn test_empty_input_yields_one_empty_section() {
        let doc = segment("");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].content, "");
    }

    #[test]
    fn test_paragraphs() {
        let doc = segment("one block\n\nsecond block here\n\n\nthird");
        assert_eq!(doc.paragraphs().len(), 3);
    }
}

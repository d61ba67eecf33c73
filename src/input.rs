//! Plain-text extraction from resume and job description files.
//!
//! The scoring core only ever sees plain text; this module is the
//! collaborator that produces it from `.txt` and `.md` files.

use crate::error::{AtsError, Result};
use pulldown_cmark::{html, Parser};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}

/// Read a file and flatten it to plain text.
pub fn extract_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AtsError::InvalidInput(format!(
            "file does not exist: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            AtsError::InvalidInput(format!("file has no extension: {}", path.display()))
        })?;

    match FileType::from_extension(extension) {
        FileType::Text => Ok(std::fs::read_to_string(path)?),
        FileType::Markdown => {
            let markdown = std::fs::read_to_string(path)?;
            Ok(markdown_to_text(&markdown))
        }
        FileType::Unknown => Err(AtsError::UnsupportedFormat(format!(
            "unsupported file type: {}",
            path.display()
        ))),
    }
}

/// Render markdown to HTML, then strip the tags back out. Keeps line
/// structure so heading detection still works downstream.
fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("</h1>", "\n")
        .replace("</h2>", "\n")
        .replace("</h3>", "\n")
        .replace("</li>", "\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let mut clean = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => clean.push(c),
            _ => {}
        }
    }

    clean
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("MD"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }

    #[test]
    fn test_markdown_flattening_keeps_headings_on_own_lines() {
        let text = markdown_to_text("## Experience\n\n- Built **things**\n\nProse here.");
        assert!(text.contains("Experience"));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
        assert!(text.contains("Built things"));
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let result = extract_text(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(AtsError::InvalidInput(_))));
    }
}

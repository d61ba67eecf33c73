//! Contact information rubric: email, phone, address, LinkedIn, GitHub.

use crate::analysis::{Analyzer, Category, CategoryResult, FormatFlags, JobContext};
use crate::patterns::PatternLibrary;
use crate::segmenter::CvDocument;
use log::debug;

const EMAIL_POINTS: f64 = 30.0;
const PHONE_POINTS: f64 = 25.0;
const ADDRESS_POINTS: f64 = 20.0;
const LINKEDIN_POINTS: f64 = 15.0;
const GITHUB_POINTS: f64 = 10.0;

pub struct ContactAnalyzer;

impl Analyzer for ContactAnalyzer {
    fn category(&self) -> Category {
        Category::Contact
    }

    fn analyze(
        &self,
        patterns: &PatternLibrary,
        doc: &CvDocument,
        _job: &JobContext,
        _flags: FormatFlags,
    ) -> CategoryResult {
        let text = doc.contact_text();
        let mut result = CategoryResult::new(Category::Contact);

        match patterns.find_email(text) {
            Some(email) => {
                debug!("email found: {email}");
                result.earned(EMAIL_POINTS, format!("email address found: {email}"));
            }
            None => result.missing(
                EMAIL_POINTS,
                "email address not found",
                "Add a professional email address to the contact section",
            ),
        }

        match patterns.find_phone(text) {
            Some((format, phone)) => {
                debug!("phone found ({format:?}): {phone}");
                result.earned(PHONE_POINTS, format!("phone number found: {phone}"));
            }
            None => result.missing(
                PHONE_POINTS,
                "phone number not found",
                "Include a phone number in the contact information",
            ),
        }

        if has_address(patterns, text) {
            result.earned(ADDRESS_POINTS, "address or location found");
        } else {
            result.missing(
                ADDRESS_POINTS,
                "address not found",
                "Add your city or location for recruiter validation",
            );
        }

        if patterns.has_linkedin(text) {
            result.earned(LINKEDIN_POINTS, "LinkedIn profile URL found");
        } else {
            result.missing(
                LINKEDIN_POINTS,
                "LinkedIn profile URL not found",
                "Include your LinkedIn profile URL in the contact section",
            );
        }

        if patterns.has_github(text) {
            result.earned(GITHUB_POINTS, "GitHub profile URL found");
        } else {
            result.missing(
                GITHUB_POINTS,
                "GitHub profile URL not found",
                "Add your GitHub profile URL to showcase your code",
            );
        }

        result.finish()
    }
}

/// Location token anywhere in the block, or a line with a postal-code
/// shaped pattern.
fn has_address(patterns: &PatternLibrary, text: &str) -> bool {
    let lower = text.to_lowercase();
    if PatternLibrary::location_tokens()
        .iter()
        .any(|token| lower.contains(token))
    {
        return true;
    }
    text.lines().any(|line| patterns.has_postal_code(line))
}

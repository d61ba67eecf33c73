//! Web-presence rubric: professional profiles and portfolio links.
//!
//! Overlaps with the contact rubric on LinkedIn/GitHub by design: contact
//! measures reachability, this measures professional presentation, and
//! the two are computed independently.

use crate::analysis::{Analyzer, Category, CategoryResult, FormatFlags, JobContext};
use crate::patterns::PatternLibrary;
use crate::segmenter::CvDocument;

const LINKEDIN_POINTS: f64 = 30.0;
const GITHUB_POINTS: f64 = 25.0;
const PORTFOLIO_POINTS: f64 = 20.0;
const EMAIL_DOMAIN_POINTS: f64 = 10.0;
const PROFILE_POINTS: f64 = 15.0;

pub struct WebPresenceAnalyzer;

impl Analyzer for WebPresenceAnalyzer {
    fn category(&self) -> Category {
        Category::WebPresence
    }

    fn analyze(
        &self,
        patterns: &PatternLibrary,
        doc: &CvDocument,
        _job: &JobContext,
        _flags: FormatFlags,
    ) -> CategoryResult {
        let mut result = CategoryResult::new(Category::WebPresence);
        let text = &doc.raw;

        if patterns.has_linkedin(text) {
            result.earned(LINKEDIN_POINTS, "LinkedIn profile linked");
        } else {
            result.missing(
                LINKEDIN_POINTS,
                "LinkedIn profile URL not found",
                "Add your LinkedIn profile URL to build web credibility",
            );
        }

        if patterns.has_github(text) {
            result.earned(GITHUB_POINTS, "GitHub profile linked");
        } else {
            result.missing(
                GITHUB_POINTS,
                "GitHub profile URL not found",
                "Link your GitHub profile to showcase public work",
            );
        }

        if has_portfolio_url(patterns, text) {
            result.earned(PORTFOLIO_POINTS, "portfolio or personal website linked");
        } else {
            result.missing(
                PORTFOLIO_POINTS,
                "portfolio website not found",
                "Add a link to your portfolio or personal website",
            );
        }

        score_email_domain(patterns, text, &mut result);

        let lower = text.to_lowercase();
        if PatternLibrary::profile_domains()
            .iter()
            .any(|d| lower.contains(d))
        {
            result.earned(PROFILE_POINTS, "additional professional profile linked");
        } else {
            result.missing(
                PROFILE_POINTS,
                "no additional professional profile found",
                "Link another professional profile such as Stack Overflow or a blog",
            );
        }

        result.finish()
    }
}

/// A URL that is neither LinkedIn/GitHub, a social network, nor one of
/// the recognized profile sites counts as a portfolio.
fn has_portfolio_url(patterns: &PatternLibrary, text: &str) -> bool {
    patterns.find_urls(text).iter().any(|url| {
        let url = url.to_lowercase();
        let excluded = PatternLibrary::social_domains()
            .iter()
            .chain(PatternLibrary::profile_domains())
            .any(|domain| url.contains(domain));
        !excluded
    })
}

fn score_email_domain(patterns: &PatternLibrary, text: &str, result: &mut CategoryResult) {
    let Some(email) = patterns.find_email(text) else {
        result.missing(
            EMAIL_DOMAIN_POINTS,
            "no email address to assess",
            "Add an email address, ideally on a personal or company domain",
        );
        return;
    };
    let lower = email.to_lowercase();
    let (local, domain) = lower.split_once('@').unwrap_or(("", ""));
    let free = PatternLibrary::free_email_domains().contains(&domain);
    let name_shaped = is_firstname_lastname(local);
    if !free || name_shaped {
        result.earned(EMAIL_DOMAIN_POINTS, "email address reads professionally");
    } else {
        result.missing(
            EMAIL_DOMAIN_POINTS,
            format!("consumer email domain in use: {domain}"),
            "Consider a firstname.lastname address or a personal domain",
        );
    }
}

fn is_firstname_lastname(local: &str) -> bool {
    match local.split_once('.') {
        Some((first, last)) => {
            !first.is_empty()
                && !last.is_empty()
                && first.chars().all(|c| c.is_ascii_alphabetic())
                && last.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
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
        WebPresenceAnalyzer.analyze(&patterns, &doc, &job, FormatFlags::default())
    }

    #[test]
    fn test_full_presence_scores_100() {
        let result = run(
            "jane.doe@gmail.com\n\
             https://linkedin.com/in/jane\n\
             https://github.com/jane\n\
             https://janedoe.dev\n\
             https://stackoverflow.com/users/12345/jane",
        );
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_social_urls_do_not_count_as_portfolio() {
        let result = run("https://twitter.com/jane\nhttps://linkedin.com/in/jane");
        assert!(result
            .findings
            .iter()
            .any(|f| f.message == "portfolio website not found"));
    }

    #[test]
    fn test_free_domain_without_name_shape_penalized() {
        let result = run("coolcoder99@gmail.com");
        assert!(result
            .findings
            .iter()
            .any(|f| f.message.contains("consumer email domain")));
    }

    #[test]
    fn test_firstname_lastname_on_free_domain_accepted() {
        let result = run("jane.doe@gmail.com");
        assert!(result
            .findings
            .iter()
            .any(|f| f.message == "email address reads professionally"));
    }
}

//! Static pattern library: contact patterns, date formats, skill
//! vocabularies, and the word lists the analyzers share.
//!
//! Built once at startup and passed by reference into every analysis
//! call. Holds no mutable state, so concurrent reads are safe.

use crate::error::{AtsError, Result};
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;

/// Accepted phone number shapes, tried in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFormat {
    /// `+20 106 950 9757`, `+1-555-123-4567`
    International,
    /// `(555) 123-4567`
    Parenthesized,
    /// `555-1234`, `555.123.4567`, `555 123 4567`
    Separated,
}

impl PhoneFormat {
    pub fn all() -> [PhoneFormat; 3] {
        [
            PhoneFormat::International,
            PhoneFormat::Parenthesized,
            PhoneFormat::Separated,
        ]
    }

    fn pattern(&self) -> &'static str {
        match self {
            PhoneFormat::International => r"\+\d{1,3}[\s.-]?\(?\d{1,4}\)?(?:[\s.-]?\d{2,5}){1,4}",
            PhoneFormat::Parenthesized => r"\(\d{2,4}\)[\s.-]?\d{2,4}(?:[\s.-]?\d{2,5}){1,3}",
            PhoneFormat::Separated => r"\b\d{2,5}(?:[.-]\d{2,5}){1,4}\b|\b\d{3}(?:\s\d{3,4}){2,3}\b",
        }
    }
}

/// Date formats an ATS reliably parses, tried in fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `03/2020`
    NumericMonthYear,
    /// `March 2020`, `Mar 2020`
    MonthNameYear,
    /// `03/15/2020`
    NumericFull,
}

impl DateFormat {
    pub fn all() -> [DateFormat; 3] {
        [
            DateFormat::NumericMonthYear,
            DateFormat::MonthNameYear,
            DateFormat::NumericFull,
        ]
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::NumericMonthYear => r"^\d{1,2}/\d{4}$",
            DateFormat::MonthNameYear => {
                r"^(?i)(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}$"
            }
            DateFormat::NumericFull => r"^\d{1,2}/\d{1,2}/\d{4}$",
        }
    }
}

/// Seniority tier inferred from the target job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeniorityTier {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl SeniorityTier {
    /// Keyword match on the title string, highest tier wins.
    pub fn infer(title: &str) -> Self {
        let title = title.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| title.contains(w));
        if has(&["lead", "principal", "staff", "head of", "director"]) {
            SeniorityTier::Lead
        } else if has(&["senior", "sr.", "sr "]) {
            SeniorityTier::Senior
        } else if has(&["junior", "jr.", "jr ", "intern", "graduate", "entry"]) {
            SeniorityTier::Junior
        } else {
            SeniorityTier::Mid
        }
    }

    /// Industry keywords expected in a CV at this tier.
    pub fn industry_keywords(&self) -> &'static [&'static str] {
        match self {
            SeniorityTier::Junior => &[
                "intern",
                "internship",
                "trainee",
                "junior",
                "graduate",
                "coursework",
                "bootcamp",
            ],
            SeniorityTier::Mid => &[
                "developer",
                "engineer",
                "built",
                "delivered",
                "production",
                "shipped",
                "implemented",
            ],
            SeniorityTier::Senior => &[
                "senior",
                "mentored",
                "architecture",
                "led",
                "ownership",
                "stakeholder",
                "design review",
            ],
            SeniorityTier::Lead => &[
                "lead",
                "principal",
                "staff",
                "managed",
                "roadmap",
                "hiring",
                "cross-functional",
            ],
        }
    }
}

pub struct PatternLibrary {
    email: Regex,
    phone_formats: Vec<(PhoneFormat, Regex)>,
    year_range: Regex,
    linkedin: Regex,
    github: Regex,
    url: Regex,
    postal_code: Regex,
    date_candidate: Regex,
    date_formats: Vec<(DateFormat, Regex)>,
    measurable: Vec<Regex>,
    version_qualifier: Regex,
    years_experience: Regex,
    skill_matcher: AhoCorasick,
    skills: Vec<String>,
    industry_matcher: AhoCorasick,
    industry_terms: Vec<String>,
    action_verbs: HashSet<String>,
}

impl PatternLibrary {
    pub fn new() -> Result<Self> {
        let compile = |p: &str| {
            Regex::new(p).map_err(|e| AtsError::Pattern(format!("invalid pattern {p:?}: {e}")))
        };

        let email = compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?;
        let phone_formats = PhoneFormat::all()
            .into_iter()
            .map(|f| Ok((f, compile(f.pattern())?)))
            .collect::<Result<Vec<_>>>()?;
        let year_range = compile(r"^\d{4}\s*-\s*\d{4}$")?;
        let linkedin = compile(r"(?i)linkedin\.com/in/[\w-]+")?;
        let github = compile(r"(?i)github\.com/[\w-]+")?;
        let url = compile(r"(?i)\bhttps?://[^\s<>()]+|\bwww\.[^\s<>()]+")?;
        let postal_code = compile(r"\b\d{5}(?:-\d{4})?\b|\b[A-Z]\d[A-Z]\s?\d[A-Z]\d\b")?;

        // Broad scan for anything date-shaped; classification against the
        // anchored format patterns happens afterwards. Trailing word
        // characters are swallowed so that "March 2020-ish" is seen as one
        // non-conforming candidate rather than a clean "March 2020".
        let date_candidate = compile(
            r"(?i)\b(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}/\d{4}|\d{4}-\d{1,2}(?:-\d{1,2})?|(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?,?\s+\d{4})(?:-[A-Za-z]\w*)?",
        )?;
        let date_formats = DateFormat::all()
            .into_iter()
            .map(|f| Ok((f, compile(f.pattern())?)))
            .collect::<Result<Vec<_>>>()?;

        let measurable = [
            r"\d+(?:\.\d+)?%",
            r"\$\d[\d,]*(?:\.\d+)?\s*[KkMmBb]?\b",
            r"\d+\+",
            r"(?i)\b\d+\s*(?:years?|months?|projects?|clients?|users?|customers?|teams?|engineers?|releases?)\b",
        ]
        .iter()
        .map(|p| compile(p))
        .collect::<Result<Vec<_>>>()?;

        let version_qualifier = compile(r"\b[vV]?\d+\.\d+(?:\.\d+)?\b")?;
        let years_experience = compile(r"(?i)\b\d+\+?\s*years?\s+(?:of\s+)?experience\b")?;

        let skills = Self::skill_vocabulary();
        let skill_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&skills)
            .map_err(|e| AtsError::Pattern(format!("failed to build skill matcher: {e}")))?;

        let industry_terms = Self::industry_vocabulary();
        let industry_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&industry_terms)
            .map_err(|e| AtsError::Pattern(format!("failed to build industry matcher: {e}")))?;

        let action_verbs = Self::action_verb_list()
            .iter()
            .map(|s| s.to_string())
            .collect();

        Ok(Self {
            email,
            phone_formats,
            year_range,
            linkedin,
            github,
            url,
            postal_code,
            date_candidate,
            date_formats,
            measurable,
            version_qualifier,
            years_experience,
            skill_matcher,
            skills,
            industry_matcher,
            industry_terms,
            action_verbs,
        })
    }

    /// First well-formed email address, if any.
    pub fn find_email<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.email.find(text).map(|m| m.as_str())
    }

    /// First phone number matching any accepted format. Formats are tried
    /// in priority order; a candidate counts only with 7-15 digits.
    pub fn find_phone<'t>(&self, text: &'t str) -> Option<(PhoneFormat, &'t str)> {
        for (format, regex) in &self.phone_formats {
            for m in regex.find_iter(text) {
                let candidate = m.as_str();
                // Year ranges like "2020-2024" are dates, not phone numbers.
                if self.year_range.is_match(candidate) {
                    continue;
                }
                let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
                if (7..=15).contains(&digits) {
                    return Some((*format, candidate));
                }
            }
        }
        None
    }

    pub fn has_linkedin(&self, text: &str) -> bool {
        self.linkedin.is_match(text)
    }

    pub fn has_github(&self, text: &str) -> bool {
        self.github.is_match(text)
    }

    /// All URLs in the text, as matched substrings.
    pub fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.url.find_iter(text).map(|m| m.as_str()).collect()
    }

    pub fn has_postal_code(&self, line: &str) -> bool {
        self.postal_code.is_match(line)
    }

    /// Every date-shaped substring in the text.
    pub fn date_candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.date_candidate
            .find_iter(text)
            .map(|m| m.as_str())
            .collect()
    }

    /// Which accepted format a date candidate conforms to, if any.
    pub fn classify_date(&self, candidate: &str) -> Option<DateFormat> {
        self.date_formats
            .iter()
            .find(|(_, regex)| regex.is_match(candidate))
            .map(|(format, _)| *format)
    }

    /// Count of measurable-result spans ("30%", "$10K", "5 projects").
    pub fn count_measurable_results(&self, text: &str) -> usize {
        self.measurable
            .iter()
            .map(|regex| regex.find_iter(text).count())
            .sum()
    }

    /// True when the text carries depth signals: version numbers or a
    /// "N years of experience" phrase.
    pub fn has_depth_signal(&self, text: &str) -> bool {
        self.version_qualifier.is_match(text) || self.years_experience.is_match(text)
    }

    /// Distinct vocabulary skills present in the text, lowercased,
    /// longest-match-first, in order of first appearance.
    pub fn skill_matches(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for m in self.skill_matcher.find_iter(text) {
            if !word_bounded(text, m.start(), m.end()) {
                continue;
            }
            let canonical = self.skills[m.pattern().as_usize()].to_lowercase();
            if seen.insert(canonical.clone()) {
                found.push(canonical);
            }
        }
        found
    }

    /// True when the text contains the given skill as a whole word,
    /// case-insensitively.
    pub fn contains_skill(&self, text: &str, skill: &str) -> bool {
        let text = text.to_lowercase();
        let skill = skill.to_lowercase();
        if skill.is_empty() {
            return false;
        }
        let mut from = 0;
        while let Some(offset) = text[from..].find(&skill) {
            let start = from + offset;
            let end = start + skill.len();
            if word_bounded(&text, start, end) {
                return true;
            }
            from = start + 1;
        }
        false
    }

    /// Distinct secondary industry-keyword matches in the text.
    pub fn industry_matches(&self, text: &str) -> usize {
        let mut seen = HashSet::new();
        for m in self.industry_matcher.find_iter(text) {
            if !word_bounded(text, m.start(), m.end()) {
                continue;
            }
            seen.insert(self.industry_terms[m.pattern().as_usize()].to_lowercase());
        }
        seen.len()
    }

    pub fn is_action_verb(&self, word: &str) -> bool {
        self.action_verbs.contains(&word.to_lowercase())
    }

    /// Discouraged terms an ATS-era reviewer reads as negative language.
    pub fn negative_terms() -> &'static [&'static str] {
        &[
            "never", "failed", "couldn't", "can't", "unfortunately", "mistake",
            "struggled", "weak", "limited", "lack",
        ]
    }

    /// First-person casual markers that undercut professional tone.
    pub fn casual_markers() -> &'static [&'static str] {
        &[
            "i think", "i feel", "i guess", "kinda", "sort of", "a bunch of",
            "stuff like",
        ]
    }

    /// Consumer email providers that read as non-professional domains.
    pub fn free_email_domains() -> &'static [&'static str] {
        &[
            "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "aol.com",
            "icloud.com", "mail.com",
        ]
    }

    /// Social domains excluded from portfolio-URL credit.
    pub fn social_domains() -> &'static [&'static str] {
        &[
            "linkedin.com", "github.com", "facebook.com", "twitter.com",
            "x.com", "instagram.com", "tiktok.com", "youtube.com",
        ]
    }

    /// Additional professional-profile domains (Web-Presence rubric).
    pub fn profile_domains() -> &'static [&'static str] {
        &[
            "stackoverflow.com", "stackexchange.com", "behance.net",
            "dribbble.com", "medium.com", "dev.to", "gitlab.com",
            "kaggle.com", "hashnode.dev",
        ]
    }

    /// Tokens that make a header line read as a physical address.
    pub fn location_tokens() -> &'static [&'static str] {
        &[
            "street", "avenue", "road", "boulevard", "suite", "apt",
            "cairo", "london", "berlin", "paris", "madrid", "amsterdam",
            "new york", "san francisco", "seattle", "austin", "boston",
            "chicago", "toronto", "vancouver", "dubai", "singapore",
            "tokyo", "sydney", "bangalore", "mumbai", "remote",
            "egypt", "usa", "united states", "united kingdom", "germany",
            "france", "canada", "india", "australia", "netherlands",
            "spain", "italy", "japan",
        ]
    }

    fn skill_vocabulary() -> Vec<String> {
        let mut skills: Vec<String> = [
            // Languages
            "rust", "python", "javascript", "typescript", "java", "c++", "c#",
            "go", "ruby", "php", "swift", "kotlin", "scala", "r", "matlab",
            // Web
            "react", "vue", "angular", "svelte", "html", "css", "sass",
            "tailwind", "bootstrap", "webpack", "vite", "node.js", "express",
            "next.js", "nuxt", "django", "flask", "laravel", "spring",
            "responsive design", "user experience",
            // Infrastructure
            "docker", "kubernetes", "aws", "azure", "gcp", "terraform",
            "ansible", "jenkins", "gitlab", "github", "ci/cd", "devops",
            "microservices", "rest", "graphql", "grpc", "redis",
            "elasticsearch", "nginx", "linux", "git", "bash",
            // Databases
            "postgresql", "mysql", "mongodb", "cassandra", "dynamodb",
            "sqlite", "sql", "oracle", "neo4j",
            // Data
            "machine learning", "deep learning", "tensorflow", "pytorch",
            "pandas", "numpy", "spark", "kafka", "airflow", "data analysis",
            "data visualization", "statistics",
            // Mobile
            "ios", "android", "react native", "flutter", "mobile development",
            // Testing
            "jest", "pytest", "junit", "selenium", "cypress", "tdd",
            "unit testing",
            // Process
            "agile", "scrum", "kanban", "jira", "confluence",
            // Soft skills
            "leadership", "communication", "teamwork", "problem solving",
            "critical thinking", "time management", "project management",
            "collaboration", "mentoring", "presentation", "negotiation",
            "customer service",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        // Longest first so the matcher prefers multi-word skills.
        skills.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        skills.dedup();
        skills
    }

    fn industry_vocabulary() -> Vec<String> {
        [
            "programming", "coding", "debugging", "testing", "deployment",
            "version control", "code review", "cloud computing",
            "distributed systems", "performance", "scalability", "security",
            "automation", "monitoring", "observability", "refactoring",
            "integration", "optimization", "architecture", "infrastructure",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn action_verb_list() -> &'static [&'static str] {
        &[
            "led", "built", "created", "designed", "developed", "implemented",
            "managed", "launched", "improved", "reduced", "increased",
            "delivered", "optimized", "automated", "architected", "migrated",
            "mentored", "established", "drove", "spearheaded", "streamlined",
            "owned", "shipped", "maintained", "integrated", "refactored",
            "deployed", "collaborated", "analyzed", "researched", "working",
            "building",
        ]
    }
}

/// Count word-bounded occurrences of `term` in `text`. Both are expected
/// to be lowercased by the caller.
pub(crate) fn count_word_bounded(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut from = 0;
    while let Some(offset) = text[from..].find(term) {
        let start = from + offset;
        let end = start + term.len();
        if word_bounded(text, start, end) {
            count += 1;
        }
        from = start + 1;
    }
    count
}

/// Word-boundary check for vocabulary matches. Short entries like "r" or
/// "go" must not fire inside unrelated words. The boundary only applies
/// on sides where the matched span itself ends in an alphanumeric, so
/// entries like "c++" keep their symbol edge.
fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let span = &text[start..end];
    let first_alnum = span.chars().next().is_some_and(|c| c.is_alphanumeric());
    let last_alnum = span.chars().next_back().is_some_and(|c| c.is_alphanumeric());
    let before_ok = !first_alnum
        || text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = !last_alnum
        || text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> PatternLibrary {
        PatternLibrary::new().unwrap()
    }

    #[test]
    fn test_short_skills_respect_word_boundaries() {
        let lib = library();
        let found = lib.skill_matches("Requirements arrived ago");
        assert!(!found.contains(&"r".to_string()));
        assert!(!found.contains(&"go".to_string()));

        let found = lib.skill_matches("Fluent in R and Go");
        assert!(found.contains(&"r".to_string()));
        assert!(found.contains(&"go".to_string()));
    }

    #[test]
    fn test_count_word_bounded_skips_embedded_terms() {
        assert_eq!(count_word_bounded("never say nevertheless", "never"), 1);
        assert_eq!(count_word_bounded("slack and lackluster", "lack"), 0);
        assert_eq!(count_word_bounded("can't and can't", "can't"), 2);
    }

    #[test]
    fn test_contains_skill_is_word_bounded() {
        let lib = library();
        assert!(lib.contains_skill("shipped Go services", "go"));
        assert!(!lib.contains_skill("shipped cargo services", "go"));
        assert!(lib.contains_skill("knows C++ well", "c++"));
    }

    #[test]
    fn test_email_detection() {
        let lib = library();
        assert_eq!(lib.find_email("reach me at jane@corp.io today"), Some("jane@corp.io"));
        assert!(lib.find_email("jane at corp dot io").is_none());
        assert!(lib.find_email("broken@nodomain").is_none());
    }

    #[test]
    fn test_phone_formats_in_priority_order() {
        let lib = library();
        let (format, _) = lib.find_phone("+20 106 950 9757").unwrap();
        assert_eq!(format, PhoneFormat::International);

        let (format, text) = lib.find_phone("call (555) 123-4567").unwrap();
        assert_eq!(format, PhoneFormat::Parenthesized);
        assert_eq!(text, "(555) 123-4567");

        let (format, _) = lib.find_phone("555-1234").unwrap();
        assert_eq!(format, PhoneFormat::Separated);
    }

    #[test]
    fn test_phone_rejects_short_and_long_digit_runs() {
        let lib = library();
        assert!(lib.find_phone("room 12-34").is_none());
        assert!(lib.find_phone("1234-5678-9012-3456-7890").is_none());
    }

    #[test]
    fn test_date_classification() {
        let lib = library();
        assert_eq!(lib.classify_date("03/2020"), Some(DateFormat::NumericMonthYear));
        assert_eq!(lib.classify_date("March 2020"), Some(DateFormat::MonthNameYear));
        assert_eq!(lib.classify_date("03/15/2020"), Some(DateFormat::NumericFull));
        assert_eq!(lib.classify_date("2020-03"), None);
        assert_eq!(lib.classify_date("March 2020-ish"), None);
    }

    #[test]
    fn test_date_candidates_swallow_trailing_words() {
        let lib = library();
        let candidates = lib.date_candidates("worked March 2020-ish and 03/2020");
        assert_eq!(candidates, vec!["March 2020-ish", "03/2020"]);
    }

    #[test]
    fn test_skill_matches_prefer_longest() {
        let lib = library();
        let found = lib.skill_matches("Machine learning and Python on AWS");
        assert!(found.contains(&"machine learning".to_string()));
        assert!(found.contains(&"python".to_string()));
        assert!(found.contains(&"aws".to_string()));
    }

    #[test]
    fn test_measurable_results() {
        let lib = library();
        let text = "cut latency 30%, saved $10K, shipped 5 projects";
        assert!(lib.count_measurable_results(text) >= 3);
        assert_eq!(lib.count_measurable_results("no numbers here"), 0);
    }

    #[test]
    fn test_seniority_inference() {
        assert_eq!(SeniorityTier::infer("Senior Developer"), SeniorityTier::Senior);
        assert_eq!(SeniorityTier::infer("Lead Engineer"), SeniorityTier::Lead);
        assert_eq!(SeniorityTier::infer("Junior Analyst"), SeniorityTier::Junior);
        assert_eq!(SeniorityTier::infer("Backend Developer"), SeniorityTier::Mid);
    }

    #[test]
    fn test_depth_signals() {
        let lib = library();
        assert!(lib.has_depth_signal("React 18.2 in production"));
        assert!(lib.has_depth_signal("5 years of experience with Python"));
        assert!(!lib.has_depth_signal("knows React and Python"));
    }
}

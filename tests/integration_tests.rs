//! End-to-end tests over the public analysis API.

use ats_scorer::analysis::{FormatFlags, JobContext};
use ats_scorer::{analyze, CategoryWeights, ScoringEngine};

const STRONG_CV: &str = "\
Jane Smith
jane.smith@gmail.com
(555) 123-4567
123 Main Street, Portland, OR 97201
linkedin.com/in/janesmith
github.com/janesmith
https://janesmith.dev

Summary
Senior Software Engineer with 8 years of experience building cloud services in Rust.

Experience
- Led a team of 5 engineers building payment services in Rust 1.75, 03/2019 to 03/2024
- Reduced API latency by 40% through caching and performance monitoring
- Managed the AWS migration with automated deployment, saving $200k annually
- Designed the service architecture and automation for Docker and Python workloads

Education
- BS Computer Science, 05/2015

Skills
- Rust, Python, Docker, Kubernetes, AWS
";

const JOB_DESCRIPTION: &str = "\
We are hiring a Senior Software Engineer to build cloud services.

Requirements:
- Rust, Python
- AWS, Terraform
- Docker
";

fn score_strong_cv() -> ats_scorer::AnalysisResult {
    analyze(
        STRONG_CV,
        JOB_DESCRIPTION,
        "Senior Software Engineer",
        Some("Acme"),
        FormatFlags::default(),
    )
    .unwrap()
}

#[test]
fn test_strong_cv_scores_high() {
    let result = score_strong_cv();
    assert!(result.overall_score >= 75, "got {}", result.overall_score);
    assert!(result.overall_score <= 100);
    assert_eq!(result.categories.len(), 6);
    assert_eq!(result.category_scores.len(), 6);
}

#[test]
fn test_complete_contact_block_scores_full() {
    let result = score_strong_cv();
    assert_eq!(result.category_scores["contact"], 100);
}

#[test]
fn test_exact_title_in_summary_scores_job_title_high() {
    let result = score_strong_cv();
    assert!(result.category_scores["job_title"] >= 55);
}

#[test]
fn test_keyword_suggestions_only_list_absent_skills() {
    let result = score_strong_cv();
    assert!(result
        .keyword_suggestions
        .iter()
        .any(|k| k.eq_ignore_ascii_case("terraform")));

    let cv_lower = STRONG_CV.to_lowercase();
    for keyword in &result.keyword_suggestions {
        assert!(
            !cv_lower.contains(&keyword.to_lowercase()),
            "suggested keyword {keyword:?} is already in the CV"
        );
    }
}

#[test]
fn test_minimal_cv_with_title_match_and_skill_gap() {
    let cv = "John Doe\njohn@x.com\n555-1234\nSummary\nSenior Developer with 5 years of experience\nSkills\nReact, Node.js";
    let result = analyze(
        cv,
        "Looking for Senior Developer skilled in React, Node.js, AWS",
        "Senior Developer",
        None,
        FormatFlags::default(),
    )
    .unwrap();

    // Exact title plus summary placement alone are worth 55 points.
    assert!(result.category_scores["job_title"] >= 55);
    assert!(result
        .keyword_suggestions
        .iter()
        .any(|k| k.eq_ignore_ascii_case("aws")));
    assert!(!result
        .keyword_suggestions
        .iter()
        .any(|k| k.eq_ignore_ascii_case("react")));
}

#[test]
fn test_analysis_is_deterministic() {
    let first = serde_json::to_string(&score_strong_cv()).unwrap();
    let second = serde_json::to_string(&score_strong_cv()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_cv_scores_near_zero_without_panicking() {
    let result = analyze("", JOB_DESCRIPTION, "Engineer", None, FormatFlags::default()).unwrap();
    assert!(result.overall_score <= 10, "got {}", result.overall_score);
    assert!(!result.missing_elements.is_empty());
    assert!(!result.recommendations.is_empty());
}

#[test]
fn test_tables_flag_lowers_formatting_regardless_of_text() {
    let clean = score_strong_cv();
    let flagged = analyze(
        STRONG_CV,
        JOB_DESCRIPTION,
        "Senior Software Engineer",
        None,
        FormatFlags {
            has_tables: true,
            has_images: false,
        },
    )
    .unwrap();

    assert!(flagged.category_scores["formatting"] < clean.category_scores["formatting"]);
    assert!(flagged.overall_score < clean.overall_score);
    let formatting = flagged
        .categories
        .iter()
        .find(|c| c.category.name() == "formatting")
        .unwrap();
    assert!(formatting.findings.iter().any(|f| f.message == "tables detected"));
}

#[test]
fn test_adding_required_skill_never_lowers_skill_score() {
    let engine = ScoringEngine::new().unwrap();
    let job = JobContext::new(JOB_DESCRIPTION, "Senior Software Engineer");

    let without = engine.analyze(STRONG_CV, &job, FormatFlags::default());
    let with_terraform = engine.analyze(
        &format!("{STRONG_CV}\nAlso experienced with Terraform."),
        &job,
        FormatFlags::default(),
    );
    assert!(
        with_terraform.category_scores["skill"] >= without.category_scores["skill"]
    );
}

#[test]
fn test_inconsistent_dates_lower_formatting_score() {
    let engine = ScoringEngine::new().unwrap();
    let job = JobContext::new("", "");

    let clean = engine.analyze(
        "Experience\n- Engineer, 03/2020 to 06/2023",
        &job,
        FormatFlags::default(),
    );
    let mixed = engine.analyze(
        "Experience\n- Engineer, 03/2020 to June 2023-ish",
        &job,
        FormatFlags::default(),
    );
    assert!(mixed.category_scores["formatting"] < clean.category_scores["formatting"]);
}

#[test]
fn test_custom_weights_shift_the_overall_score() {
    let skill_heavy = CategoryWeights {
        contact: 0.05,
        job_title: 0.05,
        skill: 0.70,
        formatting: 0.05,
        readability: 0.05,
        web_presence: 0.10,
    };
    let engine = ScoringEngine::with_weights(skill_heavy).unwrap();
    let job = JobContext::new("Requirements:\n- COBOL, Fortran", "Engineer");

    // A CV with no required skills suffers far more under a skill-heavy
    // weighting than under the default one.
    let default_result = ScoringEngine::new()
        .unwrap()
        .analyze(STRONG_CV, &job, FormatFlags::default());
    let weighted_result = engine.analyze(STRONG_CV, &job, FormatFlags::default());
    assert!(weighted_result.overall_score < default_result.overall_score);
}

#[test]
fn test_unbalanced_weights_are_rejected() {
    let bad = CategoryWeights {
        contact: 0.5,
        ..CategoryWeights::default()
    };
    assert!(ScoringEngine::with_weights(bad).is_err());
}

#[test]
fn test_missing_elements_deduplicate_across_categories() {
    // LinkedIn absence is reported by both contact and web presence with
    // the same wording; the final report carries it once.
    let result = analyze(
        "Jane Doe\njane@corp.io\nSummary\nEngineer.",
        "",
        "",
        None,
        FormatFlags::default(),
    )
    .unwrap();
    let linkedin_mentions = result
        .missing_elements
        .iter()
        .filter(|m| m.contains("LinkedIn"))
        .count();
    assert_eq!(linkedin_mentions, 1);
}

#[test]
fn test_recommendations_lead_with_highest_value_fixes() {
    let result = analyze(
        "Jane Doe\nSummary\nEngineer.",
        JOB_DESCRIPTION,
        "Senior Software Engineer",
        None,
        FormatFlags::default(),
    )
    .unwrap();
    assert!(!result.recommendations.is_empty());
    // The top recommendation should come from a component worth at least
    // as much as the email fix (30 points).
    let top = &result.recommendations[0];
    let top_points = result
        .categories
        .iter()
        .flat_map(|c| &c.suggestions)
        .find(|s| &s.message == top)
        .map(|s| s.points)
        .unwrap();
    assert!(top_points >= 30.0);
}

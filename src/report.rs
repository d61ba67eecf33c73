//! Report builder: shapes aggregated category results into the final
//! serializable analysis result.

use crate::analysis::engine::CategoryWeights;
use crate::analysis::{CategoryResult, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final analysis output. A plain value object: the caller owns it fully,
/// and identical inputs always produce an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Weighted average of the category scores, rounded to an integer.
    pub overall_score: u8,
    /// Category name to 0-100 integer score.
    pub category_scores: BTreeMap<String, u8>,
    /// Deduplicated missing-item findings, in category then finding order.
    pub missing_elements: Vec<String>,
    /// Skills required by the job description but absent from the CV.
    pub keyword_suggestions: Vec<String>,
    /// Suggestions ranked by the points they would recover.
    pub recommendations: Vec<String>,
    /// Full per-category detail for renderers.
    pub categories: Vec<CategoryResult>,
}

/// Pure aggregation over the ordered category results. Never fails.
pub fn build(categories: Vec<CategoryResult>, weights: &CategoryWeights) -> AnalysisResult {
    let overall: f64 = categories
        .iter()
        .map(|c| weights.get(c.category) * c.score)
        .sum();
    let overall_score = overall.round().clamp(0.0, 100.0) as u8;

    let category_scores = categories
        .iter()
        .map(|c| {
            (
                c.category.name().to_string(),
                c.score.round().clamp(0.0, 100.0) as u8,
            )
        })
        .collect();

    let mut missing_elements = Vec::new();
    for category in &categories {
        for finding in &category.findings {
            if finding.severity == Severity::Missing
                && !missing_elements.contains(&finding.message)
            {
                missing_elements.push(finding.message.clone());
            }
        }
    }

    // Rank by recoverable points, ties broken by category weight. The
    // sort is stable, so equal entries keep category then suggestion
    // order.
    let mut ranked: Vec<(f64, f64, &str)> = categories
        .iter()
        .flat_map(|category| {
            category
                .suggestions
                .iter()
                .map(|s| (s.points, weights.get(category.category), s.message.as_str()))
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
    });
    let mut recommendations: Vec<String> = Vec::new();
    for (_, _, message) in ranked {
        if !recommendations.iter().any(|r| r == message) {
            recommendations.push(message.to_string());
        }
    }

    let mut keyword_suggestions: Vec<String> = Vec::new();
    for category in &categories {
        for keyword in &category.keyword_gaps {
            let lower = keyword.to_lowercase();
            if !keyword_suggestions
                .iter()
                .any(|k| k.to_lowercase() == lower)
            {
                keyword_suggestions.push(keyword.clone());
            }
        }
    }

    AnalysisResult {
        overall_score,
        category_scores,
        missing_elements,
        keyword_suggestions,
        recommendations,
        categories,
    }
}

//! Behavioral-answer analysis pipeline.
//!
//! A single synchronous pass over the submitted text: the gibberish gate runs
//! first and can reject outright, then relevance (when a question is known),
//! red flags, and the three scorers run, cross-cutting penalties are applied,
//! and the feedback narrative is composed from the intermediate verdicts.
//! Every invocation is pure and independent; the only shared state is the
//! read-only lexicons.

pub(crate) mod feedback;
pub(crate) mod gibberish;
pub(crate) mod lexicon;
pub(crate) mod red_flags;
pub(crate) mod relevance;
pub(crate) mod scoring;
pub(crate) mod star;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use gibberish::GibberishVerdict;
pub use red_flags::RedFlag;
pub use relevance::{QuestionTopic, RelevanceVerdict};
pub use star::StarComponents;

use lexicon::{CONFIDENCE_KEYWORDS, LEADERSHIP_KEYWORDS};

/// Composite assessment of one behavioral-interview answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub clarity: u8,
    pub confidence: u8,
    pub structure: u8,
    pub total_score: u8,
    pub feedback: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub details: AnalysisDetails,
}

/// Intermediate signals preserved alongside the scores for transparency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub star_components_found: StarComponents,
    pub confidence_keyword_count: usize,
    pub leadership_keyword_count: usize,
    pub red_flags: Vec<String>,
    pub relevance_issues: Vec<String>,
}

/// Analyze a behavioral-interview answer, optionally against the question it
/// responds to. Never fails: degenerate input lands on the rejection result
/// or the score floors, not an error.
pub fn analyze(answer: &str, question: Option<&str>) -> AnalysisResult {
    let gibberish = gibberish::detect(answer);
    debug!(
        severity = gibberish.severity,
        is_gibberish = gibberish.is_gibberish,
        "gibberish gate evaluated"
    );
    if gibberish.is_gibberish {
        return rejection_result(&gibberish);
    }

    let answer_lower = answer.to_lowercase();

    // An empty question disables relevance checking entirely.
    let relevance = question
        .filter(|q| !q.is_empty())
        .map(|q| relevance::check(q, answer));

    let red_flags = red_flags::detect(answer);

    let clarity = scoring::clarity::score(answer);
    let confidence = scoring::confidence::score(&answer_lower);
    let structure = scoring::structure::score(&answer_lower);

    // Red flags shave clarity and confidence; the float penalty is truncated
    // toward zero before subtracting so tier edges land exactly where the
    // rubric says they do. Capped at five points.
    let red_flag_penalty = (red_flags.len() as f32 * 1.5).min(5.0);
    let relevance_penalty: i32 = match &relevance {
        Some(verdict) if !verdict.is_relevant => 3,
        _ => 0,
    };

    let clarity = (i32::from(clarity) - (red_flag_penalty / 2.0) as i32).max(1) as u8;
    let confidence = (i32::from(confidence) - (red_flag_penalty / 2.0) as i32).max(1) as u8;
    let structure = (i32::from(structure) - relevance_penalty).max(1) as u8;

    let total_score = (u32::from(clarity) + u32::from(confidence) + u32::from(structure)) / 3;
    debug!(
        clarity,
        confidence,
        structure,
        total_score,
        red_flag_count = red_flags.len(),
        "scores assembled"
    );

    let feedback = feedback::generate(
        clarity,
        confidence,
        structure,
        &answer_lower,
        &red_flags,
        relevance.as_ref(),
    );

    AnalysisResult {
        clarity,
        confidence,
        structure,
        total_score: total_score as u8,
        feedback,
        is_valid: true,
        rejection_reason: None,
        details: AnalysisDetails {
            star_components_found: StarComponents::detect(&answer_lower),
            confidence_keyword_count: lexicon::count_matches(&answer_lower, CONFIDENCE_KEYWORDS),
            leadership_keyword_count: lexicon::count_matches(&answer_lower, LEADERSHIP_KEYWORDS),
            red_flags: red_flags
                .iter()
                .map(|flag| flag.description().to_string())
                .collect(),
            relevance_issues: relevance
                .map(|verdict| verdict.issues)
                .unwrap_or_default(),
        },
    }
}

/// Terminal result for answers rejected at the gibberish gate. No scorer
/// runs; every score is pinned to the floor.
fn rejection_result(gibberish: &GibberishVerdict) -> AnalysisResult {
    AnalysisResult {
        clarity: 1,
        confidence: 1,
        structure: 1,
        total_score: 1,
        feedback: feedback::rejection(&gibberish.issues),
        is_valid: false,
        rejection_reason: Some("Invalid response detected".to_string()),
        details: AnalysisDetails {
            red_flags: gibberish.issues.clone(),
            ..AnalysisDetails::default()
        },
    }
}

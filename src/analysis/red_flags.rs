//! Detection of answer traits that interviewers mark down hard.

use serde::{Deserialize, Serialize};

use super::lexicon::{
    contains_any, count_matches, BLAME_PHRASES, HEDGING_WORDS, METRIC_PATTERN, NEGATIVE_PHRASES,
    RESULT_INDICATORS, VAGUE_PHRASES,
};

/// Interview-disqualifying traits surfaced from the answer text.
///
/// Variants are checked independently and emitted in declaration order; the
/// order is load-bearing because feedback surfaces only the first few.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlag {
    BlamesOthers,
    NegativeAttitude,
    WeOveruse,
    NoOutcome,
    NoMetrics,
    TooBrief,
    ExcessiveHedging,
    VaguePhrasing,
}

impl RedFlag {
    /// The phrasing shown to candidates for this flag.
    pub fn description(&self) -> &'static str {
        match self {
            RedFlag::BlamesOthers => {
                "Blames others instead of taking accountability - major red flag in big tech interviews"
            }
            RedFlag::NegativeAttitude => {
                "Displays negative attitude about previous employers - interviewers note this"
            }
            RedFlag::WeOveruse => {
                "Uses 'we' excessively without clarifying your individual contribution"
            }
            RedFlag::NoOutcome => "Long answer with no clear outcome or result mentioned",
            RedFlag::NoMetrics => {
                "Claims results but provides no quantifiable metrics (%, $, time saved, etc.)"
            }
            RedFlag::TooBrief => {
                "Response is too brief for a behavioral question - shows lack of depth or preparation"
            }
            RedFlag::ExcessiveHedging => "Excessive hedging language undermines confidence",
            RedFlag::VaguePhrasing => {
                "Uses vague phrases without concrete details - interviewers want specifics"
            }
        }
    }
}

/// Scan one answer for every red flag; multiple flags can fire at once.
pub(crate) fn detect(answer: &str) -> Vec<RedFlag> {
    let answer_lower = answer.to_lowercase();
    let mut red_flags = Vec::new();

    if contains_any(&answer_lower, BLAME_PHRASES) {
        red_flags.push(RedFlag::BlamesOthers);
    }

    if contains_any(&answer_lower, NEGATIVE_PHRASES) {
        red_flags.push(RedFlag::NegativeAttitude);
    }

    // Pronoun balance: a chorus of "we" with almost no "I" hides what the
    // candidate personally did.
    let we_count = answer_lower.matches(" we ").count();
    let i_count = answer_lower.matches(" i ").count();
    if we_count > 5 && i_count < 2 {
        red_flags.push(RedFlag::WeOveruse);
    }

    let has_result_keywords = contains_any(&answer_lower, RESULT_INDICATORS);
    let has_numbers = METRIC_PATTERN.is_match(answer);
    let word_count = answer.split_whitespace().count();

    if word_count > 50 && !has_result_keywords {
        red_flags.push(RedFlag::NoOutcome);
    }

    if has_result_keywords && !has_numbers && word_count > 30 {
        red_flags.push(RedFlag::NoMetrics);
    }

    if word_count < 30 {
        red_flags.push(RedFlag::TooBrief);
    }

    if count_matches(&answer_lower, HEDGING_WORDS) >= 3 {
        red_flags.push(RedFlag::ExcessiveHedging);
    }

    if count_matches(&answer_lower, VAGUE_PHRASES) >= 2 {
        red_flags.push(RedFlag::VaguePhrasing);
    }

    red_flags
}

//! Confidence scoring from ownership vocabulary and hedging.

use crate::analysis::lexicon::{
    count_matches, COMMON_HEDGES, CONFIDENCE_KEYWORDS, LEADERSHIP_KEYWORDS, OWNERSHIP_PHRASES,
};

/// Score how confidently the answer presents the candidate, 1..=10.
///
/// Takes the already-lowercased answer so keyword containment stays
/// case-insensitive without re-lowering per lexicon.
pub(crate) fn score(answer_lower: &str) -> u8 {
    let word_count = answer_lower.split_whitespace().count();
    if word_count < 10 {
        return 2;
    }
    if word_count < 20 {
        return 3;
    }

    let mut score: i32 = 2;

    let total_keywords = count_matches(answer_lower, CONFIDENCE_KEYWORDS)
        + count_matches(answer_lower, LEADERSHIP_KEYWORDS);

    score += match total_keywords {
        count if count >= 8 => 5,
        count if count >= 5 => 4,
        count if count >= 3 => 3,
        2 => 2,
        1 => 1,
        _ => 0,
    };

    let ownership_count = count_matches(answer_lower, OWNERSHIP_PHRASES);
    if ownership_count >= 3 {
        score += 2;
    } else if ownership_count >= 1 {
        score += 1;
    }

    let hedge_count = count_matches(answer_lower, COMMON_HEDGES);
    if hedge_count >= 3 {
        score -= 3;
    } else if hedge_count >= 1 {
        score -= 1;
    }

    score.clamp(1, 10) as u8
}

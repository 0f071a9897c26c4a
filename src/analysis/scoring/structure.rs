//! STAR structure scoring.

use crate::analysis::star::StarComponents;

/// Score the answer's narrative structure, 1..=10, from how many STAR
/// components are present. Situation and Result together earn a bookend
/// bonus because they frame the story.
pub(crate) fn score(answer_lower: &str) -> u8 {
    let word_count = answer_lower.split_whitespace().count();
    if word_count < 10 {
        return 1;
    }
    if word_count < 20 {
        return 2;
    }

    let components = StarComponents::detect(answer_lower);
    let mut score: u8 = match components.count() {
        4 => 10,
        3 => 7,
        2 => 4,
        1 => 2,
        _ => 1,
    };

    if components.situation && components.result {
        score = (score + 1).min(10);
    }

    score
}

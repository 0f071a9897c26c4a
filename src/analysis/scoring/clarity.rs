//! Clarity scoring from sentence shape alone.

/// Score how clearly the answer reads, 1..=10.
///
/// Very short answers resolve through fixed tiers before any sentence math
/// runs. The two sentence-length bonus bands overlap by construction; they
/// are evaluated as sequential exclusive branches and only the first match
/// applies.
pub(crate) fn score(answer: &str) -> u8 {
    let word_count = answer.split_whitespace().count();
    if word_count < 5 {
        return 1;
    }
    if word_count < 10 {
        return 2;
    }
    if word_count < 20 {
        return 3;
    }

    // Clarity must be earned above the base.
    let mut score: i32 = 3;

    let sentences: Vec<&str> = answer
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();

    if sentences.is_empty() {
        return 1;
    }
    if sentences.len() < 2 {
        return 2;
    }

    let sentence_lengths: Vec<usize> = sentences
        .iter()
        .map(|sentence| sentence.split_whitespace().count())
        .collect();
    let total_words: usize = sentence_lengths.iter().sum();
    let avg_words_per_sentence = total_words as f64 / sentences.len() as f64;

    if (10.0..=25.0).contains(&avg_words_per_sentence) {
        score += 4;
    } else if (8.0..=30.0).contains(&avg_words_per_sentence) {
        score += 2;
    } else if avg_words_per_sentence > 40.0 {
        score -= 1;
    } else if avg_words_per_sentence < 5.0 {
        score -= 1;
    }

    // No run-on sentences across a real multi-sentence answer.
    let long_sentences = sentence_lengths.iter().filter(|len| **len > 40).count();
    if long_sentences == 0 && sentences.len() >= 3 {
        score += 2;
    }

    // Varied sentence lengths read better than a monotone.
    if sentences.len() >= 4 {
        let max = sentence_lengths.iter().copied().max().unwrap_or(0);
        let min = sentence_lengths.iter().copied().min().unwrap_or(0);
        if max - min > 5 {
            score += 1;
        }
    }

    score.clamp(1, 10) as u8
}

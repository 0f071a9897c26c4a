//! Spam and degenerate-input detection that gates the rest of the pipeline.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::lexicon::DEGENERATE_PATTERNS;

/// Severity-graded verdict on whether an answer is worth scoring at all.
///
/// Severity runs 0 (clean) through 3 (severe); anything at 2 or above is
/// treated as gibberish and short-circuits the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GibberishVerdict {
    pub severity: u8,
    pub issues: Vec<String>,
    pub is_gibberish: bool,
}

/// Scan the raw answer for spam, placeholder, and degenerate-text signals.
///
/// Each rule can only raise the running severity; the final value is the
/// maximum across all triggered rules, never a sum.
pub(crate) fn detect(text: &str) -> GibberishVerdict {
    let text_lower = text.to_lowercase();

    let mut issues = Vec::new();
    let mut severity: u8 = 0;

    // Ordered pattern scan, first hit only. The repeated-character run check
    // sits in scan order after the explicit patterns; every entry reports the
    // same combined issue so a single hit tells the whole story.
    if DEGENERATE_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(&text_lower))
        || has_repeated_char_run(&text_lower)
    {
        issues.push("Contains random or placeholder text".to_string());
        severity = severity.max(3);
    }

    // Low character diversity reads as keyboard noise once the text is long
    // enough for the measure to mean anything.
    let non_space: Vec<char> = text_lower.chars().filter(|c| *c != ' ').collect();
    let unique_chars: HashSet<char> = non_space.iter().copied().collect();
    if non_space.len() > 20 && unique_chars.len() < 8 {
        issues.push("Very low character diversity - appears random".to_string());
        severity = severity.max(3);
    }

    let char_count = text.chars().count();
    let punct_count = text.chars().filter(|c| c.is_ascii_punctuation()).count();
    if char_count > 10 && punct_count as f32 / char_count as f32 > 0.3 {
        issues.push("Excessive punctuation".to_string());
        severity = severity.max(2);
    }

    // Digit-heavy text is suspect unless it is plausibly discussing metrics.
    let digit_count = text.chars().filter(|c| c.is_ascii_digit()).count();
    let digit_ratio = digit_count as f32 / char_count.max(1) as f32;
    if digit_ratio > 0.3 && !text.contains('%') && !text.contains('$') {
        issues.push("Excessive numbers without context".to_string());
        severity = severity.max(2);
    }

    // Tokens keep any attached punctuation; "word," and "word" count apart.
    let words: Vec<&str> = text_lower.split_whitespace().collect();
    if !words.is_empty() {
        let mut word_counts: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            if word.chars().count() > 2 {
                *word_counts.entry(*word).or_insert(0) += 1;
            }
        }
        let max_repetition = word_counts.values().copied().max().unwrap_or(0);
        if max_repetition > 5 && words.len() < 50 {
            issues.push("Excessive word repetition".to_string());
            severity = severity.max(2);
        }

        let total_len: usize = words.iter().map(|word| word.chars().count()).sum();
        let avg_word_len = total_len as f32 / words.len() as f32;
        if avg_word_len > 12.0 || avg_word_len < 2.0 {
            issues.push("Unusual word patterns".to_string());
            severity = severity.max(2);
        }
    }

    GibberishVerdict {
        severity,
        issues,
        is_gibberish: severity >= 2,
    }
}

/// True when any single character repeats five or more times in a row.
/// Newlines never count: a wall of blank lines is a formatting quirk, not
/// keyboard noise, so a run of them breaks the streak instead of extending it.
fn has_repeated_char_run(text: &str) -> bool {
    let mut previous: Option<char> = None;
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            previous = None;
            run = 0;
        } else if Some(ch) == previous {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else {
            previous = Some(ch);
            run = 1;
        }
    }
    false
}

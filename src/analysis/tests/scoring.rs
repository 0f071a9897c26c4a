use super::common::*;
use crate::analysis::lexicon::{count_matches, CONFIDENCE_KEYWORDS};
use crate::analysis::scoring::{clarity, confidence, structure};
use crate::analysis::StarComponents;

#[test]
fn clarity_short_circuits_on_word_count() {
    assert_eq!(clarity::score("too short entirely"), 1);
    assert_eq!(clarity::score(brief_answer()), 2);
    assert_eq!(
        clarity::score(
            "Fifteen words is still not anywhere near enough detail for a behavioral answer here."
        ),
        3
    );
}

#[test]
fn clarity_gives_single_sentences_a_two() {
    // Twenty-plus words but one long unbroken sentence.
    let answer = "I joined the payments group and spent most of that year rebuilding the \
                  settlement jobs alongside two very patient operations engineers.";

    assert_eq!(clarity::score(answer), 2);
}

#[test]
fn clarity_rewards_balanced_multi_sentence_answers() {
    assert_eq!(clarity::score(strong_answer()), 10);
}

#[test]
fn confidence_short_circuits_on_word_count() {
    assert_eq!(confidence::score("i guess it went fine"), 2);
    assert_eq!(
        confidence::score(
            "fifteen words is still not anywhere near enough detail for an answer here"
        ),
        3
    );
}

#[test]
fn confidence_base_without_keywords() {
    // Twenty-plus words with no confidence or leadership vocabulary, no
    // ownership phrases, no hedges.
    let answer = "the weather on that day stayed calm and the office felt quiet while \
                  everyone wrote notes about the seminar for a long while afterwards";

    assert_eq!(confidence::score(answer), 2);
}

#[test]
fn confidence_counts_each_keyword_once() {
    let text = "delivered delivered delivered and delivered again";

    assert_eq!(count_matches(text, CONFIDENCE_KEYWORDS), 1);
}

#[test]
fn confidence_rewards_keywords_and_ownership() {
    assert_eq!(confidence::score(&strong_answer().to_lowercase()), 9);
}

#[test]
fn confidence_penalizes_hedging() {
    // Same shape as the base case plus three distinct common hedges.
    let answer = "maybe the weather stayed calm and perhaps the office felt quiet while \
                  everyone probably wrote notes about the seminar for a long while afterwards";

    assert_eq!(confidence::score(answer), 1);
}

#[test]
fn structure_short_circuits_on_word_count() {
    assert_eq!(structure::score("i guess it went fine"), 1);
    assert_eq!(
        structure::score(
            "fifteen words is still not anywhere near enough detail for an answer here"
        ),
        2
    );
}

#[test]
fn structure_scores_by_component_count() {
    // Situation only: "when" with no task, action, or result language.
    let situation_only = "when the quarter closed early, everybody on the floor wondered \
                          what the numbers meant for the region and whether plans might \
                          shift again soon";
    assert_eq!(structure::score(situation_only), 2);

    assert_eq!(structure::score(&strong_answer().to_lowercase()), 10);
}

#[test]
fn structure_is_monotonic_in_components() {
    let one_component = "when the quarter closed early, everybody on the floor wondered \
                         what the numbers meant for the region and whether plans might \
                         shift again soon";

    assert!(
        structure::score(&strong_answer().to_lowercase()) >= structure::score(one_component)
    );
}

#[test]
fn star_detector_always_reports_all_four_components() {
    let components = StarComponents::detect("completely unrelated text");

    assert!(!components.situation);
    assert!(!components.task);
    assert!(!components.action);
    assert!(!components.result);
    assert_eq!(components.count(), 0);

    let full = StarComponents::detect(&strong_answer().to_lowercase());
    assert_eq!(full.count(), 4);
}

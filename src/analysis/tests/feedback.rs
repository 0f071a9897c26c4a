use super::common::*;
use crate::analysis::feedback::{generate, rejection};
use crate::analysis::RedFlag;

#[test]
fn sections_appear_in_fixed_order() {
    let answer = brief_answer().to_lowercase();
    let flags = vec![RedFlag::TooBrief, RedFlag::VaguePhrasing];
    let feedback = generate(2, 2, 1, &answer, &flags, None);

    let critical = feedback.find("CRITICAL ISSUES DETECTED:").expect("critical section");
    let structure = feedback.find("STRUCTURE ANALYSIS:").expect("structure section");
    let ownership = feedback.find("OWNERSHIP & CONFIDENCE:").expect("ownership section");
    let clarity = feedback.find("CLARITY & COMMUNICATION:").expect("clarity section");
    let metrics = feedback.find("MISSING METRICS:").expect("metrics section");
    let overall = feedback.find("OVERALL ASSESSMENT:").expect("overall section");

    assert!(critical < structure);
    assert!(structure < ownership);
    assert!(ownership < clarity);
    assert!(clarity < metrics);
    assert!(metrics < overall);
}

#[test]
fn red_flag_section_is_omitted_without_flags() {
    let answer = strong_answer().to_lowercase();
    let feedback = generate(9, 9, 10, &answer, &[], None);

    assert!(!feedback.contains("CRITICAL ISSUES DETECTED:"));
    assert!(feedback.contains("STRUCTURE ANALYSIS:"));
}

#[test]
fn only_the_top_three_red_flags_are_shown() {
    let answer = brief_answer().to_lowercase();
    let flags = vec![
        RedFlag::BlamesOthers,
        RedFlag::NegativeAttitude,
        RedFlag::TooBrief,
        RedFlag::VaguePhrasing,
    ];
    let feedback = generate(1, 1, 1, &answer, &flags, None);

    assert!(feedback.contains(RedFlag::BlamesOthers.description()));
    assert!(feedback.contains(RedFlag::NegativeAttitude.description()));
    assert!(feedback.contains(RedFlag::TooBrief.description()));
    assert!(!feedback.contains(RedFlag::VaguePhrasing.description()));
}

#[test]
fn strong_scores_earn_the_strong_hire_verdict() {
    let answer = strong_answer().to_lowercase();
    let feedback = generate(10, 9, 10, &answer, &[], None);

    assert!(feedback.contains("STRONG RESPONSE"));
    assert!(feedback.contains("Strong STAR method execution"));
    assert!(feedback.contains("Good use of first-person ownership"));
    assert!(feedback.contains("Clear, well-structured sentences"));
}

#[test]
fn missing_metrics_advisory_requires_no_numbers_and_a_low_average() {
    let numberless = we_heavy_answer().to_lowercase();
    let low = generate(4, 4, 4, &numberless, &[], None);
    assert!(low.contains("MISSING METRICS:"));

    // Same text, but a high average suppresses the advisory.
    let high = generate(9, 8, 8, &numberless, &[], None);
    assert!(!high.contains("MISSING METRICS:"));

    // A percentage in the text suppresses it regardless of score.
    let with_numbers = strong_answer().to_lowercase();
    let scored = generate(4, 4, 4, &with_numbers, &[], None);
    assert!(!scored.contains("MISSING METRICS:"));
}

#[test]
fn bottom_tier_verdicts_use_the_harshest_wording() {
    let answer = brief_answer().to_lowercase();

    let poor = generate(3, 2, 2, &answer, &[], None);
    assert!(poor.contains("POOR RESPONSE"));

    let unacceptable = generate(1, 1, 1, &answer, &[], None);
    assert!(unacceptable.contains("UNACCEPTABLE RESPONSE"));
}

#[test]
fn mid_tier_confidence_mentions_pronoun_balance_when_we_dominates() {
    let answer = we_heavy_answer().to_lowercase();
    let feedback = generate(6, 6, 6, &answer, &[], None);

    assert!(feedback.contains("Too much 'we' and not enough 'I'"));
}

#[test]
fn partial_structure_lists_present_and_missing_components() {
    // Situation and result only.
    let answer = "when the review closed we saw the outcome settle";
    let feedback = generate(5, 5, 5, answer, &[], None);

    assert!(feedback.contains("Partial STAR structure detected"));
    assert!(feedback.contains("SITUATION"));
    assert!(feedback.contains("Missing: TASK, ACTION."));
}

#[test]
fn rejection_feedback_embeds_the_gate_issues() {
    let issues = vec!["Contains random or placeholder text".to_string()];
    let text = rejection(&issues);

    assert!(text.starts_with("This response cannot be evaluated."));
    assert!(text.contains("Contains random or placeholder text"));
    assert!(text.contains("specific situation from your experience"));
}

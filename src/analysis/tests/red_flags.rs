use super::common::*;
use crate::analysis::red_flags::detect;
use crate::analysis::RedFlag;

#[test]
fn strong_answer_raises_no_flags() {
    assert!(detect(strong_answer()).is_empty());
}

#[test]
fn blame_language_is_flagged() {
    let flags = detect("It was their fault that the rollout broke.");

    assert!(flags.contains(&RedFlag::BlamesOthers));
}

#[test]
fn negative_attitude_is_flagged() {
    let flags = detect("My old workplace was toxic and I hated every meeting there.");

    assert!(flags.contains(&RedFlag::NegativeAttitude));
}

#[test]
fn we_overuse_without_individual_contribution_is_flagged() {
    let flags = detect(we_heavy_answer());

    assert!(flags.contains(&RedFlag::WeOveruse));
}

#[test]
fn we_heavy_answer_with_results_but_no_numbers_also_misses_metrics() {
    let flags = detect(we_heavy_answer());

    assert_eq!(flags, vec![RedFlag::WeOveruse, RedFlag::NoMetrics]);
}

#[test]
fn long_answer_without_outcome_is_flagged() {
    // Over fifty words, not one result-indicator phrase.
    let answer = "In my second year on the platform group the pager kept firing every \
                  night, and everybody rotated through long shifts trying to keep the \
                  queues calm while the big rewrite dragged on. I kept notes on every \
                  incident, talked with the operators each morning, and walked the new \
                  hires through each runbook page so nobody burned out.";
    let flags = detect(answer);

    assert!(flags.contains(&RedFlag::NoOutcome));
    assert!(!flags.contains(&RedFlag::NoMetrics));
}

#[test]
fn brief_answer_is_always_flagged_as_too_brief() {
    let flags = detect(brief_answer());

    assert!(flags.contains(&RedFlag::TooBrief));
}

#[test]
fn three_distinct_hedges_trigger_the_hedging_flag() {
    let answer = "Maybe the rollout improved because of my change, perhaps it was the \
                  new cache, and possibly the traffic simply dropped that week, though \
                  the dashboards did look better after the change went out.";
    let flags = detect(answer);

    assert!(flags.contains(&RedFlag::ExcessiveHedging));
}

#[test]
fn two_vague_phrases_trigger_the_vagueness_flag() {
    let flags = detect(brief_answer());

    // "i worked hard" and "it went well" both land in the vague lexicon.
    assert!(flags.contains(&RedFlag::VaguePhrasing));
}

#[test]
fn flags_come_out_in_detection_order() {
    let flags = detect("It was their fault and honestly that team was toxic.");

    assert_eq!(
        flags,
        vec![
            RedFlag::BlamesOthers,
            RedFlag::NegativeAttitude,
            RedFlag::TooBrief
        ]
    );
}

//! Topic classification for the question and relevance scoring of the answer.

use serde::{Deserialize, Serialize};

use super::lexicon::{
    contains_any, ABOVE_AND_BEYOND_KEYWORDS, CHALLENGE_KEYWORDS, DEADLINE_KEYWORDS,
    DIFFICULT_TEAM_MEMBER_KEYWORDS, FAILURE_KEYWORDS, FEEDBACK_KEYWORDS, GENERIC_OPENERS,
    LEADERSHIP_TOPIC_KEYWORDS, OFF_TOPIC_PHRASES, PERSUASION_KEYWORDS, STORY_INDICATORS,
};

/// Behavioral-question archetypes recognised by the relevance checker.
///
/// Classification walks the variants in declaration order and stops at the
/// first whose keyword set hits the question text, so the order here is part
/// of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTopic {
    Challenge,
    DifficultTeamMember,
    Leadership,
    Failure,
    Deadline,
    AboveAndBeyond,
    Persuasion,
    Feedback,
}

impl QuestionTopic {
    pub(crate) fn ordered() -> [QuestionTopic; 8] {
        [
            QuestionTopic::Challenge,
            QuestionTopic::DifficultTeamMember,
            QuestionTopic::Leadership,
            QuestionTopic::Failure,
            QuestionTopic::Deadline,
            QuestionTopic::AboveAndBeyond,
            QuestionTopic::Persuasion,
            QuestionTopic::Feedback,
        ]
    }

    pub(crate) fn keywords(&self) -> &'static [&'static str] {
        match self {
            QuestionTopic::Challenge => CHALLENGE_KEYWORDS,
            QuestionTopic::DifficultTeamMember => DIFFICULT_TEAM_MEMBER_KEYWORDS,
            QuestionTopic::Leadership => LEADERSHIP_TOPIC_KEYWORDS,
            QuestionTopic::Failure => FAILURE_KEYWORDS,
            QuestionTopic::Deadline => DEADLINE_KEYWORDS,
            QuestionTopic::AboveAndBeyond => ABOVE_AND_BEYOND_KEYWORDS,
            QuestionTopic::Persuasion => PERSUASION_KEYWORDS,
            QuestionTopic::Feedback => FEEDBACK_KEYWORDS,
        }
    }

    /// Human-readable topic label used in issue texts.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionTopic::Challenge => "challenge",
            QuestionTopic::DifficultTeamMember => "difficult team member",
            QuestionTopic::Leadership => "leadership",
            QuestionTopic::Failure => "failed",
            QuestionTopic::Deadline => "deadline",
            QuestionTopic::AboveAndBeyond => "above and beyond",
            QuestionTopic::Persuasion => "persuade",
            QuestionTopic::Feedback => "feedback",
        }
    }
}

/// Whether the answer plausibly addresses the question that was asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceVerdict {
    pub relevance_score: u8,
    pub question_type: Option<QuestionTopic>,
    pub issues: Vec<String>,
    pub is_relevant: bool,
}

/// Score how well the answer addresses the question's detected topic.
///
/// Starts from a neutral 5 and adjusts up or down; an unclassifiable question
/// leaves the topic adjustments out and the remaining checks advisory-only.
pub(crate) fn check(question: &str, answer: &str) -> RelevanceVerdict {
    let question_lower = question.to_lowercase();
    let answer_lower = answer.to_lowercase();

    let mut issues = Vec::new();
    let mut relevance_score: i32 = 5;

    let question_type = QuestionTopic::ordered()
        .into_iter()
        .find(|topic| contains_any(&question_lower, topic.keywords()));

    if let Some(topic) = question_type {
        let matches = topic
            .keywords()
            .iter()
            .filter(|keyword| answer_lower.contains(*keyword))
            .count();

        if matches == 0 {
            issues.push(format!(
                "Answer doesn't address the '{}' aspect of the question",
                topic.label()
            ));
            relevance_score -= 3;
        } else if matches >= 2 {
            relevance_score += 2;
        }
    }

    // First matching off-topic phrase only.
    for phrase in OFF_TOPIC_PHRASES {
        if answer_lower.contains(phrase) {
            issues.push("Contains off-topic indicators".to_string());
            relevance_score -= 2;
            break;
        }
    }

    let has_story = contains_any(&answer_lower, STORY_INDICATORS);
    if !has_story && answer.split_whitespace().count() > 20 {
        issues.push("Doesn't provide a specific example or story".to_string());
        relevance_score -= 2;
    }

    // Generic platitudes either open the answer or start a later sentence.
    for phrase in GENERIC_OPENERS {
        if answer_lower.starts_with(phrase) || answer_lower.contains(&format!(". {phrase}")) {
            issues.push("Uses generic statements instead of specific examples".to_string());
            relevance_score -= 2;
            break;
        }
    }

    let relevance_score = relevance_score.clamp(0, 10) as u8;

    RelevanceVerdict {
        relevance_score,
        question_type,
        issues,
        is_relevant: relevance_score >= 4,
    }
}

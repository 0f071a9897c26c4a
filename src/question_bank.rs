//! Static catalog of canned behavioral questions.
//!
//! Informational only: callers use it to prompt candidates. The scoring
//! pipeline never reads it.

use serde::Serialize;

/// A canned behavioral prompt and the competencies it probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankedQuestion {
    pub prompt: &'static str,
    pub focus: &'static [&'static str],
}

const QUESTIONS: &[BankedQuestion] = &[
    BankedQuestion {
        prompt: "Tell me about a time you faced a significant challenge at work.",
        focus: &["problem-solving", "resilience", "action-oriented"],
    },
    BankedQuestion {
        prompt: "Describe a situation where you had to work with a difficult team member.",
        focus: &["teamwork", "conflict resolution", "communication"],
    },
    BankedQuestion {
        prompt: "Give an example of a time you showed leadership.",
        focus: &["leadership", "initiative", "influence"],
    },
    BankedQuestion {
        prompt: "Tell me about a time you failed and what you learned from it.",
        focus: &["self-awareness", "growth mindset", "accountability"],
    },
    BankedQuestion {
        prompt: "Describe a situation where you had to meet a tight deadline.",
        focus: &["time management", "prioritization", "pressure handling"],
    },
    BankedQuestion {
        prompt: "Tell me about a time you went above and beyond for a project.",
        focus: &["initiative", "dedication", "impact"],
    },
    BankedQuestion {
        prompt: "Describe a situation where you had to persuade others to see your point of view.",
        focus: &["communication", "influence", "negotiation"],
    },
    BankedQuestion {
        prompt: "Tell me about a time you received critical feedback.",
        focus: &["receptiveness", "self-improvement", "professionalism"],
    },
];

/// The standard question bank, in presentation order.
pub fn standard() -> &'static [BankedQuestion] {
    QUESTIONS
}

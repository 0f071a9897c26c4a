//! Immutable keyword and phrase lexicons shared by every detector and scorer.
//!
//! All lists are fixed at compile time and consumed by read-only reference, so
//! concurrent analyses never contend or copy. Matching is always substring
//! containment over the lowercased answer unless a regex is named explicitly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Action verbs signalling ownership and delivery.
pub(crate) const CONFIDENCE_KEYWORDS: &[&str] = &[
    "led",
    "lead",
    "managed",
    "directed",
    "spearheaded",
    "initiated",
    "achieved",
    "accomplished",
    "delivered",
    "exceeded",
    "surpassed",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "transformed",
    "responsible",
    "ownership",
    "accountable",
    "drove",
    "championed",
    "successfully",
    "effectively",
    "efficiently",
    "proactively",
    "decided",
    "determined",
    "resolved",
    "solved",
    "overcame",
];

/// Collaboration and people-leadership vocabulary.
pub(crate) const LEADERSHIP_KEYWORDS: &[&str] = &[
    "team",
    "collaborated",
    "coordinated",
    "mentored",
    "coached",
    "delegated",
    "motivated",
    "inspired",
    "influenced",
    "persuaded",
    "negotiated",
    "facilitated",
    "organized",
    "supervised",
    "trained",
    "led",
    "leadership",
    "cross-functional",
    "stakeholder",
    "consensus",
];

pub(crate) const SITUATION_INDICATORS: &[&str] = &[
    "situation",
    "context",
    "background",
    "scenario",
    "challenge",
    "problem",
    "issue",
    "when",
    "while working",
    "at my previous",
    "in my role",
    "during",
    "faced with",
];

pub(crate) const TASK_INDICATORS: &[&str] = &[
    "task",
    "responsibility",
    "goal",
    "objective",
    "assigned",
    "needed to",
    "had to",
    "required to",
    "expected to",
    "my role was",
    "i was responsible",
    "charged with",
];

pub(crate) const ACTION_INDICATORS: &[&str] = &[
    "action",
    "i did",
    "i took",
    "implemented",
    "developed",
    "created",
    "designed",
    "built",
    "established",
    "initiated",
    "executed",
    "i decided",
    "i started",
    "i began",
    "my approach",
    "steps i took",
];

pub(crate) const RESULT_INDICATORS: &[&str] = &[
    "result",
    "outcome",
    "impact",
    "achieved",
    "accomplished",
    "led to",
    "resulted in",
    "consequently",
    "as a result",
    "ultimately",
    "success",
    "improved",
    "increased",
    "reduced",
    "saved",
    "delivered",
];

pub(crate) const CHALLENGE_KEYWORDS: &[&str] = &[
    "challenge", "difficult", "hard", "problem", "obstacle", "struggle", "issue", "tough",
    "overcome",
];

pub(crate) const DIFFICULT_TEAM_MEMBER_KEYWORDS: &[&str] = &[
    "team",
    "colleague",
    "coworker",
    "conflict",
    "disagreement",
    "difficult person",
    "communication",
];

pub(crate) const LEADERSHIP_TOPIC_KEYWORDS: &[&str] = &[
    "lead", "led", "team", "managed", "directed", "initiative", "guided", "motivated", "inspired",
];

pub(crate) const FAILURE_KEYWORDS: &[&str] = &[
    "fail",
    "mistake",
    "error",
    "wrong",
    "learned",
    "lesson",
    "setback",
    "didn't work",
];

pub(crate) const DEADLINE_KEYWORDS: &[&str] = &[
    "deadline", "time", "urgent", "quick", "fast", "pressure", "rushed", "days", "hours", "weeks",
];

pub(crate) const ABOVE_AND_BEYOND_KEYWORDS: &[&str] = &[
    "extra",
    "beyond",
    "more than",
    "additional",
    "volunteered",
    "initiative",
    "own time",
];

pub(crate) const PERSUASION_KEYWORDS: &[&str] = &[
    "persuade",
    "convince",
    "argument",
    "presented",
    "explained",
    "showed",
    "demonstrated",
    "negotiated",
];

pub(crate) const FEEDBACK_KEYWORDS: &[&str] = &[
    "feedback",
    "criticism",
    "critique",
    "review",
    "told me",
    "suggested",
    "improved",
    "changed",
];

/// Phrases that signal the candidate drifted away from the question.
pub(crate) const OFF_TOPIC_PHRASES: &[&str] = &[
    "what was the question",
    "can you repeat",
    "i forgot",
    "anyway",
    "by the way",
    "unrelated but",
    "off topic",
];

/// Words that indicate the answer recounts a concrete episode.
pub(crate) const STORY_INDICATORS: &[&str] = &[
    "when", "once", "time", "example", "project", "company", "role", "job",
];

/// Canned openers that substitute platitudes for a specific example.
pub(crate) const GENERIC_OPENERS: &[&str] = &[
    "i am a hard worker",
    "i always try",
    "i believe in",
    "i am passionate",
    "communication is important",
    "teamwork is essential",
    "i am dedicated",
];

pub(crate) const BLAME_PHRASES: &[&str] = &[
    "it was their fault",
    "they made me",
    "not my fault",
    "blame",
    "they didn't",
    "my manager was bad",
    "my team was incompetent",
    "no one helped me",
    "they were useless",
];

pub(crate) const NEGATIVE_PHRASES: &[&str] = &[
    "i hate",
    "i hated",
    "stupid",
    "dumb",
    "worst",
    "terrible company",
    "bad manager",
    "toxic",
    "the company was awful",
];

/// Filler phrases that claim effort or success without any detail.
pub(crate) const VAGUE_PHRASES: &[&str] = &[
    "i worked hard",
    "i did my best",
    "i tried",
    "we worked together",
    "it was difficult",
    "i managed it",
    "things worked out",
    "it went well",
    "i handled it",
    "i dealt with it",
    "we figured it out",
    "i made it happen",
    "i was successful",
    "good results",
    "positive outcome",
    "everything was fine",
];

/// Full hedging vocabulary used by the red-flag detector.
pub(crate) const HEDGING_WORDS: &[&str] = &[
    "maybe",
    "perhaps",
    "i think",
    "i guess",
    "sort of",
    "kind of",
    "probably",
    "might have",
    "could have",
    "possibly",
    "somewhat",
    "i believe",
    "i feel like",
    "in a way",
    "more or less",
];

/// The most frequent hedges; the confidence scorer penalizes only these.
pub(crate) const COMMON_HEDGES: &[&str] = &[
    "maybe", "perhaps", "i think", "i guess", "sort of", "kind of", "probably",
];

/// First-person phrasings that make the candidate's own contribution explicit.
pub(crate) const OWNERSHIP_PHRASES: &[&str] = &[
    "i led",
    "i managed",
    "i decided",
    "i took",
    "my decision",
    "i initiated",
];

/// Degenerate input patterns, scanned in order against the lowercased text.
/// Keyboard mashing, duplicated placeholder words, stock one-word replies,
/// boilerplate filler, and outright admissions of not knowing all land here;
/// any hit reports the same combined issue. The companion repeated-character
/// check lives in the gibberish detector because the regex crate has no
/// backreferences.
pub(crate) static DEGENERATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"asdf",
        r"qwerty",
        r"zxcv",
        r"jkl",
        r";\s*;\s*;",
        r"test\s*test",
        r"hello\s*hello",
        r"blah\s*blah",
        // A single trailing newline still counts as end-of-text, so stock
        // replies read from a file are caught too.
        r"^(yes|no|ok|okay|sure|fine|good|bad|idk|dunno)\.?\n?$",
        r"lorem ipsum",
        r"i don'?t know",
        r"no idea",
        r"not sure",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("degenerate pattern compiles"))
    .collect()
});

/// Matches any bare number or percentage, the minimum bar for "quantified".
pub(crate) static METRIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%?").expect("metric pattern compiles"));

/// Count lexicon entries contained in the lowercased answer. Each entry
/// contributes at most once no matter how often it repeats.
pub(crate) fn count_matches(answer_lower: &str, lexicon: &[&str]) -> usize {
    lexicon
        .iter()
        .filter(|entry| answer_lower.contains(*entry))
        .count()
}

pub(crate) fn contains_any(answer_lower: &str, lexicon: &[&str]) -> bool {
    lexicon.iter().any(|entry| answer_lower.contains(*entry))
}

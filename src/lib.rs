//! Deterministic scoring and feedback for behavioral-interview answers.
//!
//! The core is [`analysis::analyze`]: a pure, synchronous pipeline that gates
//! out gibberish, checks topical relevance against the question, detects
//! interview red flags, scores clarity, confidence, and STAR structure, and
//! composes candidate-facing feedback. All judgments come from fixed lexical
//! rules; identical input always produces identical output.

pub mod analysis;
pub mod config;
pub mod error;
pub mod extraction;
pub mod question_bank;
pub mod telemetry;

pub use analysis::{
    analyze, AnalysisDetails, AnalysisResult, GibberishVerdict, QuestionTopic, RedFlag,
    RelevanceVerdict, StarComponents,
};

//! The three independent scoring functions behind the composite assessment.
//!
//! Each scorer is a pure function from answer text to a score in `[1, 10]`
//! with its own short-circuit tiers for input too short to judge.

pub(crate) mod clarity;
pub(crate) mod confidence;
pub(crate) mod structure;

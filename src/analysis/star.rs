//! Shared detector for the four STAR narrative components.

use serde::{Deserialize, Serialize};

use super::lexicon::{
    contains_any, ACTION_INDICATORS, RESULT_INDICATORS, SITUATION_INDICATORS, TASK_INDICATORS,
};

/// Which STAR components an answer exhibits. All four fields are always
/// present regardless of the text, so the shape of the report never varies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarComponents {
    pub situation: bool,
    pub task: bool,
    pub action: bool,
    pub result: bool,
}

impl StarComponents {
    /// Detect each component independently by indicator-phrase containment.
    pub(crate) fn detect(answer_lower: &str) -> Self {
        Self {
            situation: contains_any(answer_lower, SITUATION_INDICATORS),
            task: contains_any(answer_lower, TASK_INDICATORS),
            action: contains_any(answer_lower, ACTION_INDICATORS),
            result: contains_any(answer_lower, RESULT_INDICATORS),
        }
    }

    pub fn count(&self) -> usize {
        [self.situation, self.task, self.action, self.result]
            .into_iter()
            .filter(|present| *present)
            .count()
    }

    pub(crate) fn present_labels(&self) -> Vec<&'static str> {
        self.labelled()
            .into_iter()
            .filter_map(|(label, present)| present.then_some(label))
            .collect()
    }

    pub(crate) fn missing_labels(&self) -> Vec<&'static str> {
        self.labelled()
            .into_iter()
            .filter_map(|(label, present)| (!present).then_some(label))
            .collect()
    }

    fn labelled(&self) -> [(&'static str, bool); 4] {
        [
            ("SITUATION", self.situation),
            ("TASK", self.task),
            ("ACTION", self.action),
            ("RESULT", self.result),
        ]
    }
}

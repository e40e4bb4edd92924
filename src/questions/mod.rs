//! Multiple-choice question sourcing.
//!
//! Questions come from a hosted language-model API when a key is
//! configured, and from the static local bank otherwise, or whenever the
//! remote call fails or returns something unparseable. Question sourcing
//! never fails from the caller's point of view.

pub mod bank;
pub mod generator;

use serde::{Deserialize, Serialize};

pub use bank::SUBJECTS;
pub use generator::QuestionGenerator;

/// One multiple-choice question: four options, exactly one correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub subject: String,
    pub prompt: String,
    pub options: [String; 4],
    /// Index into `options` of the correct answer.
    pub correct: usize,
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct
    }

    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct]
    }
}

/// Where a fetched question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    Generated,
    LocalBank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedQuestion {
    pub question: Question,
    pub source: QuestionSource,
}

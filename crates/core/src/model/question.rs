use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question with exactly one correct option.
///
/// Immutable once built; the only way in is `Question::new`, which enforces
/// the option count and the correct index bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text or an option is blank, fewer than
    /// two options are given, or `correct_index` does not point at an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Returns true if `option_index` names one of this question's options.
    #[must_use]
    pub fn has_option(&self, option_index: usize) -> bool {
        option_index < self.options.len()
    }

    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

/// Wire shape of a question in the bundled question bank.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionRecord {
    pub(crate) text: String,
    pub(crate) options: Vec<String>,
    pub(crate) correct_index: usize,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.text, record.options, record.correct_index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn question_trims_text() {
        let q = Question::new("  What?  ", options(&["a", "b"]), 1).unwrap();
        assert_eq!(q.text(), "What?");
        assert_eq!(q.option_count(), 2);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn question_rejects_blank_text() {
        let err = Question::new("   ", options(&["a", "b"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn question_rejects_single_option() {
        let err = Question::new("Q", options(&["only"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { len: 1 });
    }

    #[test]
    fn question_rejects_blank_option() {
        let err = Question::new("Q", options(&["a", " ", "c"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn question_rejects_correct_index_past_options() {
        let err = Question::new("Q", options(&["a", "b"]), 2).unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn question_deserialize_runs_validation() {
        let json = r#"{"text":"Q","options":["a","b"],"correct_index":5}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());

        let json = r#"{"text":"Q","options":["a","b"],"correct_index":1}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_index(), 1);
        assert!(q.has_option(1));
        assert!(!q.has_option(2));
    }
}

use thiserror::Error;

use crate::model::question::{Question, QuestionError, QuestionRecord};

const BUILTIN_QUESTIONS: &str = include_str!("../../assets/questions.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank is empty")]
    Empty,

    #[error("invalid question #{position}: {source}")]
    Question {
        position: usize,
        #[source]
        source: QuestionError,
    },

    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed, ordered set of questions for one quiz.
///
/// Built once at startup and never mutated; sessions borrow it to score and
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` if no questions are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        Ok(Self { questions })
    }

    /// The question bank compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` if the bundled JSON is malformed or a
    /// question fails validation.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Parses a JSON array of `{ text, options, correct_index }` records.
    ///
    /// Positions in errors are 1-based, matching the numbering shown to users.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` for malformed JSON and
    /// `QuestionBankError::Question` for the first invalid record.
    pub fn from_json(raw: &str) -> Result<Self, QuestionBankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                Question::try_from(record).map_err(|source| QuestionBankError::Question {
                    position: idx + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_loads_nine_questions() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.len(), 9);
        assert!(!bank.is_empty());

        let first = bank.get(0).unwrap();
        assert_eq!(first.options()[first.correct_index()], "CSS");
        let last = bank.get(8).unwrap();
        assert_eq!(last.options()[last.correct_index()], "Система контроля версий");
        assert!(bank.get(9).is_none());
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuestionBank::from_json("[]").unwrap_err();
        assert!(matches!(err, QuestionBankError::Empty));
    }

    #[test]
    fn invalid_record_reports_position() {
        let raw = r#"[
            {"text":"ok","options":["a","b"],"correct_index":0},
            {"text":"bad","options":["a","b"],"correct_index":3}
        ]"#;
        let err = QuestionBank::from_json(raw).unwrap_err();
        match err {
            QuestionBankError::Question { position, source } => {
                assert_eq!(position, 2);
                assert_eq!(
                    source,
                    QuestionError::CorrectIndexOutOfRange { index: 3, len: 2 }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = QuestionBank::from_json("{not json").unwrap_err();
        assert!(matches!(err, QuestionBankError::Parse(_)));
    }
}

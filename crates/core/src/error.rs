use thiserror::Error;

use crate::config::ConfigError;
use crate::model::{QuestionBankError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuestionBank(#[from] QuestionBankError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::ConfigError;
use quiz_core::model::QuestionBankError;

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    QuestionBank(#[from] QuestionBankError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

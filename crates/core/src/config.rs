use thiserror::Error;

use crate::time::{DEFAULT_LOW_TIME_THRESHOLD_SECS, DEFAULT_TIME_LIMIT_SECS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("time limit must be at least one second")]
    ZeroTimeLimit,
}

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    time_limit_secs: u32,
    low_time_threshold_secs: u32,
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeLimit` if `time_limit_secs` is zero.
    pub fn new(time_limit_secs: u32, low_time_threshold_secs: u32) -> Result<Self, ConfigError> {
        if time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(Self {
            time_limit_secs,
            low_time_threshold_secs,
        })
    }

    /// Same as the default config but with a different time budget.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeLimit` if `time_limit_secs` is zero.
    pub fn with_time_limit(time_limit_secs: u32) -> Result<Self, ConfigError> {
        Self::new(time_limit_secs, DEFAULT_LOW_TIME_THRESHOLD_SECS)
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn low_time_threshold_secs(&self) -> u32 {
        self.low_time_threshold_secs
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            low_time_threshold_secs: DEFAULT_LOW_TIME_THRESHOLD_SECS,
        }
    }
}

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;
pub mod time;

pub use config::{ConfigError, QuizConfig};
pub use error::Error;

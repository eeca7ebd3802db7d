#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use app_services::AppServices;
pub use error::AppServicesError;

pub use quiz::{
    IntervalTicker, ManualTicker, QuizController, QuizEvent, QuizPresenter, QuizView,
    RecordingPresenter, Screen, Ticker,
};

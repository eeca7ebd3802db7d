use std::sync::Arc;

use quiz_core::QuizConfig;
use quiz_core::model::{QuestionBank, SessionState};

use crate::error::AppServicesError;
use crate::quiz::{QuizController, QuizPresenter, QuizView, Ticker};

/// Assembles what every quiz session shares: the question bank and config.
#[derive(Debug, Clone)]
pub struct AppServices {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
}

impl AppServices {
    /// Build services backed by the bundled question bank.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled question bank fails to load.
    pub fn builtin(config: QuizConfig) -> Result<Self, AppServicesError> {
        let bank = QuestionBank::builtin()?;
        Ok(Self::new(bank, config))
    }

    #[must_use]
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        Self {
            bank: Arc::new(bank),
            config,
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// A controller for a new session. Call `start` on it to begin.
    #[must_use]
    pub fn controller<T, P>(&self, ticker: T, presenter: P) -> QuizController<T, P>
    where
        T: Ticker,
        P: QuizPresenter,
    {
        QuizController::new(self.bank(), self.config, ticker, presenter)
    }

    /// The view a freshly started controller renders first, available before
    /// any controller exists.
    #[must_use]
    pub fn initial_view(&self) -> QuizView {
        let state = SessionState::new(self.bank.len(), self.config.time_limit_secs());
        QuizView::render(&self.bank, &state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{ManualTicker, RecordingPresenter};

    #[test]
    fn initial_view_matches_first_render() {
        let services = AppServices::builtin(QuizConfig::default()).unwrap();
        let mut controller = services.controller(ManualTicker::new(), RecordingPresenter::new());
        controller.start();

        assert_eq!(controller.presenter().last(), Some(&services.initial_view()));
        assert_eq!(services.initial_view().timer.label, "10:00");
    }
}

use std::sync::Arc;

use quiz_core::QuizConfig;
use quiz_core::model::{QuestionBank, SessionEvent, SessionState, Transition};

use super::event::QuizEvent;
use super::ticker::Ticker;
use super::view::QuizView;

//
// ─── PRESENTER ────────────────────────────────────────────────────────────────
//

/// Render sink for quiz views. Called once per state change.
pub trait QuizPresenter {
    fn render(&mut self, view: &QuizView);
}

impl<F> QuizPresenter for F
where
    F: FnMut(&QuizView),
{
    fn render(&mut self, view: &QuizView) {
        self(view);
    }
}

/// Presenter that keeps the last rendered view and counts renders.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    last: Option<QuizView>,
    renders: usize,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<&QuizView> {
        self.last.as_ref()
    }

    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl QuizPresenter for RecordingPresenter {
    fn render(&mut self, view: &QuizView) {
        self.last = Some(view.clone());
        self.renders += 1;
    }
}

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

/// Drives one quiz: owns the question bank, the session state, the countdown
/// ticker and the render sink.
///
/// Each public operation applies a single transition to the session, keeps
/// the ticker in step with the phase (running while in progress, stopped once
/// finished), and renders when something changed.
pub struct QuizController<T, P> {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
    state: SessionState,
    ticker: T,
    presenter: P,
    generation: u64,
}

impl<T, P> QuizController<T, P>
where
    T: Ticker,
    P: QuizPresenter,
{
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, config: QuizConfig, ticker: T, presenter: P) -> Self {
        let state = SessionState::new(bank.len(), config.time_limit_secs());
        Self {
            bank,
            config,
            state,
            ticker,
            presenter,
            generation: 0,
        }
    }

    /// Shows the first question and starts the countdown.
    ///
    /// Always begins from a fresh session: anything applied before the first
    /// `start` is discarded. Calling it on a running quiz is the same as
    /// `restart`.
    pub fn start(&mut self) {
        if self.generation > 0 {
            self.restart();
            return;
        }
        self.state = SessionState::new(self.bank.len(), self.config.time_limit_secs());
        tracing::info!(
            questions = self.bank.len(),
            time_limit_secs = self.config.time_limit_secs(),
            "quiz started"
        );
        self.start_ticker();
        self.render();
    }

    /// Dispatches an event coming from the presentation layer or the ticker.
    pub fn handle(&mut self, event: QuizEvent) -> Transition {
        match event {
            QuizEvent::Next => self.go_next(),
            QuizEvent::Previous => self.go_prev(),
            QuizEvent::SelectOption(option) => {
                self.select_option(self.state.current_index(), option)
            }
            QuizEvent::Finish => self.finish(),
            QuizEvent::Restart => self.restart(),
            QuizEvent::Tick { generation } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "dropping tick from a stopped ticker"
                    );
                    return Transition::Ignored;
                }
                self.tick()
            }
        }
    }

    pub fn go_next(&mut self) -> Transition {
        self.apply(SessionEvent::Next)
    }

    pub fn go_prev(&mut self) -> Transition {
        self.apply(SessionEvent::Previous)
    }

    /// Records `option_index` as the answer to `question_index`, replacing any
    /// earlier answer. Indices outside the bank are rejected without changes.
    pub fn select_option(&mut self, question_index: usize, option_index: usize) -> Transition {
        let valid = self
            .bank
            .get(question_index)
            .is_some_and(|question| question.has_option(option_index));
        if !valid {
            tracing::warn!(
                question_index,
                option_index,
                "rejected selection outside the question bank"
            );
            return Transition::Ignored;
        }
        self.apply(SessionEvent::Select {
            question: question_index,
            option: option_index,
        })
    }

    pub fn finish(&mut self) -> Transition {
        self.apply(SessionEvent::Finish)
    }

    /// Resets the session to its initial values and restarts the countdown.
    /// Valid in any phase.
    pub fn restart(&mut self) -> Transition {
        self.apply(SessionEvent::Restart)
    }

    /// Counts down one second for the current ticker generation.
    pub fn tick(&mut self) -> Transition {
        let transition = self.apply(SessionEvent::Tick);
        if transition == Transition::Finished {
            tracing::info!("time is up");
        }
        transition
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        QuizView::render(&self.bank, &self.state, &self.config)
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Generation of the most recently started ticker; 0 before `start`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn apply(&mut self, event: SessionEvent) -> Transition {
        let transition = self.state.apply(&self.bank, event);
        match transition {
            Transition::Ignored => return transition,
            Transition::Updated => {
                tracing::trace!(?event, "session updated");
            }
            Transition::Finished => {
                self.ticker.stop();
                let result = self.state.result();
                tracing::info!(
                    score = result.score(),
                    correct = result.correct(),
                    total = result.total(),
                    "quiz finished"
                );
            }
            Transition::Restarted => {
                tracing::info!("quiz restarted");
                self.start_ticker();
            }
        }
        self.render();
        transition
    }

    fn start_ticker(&mut self) {
        self.ticker.stop();
        self.generation += 1;
        self.ticker.start(self.generation);
    }

    fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }
}

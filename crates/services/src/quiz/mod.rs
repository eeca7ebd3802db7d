mod controller;
mod event;
mod ticker;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use controller::{QuizController, QuizPresenter, RecordingPresenter};
pub use event::QuizEvent;
pub use ticker::{IntervalTicker, ManualTicker, Ticker, TICK_PERIOD};
pub use view::{OptionView, QuestionView, QuizView, ResultView, Screen, TimerView};
pub use workflow::{drive, drive_until_finished};

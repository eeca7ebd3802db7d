mod bank;
mod question;
mod score;
mod session;

pub use bank::{QuestionBank, QuestionBankError};
pub use question::{Question, QuestionError};
pub use score::{QuizResult, ScoreTier};
pub use session::{QuizPhase, SessionEvent, SessionState, Transition};

mod quiz_vm;

pub use quiz_vm::{QuizEvents, intent_for_key, option_label};

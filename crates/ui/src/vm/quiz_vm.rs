use dioxus::prelude::Key;
use services::{QuizEvent, Screen};
use tokio::sync::mpsc::UnboundedSender;

/// Handle the views use to raise quiz events.
///
/// Events go into the same channel as the countdown ticks, so the controller
/// sees every input in arrival order.
#[derive(Clone, Debug)]
pub struct QuizEvents {
    tx: UnboundedSender<QuizEvent>,
}

impl QuizEvents {
    #[must_use]
    pub fn new(tx: UnboundedSender<QuizEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, event: QuizEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!(?event, "quiz event loop is gone, dropping event");
        }
    }
}

impl PartialEq for QuizEvents {
    fn eq(&self, other: &Self) -> bool {
        self.tx.same_channel(&other.tx)
    }
}

/// Maps a key press to a quiz event for the visible screen.
///
/// Digits pick options by their 1-based position; digits past `option_count`
/// are ignored here rather than sent to the controller. Enter on the question
/// screen is left alone so a focused button keeps its own activation.
#[must_use]
pub fn intent_for_key(key: &Key, screen: Screen, option_count: usize) -> Option<QuizEvent> {
    match (screen, key) {
        (Screen::Question, Key::ArrowLeft) => Some(QuizEvent::Previous),
        (Screen::Question, Key::ArrowRight) => Some(QuizEvent::Next),
        (Screen::Results, Key::Enter) => Some(QuizEvent::Restart),
        (Screen::Question, Key::Character(value)) => {
            let digit = value.parse::<usize>().ok()?;
            (1..=option_count)
                .contains(&digit)
                .then(|| QuizEvent::SelectOption(digit - 1))
        }
        _ => None,
    }
}

/// Letter badge shown next to an option: A, B, C...
#[must_use]
pub fn option_label(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|idx| *idx < 26)
        .map_or_else(|| (index + 1).to_string(), |idx| char::from(b'A' + idx).to_string())
}

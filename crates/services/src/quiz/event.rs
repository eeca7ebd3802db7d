/// Input raised by the presentation layer or the ticker.
///
/// Every mutation of a quiz session arrives as one of these and is applied to
/// completion before the next one is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Next,
    Previous,
    /// Select an option of the question currently on screen.
    SelectOption(usize),
    Finish,
    Restart,
    /// One second elapsed, as seen by the ticker started with `generation`.
    Tick { generation: u64 },
}

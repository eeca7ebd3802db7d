use crate::model::{QuestionBank, QuizResult};

//
// ─── PHASE / EVENTS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Finished,
}

/// Inputs the session state machine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Next,
    Previous,
    Select { question: usize, option: usize },
    Finish,
    Restart,
    Tick,
}

/// What an event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event was not applicable; state is untouched.
    Ignored,
    /// State changed and the session is still running.
    Updated,
    /// The session moved from `InProgress` to `Finished`.
    Finished,
    /// The session was reset to its initial values.
    Restarted,
}

impl Transition {
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

//
// ─── SESSION STATE ────────────────────────────────────────────────────────────
//

/// Mutable state of one quiz attempt.
///
/// Invariants held after every `apply`:
/// - `current_index < question_count`
/// - `selected_answers.len() == question_count`
/// - `correct_count` equals the number of answers matching the bank
/// - `time_remaining <= time_limit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_index: usize,
    selected_answers: Vec<Option<usize>>,
    correct_count: usize,
    time_remaining: u32,
    time_limit: u32,
    phase: QuizPhase,
}

impl SessionState {
    #[must_use]
    pub fn new(question_count: usize, time_limit: u32) -> Self {
        Self {
            current_index: 0,
            selected_answers: vec![None; question_count],
            correct_count: 0,
            time_remaining: time_limit,
            time_limit,
            phase: QuizPhase::InProgress,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.selected_answers.len()
    }

    #[must_use]
    pub fn selected_answers(&self) -> &[Option<usize>] {
        &self.selected_answers
    }

    #[must_use]
    pub fn selected_answer(&self, question: usize) -> Option<usize> {
        self.selected_answers.get(question).copied().flatten()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selected_answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.current_index + 1 < self.question_count()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.current_index > 0
    }

    /// Score of the recorded answers. Meaningful at any phase; the UI only
    /// shows it once the session is finished.
    #[must_use]
    pub fn result(&self) -> QuizResult {
        QuizResult::new(
            self.correct_count,
            self.answered_count(),
            self.question_count(),
            self.time_limit - self.time_remaining,
        )
    }

    /// Applies one event. The state is never left partially updated.
    pub fn apply(&mut self, bank: &QuestionBank, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Restart => {
                *self = Self::new(bank.len(), self.time_limit);
                Transition::Restarted
            }
            _ if self.is_finished() => Transition::Ignored,
            SessionEvent::Next => {
                if !self.can_go_next() {
                    return Transition::Ignored;
                }
                self.current_index += 1;
                Transition::Updated
            }
            SessionEvent::Previous => {
                if !self.can_go_prev() {
                    return Transition::Ignored;
                }
                self.current_index -= 1;
                Transition::Updated
            }
            SessionEvent::Select { question, option } => self.select(bank, question, option),
            SessionEvent::Finish => {
                self.phase = QuizPhase::Finished;
                Transition::Finished
            }
            SessionEvent::Tick => {
                self.time_remaining = self.time_remaining.saturating_sub(1);
                if self.time_remaining == 0 {
                    self.phase = QuizPhase::Finished;
                    return Transition::Finished;
                }
                Transition::Updated
            }
        }
    }

    fn select(&mut self, bank: &QuestionBank, question: usize, option: usize) -> Transition {
        let valid = question < self.selected_answers.len()
            && bank.get(question).is_some_and(|q| q.has_option(option));
        if !valid {
            return Transition::Ignored;
        }
        if self.selected_answers[question] == Some(option) {
            return Transition::Ignored;
        }
        self.selected_answers[question] = Some(option);
        self.recount(bank);
        Transition::Updated
    }

    fn recount(&mut self, bank: &QuestionBank) {
        self.correct_count = self
            .selected_answers
            .iter()
            .zip(bank)
            .filter(|(answer, question)| answer.is_some_and(|a| question.is_correct(a)))
            .count();
    }
}

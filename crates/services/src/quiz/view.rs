use quiz_core::QuizConfig;
use quiz_core::model::{Question, QuestionBank, QuizResult, SessionState};
use quiz_core::time::{format_countdown, is_low_time};

/// Which half of the widget is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Question,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position shown to the user.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    fn from_question(question: &Question, index: usize, total: usize, selected: Option<usize>) -> Self {
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(idx, text)| OptionView {
                index: idx,
                text: text.clone(),
                selected: selected == Some(idx),
            })
            .collect();
        Self {
            number: index + 1,
            total,
            text: question.text().to_string(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    /// `mm:ss`
    pub label: String,
    pub low_time: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub score: u32,
    pub score_label: String,
    pub message: &'static str,
    pub details: String,
    pub unanswered: usize,
    pub time_spent_label: String,
}

impl ResultView {
    fn from_result(result: &QuizResult) -> Self {
        Self {
            score: result.score(),
            score_label: format!("{}%", result.score()),
            message: result.message(),
            details: result.details(),
            unanswered: result.unanswered(),
            time_spent_label: format_countdown(result.time_spent_secs()),
        }
    }
}

/// Everything the presentation layer needs to draw the quiz.
///
/// Derived from session state only; rendering it has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub screen: Screen,
    pub question: QuestionView,
    pub correct_count: usize,
    /// `(current_index + 1) / question_count`, in `0.0..=1.0`.
    pub progress: f64,
    pub timer: TimerView,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub result: Option<ResultView>,
}

impl QuizView {
    #[must_use]
    pub fn render(bank: &QuestionBank, state: &SessionState, config: &QuizConfig) -> Self {
        let index = state.current_index();
        let total = state.question_count();
        let question = bank
            .get(index)
            .map(|q| QuestionView::from_question(q, index, total, state.selected_answer(index)))
            .unwrap_or_default();

        let progress = if total == 0 {
            0.0
        } else {
            // Question counts are tiny; the conversion is exact.
            #[allow(clippy::cast_precision_loss)]
            let fraction = (index + 1) as f64 / total as f64;
            fraction
        };

        let (screen, result) = if state.is_finished() {
            (Screen::Results, Some(ResultView::from_result(&state.result())))
        } else {
            (Screen::Question, None)
        };

        Self {
            screen,
            question,
            correct_count: state.correct_count(),
            progress,
            timer: TimerView {
                label: format_countdown(state.time_remaining()),
                low_time: is_low_time(state.time_remaining(), config.low_time_threshold_secs()),
            },
            can_go_prev: state.can_go_prev(),
            can_go_next: state.can_go_next(),
            result,
        }
    }

    /// Progress as a CSS width, e.g. `33.3%`.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{:.1}%", self.progress * 100.0)
    }
}

//
// ─── SCORE TIER ───────────────────────────────────────────────────────────────
//

/// Feedback bucket for a final percentage score.
///
/// Thresholds are closed lower bounds evaluated top-down:
/// - `Excellent`: 90 and above
/// - `Good`: 70 to 89
/// - `Fair`: 50 to 69
/// - `Retry`: below 50
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Retry,
}

impl ScoreTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Excellent,
            70.. => Self::Good,
            50.. => Self::Fair,
            _ => Self::Retry,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Отличный результат! Вы настоящий эксперт!",
            Self::Good => "Хороший результат! Вы хорошо разбираетесь в теме.",
            Self::Fair => "Неплохо! Но есть над чем поработать.",
            Self::Retry => "Попробуйте еще раз! Вы можете лучше!",
        }
    }
}

//
// ─── QUIZ RESULT ──────────────────────────────────────────────────────────────
//

/// Final score of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    correct: usize,
    answered: usize,
    total: usize,
    score: u32,
    tier: ScoreTier,
    time_spent_secs: u32,
}

impl QuizResult {
    /// Computes the rounded percentage and tier.
    ///
    /// A zero `total` scores 0 rather than dividing by zero.
    #[must_use]
    pub fn new(correct: usize, answered: usize, total: usize, time_spent_secs: u32) -> Self {
        let score = percentage(correct, total);
        Self {
            correct,
            answered,
            total,
            score,
            tier: ScoreTier::from_score(score),
            time_spent_secs,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage in `0..=100`, rounded half up.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        self.tier
    }

    #[must_use]
    pub fn time_spent_secs(&self) -> u32 {
        self.time_spent_secs
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }

    /// "correct out of total" line shown under the score.
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "Вы ответили правильно на {} из {} вопросов",
            self.correct, self.total
        )
    }
}

fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    // (2c * 100 + t) / 2t == round(c / t * 100) with halves rounding up.
    let rounded = (correct * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_closed_below() {
        assert_eq!(ScoreTier::from_score(100), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(90), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(89), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(70), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(69), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(50), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(49), ScoreTier::Retry);
        assert_eq!(ScoreTier::from_score(0), ScoreTier::Retry);
    }

    #[test]
    fn score_rounds_like_percentages_on_screen() {
        assert_eq!(QuizResult::new(9, 9, 9, 0).score(), 100);
        assert_eq!(QuizResult::new(5, 5, 9, 0).score(), 56);
        assert_eq!(QuizResult::new(3, 3, 9, 0).score(), 33);
        assert_eq!(QuizResult::new(1, 1, 8, 0).score(), 13);
        assert_eq!(QuizResult::new(1, 1, 200, 0).score(), 1);
        assert_eq!(QuizResult::new(0, 0, 9, 0).score(), 0);
    }

    #[test]
    fn zero_total_scores_zero() {
        let result = QuizResult::new(0, 0, 0, 0);
        assert_eq!(result.score(), 0);
        assert_eq!(result.tier(), ScoreTier::Retry);
    }

    #[test]
    fn result_reports_details_and_unanswered() {
        let result = QuizResult::new(5, 6, 9, 125);
        assert_eq!(result.tier(), ScoreTier::Fair);
        assert_eq!(result.message(), "Неплохо! Но есть над чем поработать.");
        assert_eq!(result.details(), "Вы ответили правильно на 5 из 9 вопросов");
        assert_eq!(result.unanswered(), 3);
        assert_eq!(result.time_spent_secs(), 125);
    }
}

mod quiz;
mod results;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::{QuizPage, QuizScreen};
pub use results::ResultsPanel;

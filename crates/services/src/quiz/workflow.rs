use quiz_core::model::QuizResult;
use tokio::sync::mpsc::UnboundedReceiver;

use super::controller::{QuizController, QuizPresenter};
use super::event::QuizEvent;
use super::ticker::Ticker;

/// Applies events to the controller one at a time until the channel closes.
pub async fn drive<T, P>(controller: &mut QuizController<T, P>, events: &mut UnboundedReceiver<QuizEvent>)
where
    T: Ticker,
    P: QuizPresenter,
{
    while let Some(event) = events.recv().await {
        controller.handle(event);
    }
    tracing::debug!("quiz event channel closed");
}

/// Applies events until the session is finished, by request or by timeout.
///
/// Returns `None` if the channel closes before that happens.
pub async fn drive_until_finished<T, P>(
    controller: &mut QuizController<T, P>,
    events: &mut UnboundedReceiver<QuizEvent>,
) -> Option<QuizResult>
where
    T: Ticker,
    P: QuizPresenter,
{
    while !controller.state().is_finished() {
        let event = events.recv().await?;
        controller.handle(event);
    }
    Some(controller.state().result())
}

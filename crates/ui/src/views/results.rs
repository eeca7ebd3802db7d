use dioxus::prelude::*;
use services::QuizEvent;
use services::quiz::ResultView;

use crate::vm::QuizEvents;

#[component]
pub fn ResultsPanel(result: ResultView, total: usize, events: QuizEvents) -> Element {
    let score_label = result.score_label.clone();
    let message = result.message;
    let details = result.details.clone();
    let unanswered = result.unanswered;
    let time_spent = result.time_spent_label.clone();

    rsx! {
        div { class: "results-container", id: "results-container",
            h2 { class: "results-title", "Результаты теста" }
            div { class: "final-score", id: "final-score", "{score_label}" }
            p { class: "score-text", id: "score-text", "{message}" }
            p { class: "result-details", id: "result-details", "{details}" }
            if unanswered > 0 {
                p { class: "result-note", "Без ответа осталось {unanswered} из {total}" }
            }
            p { class: "result-note", "Затраченное время: {time_spent}" }
            button {
                class: "btn btn-primary",
                id: "restart-btn",
                r#type: "button",
                onclick: move |_| events.send(QuizEvent::Restart),
                "Пройти тест заново"
            }
        }
    }
}

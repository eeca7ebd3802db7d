use dioxus::prelude::*;
use services::{IntervalTicker, QuizEvent, QuizView, Screen};
use tokio::sync::mpsc;

use crate::context::AppContext;
use crate::views::results::ResultsPanel;
use crate::vm::{QuizEvents, intent_for_key, option_label};

/// The quiz page: owns the controller task and renders whatever view it last
/// produced.
#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let mut view = use_signal(|| ctx.services().initial_view());

    let events = use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = IntervalTicker::new(ctx.runtime(), tx.clone());
        let presenter = move |next: &QuizView| view.set(next.clone());
        let mut controller = ctx.services().controller(ticker, presenter);

        // The task owns the controller; dropping the page drops the task, which
        // drops the ticker and stops the countdown. Starting here keeps the
        // presenter's signal writes out of the render pass.
        spawn(async move {
            controller.start();
            services::quiz::drive(&mut controller, &mut rx).await;
        });
        QuizEvents::new(tx)
    });

    let current = view.read().clone();
    rsx! {
        QuizScreen { view: current, events }
    }
}

/// Stateless rendering of one `QuizView`.
#[component]
pub fn QuizScreen(view: QuizView, events: QuizEvents) -> Element {
    let screen = view.screen;
    let option_count = view.question.options.len();
    let on_key = {
        let events = events.clone();
        move |evt: KeyboardEvent| {
            if let Some(event) = intent_for_key(&evt.data.key(), screen, option_count) {
                evt.prevent_default();
                events.send(event);
            }
        }
    };

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            QuizHeader { view: view.clone() }
            match (screen, view.result.clone()) {
                (Screen::Results, Some(result)) => rsx! {
                    ResultsPanel { result, total: view.question.total, events: events.clone() }
                },
                _ => rsx! {
                    QuestionPanel { view: view.clone(), events: events.clone() }
                },
            }
        }
    }
}

#[component]
fn QuizHeader(view: QuizView) -> Element {
    let timer_class = if view.timer.low_time {
        "timer timer--low"
    } else {
        "timer"
    };
    let timer_label = view.timer.label.clone();
    let progress_width = view.progress_width();
    let correct_count = view.correct_count;
    let total = view.question.total;

    rsx! {
        header { class: "quiz-header",
            h1 { class: "quiz-title", "Тест по веб-разработке" }
            div { class: "quiz-stats",
                span { class: "quiz-stat", id: "correct-count",
                    "Правильных ответов: {correct_count} из {total}"
                }
                span { class: "{timer_class}", id: "timer", "{timer_label}" }
            }
            div { class: "progress-bar",
                div { class: "progress-fill", id: "progress-fill", style: "width: {progress_width}" }
            }
        }
    }
}

#[component]
fn QuestionPanel(view: QuizView, events: QuizEvents) -> Element {
    let question = view.question.clone();
    let number = question.number;
    let total = question.total;
    let text = question.text.clone();
    let can_go_prev = view.can_go_prev;
    let can_go_next = view.can_go_next;
    let on_prev = {
        let events = events.clone();
        move |_: MouseEvent| events.send(QuizEvent::Previous)
    };
    let on_next = {
        let events = events.clone();
        move |_: MouseEvent| events.send(QuizEvent::Next)
    };
    let on_finish = {
        let events = events.clone();
        move |_: MouseEvent| events.send(QuizEvent::Finish)
    };

    rsx! {
        div { class: "question-container",
            p { class: "question-number", id: "current-question", "Вопрос {number} из {total}" }
            h2 { class: "question-text", id: "question-text", "{text}" }
            div { class: "options", id: "options-container",
                for option in question.options {
                    OptionRow {
                        key: "{option.index}",
                        index: option.index,
                        text: option.text,
                        selected: option.selected,
                        events: events.clone(),
                    }
                }
            }
        }
        div { class: "controls",
            button {
                class: "btn btn-secondary",
                id: "prev-btn",
                r#type: "button",
                disabled: !can_go_prev,
                onclick: on_prev,
                "Назад"
            }
            button {
                class: "btn btn-secondary",
                id: "next-btn",
                r#type: "button",
                disabled: !can_go_next,
                onclick: on_next,
                "Далее"
            }
            button {
                class: "btn btn-primary",
                id: "finish-btn",
                r#type: "button",
                onclick: on_finish,
                "Завершить тест"
            }
        }
    }
}

#[component]
fn OptionRow(index: usize, text: String, selected: bool, events: QuizEvents) -> Element {
    let class = if selected { "option selected" } else { "option" };
    let label = option_label(index);

    rsx! {
        div {
            class: "{class}",
            role: "button",
            onclick: move |_| events.send(QuizEvent::SelectOption(index)),
            div { class: "option-label", "{label}" }
            div { class: "option-text", "{text}" }
        }
    }
}

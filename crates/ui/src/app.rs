use dioxus::prelude::*;

use crate::views::QuizPage;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Тест по веб-разработке" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    FatalError { details: format!("{errors:?}") }
                },
                QuizPage {}
            }
        }
    }
}

#[component]
fn FatalError(details: String) -> Element {
    rsx! {
        div { class: "fatal",
            h1 { "Что-то пошло не так" }
            pre { "{details}" }
        }
    }
}

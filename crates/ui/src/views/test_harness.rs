use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::QuizConfig;
use quiz_core::model::QuestionBank;
use services::{AppServices, ManualTicker, QuizController, QuizEvent, QuizView, RecordingPresenter};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizPage, QuizScreen};
use crate::views::quiz::QuizScreenProps;
use crate::vm::QuizEvents;

pub type HarnessController = QuizController<ManualTicker, RecordingPresenter>;

/// Controller over the bundled bank with a hand-driven ticker.
pub fn started_controller() -> HarnessController {
    let services = AppServices::new(
        QuestionBank::builtin().expect("bundled bank"),
        QuizConfig::default(),
    );
    let mut controller = services.controller(ManualTicker::new(), RecordingPresenter::new());
    controller.start();
    controller
}

pub fn answer_correctly(controller: &mut HarnessController, count: usize) {
    let answers: Vec<usize> = controller
        .bank()
        .iter()
        .take(count)
        .map(|question| question.correct_index())
        .collect();
    for (idx, option) in answers.into_iter().enumerate() {
        controller.select_option(idx, option);
    }
}

pub struct ScreenHarness {
    pub dom: VirtualDom,
    pub events: mpsc::UnboundedReceiver<QuizEvent>,
}

impl ScreenHarness {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn render_screen(view: QuizView) -> ScreenHarness {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut dom = VirtualDom::new_with_props(
        QuizScreen,
        QuizScreenProps {
            view,
            events: QuizEvents::new(tx),
        },
    );
    dom.rebuild_in_place();
    ScreenHarness { dom, events: rx }
}

struct TestApp {
    services: AppServices,
    runtime: Handle,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn runtime(&self) -> Handle {
        self.runtime.clone()
    }
}

/// Builds the full page over the bundled bank. Must be called inside a tokio
/// runtime; the controller task is spawned but not polled.
pub fn render_page() -> VirtualDom {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services: AppServices::builtin(QuizConfig::default()).expect("bundled bank"),
        runtime: Handle::current(),
    });
    let mut dom = VirtualDom::new(QuizPage).with_root_context(build_app_context(&app));
    dom.rebuild_in_place();
    dom
}

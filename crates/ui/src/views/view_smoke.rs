use super::test_harness::{answer_correctly, render_page, render_screen, started_controller};

#[test]
fn question_screen_renders_first_question() {
    let controller = started_controller();
    let mut harness = render_screen(controller.view());
    let html = harness.render();
    assert!(harness.events.try_recv().is_err(), "rendering raised an event");

    assert!(html.contains("Вопрос 1 из 9"), "missing counter in {html}");
    assert!(
        html.contains("Какой язык используется для стилизации веб-страниц?"),
        "missing question in {html}"
    );
    assert!(html.contains("CSS"), "missing option in {html}");
    assert!(html.contains("10:00"), "missing timer in {html}");
    assert!(html.contains("Завершить тест"), "missing finish button in {html}");
    assert!(!html.contains("option selected"), "unexpected selection in {html}");
    assert!(!html.contains("results-container"), "results shown early in {html}");
}

#[test]
fn selected_option_is_marked() {
    let mut controller = started_controller();
    controller.select_option(0, 1);
    let html = render_screen(controller.view()).render();

    assert_eq!(html.matches("option selected").count(), 1, "in {html}");
    assert!(
        html.contains("Правильных ответов: 1 из 9"),
        "missing correct count in {html}"
    );
}

#[test]
fn low_time_switches_timer_class() {
    let mut controller = started_controller();
    for _ in 0..541 {
        controller.tick();
    }
    let html = render_screen(controller.view()).render();

    assert!(html.contains("00:59"), "missing timer label in {html}");
    assert!(html.contains("timer timer--low"), "missing warning class in {html}");
}

#[test]
fn results_screen_renders_score_and_tier() {
    let mut controller = started_controller();
    answer_correctly(&mut controller, 5);
    controller.finish();
    let html = render_screen(controller.view()).render();

    assert!(html.contains("56%"), "missing score in {html}");
    assert!(
        html.contains("Неплохо! Но есть над чем поработать."),
        "missing tier message in {html}"
    );
    assert!(
        html.contains("Вы ответили правильно на 5 из 9 вопросов"),
        "missing details in {html}"
    );
    assert!(html.contains("Без ответа осталось 4 из 9"), "missing note in {html}");
    assert!(html.contains("Пройти тест заново"), "missing restart in {html}");
    assert!(!html.contains("options-container"), "question still shown in {html}");
}

#[test]
fn results_after_timeout_use_retry_tier() {
    let mut controller = started_controller();
    answer_correctly(&mut controller, 3);
    for _ in 0..600 {
        controller.tick();
    }
    let html = render_screen(controller.view()).render();

    assert!(html.contains("33%"), "missing score in {html}");
    assert!(
        html.contains("Попробуйте еще раз! Вы можете лучше!"),
        "missing tier message in {html}"
    );
    assert!(html.contains("Затраченное время: 10:00"), "missing time in {html}");
}

#[tokio::test]
async fn page_shows_first_question_before_controller_runs() {
    let dom = render_page();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Вопрос 1 из 9"), "missing counter in {html}");
    assert!(html.contains("10:00"), "missing timer in {html}");
}

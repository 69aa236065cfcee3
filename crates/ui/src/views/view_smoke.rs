use std::sync::Arc;

use quiz_core::model::OptionIndex;
use quiz_core::time::fixed_clock;
use services::{QuizService, bundled_question_set};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_slot};
use crate::context::SnapshotSlot;
use crate::vm::QuizIntent;

fn completed_snapshot() -> String {
    let mut quiz = QuizService::new(Arc::new(bundled_question_set().unwrap()), fixed_clock());
    loop {
        quiz.select(OptionIndex::First).unwrap();
        if quiz.next().is_err() {
            break;
        }
    }
    quiz.snapshot_json().unwrap()
}

#[test]
fn greeting_view_smoke_renders_begin_button() {
    let mut harness = setup_view_harness(ViewKind::Greeting);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("How self-educated are you?"), "missing title in {html}");
    assert!(html.contains("Begin test"), "missing begin button in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 18"), "missing number in {html}");
    assert!(
        html.contains("How often do you read books that are not required for work or study?"),
        "missing question text in {html}"
    );
    assert!(html.contains("Every week"), "missing option in {html}");
    assert!(html.contains("quiz-next"), "missing next in {html}");
    assert!(!html.contains("quiz-previous"), "previous shown in {html}");
    assert!(!html.contains("quiz-finish"), "finish shown in {html}");
    assert!(!html.contains("aria-checked=\"true\""), "option preselected in {html}");
}

#[test]
fn quiz_view_smoke_resumes_from_snapshot() {
    let slot = SnapshotSlot::default();
    slot.store(completed_snapshot());

    let mut harness = setup_view_harness_with_slot(ViewKind::Quiz, slot);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 18 of 18"), "missing number in {html}");
    assert!(html.contains("18 of 18 answered"), "missing progress in {html}");
    assert!(html.contains("quiz-previous"), "missing previous in {html}");
    assert!(html.contains("quiz-finish"), "missing finish in {html}");
    assert!(!html.contains("quiz-next"), "next shown in {html}");
    assert!(html.contains("aria-checked=\"true\""), "no checked option in {html}");
    assert!(harness.slot.load().is_some());
}

#[test]
fn quiz_view_smoke_discards_corrupt_snapshot() {
    let slot = SnapshotSlot::default();
    slot.store("{\"index\": 3, \"answers\": [[true, true, false]]}".to_string());

    let mut harness = setup_view_harness_with_slot(ViewKind::Quiz, slot);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(harness.questions.len(), 18);
    assert!(html.contains("Question 1 of 18"), "missing number in {html}");
    assert!(html.contains("0 of 18 answered"), "missing progress in {html}");
}

#[test]
fn quiz_intents_write_the_snapshot_for_the_next_build() {
    let mut harness = setup_view_harness(ViewKind::QuizIntents);
    harness.rebuild();
    assert!(harness.slot.load().is_none());

    harness.send(QuizIntent::Select(OptionIndex::Second));
    harness.send(QuizIntent::Next);

    let saved = harness.slot.load().expect("snapshot stored");
    assert!(saved.contains("\"index\":1"), "unexpected snapshot {saved}");

    let mut rebuilt = setup_view_harness_with_slot(ViewKind::Quiz, harness.slot.clone());
    rebuilt.rebuild();
    let html = rebuilt.render();
    assert!(html.contains("Question 2 of 18"), "missing number in {html}");
    assert!(html.contains("1 of 18 answered"), "missing progress in {html}");
}

#[test]
fn confirmed_restart_empties_the_slot() {
    let slot = SnapshotSlot::default();
    slot.store(completed_snapshot());

    let mut harness = setup_view_harness_with_slot(ViewKind::QuizIntents, slot);
    harness.rebuild();

    harness.send(QuizIntent::Finish);
    assert!(harness.slot.load().is_some());

    harness.send(QuizIntent::ConfirmRestart);
    assert!(harness.slot.load().is_none());

    let mut rebuilt = setup_view_harness_with_slot(ViewKind::Quiz, harness.slot.clone());
    rebuilt.rebuild();
    let html = rebuilt.render();
    assert!(html.contains("0 of 18 answered"), "old answers came back in {html}");
}

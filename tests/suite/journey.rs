//! Keyboard-driven journeys through the full input and render path.

use std::time::Duration;

use crossterm::event::KeyCode;

use sevenfold_engine::interaction::Interaction;
use sevenfold_engine::{Screen, StageId, StageStatus, Step};

use crate::common::{Harness, stage};

#[test]
fn whole_journey_with_the_keyboard() {
    let mut h = Harness::new();
    h.enter_first_stage();
    h.finish_stage_with_keys();

    for id in 2..=7 {
        assert_eq!(h.app.screen(), Screen::Map);
        assert_eq!(h.app.map_cursor(), stage(id));
        h.finish_next_stage();
    }

    assert_eq!(h.app.screen(), Screen::Completion);
    assert_eq!(h.app.journey().unlocked(), StageId::LAST);

    h.press(KeyCode::Enter);
    assert_eq!(h.app.screen(), Screen::Onboarding);
    assert_eq!(h.app.journey().unlocked(), StageId::FIRST);
}

#[test]
fn escape_leaves_a_stage_without_completing_it() {
    let mut h = Harness::new();
    h.enter_first_stage();
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char(' '));
    h.wait(Duration::from_millis(600));

    h.press(KeyCode::Esc);
    assert_eq!(h.app.screen(), Screen::Map);
    assert!(h.app.runner().is_none());
    assert_eq!(h.app.journey().status(StageId::FIRST), StageStatus::Current);

    // Returning starts the visit over.
    h.press(KeyCode::Enter);
    assert_eq!(h.step(), Some(Step::Intro));
}

#[test]
fn locked_digits_do_nothing_on_the_map() {
    let mut h = Harness::new();
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char('4'));
    assert_eq!(h.app.screen(), Screen::Map);

    // The cursor may rest on a locked node, but opening it does nothing.
    h.press(KeyCode::Down);
    assert_eq!(h.app.map_cursor(), stage(2));
    h.press(KeyCode::Enter);
    assert_eq!(h.app.screen(), Screen::Map);

    h.press(KeyCode::Char('1'));
    assert_eq!(h.app.screen(), Screen::Stage(StageId::FIRST));
}

#[test]
fn replaying_a_finished_stage_keeps_later_ones_unlocked() {
    let mut h = Harness::new();
    h.enter_first_stage();
    h.finish_stage_with_keys();
    h.finish_next_stage();
    assert_eq!(h.app.journey().unlocked(), stage(3));

    h.press(KeyCode::Char('1'));
    h.finish_stage_with_keys();
    assert_eq!(h.app.journey().unlocked(), stage(3));
    assert_eq!(h.app.map_cursor(), stage(3));
}

#[test]
fn q_is_text_while_writing_an_intention() {
    let mut h = Harness::new();
    h.enter_first_stage();
    h.finish_stage_with_keys();
    for _ in 2..=4 {
        h.finish_next_stage();
    }
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    assert!(h.app.captures_text());

    assert!(!h.press(KeyCode::Char('q')));
    assert!(!h.app.should_quit());
    h.press(KeyCode::Backspace);
    h.type_text("quiet");
    match h.app.runner().map(sevenfold_engine::StageRunner::interaction) {
        Some(Interaction::Intention(intention)) => assert_eq!(intention.text(), "quiet"),
        other => panic!("expected intention, got {other:?}"),
    }

    h.press(KeyCode::Enter);
    assert!(!h.app.captures_text());
    assert!(h.press(KeyCode::Char('q')));
}

#[test]
fn released_hold_starts_over() {
    let mut h = Harness::new();
    h.enter_first_stage();
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char(' '));
    h.wait(Duration::from_millis(1800));
    h.release(KeyCode::Char(' '));

    match h.app.runner().map(sevenfold_engine::StageRunner::interaction) {
        Some(Interaction::Hold(hold)) => {
            assert_eq!(hold.progress(), 0);
            assert!(!hold.is_holding());
        }
        other => panic!("expected hold, got {other:?}"),
    }
    assert_eq!(h.step(), Some(Step::Interaction));
}

#[test]
fn hold_lapses_without_release_reporting() {
    let mut h = Harness::with_releases(false);
    h.enter_first_stage();
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char(' '));
    h.wait(Duration::from_millis(1500));

    match h.app.runner().map(sevenfold_engine::StageRunner::interaction) {
        Some(Interaction::Hold(hold)) => assert!(!hold.is_holding()),
        other => panic!("expected hold, got {other:?}"),
    }
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    use crossterm::event::{Event, KeyEvent, KeyModifiers};

    let mut h = Harness::new();
    h.enter_first_stage();
    let quit = h.tracker.apply_event(
        &mut h.app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        h.now,
    );
    assert!(quit);
}

//! Mouse input against the hit regions recorded by real frames.

use std::time::Duration;

use crossterm::event::KeyCode;

use sevenfold_engine::interaction::Interaction;
use sevenfold_engine::ui::HitTarget;
use sevenfold_engine::{ReleaseItem, Screen, StageId, StageStatus, Step};

use crate::common::{Harness, stage};

fn interaction(h: &Harness) -> Interaction {
    h.app
        .runner()
        .map(|runner| runner.interaction().clone())
        .expect("stage runner")
}

/// Completes stages `1..through` with keys and opens `through` by clicking
/// its node, then its intro button.
fn open_by_clicking(through: u8) -> Harness {
    let mut h = Harness::new();
    h.click(HitTarget::Primary);
    for _ in 1..through {
        h.press(KeyCode::Enter);
        h.finish_stage_with_keys();
    }
    h.click(HitTarget::StageNode(stage(through)));
    assert_eq!(h.app.screen(), Screen::Stage(stage(through)));
    h.click(HitTarget::Primary);
    assert_eq!(h.step(), Some(Step::Interaction));
    h
}

#[test]
fn clicking_through_onboarding_and_the_map() {
    let mut h = Harness::new();
    h.click(HitTarget::Primary);
    assert_eq!(h.app.screen(), Screen::Map);

    h.click(HitTarget::StageNode(stage(3)));
    assert_eq!(h.app.screen(), Screen::Map);

    h.click(HitTarget::StageNode(StageId::FIRST));
    assert_eq!(h.app.screen(), Screen::Stage(StageId::FIRST));
}

#[test]
fn holding_the_mouse_fills_the_first_law() {
    let mut h = open_by_clicking(1);
    let spot = h.spot(HitTarget::Focus);
    h.mouse_down(HitTarget::Focus);
    h.wait(Duration::from_secs(4));
    assert_eq!(h.step(), Some(Step::Summary));

    // The release lands on whatever the summary drew there; it must not act.
    h.mouse_up_at(spot);
    assert_eq!(h.step(), Some(Step::Summary));

    h.click(HitTarget::Secondary);
    assert_eq!(h.app.screen(), Screen::Map);
    assert_eq!(h.app.journey().status(StageId::FIRST), StageStatus::Current);
}

#[test]
fn short_mouse_hold_resets() {
    let mut h = open_by_clicking(1);
    h.mouse_down(HitTarget::Focus);
    h.wait(Duration::from_millis(900));
    let spot = h.spot(HitTarget::Focus);
    h.mouse_up_at(spot);

    match interaction(&h) {
        Interaction::Hold(hold) => assert_eq!(hold.progress(), 0),
        other => panic!("expected hold, got {}", other.kind()),
    }
}

#[test]
fn swiping_left_completes_the_exchange() {
    let mut h = open_by_clicking(2);

    // Rightward and short swipes are ignored.
    h.drag(HitTarget::Focus, 12, 0);
    h.drag(HitTarget::Focus, -3, 0);
    match interaction(&h) {
        Interaction::Exchange(exchange) => assert_eq!(exchange.exchanges(), 0),
        other => panic!("expected exchange, got {}", other.kind()),
    }

    h.drag(HitTarget::Focus, -12, 0);
    h.wait(Duration::from_secs(2));
    assert!(h.text().contains("Exchange 1/3"), "{}", h.text());

    for _ in 0..2 {
        h.drag(HitTarget::Focus, -12, 0);
        h.wait(Duration::from_secs(2));
    }
    assert!(h.text().contains("The cycle is complete"));

    h.click(HitTarget::Primary);
    assert_eq!(h.step(), Some(Step::Summary));
    h.click(HitTarget::Primary);
    assert_eq!(h.app.screen(), Screen::Map);
    assert_eq!(h.app.journey().unlocked(), stage(3));
}

#[test]
fn dragging_the_seed_down_plants_it() {
    let mut h = open_by_clicking(3);
    h.drag(HitTarget::Focus, 0, 1);
    match interaction(&h) {
        Interaction::Planting(planting) => assert!(!planting.is_planted()),
        other => panic!("expected planting, got {}", other.kind()),
    }

    h.drag(HitTarget::Focus, 0, 5);
    h.wait(Duration::from_secs(3));
    assert!(h.text().contains("What you sow, you reap"));
    assert!(h.app.runner().is_some_and(|runner| runner.can_continue()));
}

#[test]
fn clicking_the_board_pushes_the_pieces() {
    let mut h = open_by_clicking(4);
    h.click(HitTarget::Focus);
    h.wait(Duration::from_secs(2));
    assert!(h.text().contains("Effortless harmony"));
    assert!(h.app.runner().is_some_and(|runner| runner.can_continue()));
}

#[test]
fn dragging_items_away_frees_them() {
    let mut h = open_by_clicking(6);

    h.drag(HitTarget::Item(ReleaseItem::Weight), 2, 1);
    match interaction(&h) {
        Interaction::Detachment(detachment) => assert_eq!(detachment.released_count(), 0),
        other => panic!("expected detachment, got {}", other.kind()),
    }

    h.drag(HitTarget::Item(ReleaseItem::Weight), 0, -6);
    assert!(h.app.hit_regions().region_of(HitTarget::Item(ReleaseItem::Weight)).is_none());
    assert!(h.text().contains("1/3 released"));

    h.drag(HitTarget::Item(ReleaseItem::Attachment), -10, 0);
    h.drag(HitTarget::Item(ReleaseItem::Control), 10, 0);
    assert!(h.text().contains("Freedom achieved"));
    assert_eq!(h.step(), Some(Step::Interaction));
}

#[test]
fn clicking_answers_reveals_a_purpose() {
    let mut h = open_by_clicking(7);

    // Next is drawn but inert until a choice is made.
    h.click(HitTarget::Primary);
    assert!(h.text().contains("Question 1 of 2"));

    h.click(HitTarget::Choice(0));
    h.click(HitTarget::Primary);
    assert!(h.text().contains("Question 2 of 2"));
    h.click(HitTarget::Choice(3));
    h.click(HitTarget::Primary);

    assert_eq!(h.step(), Some(Step::Summary));
    assert!(h.text().contains("Your dharma is to craft"), "{}", h.text());

    h.click(HitTarget::Primary);
    assert_eq!(h.app.screen(), Screen::Completion);
    h.click(HitTarget::Primary);
    assert_eq!(h.app.screen(), Screen::Onboarding);
}

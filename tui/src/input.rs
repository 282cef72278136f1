//! Input handling for the Sevenfold TUI.
//!
//! Terminal events are read on a blocking thread and drained once per frame.
//! Keys and mouse gestures are translated into engine [`Intent`]s here; the
//! engine never sees a crossterm type.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::debug;

use sevenfold_engine::interaction::{
    PLANT_MIN_ROWS, RELEASE_MIN_ROWS, ReleaseItem, SWIPE_MIN_COLUMNS,
};
use sevenfold_engine::ui::HitTarget;
use sevenfold_engine::{App, Displacement, Gesture, Intent, Interaction, Screen, StageId, Step};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Terminals without key-release reporting only send presses, repeating after
/// the OS key-repeat delay. A held key is assumed released once presses stop
/// arriving for this long.
const HOLD_INITIAL_LEASE: Duration = Duration::from_millis(1100);
const HOLD_REPEAT_LEASE: Duration = Duration::from_millis(180);

/// Pointer travel, in cells, below which a press-release pair is a click.
const CLICK_SLOP: i32 = 1;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// What is keeping stage 1's hold alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoldSource {
    Key { lease_until: Instant },
    Mouse,
}

/// Pure timing mechanism for a held key.
///
/// Reports whether the hold has lapsed. Owns no intent logic; that lives in
/// [`GestureTracker`].
#[derive(Debug)]
struct HoldDetector {
    source: Option<HoldSource>,
    /// Set once the terminal has been seen to report key releases.
    release_events: bool,
}

impl HoldDetector {
    fn new(release_events: bool) -> Self {
        Self {
            source: None,
            release_events,
        }
    }

    fn is_holding(&self) -> bool {
        self.source.is_some()
    }

    fn press_key(&mut self, now: Instant) {
        self.source = Some(HoldSource::Key {
            lease_until: now + HOLD_INITIAL_LEASE,
        });
    }

    fn repeat_key(&mut self, now: Instant) {
        if let Some(HoldSource::Key { lease_until }) = self.source.as_mut() {
            *lease_until = now + HOLD_REPEAT_LEASE;
        }
    }

    fn press_mouse(&mut self) {
        self.source = Some(HoldSource::Mouse);
    }

    fn release(&mut self) -> bool {
        self.source.take().is_some()
    }

    /// True once when a key hold's lease runs out with no release reported.
    fn lapsed(&mut self, now: Instant) -> bool {
        match self.source {
            Some(HoldSource::Key { lease_until }) if !self.release_events && now >= lease_until => {
                self.source = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    column: u16,
    row: u16,
    target: Option<HitTarget>,
}

/// Turns raw terminal events into intents, tracking the state that spans
/// several events (a held key, a mouse drag).
#[derive(Debug)]
pub struct GestureTracker {
    hold: HoldDetector,
    drag: Option<DragStart>,
}

impl GestureTracker {
    /// `release_events` says whether the terminal reports key releases.
    #[must_use]
    pub fn new(release_events: bool) -> Self {
        Self {
            hold: HoldDetector::new(release_events),
            drag: None,
        }
    }

    /// Release a key hold whose presses have stopped arriving.
    pub fn expire(&mut self, app: &mut App, now: Instant) {
        if self.hold.lapsed(now) {
            debug!("Hold lease lapsed; treating key as released");
            app.dispatch(Intent::Gesture(Gesture::HoldEnd));
        }
    }

    /// Apply one terminal event. Returns whether the app should quit.
    pub fn apply_event(&mut self, app: &mut App, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => self.handle_key(app, key, now),
            Event::Mouse(mouse) => self.handle_mouse(app, mouse),
            Event::FocusLost => {
                if self.hold.release() {
                    app.dispatch(Intent::Gesture(Gesture::HoldEnd));
                }
                self.drag = None;
            }
            _ => {}
        }
        app.should_quit()
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            self.hold.release_events = true;
            if key.code == KeyCode::Char(' ') && self.hold.release() {
                app.dispatch(Intent::Gesture(Gesture::HoldEnd));
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.dispatch(Intent::Quit);
            return;
        }

        if app.captures_text() {
            handle_text_entry(app, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                app.dispatch(Intent::Quit);
                return;
            }
            KeyCode::Esc => {
                app.dispatch(Intent::BackToMap);
                return;
            }
            _ => {}
        }

        let pressed = key.kind == KeyEventKind::Press;
        match app.screen() {
            Screen::Onboarding => {
                if pressed && is_confirm(key.code) {
                    app.dispatch(Intent::Confirm);
                }
            }
            Screen::Map if pressed => handle_map_key(app, key),
            Screen::Map => {}
            Screen::Stage(_) => self.handle_stage_key(app, key, now),
            Screen::Completion => {
                if pressed && (is_confirm(key.code) || key.code == KeyCode::Char('h')) {
                    app.dispatch(Intent::ReturnHome);
                }
            }
        }
    }

    fn handle_stage_key(&mut self, app: &mut App, key: KeyEvent, now: Instant) {
        let Some(runner) = app.runner() else {
            return;
        };
        if runner.step() != Step::Interaction {
            // A hold that just completed the stage keeps repeating until the
            // key comes up; those presses must not confirm the summary.
            if key.code == KeyCode::Char(' ') && self.hold.is_holding() {
                self.hold.repeat_key(now);
                return;
            }
            if is_confirm(key.code) && key.kind == KeyEventKind::Press {
                app.dispatch(Intent::Confirm);
            }
            return;
        }

        let gesture = match (runner.interaction(), key.code) {
            (Interaction::Hold(hold), KeyCode::Char(' ')) => {
                let engine_holding = hold.is_holding();
                self.hold_key(app, key.kind, now, engine_holding);
                return;
            }
            (Interaction::Exchange(_), KeyCode::Left) => Some(Gesture::Swipe(Displacement::new(
                -2 * SWIPE_MIN_COLUMNS,
                0,
            ))),
            (Interaction::Planting(_), KeyCode::Down) => Some(Gesture::DropSeed(
                Displacement::new(0, 2 * PLANT_MIN_ROWS),
            )),
            (Interaction::Assembly(_), KeyCode::Char('p')) => Some(Gesture::Push),
            (Interaction::Detachment(_), KeyCode::Char(c @ '1'..='3')) => {
                release_item_by_digit(c)
            }
            (Interaction::Quiz(_), KeyCode::Char(c @ '1'..='4')) => {
                Some(Gesture::SelectChoice(digit(c).saturating_sub(1)))
            }
            (Interaction::Quiz(quiz), KeyCode::Up | KeyCode::Char('k')) => {
                Some(Gesture::SelectChoice(cycle_choice(quiz.selected(), false)))
            }
            (Interaction::Quiz(quiz), KeyCode::Down | KeyCode::Char('j')) => {
                Some(Gesture::SelectChoice(cycle_choice(quiz.selected(), true)))
            }
            _ => None,
        };

        match gesture {
            Some(gesture) => {
                app.dispatch(Intent::Gesture(gesture));
            }
            None if is_confirm(key.code) && key.kind == KeyEventKind::Press => {
                app.dispatch(Intent::Confirm);
            }
            None => {}
        }
    }

    fn hold_key(&mut self, app: &mut App, kind: KeyEventKind, now: Instant, engine_holding: bool) {
        if self.hold.is_holding() && engine_holding {
            // Without release reporting, a repeat arrives as another press.
            self.hold.repeat_key(now);
            return;
        }
        if kind == KeyEventKind::Press && app.dispatch(Intent::Gesture(Gesture::HoldStart)) {
            self.hold.press_key(now);
        }
    }

    fn handle_mouse(&mut self, app: &mut App, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = app.hit_regions().hit(mouse.column, mouse.row);
                self.drag = Some(DragStart {
                    column: mouse.column,
                    row: mouse.row,
                    target,
                });
                if target == Some(HitTarget::Focus)
                    && stage_interaction(app).is_some_and(|i| matches!(i, Interaction::Hold(_)))
                    && app.dispatch(Intent::Gesture(Gesture::HoldStart))
                {
                    self.hold.press_mouse();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.hold.source == Some(HoldSource::Mouse) {
                    self.hold.release();
                    app.dispatch(Intent::Gesture(Gesture::HoldEnd));
                }
                if let Some(start) = self.drag.take() {
                    let moved = Displacement::new(
                        i32::from(mouse.column) - i32::from(start.column),
                        i32::from(mouse.row) - i32::from(start.row),
                    );
                    finish_pointer(app, start.target, moved);
                }
            }
            _ => {}
        }
    }
}

/// Map a completed press-release pair onto whatever it started on.
fn finish_pointer(app: &mut App, target: Option<HitTarget>, moved: Displacement) {
    let Some(target) = target else {
        return;
    };
    let is_click = moved.dx.abs() <= CLICK_SLOP && moved.dy.abs() <= CLICK_SLOP;

    let intent = match target {
        HitTarget::Focus => match stage_interaction(app) {
            Some(Interaction::Exchange(_)) => Some(Intent::Gesture(Gesture::Swipe(moved))),
            Some(Interaction::Planting(_)) => Some(Intent::Gesture(Gesture::DropSeed(moved))),
            Some(Interaction::Assembly(_)) if is_click => Some(Intent::Gesture(Gesture::Push)),
            _ => None,
        },
        HitTarget::Item(item) => Some(Intent::Gesture(Gesture::DragItem(item, moved))),
        _ if !is_click => None,
        HitTarget::StageNode(id) => Some(Intent::SelectStage(id)),
        HitTarget::Choice(index) => Some(Intent::Gesture(Gesture::SelectChoice(index))),
        HitTarget::Primary => Some(Intent::Confirm),
        HitTarget::Secondary => Some(Intent::BackToMap),
    };

    if let Some(intent) = intent {
        app.dispatch(intent);
    }
}

fn stage_interaction(app: &App) -> Option<&Interaction> {
    app.runner()
        .filter(|runner| runner.step() == Step::Interaction)
        .map(sevenfold_engine::StageRunner::interaction)
}

fn handle_text_entry(app: &mut App, key: KeyEvent) {
    let gesture = match key.code {
        KeyCode::Esc => {
            app.dispatch(Intent::BackToMap);
            return;
        }
        KeyCode::Enter => {
            app.dispatch(Intent::Confirm);
            return;
        }
        KeyCode::Backspace => Gesture::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Gesture::InsertChar(c)
        }
        _ => return,
    };
    app.dispatch(Intent::Gesture(gesture));
}

fn handle_map_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => Intent::MapCursorPrev,
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => Intent::MapCursorNext,
        KeyCode::Char(c @ '1'..='7') => match StageId::new(digit(c) as u8) {
            Ok(id) => Intent::SelectStage(id),
            Err(_) => return,
        },
        code if is_confirm(code) => Intent::Confirm,
        _ => return,
    };
    app.dispatch(intent);
}

fn is_confirm(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

fn digit(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize)
}

/// Digits release the item as if it had been flung upward.
fn release_item_by_digit(c: char) -> Option<Gesture> {
    let item = ReleaseItem::from_id(digit(c) as u8)?;
    Some(Gesture::DragItem(
        item,
        Displacement::new(0, -2 * RELEASE_MIN_ROWS),
    ))
}

fn cycle_choice(selected: Option<usize>, forward: bool) -> usize {
    const CHOICES: usize = 4;
    match (selected, forward) {
        (None, true) => 0,
        (None, false) => CHOICES - 1,
        (Some(i), true) => (i + 1) % CHOICES,
        (Some(i), false) => (i + CHOICES - 1) % CHOICES,
    }
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    gestures: GestureTracker,
}

impl InputPump {
    /// `release_events` says whether keyboard enhancement was enabled, so
    /// key releases will be reported.
    #[must_use]
    pub fn new(release_events: bool) -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            gestures: GestureTracker::new(release_events),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a blocked send on the input thread returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into the app. Returns whether the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if input.gestures.apply_event(app, ev, Instant::now()) {
            return Ok(true);
        }
        processed += 1;
    }
    input.gestures.expire(app, Instant::now());
    Ok(app.should_quit())
}

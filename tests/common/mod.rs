//! Shared test utilities and fixtures
//!
//! Drives the app through the same path the binary does: terminal events go
//! through a [`GestureTracker`], and frames are drawn with the real TUI so
//! hit regions exist for pointer input.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use sevenfold_engine::ui::{HitTarget, UiOptions};
use sevenfold_engine::{App, Screen, StageId, Step};
use sevenfold_tui::GestureTracker;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 34;

pub fn stage(id: u8) -> StageId {
    StageId::new(id).expect("valid stage id")
}

/// An app with transitions off so layouts are stable between frames.
pub fn quiet_app() -> App {
    App::new(UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    })
}

pub struct Harness {
    pub app: App,
    pub tracker: GestureTracker,
    pub terminal: Terminal<TestBackend>,
    pub now: Instant,
}

impl Harness {
    /// A harness whose terminal reports key releases.
    pub fn new() -> Self {
        Self::with_releases(true)
    }

    pub fn with_releases(release_events: bool) -> Self {
        let mut harness = Self {
            app: quiet_app(),
            tracker: GestureTracker::new(release_events),
            terminal: Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal"),
            now: Instant::now(),
        };
        harness.draw();
        harness
    }

    pub fn draw(&mut self) {
        let app = &mut self.app;
        self.terminal
            .draw(|frame| sevenfold_tui::draw(frame, app))
            .expect("draw");
    }

    /// Screen text, one line per row.
    pub fn text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn send(&mut self, event: Event) -> bool {
        let quit = self.tracker.apply_event(&mut self.app, event, self.now);
        self.draw();
        quit
    }

    pub fn press(&mut self, code: KeyCode) -> bool {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn release(&mut self, code: KeyCode) -> bool {
        self.send(Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )))
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Let time pass: the stage clock, then any input lease.
    pub fn wait(&mut self, delta: Duration) {
        self.now += delta;
        self.app.advance(delta);
        self.tracker.expire(&mut self.app, self.now);
        self.draw();
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.send(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Center cell of the region registered for `target` in the last frame.
    pub fn spot(&self, target: HitTarget) -> (u16, u16) {
        let region = self
            .app
            .hit_regions()
            .region_of(target)
            .unwrap_or_else(|| panic!("no region for {target:?}\n{}", self.text()));
        (region.x + region.width / 2, region.y + region.height / 2)
    }

    pub fn mouse_down(&mut self, target: HitTarget) {
        let (column, row) = self.spot(target);
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    pub fn mouse_up_at(&mut self, (column, row): (u16, u16)) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    pub fn click(&mut self, target: HitTarget) {
        let (column, row) = self.spot(target);
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press on `target`, release `(dx, dy)` cells away, clamped to the screen.
    pub fn drag(&mut self, target: HitTarget, dx: i32, dy: i32) {
        let (column, row) = self.spot(target);
        let end_column = (i32::from(column) + dx).clamp(0, i32::from(WIDTH) - 1) as u16;
        let end_row = (i32::from(row) + dy).clamp(0, i32::from(HEIGHT) - 1) as u16;
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), end_column, end_row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), end_column, end_row);
    }

    pub fn step(&self) -> Option<Step> {
        self.app.runner().map(sevenfold_engine::StageRunner::step)
    }

    /// From onboarding, open the map and enter stage 1.
    pub fn enter_first_stage(&mut self) {
        self.press(KeyCode::Enter);
        assert_eq!(self.app.screen(), Screen::Map);
        self.press(KeyCode::Enter);
        assert_eq!(self.app.screen(), Screen::Stage(StageId::FIRST));
    }
}

impl Harness {
    /// Drives the open stage from intro to its summary with the keyboard.
    pub fn reach_summary_with_keys(&mut self) {
        let Screen::Stage(id) = self.app.screen() else {
            panic!("not on a stage: {:?}", self.app.screen());
        };
        self.press(KeyCode::Enter);
        assert_eq!(self.step(), Some(Step::Interaction), "stage {id}");
        match id.value() {
            1 => {
                self.press(KeyCode::Char(' '));
                self.wait(Duration::from_secs(4));
                self.release(KeyCode::Char(' '));
            }
            2 => {
                for _ in 0..3 {
                    self.press(KeyCode::Left);
                    self.wait(Duration::from_secs(2));
                }
            }
            3 => {
                self.press(KeyCode::Down);
                self.wait(Duration::from_secs(3));
            }
            4 => {
                self.press(KeyCode::Char('p'));
                self.wait(Duration::from_secs(2));
            }
            5 => {
                self.type_text("to listen more");
                self.press(KeyCode::Enter);
            }
            6 => {
                for c in ['1', '2', '3'] {
                    self.press(KeyCode::Char(c));
                }
            }
            _ => {
                for c in ['2', '3'] {
                    self.press(KeyCode::Char(c));
                    self.press(KeyCode::Enter);
                }
            }
        }
        if self.step() == Some(Step::Interaction) {
            self.press(KeyCode::Enter);
        }
        assert_eq!(self.step(), Some(Step::Summary), "stage {id}\n{}", self.text());
    }

    /// Drives the open stage to completion with the keyboard.
    pub fn finish_stage_with_keys(&mut self) {
        self.reach_summary_with_keys();
        self.press(KeyCode::Enter);
    }

    /// From the map, open the cursor's stage and finish it.
    pub fn finish_next_stage(&mut self) {
        assert_eq!(self.app.screen(), Screen::Map);
        self.press(KeyCode::Enter);
        self.finish_stage_with_keys();
    }
}

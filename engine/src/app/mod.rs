//! The `App` state machine: journey progression plus the active stage visit.
//!
//! The TUI reads state from [`App`] and forwards user actions back as
//! [`Intent`]s. The journey only moves through its own pure transitions and
//! the stage runner only reports back through its two exits, so the engine
//! never edits either one from the outside.
//!
//! A runner exists exactly while a stage screen is showing. Every path that
//! leaves a stage screen (completion, back-to-map, return home) takes the
//! runner out and consumes it, which drops its pending timers with it.

use std::time::{Duration, Instant};

use sevenfold_types::interaction::{Gesture, Interaction};
use sevenfold_types::ui::{AnimPhase, HitRegions, ScreenTransition, UiOptions, ViewState};
use sevenfold_types::{JourneyState, Screen, StageExit, StageId, StageRunner, Step};

use crate::config::ConfigError;

/// A presentation-independent user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Begin,
    SelectStage(StageId),
    MapCursorPrev,
    MapCursorNext,
    /// The screen's primary action, whatever it is right now.
    Confirm,
    BeginInteraction,
    Continue,
    Complete,
    BackToMap,
    ReturnHome,
    Quit,
    Gesture(Gesture),
}

#[derive(Debug)]
pub struct App {
    journey: JourneyState,
    runner: Option<StageRunner>,
    view: ViewState,
    map_cursor: StageId,
    notice: Option<String>,
    should_quit: bool,
    tick: usize,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        let mut app = Self {
            journey: JourneyState::new(),
            runner: None,
            view: ViewState::new(ui_options),
            map_cursor: StageId::FIRST,
            notice: None,
            should_quit: false,
            tick: 0,
        };
        app.start_transition(ScreenTransition::entering(Screen::Onboarding));
        app
    }

    /// Surface a configuration problem to the user once, on the first screen.
    pub fn report_config_error(&mut self, err: &ConfigError) {
        let path = err.path().display().to_string();
        // TOML errors carry a multi-line source excerpt; the notice is one row.
        let (verb, source) = match err {
            ConfigError::Parse { source, .. } => ("parse", source.to_string()),
            ConfigError::Read { source, .. } => ("read", source.to_string()),
        };
        let detail = source.lines().next().unwrap_or_default().trim();
        let message = format!("Couldn't {verb} {path} ({detail}). Using defaults.");
        self.notice = Some(message);
    }

    pub fn journey(&self) -> &JourneyState {
        &self.journey
    }

    pub fn screen(&self) -> Screen {
        self.journey.screen()
    }

    pub fn runner(&self) -> Option<&StageRunner> {
        self.runner.as_ref()
    }

    pub fn map_cursor(&self) -> StageId {
        self.map_cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn hit_regions(&self) -> &HitRegions {
        &self.view.hit_regions
    }

    /// Cleared and refilled by the renderer on every draw.
    pub fn hit_regions_mut(&mut self) -> &mut HitRegions {
        &mut self.view.hit_regions
    }

    pub fn transition(&self) -> Option<&ScreenTransition> {
        self.view.transition.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Whether typed characters should go to the intention field rather than
    /// being read as shortcuts.
    pub fn captures_text(&self) -> bool {
        self.runner.as_ref().is_some_and(|runner| {
            runner.step() == Step::Interaction && runner.interaction().captures_text()
        })
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    /// Move every clock forward: the active stage's timers and the entrance
    /// effect.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(runner) = self.runner.as_mut() {
            let before = runner.step();
            runner.advance(delta);
            let after = runner.step();
            if before != after {
                tracing::info!(
                    stage = %runner.stage(),
                    step = after.name(),
                    "Stage advanced on its own"
                );
                self.start_transition(ScreenTransition::step());
            }
        }

        if let Some(effect) = self.view.transition.as_mut() {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.view.transition = None;
            }
        }
    }

    /// Apply one intent. Returns whether anything changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let changed = match intent {
            Intent::Begin => self.apply_journey(JourneyState::begin),
            Intent::SelectStage(id) => self.select_stage(id),
            Intent::MapCursorPrev => self.move_cursor(StageId::prev),
            Intent::MapCursorNext => self.move_cursor(StageId::next),
            Intent::Confirm => self.confirm(),
            Intent::BeginInteraction => self.begin_interaction(),
            Intent::Continue => self.continue_to_summary(),
            Intent::Complete => self.complete_stage(),
            Intent::BackToMap => self.back_to_map(),
            Intent::ReturnHome => self.return_home(),
            Intent::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
                true
            }
            Intent::Gesture(gesture) => self.apply_gesture(gesture),
        };
        if !changed {
            tracing::debug!(?intent, screen = self.screen().name(), "Intent ignored");
        }
        changed
    }

    fn confirm(&mut self) -> bool {
        match self.screen() {
            Screen::Onboarding => self.apply_journey(JourneyState::begin),
            Screen::Map => self.select_stage(self.map_cursor),
            Screen::Completion => self.return_home(),
            Screen::Stage(_) => {
                let Some(runner) = self.runner.as_ref() else {
                    return false;
                };
                match runner.step() {
                    Step::Intro => self.begin_interaction(),
                    Step::Summary => self.complete_stage(),
                    Step::Interaction if runner.can_continue() => self.continue_to_summary(),
                    Step::Interaction => match primary_gesture(runner.interaction()) {
                        Some(gesture) => self.apply_gesture(gesture),
                        None => false,
                    },
                }
            }
        }
    }

    fn select_stage(&mut self, id: StageId) -> bool {
        if self.screen() == Screen::Map && self.journey.is_enterable(id) {
            self.map_cursor = id;
        }
        self.apply_journey(|journey| journey.select_stage(id))
    }

    fn move_cursor(&mut self, step: fn(StageId) -> Option<StageId>) -> bool {
        if self.screen() != Screen::Map {
            return false;
        }
        match step(self.map_cursor) {
            Some(next) => {
                self.map_cursor = next;
                true
            }
            None => false,
        }
    }

    fn begin_interaction(&mut self) -> bool {
        let began = self
            .runner
            .as_mut()
            .is_some_and(StageRunner::begin_interaction);
        if began {
            self.step_changed();
        }
        began
    }

    fn continue_to_summary(&mut self) -> bool {
        let continued = self
            .runner
            .as_mut()
            .is_some_and(StageRunner::continue_to_summary);
        if continued {
            self.step_changed();
        }
        continued
    }

    fn apply_gesture(&mut self, gesture: Gesture) -> bool {
        let Some(runner) = self.runner.as_mut() else {
            return false;
        };
        let before = runner.step();
        let changed = runner.apply(gesture);
        if runner.step() != before {
            self.step_changed();
        }
        changed
    }

    fn complete_stage(&mut self) -> bool {
        let Some(runner) = self.runner.take() else {
            return false;
        };
        match runner.complete() {
            Ok(exit) => self.finish_visit(exit),
            Err(runner) => {
                self.runner = Some(runner);
                false
            }
        }
    }

    fn back_to_map(&mut self) -> bool {
        match self.runner.take() {
            Some(runner) => self.finish_visit(runner.back_to_map()),
            None => false,
        }
    }

    fn return_home(&mut self) -> bool {
        if let Some(runner) = self.runner.take() {
            let exit = runner.back_to_map();
            tracing::debug!(?exit, "Stage visit discarded by return home");
        }
        let changed = self.apply_journey(JourneyState::return_home);
        self.map_cursor = StageId::FIRST;
        changed
    }

    fn finish_visit(&mut self, exit: StageExit) -> bool {
        let changed = match exit {
            StageExit::Completed(stage) => {
                tracing::info!(%stage, "Stage completed");
                self.apply_journey(JourneyState::stage_completed)
            }
            StageExit::BackToMap(stage) => {
                tracing::info!(%stage, "Left stage for the map");
                self.apply_journey(JourneyState::back_to_map)
            }
        };
        self.map_cursor = self.journey.unlocked();
        changed
    }

    /// Run a journey transition and keep the runner and view in step with it.
    fn apply_journey(&mut self, transition: impl FnOnce(JourneyState) -> JourneyState) -> bool {
        let before = self.journey;
        self.journey = transition(before);
        if self.journey == before {
            return false;
        }

        let screen = self.journey.screen();
        tracing::info!(
            from = before.screen().name(),
            to = screen.name(),
            unlocked = %self.journey.unlocked(),
            "Screen changed"
        );

        self.runner = screen.active_stage().map(StageRunner::new);
        self.notice = None;
        self.start_transition(ScreenTransition::entering(screen));
        true
    }

    fn step_changed(&mut self) {
        if let Some(runner) = self.runner.as_ref() {
            tracing::debug!(stage = %runner.stage(), step = runner.step().name(), "Stage step");
        }
        self.start_transition(ScreenTransition::step());
    }

    fn start_transition(&mut self, effect: ScreenTransition) {
        self.view.transition = if self.view.ui_options.reduced_motion {
            None
        } else {
            Some(effect)
        };
    }
}

/// What the confirm key does on an interaction step whose continue is not
/// yet live.
fn primary_gesture(interaction: &Interaction) -> Option<Gesture> {
    match interaction {
        Interaction::Assembly(assembly) if !assembly.is_assembling() => Some(Gesture::Push),
        Interaction::Intention(intention) if intention.can_release() => {
            Some(Gesture::ReleaseIntention)
        }
        Interaction::Quiz(quiz) if quiz.can_advance() => Some(Gesture::NextQuestion),
        _ => None,
    }
}

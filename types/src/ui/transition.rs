//! Cross-fade played when the screen or a stage step changes.
//!
//! Purely decorative: input is routed to the new screen from the first frame.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fade in from black.
    FadeIn,
    /// Fade in while settling from a slight zoom.
    Settle,
}

#[derive(Debug, Clone)]
pub struct ScreenTransition {
    kind: TransitionKind,
    timer: EffectTimer,
}

impl ScreenTransition {
    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            kind: TransitionKind::FadeIn,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn settle(duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Settle,
            timer: EffectTimer::new(duration),
        }
    }

    /// The entrance for a newly shown screen.
    #[must_use]
    pub fn entering(screen: Screen) -> Self {
        match screen {
            Screen::Onboarding => Self::fade_in(Duration::from_millis(500)),
            Screen::Map => Self::settle(Duration::from_millis(500)),
            Screen::Stage(_) => Self::settle(Duration::from_millis(600)),
            Screen::Completion => Self::settle(Duration::from_millis(1000)),
        }
    }

    /// The entrance for a new step within a stage.
    #[must_use]
    pub fn step() -> Self {
        Self::fade_in(Duration::from_millis(400))
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}

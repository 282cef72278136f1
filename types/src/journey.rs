//! Journey progression: which screen is showing and how far the user may go.
//!
//! `JourneyState` is a small `Copy` value. Every transition takes the state by
//! value and returns the next one; calls from a screen where the transition is
//! not valid return the state unchanged.

use crate::StageId;

/// Top-level screen. The active stage lives inside `Stage`, so a stage id
/// exists exactly when a stage screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Onboarding,
    Map,
    Stage(StageId),
    Completion,
}

impl Screen {
    #[must_use]
    pub fn active_stage(self) -> Option<StageId> {
        match self {
            Screen::Stage(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Map => "map",
            Screen::Stage(_) => "stage",
            Screen::Completion => "completion",
        }
    }
}

/// How a stage on the map presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Locked,
    /// Enterable and not yet passed.
    Current,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyState {
    screen: Screen,
    unlocked: StageId,
}

impl Default for JourneyState {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            screen: Screen::Onboarding,
            unlocked: StageId::FIRST,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn active_stage(&self) -> Option<StageId> {
        self.screen.active_stage()
    }

    /// Highest stage the user may enter.
    #[must_use]
    pub fn unlocked(&self) -> StageId {
        self.unlocked
    }

    #[must_use]
    pub fn is_enterable(&self, id: StageId) -> bool {
        id <= self.unlocked
    }

    #[must_use]
    pub fn status(&self, id: StageId) -> StageStatus {
        if id < self.unlocked {
            StageStatus::Completed
        } else if id == self.unlocked {
            StageStatus::Current
        } else {
            StageStatus::Locked
        }
    }

    #[must_use]
    pub fn begin(self) -> Self {
        match self.screen {
            Screen::Onboarding => Self {
                screen: Screen::Map,
                ..self
            },
            _ => self,
        }
    }

    /// Enter a stage from the map. Stages past the unlock boundary are ignored.
    #[must_use]
    pub fn select_stage(self, id: StageId) -> Self {
        match self.screen {
            Screen::Map if self.is_enterable(id) => Self {
                screen: Screen::Stage(id),
                ..self
            },
            _ => self,
        }
    }

    #[must_use]
    pub fn stage_completed(self) -> Self {
        match self.screen {
            Screen::Stage(id) => match id.next() {
                Some(next) => Self {
                    screen: Screen::Map,
                    unlocked: self.unlocked.max(next),
                },
                None => Self {
                    screen: Screen::Completion,
                    ..self
                },
            },
            _ => self,
        }
    }

    #[must_use]
    pub fn back_to_map(self) -> Self {
        match self.screen {
            Screen::Stage(_) => Self {
                screen: Screen::Map,
                ..self
            },
            _ => self,
        }
    }

    #[must_use]
    pub fn return_home(self) -> Self {
        Self::new()
    }
}

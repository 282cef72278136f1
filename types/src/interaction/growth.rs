//! Law 3: plant a seed and watch it grow.

use std::time::Duration;

use super::{Displacement, TimerAction, Timers};

/// Delays after planting at which the stem, leaves and flower appear.
pub const GROWTH_SCHEDULE: [Duration; 3] = [
    Duration::from_millis(500),
    Duration::from_millis(1500),
    Duration::from_millis(2500),
];
pub const FULL_GROWTH: u8 = 3;
/// Downward travel, in rows, that carries the seed into the soil.
pub const PLANT_MIN_ROWS: i32 = 3;

#[derive(Debug, Clone, Default)]
pub struct Planting {
    planted: bool,
    growth: u8,
}

impl Planting {
    #[must_use]
    pub fn is_planted(&self) -> bool {
        self.planted
    }

    #[must_use]
    pub fn growth(&self) -> u8 {
        self.growth
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.growth >= FULL_GROWTH
    }

    /// A drop that falls short snaps the seed back. The seed can be planted once.
    pub(crate) fn drop_seed(&mut self, drag: Displacement, timers: &mut Timers) -> bool {
        if self.planted || drag.dy < PLANT_MIN_ROWS {
            return false;
        }
        self.planted = true;
        for delay in GROWTH_SCHEDULE {
            timers.schedule(delay, TimerAction::Grow);
        }
        true
    }

    pub(crate) fn on_grow(&mut self) {
        self.growth = (self.growth + 1).min(FULL_GROWTH);
    }
}

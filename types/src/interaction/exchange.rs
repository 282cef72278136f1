//! Law 2: give the orb away and wait for it to come back.

use std::time::Duration;

use super::{Displacement, TimerAction, Timers};

pub const GIVE_DELAY: Duration = Duration::from_millis(800);
pub const RETURN_DELAY: Duration = Duration::from_millis(1000);
pub const EXCHANGES_REQUIRED: u32 = 3;
/// Leftward travel, in columns, that counts as a swipe.
pub const SWIPE_MIN_COLUMNS: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallPosition {
    #[default]
    Center,
    Given,
    Received,
}

#[derive(Debug, Clone, Default)]
pub struct Exchange {
    ball: BallPosition,
    exchanges: u32,
}

impl Exchange {
    #[must_use]
    pub fn ball(&self) -> BallPosition {
        self.ball
    }

    #[must_use]
    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.exchanges >= EXCHANGES_REQUIRED
    }

    /// A round trip already in flight cannot be interrupted.
    pub(crate) fn swipe(&mut self, drag: Displacement, timers: &mut Timers) -> bool {
        if drag.dx > -SWIPE_MIN_COLUMNS || self.ball != BallPosition::Center || self.is_complete()
        {
            return false;
        }
        self.ball = BallPosition::Given;
        timers.schedule(GIVE_DELAY, TimerAction::ExchangeArrive);
        true
    }

    pub(crate) fn on_arrive(&mut self, timers: &mut Timers) {
        if self.ball == BallPosition::Given {
            self.ball = BallPosition::Received;
            timers.schedule(RETURN_DELAY, TimerAction::ExchangeSettle);
        }
    }

    pub(crate) fn on_settle(&mut self) {
        if self.ball == BallPosition::Received {
            self.ball = BallPosition::Center;
            self.exchanges += 1;
        }
    }
}

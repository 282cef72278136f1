//! Law 1: touch and hold until the field fills.

use std::time::Duration;

use super::Timers;
use super::TimerAction;
use crate::schedule::TaskId;

pub const HOLD_TICK: Duration = Duration::from_millis(60);
pub const HOLD_STEP: u8 = 2;
pub const HOLD_FULL: u8 = 100;

#[derive(Debug, Clone, Default)]
pub struct Hold {
    progress: u8,
    /// Pending tick while held.
    tick: Option<TaskId>,
}

impl Hold {
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.tick.is_some()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= HOLD_FULL
    }

    pub(crate) fn start(&mut self, timers: &mut Timers) -> bool {
        if self.is_complete() || self.is_holding() {
            return false;
        }
        self.tick = Some(timers.schedule(HOLD_TICK, TimerAction::HoldTick));
        true
    }

    /// Letting go early empties the field. Once full, release changes nothing.
    pub(crate) fn release(&mut self, timers: &mut Timers) -> bool {
        if self.is_complete() {
            return false;
        }
        if let Some(tick) = self.tick.take() {
            timers.cancel(tick);
        }
        let changed = self.progress != 0;
        self.progress = 0;
        changed
    }

    pub(crate) fn on_tick(&mut self, timers: &mut Timers) {
        if self.tick.take().is_none() {
            return;
        }
        self.progress = self.progress.saturating_add(HOLD_STEP).min(HOLD_FULL);
        if !self.is_complete() {
            self.tick = Some(timers.schedule(HOLD_TICK, TimerAction::HoldTick));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HOLD_FULL, HOLD_TICK, Hold};
    use crate::interaction::{TimerAction, Timers};

    fn run_ticks(hold: &mut Hold, timers: &mut Timers, ticks: u32) {
        let until = timers.now() + HOLD_TICK * ticks;
        while let Some(action) = timers.pop_due(until) {
            assert_eq!(action, TimerAction::HoldTick);
            hold.on_tick(timers);
        }
        timers.settle(until);
    }

    #[test]
    fn fills_in_fifty_ticks() {
        let mut timers = Timers::new();
        let mut hold = Hold::default();
        assert!(hold.start(&mut timers));

        run_ticks(&mut hold, &mut timers, 49);
        assert_eq!(hold.progress(), 98);
        assert!(!hold.is_complete());

        run_ticks(&mut hold, &mut timers, 1);
        assert_eq!(hold.progress(), HOLD_FULL);
        assert!(hold.is_complete());
        assert!(!hold.is_holding());
        assert!(timers.is_idle());
    }

    #[test]
    fn early_release_resets_and_stops_ticking() {
        let mut timers = Timers::new();
        let mut hold = Hold::default();
        hold.start(&mut timers);
        run_ticks(&mut hold, &mut timers, 10);
        assert_eq!(hold.progress(), 20);

        assert!(hold.release(&mut timers));
        assert_eq!(hold.progress(), 0);
        assert!(timers.is_idle());

        run_ticks(&mut hold, &mut timers, 10);
        assert_eq!(hold.progress(), 0);
    }

    #[test]
    fn release_after_full_keeps_progress() {
        let mut timers = Timers::new();
        let mut hold = Hold::default();
        hold.start(&mut timers);
        run_ticks(&mut hold, &mut timers, 60);

        assert!(!hold.release(&mut timers));
        assert_eq!(hold.progress(), HOLD_FULL);
        assert!(!hold.start(&mut timers));
    }

    #[test]
    fn repeated_start_does_not_double_tick() {
        let mut timers = Timers::new();
        let mut hold = Hold::default();
        assert!(hold.start(&mut timers));
        assert!(!hold.start(&mut timers));
        assert_eq!(timers.pending(), 1);
    }
}

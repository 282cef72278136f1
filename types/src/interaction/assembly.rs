//! Law 4: one gentle push and the pieces fall into place.

use std::time::Duration;

use super::{TimerAction, Timers};

pub const PIECE_COUNT: u8 = 4;
pub const PIECE_STAGGER: Duration = Duration::from_millis(200);
pub const PIECE_TRAVEL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Default)]
pub struct Assembly {
    assembling: bool,
    settled: u8,
}

impl Assembly {
    #[must_use]
    pub fn is_assembling(&self) -> bool {
        self.assembling
    }

    /// Pieces that have reached the centre (decorative; does not gate).
    #[must_use]
    pub fn settled(&self) -> u8 {
        self.settled
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assembling
    }

    pub(crate) fn push(&mut self, timers: &mut Timers) -> bool {
        if self.assembling {
            return false;
        }
        self.assembling = true;
        for piece in 0..u32::from(PIECE_COUNT) {
            timers.schedule(
                PIECE_STAGGER * piece + PIECE_TRAVEL,
                TimerAction::SettlePiece,
            );
        }
        true
    }

    pub(crate) fn on_settle(&mut self) {
        self.settled = (self.settled + 1).min(PIECE_COUNT);
    }
}

//! Core domain types for Sevenfold.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Journey progression, the per-stage runner, the seven interaction machines and the
//! timers that drive them all live here so they can be exercised without a terminal.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod content;
pub mod interaction;
pub mod ui;

mod ids;
mod journey;
mod schedule;
mod stage;

pub use ids::{InvalidStageId, StageId};
pub use interaction::{Displacement, Gesture, Interaction, ReleaseItem, TimerAction, Timers};
pub use journey::{JourneyState, Screen, StageStatus};
pub use schedule::{Scheduler, TaskId};
pub use stage::{StageExit, StageRunner, Step};

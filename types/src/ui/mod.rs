//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod transition;
mod view_state;

pub use animation::AnimPhase;
pub use transition::{ScreenTransition, TransitionKind};
pub use view_state::{HitRegions, HitTarget, Region, UiOptions, ViewState};

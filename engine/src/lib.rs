//! Core engine for Sevenfold - journey orchestration without TUI dependencies.
//!
//! The TUI layer (`sevenfold_tui`) reads state from [`App`] and forwards input
//! back to it as [`Intent`]s. No rendering logic lives in this crate.

mod app;
mod config;

pub use app::{App, Intent};
pub use config::{
    ASCII_ENV, AppConfig, ConfigError, REDUCED_MOTION_ENV, SevenfoldConfig, config_path,
    ui_options,
};

pub use sevenfold_types::{
    Displacement, Gesture, Interaction, JourneyState, ReleaseItem, Screen, StageExit, StageId,
    StageRunner, StageStatus, Step, content, interaction,
};

pub mod ui {
    pub use sevenfold_types::ui::*;
}

//! View state for rendering.
//!
//! Groups everything the renderer owns between frames, separate from the
//! journey and stage state that drive behavior.

use std::time::Instant;

use super::ScreenTransition;
use crate::StageId;
use crate::interaction::ReleaseItem;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// A rectangle in terminal cells. Mirrors the renderer's rect type without
/// pulling it into this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Something the pointer can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    StageNode(StageId),
    /// The law's draggable or holdable object.
    Focus,
    Item(ReleaseItem),
    Choice(usize),
    Primary,
    Secondary,
}

/// Clickable areas recorded by the last draw.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    regions: Vec<(Region, HitTarget)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: Region, target: HitTarget) {
        if region.width > 0 && region.height > 0 {
            self.regions.push((region, target));
        }
    }

    /// Topmost target under the cell; later pushes draw over earlier ones.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(column, row))
            .map(|(_, target)| *target)
    }

    #[must_use]
    pub fn region_of(&self, target: HitTarget) -> Option<Region> {
        self.regions
            .iter()
            .rev()
            .find(|(_, t)| *t == target)
            .map(|(region, _)| *region)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[derive(Debug)]
pub struct ViewState {
    /// UI options (theme, motion, glyphs).
    pub ui_options: UiOptions,
    /// Entrance effect for the current screen or step, if still playing.
    pub transition: Option<ScreenTransition>,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
    pub hit_regions: HitRegions,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            ui_options: UiOptions::default(),
            transition: None,
            last_frame: Instant::now(),
            hit_regions: HitRegions::default(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}

//! Law 6: drag each attachment away until nothing holds on.

use std::collections::BTreeSet;

use super::Displacement;

/// Travel past which a dragged item floats away instead of snapping back.
/// Rows count double since terminal cells are about twice as tall as wide.
pub const RELEASE_MIN_COLUMNS: i32 = 8;
pub const RELEASE_MIN_ROWS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseItem {
    Attachment,
    Weight,
    Control,
}

impl ReleaseItem {
    pub const ALL: [ReleaseItem; 3] = [
        ReleaseItem::Attachment,
        ReleaseItem::Weight,
        ReleaseItem::Control,
    ];

    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            ReleaseItem::Attachment => 1,
            ReleaseItem::Weight => 2,
            ReleaseItem::Control => 3,
        }
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReleaseItem::Attachment => "Attachment",
            ReleaseItem::Weight => "Weight",
            ReleaseItem::Control => "Control",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Detachment {
    released: BTreeSet<ReleaseItem>,
}

impl Detachment {
    #[must_use]
    pub fn released_count(&self) -> usize {
        self.released.len()
    }

    #[must_use]
    pub fn is_released(&self, item: ReleaseItem) -> bool {
        self.released.contains(&item)
    }

    /// Items still on screen, in display order.
    pub fn remaining(&self) -> impl Iterator<Item = ReleaseItem> + '_ {
        ReleaseItem::ALL
            .into_iter()
            .filter(|item| !self.released.contains(item))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.released.len() == ReleaseItem::ALL.len()
    }

    pub(crate) fn drag(&mut self, item: ReleaseItem, drag: Displacement) -> bool {
        if self.released.contains(&item) {
            return false;
        }
        let far_enough = drag.dx.abs() > RELEASE_MIN_COLUMNS || drag.dy.abs() > RELEASE_MIN_ROWS;
        far_enough && self.released.insert(item)
    }
}

use std::fmt;

use thiserror::Error;

/// Identifier of one of the seven laws, always within `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageId(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stage id {0} is outside 1..=7")]
pub struct InvalidStageId(pub u8);

impl StageId {
    pub const FIRST: StageId = StageId(1);
    pub const LAST: StageId = StageId(7);
    pub const COUNT: usize = 7;

    pub fn new(id: u8) -> Result<Self, InvalidStageId> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&id) {
            Ok(Self(id))
        } else {
            Err(InvalidStageId(id))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing per-stage tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1)).ok()
    }

    pub fn all() -> impl Iterator<Item = StageId> {
        (Self::FIRST.0..=Self::LAST.0).map(StageId)
    }
}

impl TryFrom<u8> for StageId {
    type Error = InvalidStageId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

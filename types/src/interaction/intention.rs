//! Law 5: write an intention and release it.

use unicode_segmentation::UnicodeSegmentation;

/// Longest intention the field accepts, in characters.
pub const MAX_INTENTION_CHARS: usize = 280;

#[derive(Debug, Clone, Default)]
pub struct Intention {
    text: String,
    released: bool,
}

impl Intention {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Whether the release control is live.
    #[must_use]
    pub fn can_release(&self) -> bool {
        !self.released && !self.text.trim().is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.released && !self.text.trim().is_empty()
    }

    pub(crate) fn insert_char(&mut self, c: char) -> bool {
        if self.released || c.is_control() || self.text.chars().count() >= MAX_INTENTION_CHARS {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Removes the last grapheme so combined characters go in one keystroke.
    pub(crate) fn backspace(&mut self) -> bool {
        if self.released {
            return false;
        }
        match self.text.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                self.text.truncate(start);
                true
            }
            None => false,
        }
    }

    pub(crate) fn release(&mut self) -> bool {
        if !self.can_release() {
            return false;
        }
        self.released = true;
        true
    }
}

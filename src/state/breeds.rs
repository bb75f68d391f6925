//! Breed accordion state.
//!
//! The accordion is single-open and collapsible: opening one breed closes
//! any other, and activating the open breed collapses it.

use crate::content::BREEDS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedsState {
    /// Breed under the keyboard cursor.
    pub cursor: Option<usize>,
    /// Breed whose description is expanded.
    pub expanded: Option<usize>,
}

impl BreedsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to the next breed, wrapping. Returns the new index.
    pub fn cursor_next(&mut self) -> usize {
        let next = match self.cursor {
            Some(i) => (i + 1) % BREEDS.len(),
            None => 0,
        };
        self.cursor = Some(next);
        next
    }

    /// Moves the cursor to the previous breed, wrapping. Returns the new index.
    pub fn cursor_prev(&mut self) -> usize {
        let prev = match self.cursor {
            Some(i) => (i + BREEDS.len() - 1) % BREEDS.len(),
            None => BREEDS.len() - 1,
        };
        self.cursor = Some(prev);
        prev
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= BREEDS.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_single_open() {
        let mut state = BreedsState::new();
        state.toggle(1);
        assert!(state.is_expanded(1));
        state.toggle(3);
        assert!(state.is_expanded(3));
        assert!(!state.is_expanded(1));
    }

    #[test]
    fn test_toggle_collapsible() {
        let mut state = BreedsState::new();
        state.toggle(2);
        state.toggle(2);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_toggle_out_of_range_ignored() {
        let mut state = BreedsState::new();
        state.toggle(0);
        state.toggle(10);
        assert_eq!(state.expanded, Some(0));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = BreedsState::new();
        assert_eq!(state.cursor_prev(), 4);
        assert_eq!(state.cursor_next(), 0);
        assert_eq!(state.cursor_next(), 1);
        state.clear_cursor();
        assert_eq!(state.cursor_next(), 0);
    }
}

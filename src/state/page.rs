//! Interactive page state.
//!
//! All fields initialize to fixed defaults when the view is created and only
//! change in response to user input, scroll changes or the flip timer.

use rand::Rng;

use crate::content::{Breed, BREEDS, FUN_FACTS, INITIAL_FUN_FACT, SECTIONS};
use crate::theme::Theme;

/// The scroll-to-top control shows once the offset is strictly past this.
pub const SCROLL_TOP_THRESHOLD: u32 = 300;

/// Scroll units covered by one rendered text row.
pub const SCROLL_UNITS_PER_ROW: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub fun_fact: &'static str,
    /// Set while the fact card is turning over.
    pub flipped: bool,
    pub active_section: usize,
    pub scroll_offset: u32,
    pub show_scroll_top: bool,
    pub hovered_breed: Option<&'static Breed>,
    scroll_target: Option<u32>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            theme: Theme::Light,
            fun_fact: INITIAL_FUN_FACT,
            flipped: false,
            active_section: 0,
            scroll_offset: 0,
            show_scroll_top: false,
            hovered_breed: None,
            scroll_target: None,
        }
    }

    /// Applies a stored theme preference, if there is one.
    pub fn restore_theme(&mut self, stored: Option<Theme>) {
        if let Some(theme) = stored {
            self.theme = theme;
        }
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn begin_flip(&mut self) {
        self.flipped = true;
    }

    /// Swaps in a uniformly random fact from the pool and ends the flip.
    /// Repeats of the current fact are allowed.
    pub fn complete_flip<R: Rng>(&mut self, rng: &mut R) -> &'static str {
        self.fun_fact = FUN_FACTS[rng.random_range(0..FUN_FACTS.len())];
        self.flipped = false;
        self.fun_fact
    }

    /// Highlights a nav section. Out-of-range indices are ignored.
    pub fn select_section(&mut self, index: usize) -> bool {
        if index < SECTIONS.len() {
            self.active_section = index;
            true
        } else {
            false
        }
    }

    pub fn next_section(&mut self) {
        self.active_section = (self.active_section + 1) % SECTIONS.len();
    }

    pub fn prev_section(&mut self) {
        self.active_section = (self.active_section + SECTIONS.len() - 1) % SECTIONS.len();
    }

    /// Records a new scroll offset and recomputes the scroll-to-top flag.
    pub fn on_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
        self.show_scroll_top = offset > SCROLL_TOP_THRESHOLD;
    }

    /// Scrolls by `rows`, clamped to `[0, max_offset]`. Manual scrolling
    /// interrupts a smooth scroll in progress.
    pub fn scroll_rows(&mut self, rows: i32, max_offset: u32) {
        self.scroll_target = None;
        let delta = rows.unsigned_abs() * SCROLL_UNITS_PER_ROW;
        let offset = if rows < 0 {
            self.scroll_offset.saturating_sub(delta)
        } else {
            self.scroll_offset.saturating_add(delta).min(max_offset)
        };
        self.on_scroll(offset);
    }

    /// Requests a smooth scroll back to the top of the page.
    pub fn scroll_to_top(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_target = Some(0);
        }
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Advances a smooth scroll by one frame. Returns `true` if the offset moved.
    pub fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let distance = self.scroll_offset.abs_diff(target);
        if distance == 0 {
            self.scroll_target = None;
            return false;
        }
        // Ease out: cover a third of the remaining distance, at least one row.
        let step = (distance / 3).max(SCROLL_UNITS_PER_ROW).min(distance);
        let offset = if self.scroll_offset > target {
            self.scroll_offset - step
        } else {
            self.scroll_offset + step
        };
        self.on_scroll(offset);
        if offset == target {
            self.scroll_target = None;
        }
        true
    }

    pub fn hover_breed(&mut self, index: usize) {
        self.hovered_breed = BREEDS.get(index);
    }

    pub fn leave_breed(&mut self) {
        self.hovered_breed = None;
    }
}

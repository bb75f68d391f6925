//! The page view: state plus its two side channels, the preference store
//! and the flip timer.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::flip_timer::FlipTimer;
use crate::prefs::PrefsStore;
use crate::state::{BreedsState, PageState};
use crate::theme::Theme;

#[derive(Debug)]
pub struct PageView {
    pub state: PageState,
    pub breeds: BreedsState,
    prefs: Option<PrefsStore>,
    flip_timer: FlipTimer,
}

impl PageView {
    /// Creates the view and applies the stored theme. A missing or unreadable
    /// preference leaves the default theme in place.
    pub fn initialize(prefs: Option<PrefsStore>) -> Self {
        Self::with_timer(prefs, FlipTimer::new())
    }

    pub fn with_timer(prefs: Option<PrefsStore>, flip_timer: FlipTimer) -> Self {
        let mut state = PageState::new();
        if let Some(store) = &prefs {
            match store.load_theme() {
                Ok(stored) => {
                    debug!(?stored, "Loaded theme preference");
                    state.restore_theme(stored);
                }
                Err(e) => warn!(error = %e, "Ignoring unreadable theme preference"),
            }
        }
        Self {
            state,
            breeds: BreedsState::new(),
            prefs,
            flip_timer,
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Flips the theme and persists it. Write failures are logged only.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.toggle_theme();
        if let Some(store) = &self.prefs {
            if let Err(e) = store.save_theme(theme) {
                warn!(error = %e, %theme, "Failed to persist theme preference");
            }
        }
        theme
    }

    /// Starts the flip; the new fact arrives once the timer expires.
    pub fn generate_fun_fact(&mut self) {
        self.state.begin_flip();
        self.flip_timer.schedule();
    }

    pub fn flip_pending(&self) -> bool {
        self.flip_timer.is_pending()
    }

    /// Completes the flip if its delay has elapsed. Returns `true` when a new
    /// fact was swapped in.
    pub fn poll_flip<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.flip_timer.poll_expired() {
            return false;
        }
        let fact = self.state.complete_flip(rng);
        info!(fact, "New fun fact");
        true
    }

    /// Moves the keyboard breed cursor; the cursor breed is the hovered one.
    pub fn move_breed_cursor(&mut self, forward: bool) {
        let index = if forward {
            self.breeds.cursor_next()
        } else {
            self.breeds.cursor_prev()
        };
        self.state.hover_breed(index);
    }

    pub fn clear_breed_hover(&mut self) {
        self.breeds.clear_cursor();
        self.state.leave_breed();
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        if self.flip_timer.is_pending() {
            debug!("Discarding pending fun fact flip");
            self.flip_timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FUN_FACTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_without_stored_theme_is_light() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let view = PageView::initialize(Some(PrefsStore::with_dir(dir.path())));
        assert_eq!(view.theme(), Theme::Light);
    }

    #[test]
    fn test_initialize_with_stored_dark() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let store = PrefsStore::with_dir(dir.path());
        store.save_theme(Theme::Dark).expect("save");
        let view = PageView::initialize(Some(store));
        assert_eq!(view.theme(), Theme::Dark);
    }

    #[test]
    fn test_initialize_with_corrupt_prefs_falls_back() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let store = PrefsStore::with_dir(dir.path());
        std::fs::write(store.path(), "garbage").expect("write");
        let view = PageView::initialize(Some(store));
        assert_eq!(view.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let store = PrefsStore::with_dir(dir.path());
        let mut view = PageView::initialize(Some(store.clone()));
        assert_eq!(view.toggle_theme(), Theme::Dark);
        assert_eq!(store.load_theme().expect("load"), Some(Theme::Dark));
        assert_eq!(view.toggle_theme(), Theme::Light);
        assert_eq!(store.load_theme().expect("load"), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_survives_unwritable_store() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").expect("write");
        let store = PrefsStore::with_dir(&blocker);
        assert!(store.save_theme(Theme::Dark).is_err());

        let mut view = PageView::initialize(Some(store));
        assert_eq!(view.theme(), Theme::Light);
        assert_eq!(view.toggle_theme(), Theme::Dark);
        assert_eq!(view.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_without_store() {
        let mut view = PageView::initialize(None);
        assert_eq!(view.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn test_fun_fact_arrives_after_delay() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut view =
            PageView::with_timer(None, FlipTimer::with_delay(Duration::from_millis(10)));
        view.generate_fun_fact();
        assert!(view.state.flipped);
        assert!(view.flip_pending());
        thread::sleep(Duration::from_millis(50));
        assert!(view.poll_flip(&mut rng));
        assert!(!view.state.flipped);
        assert!(FUN_FACTS.contains(&view.state.fun_fact));
        assert!(!view.poll_flip(&mut rng));
    }

    #[test]
    fn test_fun_fact_waits_for_delay() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut view = PageView::with_timer(None, FlipTimer::with_delay(Duration::from_secs(60)));
        view.generate_fun_fact();
        assert!(!view.poll_flip(&mut rng));
        assert!(view.state.flipped);
    }

    #[test]
    fn test_breed_cursor_drives_hover() {
        let mut view = PageView::initialize(None);
        view.move_breed_cursor(true);
        assert_eq!(view.state.hovered_breed.map(|b| b.name), Some("Siamese"));
        view.move_breed_cursor(true);
        assert_eq!(view.state.hovered_breed.map(|b| b.name), Some("Persian"));
        view.clear_breed_hover();
        assert!(view.state.hovered_breed.is_none());
        assert!(view.breeds.cursor.is_none());
    }
}

pub mod config;
pub mod content;
pub mod error;
pub mod flip_timer;
pub mod key_handler;
pub mod logging;
pub mod page;
pub mod pages;
pub mod prefs;
pub mod render_context;
pub mod screen;
pub mod stars;
pub mod state;
pub mod status_symbols;
pub mod theme;
pub mod ui_utils;

// Re-export main types used in tests and benches
pub use content::{Breed, Characteristic, BREEDS, CHARACTERISTICS, FUN_FACTS, SECTIONS};
pub use page::PageView;
pub use prefs::PrefsStore;
pub use state::{BreedsState, PageState};
pub use theme::Theme;

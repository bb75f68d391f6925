//! Page state for the All About Cats view.
//!
//! # Architecture
//!
//! ```text
//! App
//! ├── PageState    - theme, fun fact, section, scroll and hover
//! └── BreedsState  - breed accordion and keyboard cursor
//! ```

mod breeds;
mod page;

pub use breeds::BreedsState;
pub use page::{PageState, SCROLL_TOP_THRESHOLD, SCROLL_UNITS_PER_ROW};

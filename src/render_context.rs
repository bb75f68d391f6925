use crate::state::{BreedsState, PageState};
use crate::theme::Palette;

/// Everything a renderer needs to draw one frame, bundled to keep
/// signatures short.
pub struct RenderContext<'a> {
    pub state: &'a PageState,
    pub breeds: &'a BreedsState,
    pub palette: Palette,
    pub show_help: bool,
    pub status: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(state: &'a PageState, breeds: &'a BreedsState) -> Self {
        Self {
            state,
            breeds,
            palette: state.theme.palette(),
            show_help: false,
            status: "",
        }
    }

    /// Builder method to set show_help
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Builder method to set the status line
    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = status;
        self
    }
}

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::screen::HitTarget;
use crate::status_symbols;

/// Rows moved per page scroll.
pub const PAGE_ROWS: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    Help,
    NextSection,
    PrevSection,
    SelectSection(usize),
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ToggleTheme,
    GenerateFact,
    BreedNext,
    BreedPrev,
    ToggleBreed,
    PointerMove { column: u16, row: u16 },
    PointerClick { column: u16, row: u16 },
    None,
}

#[derive(Debug)]
pub struct KeyHandler;

impl Default for KeyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a terminal event. Returns `KeyAction::None`
    /// on timeout so the caller can advance timers and animations.
    pub fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(timeout)? {
            return Ok(KeyAction::None);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            Event::Mouse(mouse) => Ok(self.on_mouse_event(mouse)),
            Event::Resize(_, _) => Ok(KeyAction::None),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (_, KeyCode::Char('?')) => KeyAction::Help,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::NextSection,
            (_, KeyCode::BackTab) => KeyAction::PrevSection,
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
                KeyAction::SelectSection(c as usize - '1' as usize)
            }
            (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => KeyAction::ScrollUp,
            (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => KeyAction::ScrollDown,
            (KeyModifiers::NONE, KeyCode::PageUp) => KeyAction::ScrollPageUp,
            (KeyModifiers::NONE, KeyCode::PageDown) => KeyAction::ScrollPageDown,
            (KeyModifiers::NONE, KeyCode::Home | KeyCode::Char('g')) => KeyAction::ScrollToTop,
            (KeyModifiers::NONE, KeyCode::Char('t')) => KeyAction::ToggleTheme,
            (KeyModifiers::NONE, KeyCode::Char('f') | KeyCode::Enter) => KeyAction::GenerateFact,
            (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => KeyAction::BreedNext,
            (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => KeyAction::BreedPrev,
            (KeyModifiers::NONE, KeyCode::Char(' ')) => KeyAction::ToggleBreed,
            _ => KeyAction::None,
        }
    }

    pub fn on_mouse_event(&mut self, mouse: MouseEvent) -> KeyAction {
        match mouse.kind {
            MouseEventKind::ScrollUp => KeyAction::ScrollUp,
            MouseEventKind::ScrollDown => KeyAction::ScrollDown,
            MouseEventKind::Moved => KeyAction::PointerMove {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::Down(MouseButton::Left) => KeyAction::PointerClick {
                column: mouse.column,
                row: mouse.row,
            },
            _ => KeyAction::None,
        }
    }
}

pub struct ActionResult {
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl ActionResult {
    fn none() -> Self {
        Self {
            should_quit: false,
            status_message: None,
        }
    }

    fn status(msg: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            status_message: Some(msg.into()),
        }
    }
}

/// Context passed to action handlers to enable decision-making
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    pub show_help: bool,
    pub breed_cursor: Option<usize>,
    /// Breed hovered by the mouse pointer, as opposed to the keyboard cursor.
    pub pointer_breed: Option<usize>,
    /// What sits under the pointer for `PointerMove`/`PointerClick`.
    pub pointer_target: Option<HitTarget>,
}

/// Stateless action processor: takes action + context, returns result + requested state changes
pub struct ActionProcessor;

impl ActionProcessor {
    pub fn process(action: KeyAction, ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        if ctx.show_help && !matches!(action, KeyAction::Quit | KeyAction::Help | KeyAction::Back)
        {
            return (ActionResult::none(), ActionStateUpdate::none());
        }

        match action {
            KeyAction::Quit => (
                ActionResult {
                    should_quit: true,
                    status_message: None,
                },
                ActionStateUpdate::none(),
            ),
            KeyAction::Help => (
                ActionResult::none(),
                ActionStateUpdate {
                    show_help: Some(!ctx.show_help),
                    ..Default::default()
                },
            ),
            KeyAction::Back => {
                if ctx.show_help {
                    (
                        ActionResult::none(),
                        ActionStateUpdate {
                            show_help: Some(false),
                            ..Default::default()
                        },
                    )
                } else if ctx.breed_cursor.is_some() || ctx.pointer_breed.is_some() {
                    (
                        ActionResult::none(),
                        ActionStateUpdate {
                            clear_breed_hover: Some(()),
                            ..Default::default()
                        },
                    )
                } else {
                    (ActionResult::none(), ActionStateUpdate::none())
                }
            }
            KeyAction::NextSection => Self::step_section(true),
            KeyAction::PrevSection => Self::step_section(false),
            KeyAction::SelectSection(index) => Self::select_section(index),
            KeyAction::ScrollUp => Self::scroll(-1),
            KeyAction::ScrollDown => Self::scroll(1),
            KeyAction::ScrollPageUp => Self::scroll(-PAGE_ROWS),
            KeyAction::ScrollPageDown => Self::scroll(PAGE_ROWS),
            KeyAction::ScrollToTop => (
                ActionResult::none(),
                ActionStateUpdate {
                    scroll_to_top: Some(()),
                    ..Default::default()
                },
            ),
            KeyAction::ToggleTheme => (
                ActionResult::none(),
                ActionStateUpdate {
                    toggle_theme: Some(()),
                    ..Default::default()
                },
            ),
            KeyAction::GenerateFact => (
                ActionResult::status(status_symbols::progress("Flipping the card")),
                ActionStateUpdate {
                    generate_fact: Some(()),
                    ..Default::default()
                },
            ),
            KeyAction::BreedNext => (
                ActionResult::none(),
                ActionStateUpdate {
                    breed_cursor_forward: Some(true),
                    ..Default::default()
                },
            ),
            KeyAction::BreedPrev => (
                ActionResult::none(),
                ActionStateUpdate {
                    breed_cursor_forward: Some(false),
                    ..Default::default()
                },
            ),
            KeyAction::ToggleBreed => match ctx.breed_cursor {
                Some(index) => (
                    ActionResult::none(),
                    ActionStateUpdate {
                        toggle_breed: Some(index),
                        ..Default::default()
                    },
                ),
                None => (
                    ActionResult::status("Select a breed with ←→ first"),
                    ActionStateUpdate::none(),
                ),
            },
            KeyAction::PointerMove { .. } => Self::handle_pointer_move(ctx),
            KeyAction::PointerClick { .. } => Self::handle_pointer_click(ctx),
            KeyAction::None => (ActionResult::none(), ActionStateUpdate::none()),
        }
    }

    fn select_section(index: usize) -> (ActionResult, ActionStateUpdate) {
        (
            ActionResult::none(),
            ActionStateUpdate {
                select_section: Some(index),
                ..Default::default()
            },
        )
    }

    fn step_section(forward: bool) -> (ActionResult, ActionStateUpdate) {
        (
            ActionResult::none(),
            ActionStateUpdate {
                section_forward: Some(forward),
                ..Default::default()
            },
        )
    }

    fn scroll(rows: i32) -> (ActionResult, ActionStateUpdate) {
        (
            ActionResult::none(),
            ActionStateUpdate {
                scroll_rows: Some(rows),
                ..Default::default()
            },
        )
    }

    fn handle_pointer_move(ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        let update = match ctx.pointer_target {
            Some(HitTarget::BreedHeader(index)) if ctx.pointer_breed != Some(index) => {
                ActionStateUpdate {
                    hover_breed: Some(index),
                    ..Default::default()
                }
            }
            Some(HitTarget::BreedHeader(_)) => ActionStateUpdate::none(),
            _ if ctx.pointer_breed.is_some() => ActionStateUpdate {
                leave_breed: Some(()),
                ..Default::default()
            },
            _ => ActionStateUpdate::none(),
        };
        (ActionResult::none(), update)
    }

    fn handle_pointer_click(ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        let update = match ctx.pointer_target {
            Some(HitTarget::NavLabel(index)) => ActionStateUpdate {
                select_section: Some(index),
                ..Default::default()
            },
            Some(HitTarget::BreedHeader(index)) => ActionStateUpdate {
                toggle_breed: Some(index),
                ..Default::default()
            },
            Some(HitTarget::ScrollTopButton) => ActionStateUpdate {
                scroll_to_top: Some(()),
                ..Default::default()
            },
            Some(HitTarget::ThemeToggle) => ActionStateUpdate {
                toggle_theme: Some(()),
                ..Default::default()
            },
            Some(HitTarget::FactButton) => ActionStateUpdate {
                generate_fact: Some(()),
                ..Default::default()
            },
            None => ActionStateUpdate::none(),
        };
        (ActionResult::none(), update)
    }
}

/// Structural representation of state changes requested by action handlers
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActionStateUpdate {
    pub show_help: Option<bool>,

    // Navigation
    pub select_section: Option<usize>,
    pub section_forward: Option<bool>,

    // Scrolling
    pub scroll_rows: Option<i32>,
    pub scroll_to_top: Option<()>,

    // Breeds
    pub breed_cursor_forward: Option<bool>,
    pub toggle_breed: Option<usize>,
    pub hover_breed: Option<usize>,
    pub leave_breed: Option<()>,
    pub clear_breed_hover: Option<()>,

    // Commands
    pub toggle_theme: Option<()>,
    pub generate_fact: Option<()>,
}

impl ActionStateUpdate {
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_basic_keys() {
        let mut kh = KeyHandler::new();
        assert_eq!(kh.on_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(kh.on_key_event(key(KeyCode::Char('?'))), KeyAction::Help);
        assert_eq!(kh.on_key_event(key(KeyCode::Tab)), KeyAction::NextSection);
        assert_eq!(kh.on_key_event(key(KeyCode::Char('t'))), KeyAction::ToggleTheme);
        assert_eq!(kh.on_key_event(key(KeyCode::Char('f'))), KeyAction::GenerateFact);
        assert_eq!(kh.on_key_event(key(KeyCode::Home)), KeyAction::ScrollToTop);
        assert_eq!(kh.on_key_event(key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(kh.on_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn enter_generates_fact_and_space_toggles_breed() {
        let mut kh = KeyHandler::new();
        assert_eq!(kh.on_key_event(key(KeyCode::Enter)), KeyAction::GenerateFact);
        assert_eq!(kh.on_key_event(key(KeyCode::Char(' '))), KeyAction::ToggleBreed);
    }

    #[test]
    fn maps_digit_keys_to_sections() {
        let mut kh = KeyHandler::new();
        assert_eq!(kh.on_key_event(key(KeyCode::Char('1'))), KeyAction::SelectSection(0));
        assert_eq!(kh.on_key_event(key(KeyCode::Char('3'))), KeyAction::SelectSection(2));
        assert_eq!(kh.on_key_event(key(KeyCode::Char('5'))), KeyAction::SelectSection(4));
        assert_eq!(kh.on_key_event(key(KeyCode::Char('6'))), KeyAction::None);
    }

    #[test]
    fn maps_mouse_events() {
        let mut kh = KeyHandler::new();
        let ev = |kind| MouseEvent {
            kind,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            kh.on_mouse_event(ev(MouseEventKind::Moved)),
            KeyAction::PointerMove { column: 4, row: 7 }
        );
        assert_eq!(
            kh.on_mouse_event(ev(MouseEventKind::Down(MouseButton::Left))),
            KeyAction::PointerClick { column: 4, row: 7 }
        );
        assert_eq!(
            kh.on_mouse_event(ev(MouseEventKind::ScrollDown)),
            KeyAction::ScrollDown
        );
    }

    #[test]
    fn tab_steps_sections() {
        let ctx = ActionContext::default();
        let (_, update) = ActionProcessor::process(KeyAction::NextSection, &ctx);
        assert_eq!(update.section_forward, Some(true));
        let (_, update) = ActionProcessor::process(KeyAction::PrevSection, &ctx);
        assert_eq!(update.section_forward, Some(false));
    }

    #[test]
    fn help_blocks_other_actions() {
        let ctx = ActionContext {
            show_help: true,
            ..Default::default()
        };
        let (_, update) = ActionProcessor::process(KeyAction::ToggleTheme, &ctx);
        assert_eq!(update, ActionStateUpdate::none());
        let (_, update) = ActionProcessor::process(KeyAction::Back, &ctx);
        assert_eq!(update.show_help, Some(false));
    }

    #[test]
    fn pointer_enter_and_leave_breed() {
        let over = ActionContext {
            pointer_target: Some(HitTarget::BreedHeader(0)),
            ..Default::default()
        };
        let (_, update) =
            ActionProcessor::process(KeyAction::PointerMove { column: 0, row: 0 }, &over);
        assert_eq!(update.hover_breed, Some(0));

        let left = ActionContext {
            pointer_breed: Some(0),
            pointer_target: None,
            ..Default::default()
        };
        let (_, update) =
            ActionProcessor::process(KeyAction::PointerMove { column: 0, row: 0 }, &left);
        assert_eq!(update.leave_breed, Some(()));
    }

    #[test]
    fn pointer_click_targets() {
        let click = |target| {
            let ctx = ActionContext {
                pointer_target: Some(target),
                ..Default::default()
            };
            ActionProcessor::process(KeyAction::PointerClick { column: 0, row: 0 }, &ctx).1
        };
        assert_eq!(click(HitTarget::NavLabel(2)).select_section, Some(2));
        assert_eq!(click(HitTarget::BreedHeader(1)).toggle_breed, Some(1));
        assert!(click(HitTarget::ScrollTopButton).scroll_to_top.is_some());
        assert!(click(HitTarget::ThemeToggle).toggle_theme.is_some());
        assert!(click(HitTarget::FactButton).generate_fact.is_some());
    }

    #[test]
    fn toggle_breed_needs_cursor() {
        let (result, update) =
            ActionProcessor::process(KeyAction::ToggleBreed, &ActionContext::default());
        assert!(result.status_message.is_some());
        assert_eq!(update, ActionStateUpdate::none());

        let ctx = ActionContext {
            breed_cursor: Some(3),
            ..Default::default()
        };
        let (_, update) = ActionProcessor::process(KeyAction::ToggleBreed, &ctx);
        assert_eq!(update.toggle_breed, Some(3));
    }
}

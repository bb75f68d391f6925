use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use rand::rngs::ThreadRng;
use ratatui::{DefaultTerminal, Frame};
use tracing::{info, warn};

use all_about_cats::config::CliArgs;
use all_about_cats::content::SECTIONS;
use all_about_cats::key_handler::{
    ActionContext, ActionProcessor, ActionStateUpdate, KeyAction, KeyHandler,
};
use all_about_cats::logging::init_logging;
use all_about_cats::page::PageView;
use all_about_cats::render_context::RenderContext;
use all_about_cats::screen::Screen;
use all_about_cats::status_symbols;

/// Poll interval while a flip or smooth scroll is running.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    init_logging(&args)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting All About Cats");

    let prefs = match args.prefs_store() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "Theme preference will not be persisted");
            None
        }
    };
    let app = App::new(PageView::initialize(prefs));

    let terminal = ratatui::init();
    let result = with_mouse_capture(args.mouse_enabled(), || app.run(terminal));
    ratatui::restore();
    result
}

/// Runs `body` with mouse capture around it. Errors are returned rather than
/// raised so the caller can still restore the terminal.
fn with_mouse_capture<T>(
    enabled: bool,
    body: impl FnOnce() -> color_eyre::Result<T>,
) -> color_eyre::Result<T> {
    if enabled {
        execute!(stdout(), EnableMouseCapture)?;
    }
    let result = body();
    if enabled {
        if let Err(e) = execute!(stdout(), DisableMouseCapture) {
            warn!(error = %e, "Failed to disable mouse capture");
        }
    }
    result
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    page: PageView,
    show_help: bool,
    status_message: String,
    /// Breed entered by the mouse pointer, cleared when the pointer leaves it.
    pointer_breed: Option<usize>,
    /// Last pointer position and the scroll offset it was checked against.
    pointer: Option<(u16, u16)>,
    hover_offset: u32,
    rng: ThreadRng,
}

impl App {
    pub fn new(page: PageView) -> Self {
        let mut app = Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            page,
            show_help: false,
            status_message: String::new(),
            pointer_breed: None,
            pointer: None,
            hover_offset: 0,
            rng: rand::rng(),
        };
        app.update_status_message();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.recheck_pointer_hover();
            let timeout = if self.page.flip_pending() || self.page.state.is_smooth_scrolling() {
                ANIMATION_TICK
            } else {
                IDLE_TICK
            };
            let action = self.key_handler.handle_crossterm_events(timeout)?;
            if self.handle_action(action) {
                self.quit();
            }
            self.tick();
        }
        info!("Exiting");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let ctx = RenderContext::new(&self.page.state, &self.page.breeds)
            .with_help(self.show_help)
            .with_status(&self.status_message);
        self.screen.render(frame, &ctx);
    }

    /// Advances the flip timer and smooth scrolling.
    fn tick(&mut self) {
        if self.page.poll_flip(&mut self.rng) {
            self.status_message = status_symbols::paw("New fun fact!");
        }
        self.page.state.step_smooth_scroll();
        let max = self.screen.max_scroll_offset();
        if self.page.state.scroll_offset > max {
            self.page.state.on_scroll(max);
        }
    }

    fn update_status_message(&mut self) {
        self.status_message = format!(
            "Theme: {} | Section: {}",
            self.page.theme(),
            SECTIONS[self.page.state.active_section]
        );
    }

    /// The page may have scrolled under a still pointer. Hit regions are
    /// only current after a draw, so this runs right after one.
    fn recheck_pointer_hover(&mut self) {
        let Some((column, row)) = self.pointer else {
            return;
        };
        if self.page.state.scroll_offset != self.hover_offset {
            self.handle_action(KeyAction::PointerMove { column, row });
        }
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        let pointer_target = match action {
            KeyAction::PointerMove { column, row } | KeyAction::PointerClick { column, row } => {
                self.pointer = Some((column, row));
                self.hover_offset = self.page.state.scroll_offset;
                self.screen.hit_test(column, row)
            }
            _ => None,
        };

        // Build context for stateless processor
        let ctx = ActionContext {
            show_help: self.show_help,
            breed_cursor: self.page.breeds.cursor,
            pointer_breed: self.pointer_breed,
            pointer_target,
        };

        let (result, update) = ActionProcessor::process(action, &ctx);
        let changed = update != ActionStateUpdate::none();
        self.apply_action_updates(update);

        if let Some(msg) = result.status_message {
            self.status_message = msg;
        } else if changed {
            self.update_status_message();
        }

        result.should_quit
    }

    fn apply_action_updates(&mut self, update: ActionStateUpdate) {
        if let Some(help) = update.show_help {
            self.show_help = help;
        }
        if let Some(index) = update.select_section {
            self.page.state.select_section(index);
        }
        if let Some(forward) = update.section_forward {
            if forward {
                self.page.state.next_section();
            } else {
                self.page.state.prev_section();
            }
        }
        if let Some(rows) = update.scroll_rows {
            let max = self.screen.max_scroll_offset();
            self.page.state.scroll_rows(rows, max);
        }
        if update.scroll_to_top.is_some() {
            self.page.state.scroll_to_top();
        }
        if let Some(forward) = update.breed_cursor_forward {
            self.pointer_breed = None;
            self.page.move_breed_cursor(forward);
        }
        if let Some(index) = update.toggle_breed {
            self.page.breeds.toggle(index);
        }
        if let Some(index) = update.hover_breed {
            self.pointer_breed = Some(index);
            self.page.state.hover_breed(index);
        }
        if update.leave_breed.is_some() {
            self.pointer_breed = None;
            self.page.state.leave_breed();
        }
        if update.clear_breed_hover.is_some() {
            self.pointer_breed = None;
            self.page.clear_breed_hover();
        }
        if update.toggle_theme.is_some() {
            let theme = self.page.toggle_theme();
            info!(%theme, "Theme toggled");
        }
        if update.generate_fact.is_some() {
            self.page.generate_fun_fact();
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use all_about_cats::content::BREEDS;
    use all_about_cats::screen::HitTarget;
    use ratatui::{backend::TestBackend, Terminal};

    const POINTER_COLUMN: u16 = 10;

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|frame| app.render(frame)).expect("draw");
    }

    fn breed_under_pointer(app: &App, row: u16) -> Option<&'static str> {
        match app.screen.hit_test(POINTER_COLUMN, row) {
            Some(HitTarget::BreedHeader(i)) => Some(BREEDS[i].name),
            _ => None,
        }
    }

    #[test]
    fn test_mouse_capture_returns_body_result() {
        let mut calls = 0;
        let result: color_eyre::Result<()> = with_mouse_capture(true, || {
            calls += 1;
            Err(color_eyre::eyre::eyre!("draw failed"))
        });
        assert_eq!(calls, 1);
        assert!(result.is_err());

        let value = with_mouse_capture(false, || Ok(7)).expect("body result");
        assert_eq!(value, 7);
    }

    #[test]
    fn test_scroll_under_still_pointer_updates_hover() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        let mut app = App::new(PageView::initialize(None));

        let mut found = None;
        for _ in 0..200 {
            draw(&mut app, &mut terminal);
            found = (0..40).find(|&row| breed_under_pointer(&app, row).is_some());
            if found.is_some() {
                break;
            }
            app.handle_action(KeyAction::ScrollDown);
        }
        let row = found.expect("a breed header scrolls into view");

        app.handle_action(KeyAction::PointerMove {
            column: POINTER_COLUMN,
            row,
        });
        let first = app.page.state.hovered_breed.map(|b| b.name);
        assert!(first.is_some());
        assert_eq!(first, breed_under_pointer(&app, row));

        let before = app.page.state.scroll_offset;
        app.handle_action(KeyAction::ScrollDown);
        assert_ne!(app.page.state.scroll_offset, before);
        draw(&mut app, &mut terminal);
        app.recheck_pointer_hover();

        let now = app.page.state.hovered_breed.map(|b| b.name);
        assert_ne!(now, first);
        assert_eq!(now, breed_under_pointer(&app, row));
    }
}

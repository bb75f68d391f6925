use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Block,
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::content::TITLE;
use crate::pages::breed_tooltip::BreedTooltip;
use crate::pages::help::HelpPage;
use crate::pages::nav_bar::NavBar;
use crate::pages::page_body::{PageBody, FACT_BUTTON};
use crate::render_context::RenderContext;
use crate::ui_utils::{centered_rect, rect_contains};

const SCROLL_TOP_LABEL: &str = " ↑ Top ";

/// Clickable and hoverable regions recorded during the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavLabel(usize),
    BreedHeader(usize),
    ScrollTopButton,
    ThemeToggle,
    FactButton,
}

#[derive(Debug, Default)]
pub struct Screen {
    nav: NavBar,
    body: PageBody,
    tooltip: BreedTooltip,
    help: HelpPage,
    throbber: ThrobberState,
    hits: Vec<(Rect, HitTarget)>,
    max_scroll_offset: u32,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, ctx: &RenderContext) {
        self.hits.clear();
        let palette = ctx.palette;
        let area = frame.area();

        let title = Line::from(format!(" {} ", TITLE))
            .bold()
            .fg(palette.accent)
            .left_aligned();
        let block = Block::bordered()
            .title(title)
            .style(Style::new().fg(palette.foreground).bg(palette.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let vlayout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(inner);
        let (nav_area, body_area, status_area) = (vlayout[0], vlayout[1], vlayout[2]);

        self.nav.render(frame, nav_area, ctx, &mut self.hits);

        let flip_line = if ctx.state.flipped {
            self.throbber.calc_next();
            Some(
                Throbber::default()
                    .label("Turning the card...")
                    .to_line(&self.throbber),
            )
        } else {
            None
        };
        let doc = self.body.build(ctx, body_area.width, flip_line);
        self.max_scroll_offset = doc.max_scroll_offset(body_area.height);
        let visible = self.body.render(frame, body_area, ctx, &doc);

        for &(row, breed) in &visible.breeds {
            self.hits
                .push((Rect::new(body_area.x, row, body_area.width, 1), HitTarget::BreedHeader(breed)));
        }
        if let Some(row) = visible.fact_button {
            let width = (FACT_BUTTON.chars().count() as u16).min(body_area.width);
            let x = body_area.x + (body_area.width - width) / 2;
            self.hits.push((Rect::new(x, row, width, 1), HitTarget::FactButton));
        }

        let hovered_row = ctx.state.hovered_breed.and_then(|hovered| {
            visible
                .breeds
                .iter()
                .find(|&&(_, i)| crate::content::BREEDS[i].name == hovered.name)
                .map(|&(row, _)| row)
        });
        self.tooltip.render(frame, body_area, ctx, hovered_row);

        let label_width = SCROLL_TOP_LABEL.chars().count() as u16;
        if ctx.state.show_scroll_top && body_area.width > label_width && body_area.height > 0 {
            let button = Rect::new(
                body_area.right() - label_width - 1,
                body_area.bottom() - 1,
                label_width,
                1,
            );
            frame.render_widget(
                Line::from(SCROLL_TOP_LABEL)
                    .style(Style::new().fg(palette.background).bg(palette.accent).bold()),
                button,
            );
            self.hits.push((button, HitTarget::ScrollTopButton));
        }

        let status_line = Line::from(format!(
            "{}  |  t: Theme  f: Fun fact  Tab: Section  ?: Help  q: Quit",
            ctx.status
        ))
        .on_dark_gray()
        .white();
        frame.render_widget(status_line, status_area);

        if ctx.show_help {
            // Help is modal; nothing beneath it is clickable.
            self.hits.clear();
            self.help
                .render(frame, centered_rect(60, 26, inner), palette);
        }
    }

    /// Topmost region under `(column, row)` from the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, target)| *target)
    }

    /// Largest scroll offset for the page as last laid out.
    pub fn max_scroll_offset(&self) -> u32 {
        self.max_scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BreedsState, PageState};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(screen: &mut Screen, state: &PageState, breeds: &BreedsState, show_help: bool) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        let ctx = RenderContext::new(state, breeds)
            .with_help(show_help)
            .with_status("Ready");
        terminal
            .draw(|frame| screen.render(frame, &ctx))
            .expect("draw");
    }

    #[test]
    fn test_nav_labels_are_clickable() {
        let mut screen = Screen::new();
        let state = PageState::new();
        let breeds = BreedsState::new();
        draw(&mut screen, &state, &breeds, false);
        // Inside the border: row 1, first label starts at column 1.
        assert_eq!(screen.hit_test(2, 1), Some(HitTarget::NavLabel(0)));
        assert_eq!(screen.hit_test(97, 1), Some(HitTarget::ThemeToggle));
    }

    #[test]
    fn test_page_is_scrollable() {
        let mut screen = Screen::new();
        let state = PageState::new();
        let breeds = BreedsState::new();
        draw(&mut screen, &state, &breeds, false);
        assert!(screen.max_scroll_offset() > 0);
    }

    #[test]
    fn test_scroll_top_button_only_past_threshold() {
        let mut screen = Screen::new();
        let breeds = BreedsState::new();
        let mut state = PageState::new();
        state.on_scroll(300);
        draw(&mut screen, &state, &breeds, false);
        assert!(!screen
            .hits
            .iter()
            .any(|(_, t)| *t == HitTarget::ScrollTopButton));

        state.on_scroll(301);
        draw(&mut screen, &state, &breeds, false);
        assert!(screen
            .hits
            .iter()
            .any(|(_, t)| *t == HitTarget::ScrollTopButton));
    }

    #[test]
    fn test_help_blocks_hits() {
        let mut screen = Screen::new();
        let state = PageState::new();
        let breeds = BreedsState::new();
        draw(&mut screen, &state, &breeds, true);
        assert_eq!(screen.hit_test(2, 1), None);
    }
}

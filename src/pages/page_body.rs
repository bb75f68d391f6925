//! The scrollable page document.
//!
//! The whole page is built as one list of pre-wrapped lines so that a line
//! index is also a row index. That keeps scrolling and mouse hit-testing
//! simple: a breed header at line `n` sits at row `n - top` on screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::content::{
    BREEDS, CAT_IMAGES, CHARACTERISTICS, COPYRIGHT, FOOTER_ABOUT, FOOTER_LINKS,
    FOOTER_NEWSLETTER, FOOTER_SOCIAL, INTRO, OUTRO, TITLE,
};
use crate::render_context::RenderContext;
use crate::stars::render_stars;
use crate::state::SCROLL_UNITS_PER_ROW;
use crate::ui_utils::{rating_bar, wrap_text};

const RATING_BAR_WIDTH: usize = 20;
pub const FACT_BUTTON: &str = "[ Generate New Fact ]";

#[derive(Debug, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    /// `(line index, breed index)` of each accordion header.
    pub breed_rows: Vec<(usize, usize)>,
    pub fact_button_row: usize,
}

impl Document {
    /// Largest scroll offset that still fills a body `height` rows tall.
    pub fn max_scroll_offset(&self, height: u16) -> u32 {
        let overflow = self.lines.len().saturating_sub(usize::from(height));
        overflow as u32 * SCROLL_UNITS_PER_ROW
    }
}

#[derive(Debug, Default)]
pub struct PageBody;

impl PageBody {
    pub fn new() -> Self {
        Self
    }

    /// Builds the document for a body `width` columns wide. `flip_line` is
    /// shown in place of the fact while the card is turning.
    pub fn build(&self, ctx: &RenderContext, width: u16, flip_line: Option<Line<'static>>) -> Document {
        let palette = ctx.palette;
        let width = usize::from(width.max(20));
        let heading = Style::new().fg(palette.accent).add_modifier(Modifier::BOLD);
        let muted = Style::new().fg(palette.muted);
        let mut doc = Document::default();
        let lines = &mut doc.lines;

        // Hero
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("≽^•⩊•^≼  {}", TITLE), heading)).centered());
        lines.push(
            Line::from(Span::styled(format!("hero image: {}", CAT_IMAGES[0]), muted))
                .centered(),
        );
        lines.push(Line::from(""));
        for l in wrap_text(INTRO, width) {
            lines.push(Line::from(l).centered());
        }

        // Characteristics
        Self::push_heading(lines, "Characteristics of Cats", heading);
        for c in CHARACTERISTICS {
            lines.push(Line::from(format!("  • {}", c.description)));
            if let Some(rating) = c.rating {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(rating_bar(rating, RATING_BAR_WIDTH), Style::new().fg(palette.accent)),
                    Span::styled(format!(" {}%", rating), muted),
                ]));
            }
        }

        // Gallery
        Self::push_heading(lines, "Cat Gallery", heading);
        for (i, url) in CAT_IMAGES.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  [Cat {}] ", i + 1), Style::new().bold()),
                Span::styled(*url, muted),
            ]));
        }

        // Breeds
        Self::push_heading(lines, "Popular Cat Breeds", heading);
        for (i, breed) in BREEDS.iter().enumerate() {
            let open = ctx.breeds.is_expanded(i);
            let hovered = ctx.state.hovered_breed.is_some_and(|b| b.name == breed.name);
            let mut header = Style::new().fg(palette.foreground);
            if hovered {
                header = header.fg(palette.accent).bold();
            }
            if ctx.breeds.cursor == Some(i) {
                header = header.add_modifier(Modifier::REVERSED);
            }
            let mut spans = vec![Span::styled(
                format!("  {} {}", if open { "▾" } else { "▸" }, breed.name),
                header,
            )];
            if let Some(popularity) = breed.popularity {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(render_stars(popularity), Style::new().fg(palette.accent)));
            }
            doc.breed_rows.push((lines.len(), i));
            lines.push(Line::from(spans));
            if open {
                for l in wrap_text(breed.description, width.saturating_sub(6)) {
                    lines.push(Line::from(Span::styled(format!("      {}", l), muted)));
                }
            }
        }

        // Fun fact
        Self::push_heading(lines, "Cat Fun Fact", heading);
        match flip_line {
            Some(line) if ctx.state.flipped => lines.push(line.centered()),
            _ => {
                for l in wrap_text(ctx.state.fun_fact, width.saturating_sub(4)) {
                    lines.push(Line::from(l).centered());
                }
            }
        }
        lines.push(Line::from(""));
        doc.fact_button_row = lines.len();
        lines.push(
            Line::from(Span::styled(
                FACT_BUTTON,
                Style::new().fg(palette.background).bg(palette.accent).bold(),
            ))
            .centered(),
        );
        lines.push(Line::from(""));

        for l in wrap_text(OUTRO, width) {
            lines.push(Line::from(Span::styled(l, Style::new().italic())).centered());
        }

        // Footer
        let footer = Style::new().bg(palette.footer).fg(palette.foreground);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("About Us", heading)));
        for l in wrap_text(FOOTER_ABOUT, width) {
            lines.push(Line::from(l).style(footer));
        }
        lines.push(Line::from(Span::styled("Quick Links", heading)));
        for link in FOOTER_LINKS {
            lines.push(Line::from(format!("  {}", link)).style(footer).underlined());
        }
        lines.push(Line::from(Span::styled("Newsletter", heading)));
        lines.push(Line::from(FOOTER_NEWSLETTER).style(footer));
        lines.push(Line::from("  [ Enter your email ]  [ Subscribe ]").style(footer));
        lines.push(Line::from("─".repeat(width)).style(muted));
        lines.push(Line::from(vec![
            Span::raw(COPYRIGHT),
            Span::raw("   "),
            Span::styled(FOOTER_SOCIAL.join(" · "), muted),
        ]));

        doc
    }

    fn push_heading(lines: &mut Vec<Line<'static>>, title: &'static str, style: Style) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(title, style)).centered());
        lines.push(Line::from(""));
    }

    /// Renders the visible window of `doc` and returns the screen row of each
    /// visible breed header and of the fact button.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        ctx: &RenderContext,
        doc: &Document,
    ) -> VisibleRows {
        let top = (ctx.state.scroll_offset / SCROLL_UNITS_PER_ROW) as usize;
        let palette = ctx.palette;
        frame.render_widget(
            Paragraph::new(doc.lines.clone())
                .style(Style::new().fg(palette.foreground).bg(palette.background))
                .scroll((top.min(u16::MAX as usize) as u16, 0)),
            area,
        );

        let to_row = |line: usize| -> Option<u16> {
            let offset = line.checked_sub(top)?;
            (offset < usize::from(area.height)).then(|| area.y + offset as u16)
        };
        VisibleRows {
            breeds: doc
                .breed_rows
                .iter()
                .filter_map(|&(line, breed)| to_row(line).map(|row| (row, breed)))
                .collect(),
            fact_button: to_row(doc.fact_button_row),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct VisibleRows {
    pub breeds: Vec<(u16, usize)>,
    pub fact_button: Option<u16>,
}

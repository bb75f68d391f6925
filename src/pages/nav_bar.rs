use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    Frame,
};

use crate::content::SECTIONS;
use crate::render_context::RenderContext;
use crate::screen::HitTarget;

const DIVIDER: &str = "│";

/// Width reserved on the right for the theme toggle.
pub const TOGGLE_WIDTH: u16 = 5;

#[derive(Debug, Default)]
pub struct NavBar;

impl NavBar {
    /// `(start column, width)` of each section label, relative to the bar.
    pub fn label_ranges() -> Vec<(u16, u16)> {
        let mut ranges = Vec::with_capacity(SECTIONS.len());
        let mut x = 0u16;
        for (i, label) in SECTIONS.iter().enumerate() {
            if i > 0 {
                x += DIVIDER.chars().count() as u16;
            }
            let width = label.chars().count() as u16 + 2;
            ranges.push((x, width));
            x += width;
        }
        ranges
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        ctx: &RenderContext,
        hits: &mut Vec<(Rect, HitTarget)>,
    ) {
        let palette = ctx.palette;
        let mut spans = Vec::new();
        for (i, label) in SECTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(DIVIDER, Style::new().fg(palette.muted)));
            }
            let style = if i == ctx.state.active_section {
                Style::new().fg(palette.background).bg(palette.accent).bold()
            } else {
                Style::new().fg(palette.foreground)
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        frame.render_widget(Line::from(spans), area);

        for (i, (start, width)) in Self::label_ranges().into_iter().enumerate() {
            if start >= area.width {
                break;
            }
            let rect = Rect::new(area.x + start, area.y, width.min(area.width - start), 1);
            hits.push((rect, HitTarget::NavLabel(i)));
        }

        if area.width > TOGGLE_WIDTH {
            let toggle = Rect::new(area.right() - TOGGLE_WIDTH, area.y, TOGGLE_WIDTH, 1);
            let icon = Line::from(format!(" [{}]", ctx.state.theme.toggle_icon()))
                .style(Style::new().fg(palette.accent).bold());
            frame.render_widget(icon, toggle);
            hits.push((toggle, HitTarget::ThemeToggle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ranges_are_contiguous() {
        let ranges = NavBar::label_ranges();
        assert_eq!(ranges.len(), SECTIONS.len());
        assert_eq!(ranges[0], (0, 6)); // " Home "
        for pair in ranges.windows(2) {
            let (start, width) = pair[0];
            assert_eq!(pair[1].0, start + width + 1);
        }
    }
}

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::content::Breed;
use crate::render_context::RenderContext;
use crate::stars::render_stars;
use crate::ui_utils::wrap_text;

const TOOLTIP_WIDTH: u16 = 40;

#[derive(Debug, Default)]
pub struct BreedTooltip;

impl BreedTooltip {
    pub fn lines(breed: &Breed, inner_width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::raw(breed.name).bold())];
        if let Some(popularity) = breed.popularity {
            lines.push(Line::from(format!(
                "{}  {:.1}/5",
                render_stars(popularity),
                popularity
            )));
        }
        lines.push(Line::from(""));
        lines.extend(
            wrap_text(breed.description, usize::from(inner_width))
                .into_iter()
                .map(Line::from),
        );
        lines
    }

    /// Draws the tooltip for the hovered breed, just below `anchor_row` when
    /// it fits there and above it otherwise. Nothing is drawn without a
    /// hovered breed.
    pub fn render(&self, frame: &mut Frame, body: Rect, ctx: &RenderContext, anchor_row: Option<u16>) {
        let Some(breed) = ctx.state.hovered_breed else {
            return;
        };
        let width = TOOLTIP_WIDTH.min(body.width);
        let lines = Self::lines(breed, width.saturating_sub(2));
        let height = (lines.len() as u16 + 2).min(body.height);

        let x = body.right().saturating_sub(width + 1).max(body.x);
        let y = match anchor_row {
            Some(row) if row + 1 + height <= body.bottom() => row + 1,
            Some(row) if row >= body.y + height => row - height,
            _ => body.bottom().saturating_sub(height),
        };
        let area = Rect::new(x, y, width, height);

        let palette = ctx.palette;
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::new().fg(palette.foreground).bg(palette.card))
                .block(
                    Block::bordered()
                        .title(" Breed ")
                        .border_style(Style::new().fg(palette.accent)),
                ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BREEDS;

    #[test]
    fn test_tooltip_lines_include_stars() {
        let lines = BreedTooltip::lines(&BREEDS[1], 38);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[0], "Persian");
        assert_eq!(text[1], "★★★★☆  4.7/5");
        assert!(text.iter().any(|l| l.contains("luxurious")));
    }
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::theme::Palette;

#[derive(Debug, Default)]
pub struct HelpPage;

fn entry(keys: &'static str, what: &'static str, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", keys), key_style),
        Span::raw(what),
    ])
}

impl HelpPage {
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::new().bg(palette.card).fg(palette.foreground)),
            area,
        );

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let key = Style::new().bold().fg(palette.accent);

        let nav_help = vec![
            entry("↑↓ / k j", "Scroll one line", key),
            entry("PgUp PgDn", "Scroll one page", key),
            entry("Home / g", "Scroll to top", key),
            entry("Tab", "Next section", key),
            entry("1 - 5", "Jump to section", key),
            entry("q / Ctrl-C", "Quit", key),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        let action_help = vec![
            entry("t", "Toggle light/dark theme", key),
            entry("f / Enter", "Generate a new fun fact", key),
            entry("← → / h l", "Highlight a breed", key),
            entry("Space", "Expand or collapse the breed", key),
            entry("Esc", "Clear highlight / close help", key),
        ];
        frame.render_widget(
            Paragraph::new(action_help).block(Block::bordered().title("Actions")),
            sections[1],
        );

        let tips = vec![
            Line::from("💡 Hover a breed with the mouse to see its popularity"),
            Line::from("💡 Your theme choice is remembered between sessions"),
            Line::from("💡 Click [↑ Top] or a section label, they work like buttons"),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[2],
        );
    }
}

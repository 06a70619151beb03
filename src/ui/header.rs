use crate::ui::roster::RosterState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_LOADING, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, roster: &RosterState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (dot_style, summary) = if roster.loading {
            (Style::default().fg(STATUS_LOADING), "fetching".to_string())
        } else if roster.error.is_some() {
            (Style::default().fg(STATUS_ERROR), "fetch failed".to_string())
        } else {
            (
                Style::default().fg(STATUS_OK),
                format!("{} characters", roster.characters.len()),
            )
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", dot_style),
            Span::styled("  ", text_style),
            Span::styled("hogdex", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(summary, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

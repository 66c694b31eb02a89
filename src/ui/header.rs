use crate::counter::view_model::CounterView;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &CounterView, has_error: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, color) = sync_status(view, has_error);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Counter",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled(" ", text_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn sync_status(view: &CounterView, has_error: bool) -> (&'static str, ratatui::style::Color) {
    if view.is_loading {
        ("loading", STATUS_BUSY)
    } else if view.is_updating {
        ("saving…", STATUS_BUSY)
    } else if has_error {
        ("sync failed", STATUS_ERROR)
    } else {
        ("synced", STATUS_OK)
    }
}

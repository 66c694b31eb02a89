use crate::counter::view_model::CounterView;
use crate::ui::app::App;
use crate::ui::footer::footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, DISABLED_TEXT, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);
    let view = app.view();
    let last_error = app.last_error();

    frame.render_widget(
        Header::new().widget(&view, last_error.is_some()),
        header_area,
    );
    frame.render_widget(Clear, body);

    let lines = if view.is_loading {
        loading_lines(app.spinner())
    } else {
        counter_lines(&view, last_error.as_deref())
    };
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let content = centered_rect_by_size(body, width, height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content,
    );

    frame.render_widget(footer(&view, app.can_reload()), footer_area);
}

fn loading_lines(spinner: &'static str) -> Vec<Line<'static>> {
    vec![Line::from(vec![
        Span::styled(spinner, Style::default().fg(STATUS_BUSY)),
        Span::styled(" Loading…", Style::default().fg(HEADER_TEXT)),
    ])]
}

fn counter_lines(view: &CounterView, last_error: Option<&str>) -> Vec<Line<'static>> {
    let button = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let dec_style = if view.can_decrement {
        button
    } else {
        Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM)
    };
    let count = view
        .count
        .map(|value| value.to_string())
        .unwrap_or_default();

    let mut lines = vec![Line::from(vec![
        Span::styled("[ dec ]", dec_style),
        Span::raw("   "),
        Span::styled(
            format!("{:^4}", count),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[ inc ]", button),
    ])];

    if let Some(error) = last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Last sync failed: {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines
}

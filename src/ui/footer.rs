use crate::counter::view_model::CounterView;
use crate::ui::theme::{DISABLED_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One key binding shown in the footer.
struct KeyHint {
    keys: &'static str,
    label: &'static str,
    enabled: bool,
}

/// Key hints for the counter screen. Actions that would be ignored right
/// now are dimmed.
pub fn footer(view: &CounterView, can_reload: bool) -> Paragraph<'static> {
    let loaded = view.count.is_some();
    let hints = [
        KeyHint {
            keys: "+/→",
            label: "Inc",
            enabled: loaded,
        },
        KeyHint {
            keys: "-/←",
            label: "Dec",
            enabled: view.can_decrement,
        },
        KeyHint {
            keys: "r",
            label: "Reload",
            enabled: can_reload,
        },
        KeyHint {
            keys: "q",
            label: "Quit",
            enabled: true,
        },
    ];

    let separator = Style::default().fg(HEADER_SEPARATOR);
    let mut spans = vec![Span::raw(" ")];
    for (index, hint) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.extend(hint_spans(hint));
    }
    spans.push(Span::styled(
        format!("   v{VERSION}"),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    ));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn hint_spans(hint: &KeyHint) -> [Span<'static>; 2] {
    let (key_style, label_style) = if hint.enabled {
        (
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            Style::default().fg(HEADER_TEXT),
        )
    } else {
        let dim = Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM);
        (dim, dim)
    };
    [
        Span::styled(hint.keys, key_style),
        Span::styled(format!(": {}", hint.label), label_style),
    ]
}

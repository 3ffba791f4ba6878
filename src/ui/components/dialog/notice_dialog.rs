//! Acknowledge/cancel prompt shown when form content cannot be loaded

use super::base::{render_dialog, DialogConfig};
use crate::state::{NoticeChoice, NoticeState};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the failure prompt centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, title: &str, message: &str, state: &NoticeState) {
    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message,
            hint: Some(option_spans(state)),
            max_width: 60,
        },
    );
}

fn option_spans(state: &NoticeState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for option in [NoticeChoice::Ok, NoticeChoice::Cancel] {
        let is_selected = state.selected == option;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}{}", prefix, option.label()), style));
        spans.push(Span::raw("   "));
    }
    spans.pop();
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn spans_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_option_spans_mark_selection() {
        let state = NoticeState::default();
        assert_eq!(spans_text(&option_spans(&state)), "▸ OK     Abbrechen");

        let state = NoticeState {
            selected: NoticeChoice::Cancel,
        };
        assert_eq!(spans_text(&option_spans(&state)), "  OK   ▸ Abbrechen");
    }

    #[test]
    fn test_render_notice_dialog() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = NoticeState::default();

        terminal
            .draw(|frame| {
                render_notice_dialog(
                    frame,
                    "Hinweis",
                    "Plugin \"FormInfo\" nicht verfügbar oder Fehler beim Ermitteln der Formularinhalte.",
                    &state,
                )
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Hinweis"));
        assert!(screen.contains("verfügbar"));
        assert!(screen.contains("Abbrechen"));
    }
}

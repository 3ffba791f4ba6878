//! Two-column info dialog showing form content

use super::base::{centered_rect, split_chars, wrap_text};
use crate::platform::COPY_SHORTCUT;
use crate::state::{layout_rows, DisplayItem, DisplayRow, HeadingStyle, InfoDialogState, RowValue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Share of the inner width given to the label column, in percent
const LABEL_COLUMN_PERCENT: u16 = 40;

/// Gap between label and value column
const COLUMN_GAP: u16 = 1;

/// What the info dialog shows
pub struct InfoDialog<'a> {
    pub title: &'a str,
    pub items: &'a [DisplayItem],
    /// Fixed outer width in cells
    pub width: u16,
    /// Fixed outer height in cells
    pub height: u16,
}

/// Render the info dialog centered on the screen
pub fn render_info_dialog(frame: &mut Frame, dialog: &InfoDialog, state: &mut InfoDialogState) {
    let dialog_area = centered_rect(frame.area(), dialog.width, dialog.height);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    // one column padding left and right, last row for hints
    let content_area = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width - 2,
        height: inner.height - 1,
    };
    let hint_area = Rect {
        x: content_area.x,
        y: inner.y + inner.height - 1,
        width: content_area.width,
        height: 1,
    };

    let lines = build_lines(dialog.items, content_area.width);
    state.set_content_height(lines.len(), content_area.height);

    let content = Paragraph::new(lines)
        .style(Style::new().bg(Color::Black).fg(Color::White))
        .scroll((state.scroll, 0));
    frame.render_widget(content, content_area);
    frame.render_widget(Paragraph::new(hint_line(state)), hint_area);
}

fn hint_line(state: &InfoDialogState) -> Line<'static> {
    if let Some(status) = &state.status {
        return Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    let mut spans = Vec::new();
    if state.max_scroll > 0 {
        spans.push(Span::styled("↑↓", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(" scroll  ", Style::default().fg(Color::DarkGray)));
    }
    spans.extend([
        Span::styled(COPY_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::styled(" copy  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]);
    Line::from(spans)
}

/// Lay the items out as text lines for a content area `width` cells wide
pub fn build_lines(items: &[DisplayItem], width: u16) -> Vec<Line<'static>> {
    let width = width.max(3);
    let label_width = (width * LABEL_COLUMN_PERCENT / 100).max(1);
    let value_width = width.saturating_sub(label_width + COLUMN_GAP).max(1);

    let mut lines = Vec::new();
    for row in layout_rows(items) {
        match row {
            DisplayRow::Pair { label, value } => {
                push_pair(&mut lines, label, value, label_width, value_width)
            }
            DisplayRow::Heading {
                text,
                style: HeadingStyle::Boxed,
            } => push_boxed_heading(&mut lines, text, width),
            DisplayRow::Heading {
                text,
                style: HeadingStyle::Plain,
            } => {
                for line in wrap_text(text, width as usize) {
                    lines.push(Line::from(Span::styled(
                        line,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
            }
            DisplayRow::Divider => lines.push(Line::from(Span::styled(
                "─".repeat(width as usize),
                Style::default().fg(Color::DarkGray),
            ))),
        }
    }
    lines
}

fn push_pair(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: RowValue,
    label_width: u16,
    value_width: u16,
) {
    let label_lines = wrap_text(label, label_width as usize);
    let (value_lines, value_style) = match value {
        RowValue::Plain(text) => (
            wrap_text(text, value_width as usize),
            Style::default().fg(Color::White),
        ),
        // code keeps its indentation, long lines are hard wrapped
        RowValue::Code(text) => (
            text.lines()
                .flat_map(|line| split_chars(line, value_width as usize))
                .collect(),
            Style::default().fg(Color::Green),
        ),
    };

    let height = label_lines.len().max(value_lines.len());
    let label_width = label_width as usize;
    let gap = " ".repeat(COLUMN_GAP as usize);
    for index in 0..height {
        let label_part = label_lines.get(index).map(String::as_str).unwrap_or("");
        let value_part = value_lines.get(index).cloned().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label_part:<label_width$}"),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(gap.clone()),
            Span::styled(value_part, value_style),
        ]));
    }
}

fn push_boxed_heading(lines: &mut Vec<Line<'static>>, text: &str, width: u16) {
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    // borders and inner padding take four cells
    let text_lines = wrap_text(text, width.saturating_sub(4).max(1) as usize);
    let text_width = text_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let horizontal = "─".repeat(text_width + 2);
    lines.push(Line::from(Span::styled(format!("┌{horizontal}┐"), style)));
    for line in text_lines {
        lines.push(Line::from(Span::styled(
            format!("│ {line:<text_width$} │"),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(format!("└{horizontal}┘"), style)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn items() -> Vec<DisplayItem> {
        vec![
            DisplayItem::Heading {
                text: "Diagnosis".to_string(),
                style: HeadingStyle::Boxed,
            },
            DisplayItem::Divider,
            DisplayItem::Label("Stage".to_string()),
            DisplayItem::Value("II".to_string()),
        ]
    }

    #[test]
    fn test_build_lines_two_columns() {
        let lines = build_lines(&items(), 20);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec![
                "┌───────────┐",
                "│ Diagnosis │",
                "└───────────┘",
                "────────────────────",
                "Stage    II",
            ]
        );
    }

    #[test]
    fn test_build_lines_plain_heading_and_code() {
        let items = vec![
            DisplayItem::Heading {
                text: "Therapie".to_string(),
                style: HeadingStyle::Plain,
            },
            DisplayItem::Label("Daten".to_string()),
            DisplayItem::Code("{\n  \"a\": 1\n}".to_string()),
        ];
        let texts: Vec<String> = build_lines(&items, 20).iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec!["Therapie", "Daten    {", "           \"a\": 1", "         }"]
        );
    }

    #[test]
    fn test_build_lines_wraps_long_values() {
        let items = vec![
            DisplayItem::Label("Bemerkung".to_string()),
            DisplayItem::Value("eins zwei drei vier".to_string()),
        ];
        let texts: Vec<String> = build_lines(&items, 30).iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec!["Bemerkung    eins zwei drei", "             vier"]
        );
    }

    #[test]
    fn test_build_lines_empty() {
        assert!(build_lines(&[], 40).is_empty());
    }

    #[test]
    fn test_render_info_dialog_into_buffer() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = items();
        let dialog = InfoDialog {
            title: "Info",
            items: &items,
            width: 60,
            height: 20,
        };
        let mut state = InfoDialogState::default();

        terminal
            .draw(|frame| render_info_dialog(frame, &dialog, &mut state))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(" Info "));
        assert!(screen.contains("Diagnosis"));
        assert!(screen.contains("Stage"));
        assert!(screen.contains("Esc close"));
        assert_eq!(state.max_scroll, 0);
    }

    #[test]
    fn test_render_clamps_scroll_for_tall_content() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let items: Vec<DisplayItem> = (0..40)
            .flat_map(|i| {
                [
                    DisplayItem::Label(format!("Feld {i}")),
                    DisplayItem::Value(format!("Wert {i}")),
                ]
            })
            .collect();
        let dialog = InfoDialog {
            title: "Info",
            items: &items,
            width: 60,
            height: 20,
        };
        let mut state = InfoDialogState {
            scroll: 500,
            ..Default::default()
        };

        terminal
            .draw(|frame| render_info_dialog(frame, &dialog, &mut state))
            .unwrap();

        // 20 rows minus 2 borders minus 1 hint row leaves 17 visible lines
        assert_eq!(state.max_scroll, 40 - 17);
        assert_eq!(state.scroll, state.max_scroll);
    }

    #[test]
    fn test_hint_shows_status() {
        let state = InfoDialogState {
            status: Some("12 Zeichen kopiert".to_string()),
            ..Default::default()
        };
        assert_eq!(line_text(&hint_line(&state)), "12 Zeichen kopiert");
    }
}

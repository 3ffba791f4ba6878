//! Display items handed to the dialog presenter

/// How a heading is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Drawn inside a box (sections)
    Boxed,
    /// Drawn as emphasized text only (groups)
    Plain,
}

/// One renderable unit of the info dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Label(String),
    Value(String),
    /// Serialized structured value, shown monospaced
    Code(String),
    Heading { text: String, style: HeadingStyle },
    Divider,
}

/// Value column content of a [`DisplayRow::Pair`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowValue<'a> {
    Plain(&'a str),
    Code(&'a str),
}

impl<'a> RowValue<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Code(text) => text,
        }
    }
}

/// One row of the two-column panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow<'a> {
    Pair { label: &'a str, value: RowValue<'a> },
    Heading { text: &'a str, style: HeadingStyle },
    Divider,
}

/// Arrange items into table rows.
///
/// Items flow into two columns: a label takes the left cell and the value
/// following it the right cell. Headings and dividers span both columns.
pub fn layout_rows(items: &[DisplayItem]) -> Vec<DisplayRow<'_>> {
    let mut rows = Vec::new();
    let mut pending_label: Option<&str> = None;

    for item in items {
        let value = match item {
            DisplayItem::Label(text) => {
                if let Some(label) = pending_label.replace(text) {
                    rows.push(DisplayRow::Pair {
                        label,
                        value: RowValue::Plain(""),
                    });
                }
                continue;
            }
            DisplayItem::Value(text) => RowValue::Plain(text),
            DisplayItem::Code(text) => RowValue::Code(text),
            DisplayItem::Heading { text, style } => {
                flush_label(&mut rows, &mut pending_label);
                rows.push(DisplayRow::Heading { text, style: *style });
                continue;
            }
            DisplayItem::Divider => {
                flush_label(&mut rows, &mut pending_label);
                rows.push(DisplayRow::Divider);
                continue;
            }
        };
        rows.push(DisplayRow::Pair {
            label: pending_label.take().unwrap_or(""),
            value,
        });
    }

    flush_label(&mut rows, &mut pending_label);
    rows
}

fn flush_label<'a>(rows: &mut Vec<DisplayRow<'a>>, pending_label: &mut Option<&'a str>) {
    if let Some(label) = pending_label.take() {
        rows.push(DisplayRow::Pair {
            label,
            value: RowValue::Plain(""),
        });
    }
}

/// Plain text rendition used for the clipboard: one row per line, label and
/// value separated by a tab.
pub fn items_to_text(items: &[DisplayItem]) -> String {
    let mut lines = Vec::new();
    for row in layout_rows(items) {
        match row {
            DisplayRow::Pair { label, value } => {
                let mut value_lines = value.text().lines();
                lines.push(format!("{}\t{}", label, value_lines.next().unwrap_or("")));
                lines.extend(value_lines.map(|line| format!("\t{line}")));
            }
            DisplayRow::Heading { text, .. } => lines.push(text.to_string()),
            DisplayRow::Divider => lines.push(String::new()),
        }
    }
    lines.join("\n")
}

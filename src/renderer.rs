//! Classification of form entries into display items
//!
//! Every entry yields zero or more [`DisplayItem`]s, in entry order:
//!
//! | entry                                   | items                    |
//! |-----------------------------------------|--------------------------|
//! | legacy mapping entry                    | label, value             |
//! | `SECTION`                               | boxed heading, divider   |
//! | `GROUP`                                 | plain heading, divider   |
//! | `INPUT` with text / number / boolean    | label, value             |
//! | `INPUT` with object / array             | label, code              |
//! | `INPUT` blank or without value          | nothing                  |
//! | `BUTTON`, `FORM_REFERENCE`, `SUBFORM`   | nothing                  |

use crate::state::{
    flatten_entries, DisplayItem, EntryType, FormContent, FormEntry, HeadingStyle, LegacyEntry,
};
use serde_json::Value;

/// Shown in place of a structured value that cannot be serialized
pub const SERIALIZATION_PLACEHOLDER: &str = "<nicht darstellbar>";

/// Prefix marking a label built from the internal field key
const FIELD_KEY_MARKER: char = '*';

/// Turns fetched form content into the item list of the info dialog
pub struct FormContentRenderer;

impl FormContentRenderer {
    pub fn render(content: &FormContent) -> Vec<DisplayItem> {
        let mut items = Vec::new();
        match content {
            FormContent::Legacy(entries) => {
                for (_, entry) in entries {
                    render_legacy_entry(entry, &mut items);
                }
            }
            FormContent::Entries(entries) => {
                for entry in flatten_entries(entries) {
                    render_entry(entry, &mut items);
                }
            }
        }
        items
    }
}

fn render_legacy_entry(entry: &LegacyEntry, items: &mut Vec<DisplayItem>) {
    let label = if entry.description.trim().is_empty() {
        format!("{FIELD_KEY_MARKER}{}", entry.field)
    } else {
        entry.description.clone()
    };
    items.push(DisplayItem::Label(label));
    items.push(DisplayItem::Value(raw_text(&entry.value)));
}

fn render_entry(entry: &FormEntry, items: &mut Vec<DisplayItem>) {
    match &entry.entry_type {
        EntryType::Section => push_heading(entry, HeadingStyle::Boxed, items),
        EntryType::Group => push_heading(entry, HeadingStyle::Plain, items),
        EntryType::Input => render_input(entry, items),
        EntryType::Button | EntryType::FormReference | EntryType::Subform => {}
        EntryType::Unknown(kind) => {
            tracing::debug!("Skipping form entry of unknown type '{kind}'");
        }
    }
}

fn push_heading(entry: &FormEntry, style: HeadingStyle, items: &mut Vec<DisplayItem>) {
    items.push(DisplayItem::Heading {
        text: entry.description.clone(),
        style,
    });
    items.push(DisplayItem::Divider);
}

fn render_input(entry: &FormEntry, items: &mut Vec<DisplayItem>) {
    let value = match &entry.value {
        None | Some(Value::Null) => return,
        Some(Value::String(text)) if text.trim().is_empty() => return,
        Some(Value::String(text)) => DisplayItem::Value(text.clone()),
        Some(value @ (Value::Object(_) | Value::Array(_))) => DisplayItem::Code(dump(value)),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => DisplayItem::Value(value.to_string()),
    };
    items.push(DisplayItem::Label(input_label(entry)));
    items.push(value);
}

/// Label of an INPUT entry: its description. Entries that arrive without one
/// borrow the legacy rule and show the marked field key instead of an empty cell.
fn input_label(entry: &FormEntry) -> String {
    match &entry.field {
        Some(field) if entry.description.trim().is_empty() => {
            format!("{FIELD_KEY_MARKER}{field}")
        }
        _ => entry.description.clone(),
    }
}

/// Legacy values are shown as they are, without type branching
fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_else(|err| {
            tracing::warn!("Cannot serialize legacy value: {err}");
            SERIALIZATION_PLACEHOLDER.to_string()
        }),
    }
}

fn dump(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        tracing::warn!("Cannot serialize structured value: {err}");
        SERIALIZATION_PLACEHOLDER.to_string()
    })
}

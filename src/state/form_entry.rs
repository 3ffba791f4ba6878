//! Form entry records as returned by the host's `getContent` plugin method

use crate::error::FormInfoError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Kind of a form entry
///
/// The host spells types either like its enum (`FORM_REFERENCE`) or like its
/// form definitions (`formReference`); both decode to the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EntryType {
    Input,
    Section,
    Group,
    Button,
    FormReference,
    Subform,
    /// Anything the widget does not know how to render
    Unknown(String),
}

impl From<String> for EntryType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "INPUT" | "input" => Self::Input,
            "SECTION" | "section" => Self::Section,
            "GROUP" | "group" => Self::Group,
            "BUTTON" | "button" => Self::Button,
            "FORM_REFERENCE" | "formReference" => Self::FormReference,
            "SUBFORM" | "subform" => Self::Subform,
            _ => Self::Unknown(value),
        }
    }
}

/// One submitted field or structural marker of a form
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub field: Option<String>,
    /// Entries nested below a section or group
    #[serde(default, deserialize_with = "lenient_entries")]
    pub children: Vec<FormEntry>,
}

#[cfg(test)]
impl FormEntry {
    pub fn new(entry_type: EntryType, description: impl Into<String>) -> Self {
        Self {
            entry_type,
            description: description.into(),
            value: None,
            field: None,
            children: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_children(mut self, children: Vec<FormEntry>) -> Self {
        self.children = children;
        self
    }
}

/// Entry of the legacy result shape, keyed by field name
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LegacyEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub value: Value,
}

/// Result payload of `getContent`
#[derive(Debug, Clone, PartialEq)]
pub enum FormContent {
    /// Mapping of field key to entry, in host order
    Legacy(Vec<(String, LegacyEntry)>),
    /// Ordered sequence of typed entries
    Entries(Vec<FormEntry>),
}

impl Default for FormContent {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}

impl FormContent {
    /// Decode a result payload.
    ///
    /// Entries that do not decode are skipped; only a payload that is neither a
    /// mapping, a sequence nor `null` is an error.
    pub fn from_value(value: Value) -> Result<Self, FormInfoError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self::Legacy(
                map.into_iter()
                    .filter_map(|(key, entry)| {
                        decode_entry::<LegacyEntry>(entry).map(|mut entry| {
                            if entry.field.is_empty() {
                                entry.field = key.clone();
                            }
                            (key, entry)
                        })
                    })
                    .collect(),
            )),
            Value::Array(entries) => Ok(Self::Entries(
                entries.into_iter().filter_map(decode_entry).collect(),
            )),
            Value::Bool(_) => Err(FormInfoError::UnexpectedResult("a boolean")),
            Value::Number(_) => Err(FormInfoError::UnexpectedResult("a number")),
            Value::String(_) => Err(FormInfoError::UnexpectedResult("a string")),
        }
    }

    /// Number of top level records
    pub fn len(&self) -> usize {
        match self {
            Self::Legacy(entries) => entries.len(),
            Self::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flatten nested entries depth first, each parent before its children
pub fn flatten_entries(entries: &[FormEntry]) -> Vec<&FormEntry> {
    let mut result = Vec::new();
    for entry in entries {
        flatten_into(entry, &mut result);
    }
    result
}

fn flatten_into<'a>(entry: &'a FormEntry, result: &mut Vec<&'a FormEntry>) {
    result.push(entry);
    for child in &entry.children {
        flatten_into(child, result);
    }
}

fn decode_entry<T: for<'de> Deserialize<'de>>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::warn!("Skipping malformed form entry: {err}");
            None
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<FormEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().filter_map(decode_entry).collect())
}

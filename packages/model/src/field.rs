use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of field types a form can contain.
///
/// Every per-kind decision in the workspace (creation defaults, markup
/// mapping) is an exhaustive `match` over this enum, so adding a variant
/// forces every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Textarea,
    Select,
    Radio,
    Checkbox,
    File,
    Date,
    Time,
    Submit,
    Reset,
}

/// Returned when a placement payload names a type outside the enumeration.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown field kind: {0}")]
pub struct UnknownFieldKind(pub String);

impl FieldKind {
    /// All kinds, in sidebar order.
    pub const ALL: [FieldKind; 15] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Number,
        FieldKind::Tel,
        FieldKind::Url,
        FieldKind::Textarea,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::File,
        FieldKind::Date,
        FieldKind::Time,
        FieldKind::Submit,
        FieldKind::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::File => "file",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Submit => "submit",
            FieldKind::Reset => "reset",
        }
    }

    /// Submit/reset render as buttons: the label is the button text and
    /// placeholder/required are meaningless.
    pub fn is_button(&self) -> bool {
        matches!(self, FieldKind::Submit | FieldKind::Reset)
    }

    /// Kinds that carry an option list (select, radio, checkbox).
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldKind::Select | FieldKind::Radio | FieldKind::Checkbox
        )
    }

    /// Default label applied at creation time.
    pub fn default_label(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text Input",
            FieldKind::Email => "Email Address",
            FieldKind::Password => "Password",
            FieldKind::Number => "Number",
            FieldKind::Tel => "Phone Number",
            FieldKind::Url => "Website URL",
            FieldKind::Textarea => "Message",
            FieldKind::Select => "Select Option",
            FieldKind::Radio => "Choose One",
            FieldKind::Checkbox => "Select All That Apply",
            FieldKind::File => "Upload File",
            FieldKind::Date => "Select Date",
            FieldKind::Time => "Select Time",
            FieldKind::Submit => "Submit",
            FieldKind::Reset => "Reset",
        }
    }

    /// Default placeholder applied at creation time. Kinds without a hint
    /// text get an empty string.
    pub fn default_placeholder(&self) -> &'static str {
        match self {
            FieldKind::Text => "Enter text here...",
            FieldKind::Email => "your@email.com",
            FieldKind::Password => "Enter password...",
            FieldKind::Number => "Enter number...",
            FieldKind::Tel => "+1 (555) 123-4567",
            FieldKind::Url => "https://example.com",
            FieldKind::Textarea => "Enter your message here...",
            FieldKind::Select
            | FieldKind::Radio
            | FieldKind::Checkbox
            | FieldKind::File
            | FieldKind::Date
            | FieldKind::Time
            | FieldKind::Submit
            | FieldKind::Reset => "",
        }
    }

    /// Default option list applied at creation time. `None` for kinds that
    /// do not carry options.
    pub fn default_options(&self) -> Option<Vec<String>> {
        let options: &[&str] = match self {
            FieldKind::Select => &["Please select", "Option 1", "Option 2", "Option 3"],
            FieldKind::Radio => &["Option 1", "Option 2", "Option 3"],
            FieldKind::Checkbox => &["Choice 1", "Choice 2", "Choice 3", "Choice 4"],
            _ => return None,
        };
        Some(options.iter().map(|o| o.to_string()).collect())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}

/// Free-form presentation hints carried on every element. The model stores
/// them and the serializer round-trips them; nothing here interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styling {
    pub width: String,
    pub margin: String,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            margin: "0 0 1rem 0".to_string(),
        }
    }
}

/// A single form field.
///
/// `parent_row`/`column_index` are a denormalized back-reference to the
/// containing row slot. Ownership lives in the row's slot vectors (or the
/// document's standalone list); the mutation engine keeps the back-reference
/// in agreement with actual containment. Both are `None` for standalone
/// elements. Serialized in camelCase to stay wire-compatible with exported
/// snapshots (`parentRow`, `columnIndex`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub styling: Styling,
    pub parent_row: Option<String>,
    pub column_index: Option<usize>,
}

impl Element {
    /// Build a standalone element of `kind` with the creation defaults.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: kind.default_label().to_string(),
            placeholder: kind.default_placeholder().to_string(),
            required: false,
            options: kind.default_options(),
            styling: Styling::default(),
            parent_row: None,
            column_index: None,
        }
    }

    /// True when the element sits in a row column rather than the
    /// standalone list.
    pub fn is_in_row(&self) -> bool {
        self.parent_row.is_some()
    }
}

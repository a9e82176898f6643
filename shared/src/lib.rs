use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod messages;
pub mod table_state;
pub mod variable_key;
pub mod variable_list;

pub use config::{AppMode, ConfigContext, VariableTableConfig, DEFAULT_VALUE_MAX_LEN, MAX_VAR_KEY_LENGTH};
pub use messages::{EnglishCatalog, MessageCatalog, MessageKey, Notification, NotificationKind, Translator};
pub use table_state::{DuplicateCheck, PendingCheck, Removal, TableUiState};
pub use variable_key::{check_key, check_keys, max_var_name_length, KeyError};
pub use variable_list::{EditConfirmation, EditValue, FieldUpdate};

/// A named input slot in an application's prompt configuration
///
/// Serialized flat, e.g.
/// `{"key":"topic","name":"Topic","required":true,"type":"string","max_length":48,"is_context_var":false}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptVariable {
    pub key: String,
    pub name: String,
    pub required: bool,
    /// Variable type together with its type-specific constraints
    #[serde(flatten)]
    pub kind: VariableKind,
    /// Set when the variable is bound to an attached dataset as its query input
    #[serde(default)]
    pub is_context_var: bool,
}

/// Type of a prompt variable, carrying only the constraints valid for that type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariableKind {
    /// Single line text bounded by `max_length` characters
    String { max_length: u32 },
    /// Multi-line free text
    Paragraph,
    /// One value picked from a fixed list
    Select {
        #[serde(default)]
        options: Vec<String>,
    },
    Number,
}

/// Payload-free discriminant of [`VariableKind`], used by the edit modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Paragraph,
    Select,
    Number,
}

impl PromptVariable {
    /// Build a fresh required string variable for the given key
    pub fn new_default(key: &str) -> Self {
        Self {
            key: key.to_string(),
            name: key.to_string(),
            required: true,
            kind: VariableKind::String {
                max_length: DEFAULT_VALUE_MAX_LEN,
            },
            is_context_var: false,
        }
    }

    pub fn var_type(&self) -> VariableType {
        self.kind.var_type()
    }

    pub fn max_length(&self) -> Option<u32> {
        match self.kind {
            VariableKind::String { max_length } => Some(max_length),
            _ => None,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            VariableKind::Select { options } => Some(options),
            _ => None,
        }
    }
}

impl VariableKind {
    pub fn var_type(&self) -> VariableType {
        match self {
            VariableKind::String { .. } => VariableType::String,
            VariableKind::Paragraph => VariableType::Paragraph,
            VariableKind::Select { .. } => VariableType::Select,
            VariableKind::Number => VariableType::Number,
        }
    }

    /// Switch to another type, keeping the payload when the type is unchanged
    pub fn with_type(&self, var_type: VariableType) -> VariableKind {
        if self.var_type() == var_type {
            return self.clone();
        }
        match var_type {
            VariableType::String => VariableKind::String {
                max_length: DEFAULT_VALUE_MAX_LEN,
            },
            VariableType::Paragraph => VariableKind::Paragraph,
            VariableType::Select => VariableKind::Select { options: Vec::new() },
            VariableType::Number => VariableKind::Number,
        }
    }
}

impl VariableType {
    pub const ALL: [VariableType; 4] = [
        VariableType::String,
        VariableType::Paragraph,
        VariableType::Select,
        VariableType::Number,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Paragraph => "paragraph",
            VariableType::Select => "select",
            VariableType::Number => "number",
        }
    }

    pub fn parse(value: &str) -> Option<VariableType> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Short glyph shown in front of the key column
    pub fn icon(&self) -> &'static str {
        match self {
            VariableType::String => "Aa",
            VariableType::Paragraph => "¶",
            VariableType::Select => "☰",
            VariableType::Number => "#",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

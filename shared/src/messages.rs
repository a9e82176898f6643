use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Every user-facing string of the variable table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    VariableTitle,
    VariableTip,
    NotSetVar,
    TableKey,
    TableName,
    TableOptional,
    TableAction,
    KeyCanNotBeEmpty,
    KeyTooLong,
    KeyNotValid,
    KeyNotStartWithNumber,
    KeyAlreadyExists,
    DeleteContextVarTitle,
    DeleteContextVarTip,
    EditModalTitle,
    FieldType,
    FieldMaxLength,
    FieldOptions,
    Confirm,
    Cancel,
}

impl MessageKey {
    /// Stable identifier used by translation catalogs
    pub fn id(&self) -> &'static str {
        match self {
            MessageKey::VariableTitle => "appDebug.variableTitle",
            MessageKey::VariableTip => "appDebug.variableTip",
            MessageKey::NotSetVar => "appDebug.notSetVar",
            MessageKey::TableKey => "appDebug.variableTable.key",
            MessageKey::TableName => "appDebug.variableTable.name",
            MessageKey::TableOptional => "appDebug.variableTable.optional",
            MessageKey::TableAction => "appDebug.variableTable.action",
            MessageKey::KeyCanNotBeEmpty => "appDebug.varKeyError.canNoBeEmpty",
            MessageKey::KeyTooLong => "appDebug.varKeyError.tooLong",
            MessageKey::KeyNotValid => "appDebug.varKeyError.notValid",
            MessageKey::KeyNotStartWithNumber => "appDebug.varKeyError.notStartWithNumber",
            MessageKey::KeyAlreadyExists => "appDebug.varKeyError.keyAlreadyExists",
            MessageKey::DeleteContextVarTitle => "appDebug.feature.dataSet.queryVariable.deleteContextVarTitle",
            MessageKey::DeleteContextVarTip => "appDebug.feature.dataSet.queryVariable.deleteContextVarTip",
            MessageKey::EditModalTitle => "appDebug.variableConfig.editModalTitle",
            MessageKey::FieldType => "appDebug.variableConfig.fieldType",
            MessageKey::FieldMaxLength => "appDebug.variableConfig.maxLength",
            MessageKey::FieldOptions => "appDebug.variableConfig.options",
            MessageKey::Confirm => "common.operation.confirm",
            MessageKey::Cancel => "common.operation.cancel",
        }
    }
}

/// Looks up display text for a message, filling `{{name}}` placeholders from `params`
pub trait Translator {
    fn template(&self, key: MessageKey) -> &str;

    fn translate(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        interpolate(self.template(key), params)
    }
}

/// Built-in English strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnglishCatalog;

impl Translator for EnglishCatalog {
    fn template(&self, key: MessageKey) -> &str {
        Self::text(key)
    }
}

impl EnglishCatalog {
    pub fn text(key: MessageKey) -> &'static str {
        match key {
            MessageKey::VariableTitle => "Variables",
            MessageKey::VariableTip => "Users fill variables in a form, automatically replacing the variables in the prompt.",
            MessageKey::NotSetVar => "Variables allow users to introduce prompt words or opening remarks when filling out forms. You can try entering \"{{input}}\" in the prompt words.",
            MessageKey::TableKey => "Variable Key",
            MessageKey::TableName => "Field Name",
            MessageKey::TableOptional => "Optional",
            MessageKey::TableAction => "Actions",
            MessageKey::KeyCanNotBeEmpty => "{{key}} is required",
            MessageKey::KeyTooLong => "{{key}} is too long. Can not be longer than {{max}} characters",
            MessageKey::KeyNotValid => "{{key}} is invalid. Can only contain letters, numbers, and underscores",
            MessageKey::KeyNotStartWithNumber => "{{key}} can not start with a number",
            MessageKey::KeyAlreadyExists => "{{key}} already exists",
            MessageKey::DeleteContextVarTitle => "Delete variable \u{201c}{{varName}}\u{201d}?",
            MessageKey::DeleteContextVarTip => "This variable has been set as a context query variable, and removing it will impact the normal use of the Knowledge. If you still need to delete it, please reselect it in the context section.",
            MessageKey::EditModalTitle => "Edit variable {{key}}",
            MessageKey::FieldType => "Field type",
            MessageKey::FieldMaxLength => "Max length",
            MessageKey::FieldOptions => "Options (one per line)",
            MessageKey::Confirm => "Confirm",
            MessageKey::Cancel => "Cancel",
        }
    }
}

/// Translations keyed by [`MessageKey::id`], e.g. loaded from a JSON object.
/// Missing entries fall back to English.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Translator for MessageCatalog {
    fn template(&self, key: MessageKey) -> &str {
        self.entries
            .get(key.id())
            .map(String::as_str)
            .unwrap_or_else(|| EnglishCatalog::text(key))
    }
}

/// Replace every `{{name}}` in `template` with its value from `params`.
/// Unknown placeholders are left untouched.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Warning => "toast warning",
            NotificationKind::Error => "toast error",
        }
    }
}

/// A message for the user, shown once and never answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }
}

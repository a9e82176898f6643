//! Pure edits over a prompt variable list.
//!
//! Every function borrows the current list and returns a new one; nothing
//! here notifies, logs to the user, or talks to the parent. Callers decide
//! whether to propagate the result.

use tracing::{debug, warn};

use crate::variable_key::{check_keys, KeyError};
use crate::{PromptVariable, VariableKind, VariableType};

/// One field assignment on a variable
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Required(bool),
    /// Change the type; a compatible payload is kept, otherwise defaults are used
    Type(VariableType),
    /// Applies only to string variables
    MaxLength(u32),
    /// Applies only to select variables
    Options(Vec<String>),
}

/// Value returned by the edit modal alongside the chosen type
#[derive(Debug, Clone, PartialEq)]
pub enum EditValue {
    MaxLength(u32),
    Options(Vec<String>),
}

/// Result of confirming the edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct EditConfirmation {
    pub var_type: VariableType,
    pub value: Option<EditValue>,
}

pub fn add_variable(vars: &[PromptVariable]) -> Vec<PromptVariable> {
    let mut next = vars.to_vec();
    next.push(PromptVariable::new_default(""));
    debug!(len = next.len(), "added prompt variable");
    next
}

pub fn find_by_key<'a>(vars: &'a [PromptVariable], key: &str) -> Option<&'a PromptVariable> {
    vars.iter().find(|var| var.key == key)
}

/// Replace one field on every entry whose key matches
pub fn update_field(vars: &[PromptVariable], key: &str, update: FieldUpdate) -> Vec<PromptVariable> {
    batch_update(vars, key, &[update], false)
}

/// Apply `updates` in order to the entry matching `key`.
///
/// With `is_paragraph` set the entry ends up as a paragraph no matter what
/// the updates said, dropping any length or option constraint.
pub fn batch_update(
    vars: &[PromptVariable],
    key: &str,
    updates: &[FieldUpdate],
    is_paragraph: bool,
) -> Vec<PromptVariable> {
    if find_by_key(vars, key).is_none() {
        debug!(key, "no prompt variable to update");
    }

    vars.iter()
        .map(|var| {
            if var.key != key {
                return var.clone();
            }
            let mut updated = var.clone();
            for update in updates {
                apply_field(&mut updated, update);
            }
            if is_paragraph {
                updated.kind = VariableKind::Paragraph;
            }
            updated
        })
        .collect()
}

fn apply_field(var: &mut PromptVariable, update: &FieldUpdate) {
    match update {
        FieldUpdate::Name(name) => var.name = name.clone(),
        FieldUpdate::Required(required) => var.required = *required,
        FieldUpdate::Type(var_type) => var.kind = var.kind.with_type(*var_type),
        FieldUpdate::MaxLength(value) => {
            if let VariableKind::String { max_length } = &mut var.kind {
                *max_length = *value;
            }
        }
        FieldUpdate::Options(values) => {
            if let VariableKind::Select { options } = &mut var.kind {
                *options = values.clone();
            }
        }
    }
}

/// Rename the key at `index`.
///
/// Fails without touching the list when the candidate is not a well-formed
/// key. An empty candidate is accepted so the field can be cleared while
/// typing. Keys longer than `max_key_length` are rejected. Duplicates are
/// not rejected here; see [`crate::DuplicateCheck`].
pub fn rename_key(
    vars: &[PromptVariable],
    index: usize,
    new_key: &str,
    max_key_length: usize,
) -> Result<Vec<PromptVariable>, KeyError> {
    if let Err(e) = check_keys(&[new_key], true, max_key_length) {
        warn!(index, key = new_key, error = %e, "rejected variable key");
        return Err(e);
    }

    Ok(vars
        .iter()
        .enumerate()
        .map(|(i, var)| {
            if i == index {
                PromptVariable {
                    key: new_key.to_string(),
                    ..var.clone()
                }
            } else {
                var.clone()
            }
        })
        .collect())
}

/// Use the key as display name when the row at `index` has none yet
pub fn fill_name_if_empty(vars: &[PromptVariable], index: usize, key: &str) -> Vec<PromptVariable> {
    if key.is_empty() {
        return vars.to_vec();
    }

    vars.iter()
        .enumerate()
        .map(|(i, var)| {
            if i == index && var.name.is_empty() {
                PromptVariable {
                    name: key.to_string(),
                    ..var.clone()
                }
            } else {
                var.clone()
            }
        })
        .collect()
}

pub fn remove_at(vars: &[PromptVariable], index: usize) -> Vec<PromptVariable> {
    debug!(index, "removing prompt variable");
    vars.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, var)| var.clone())
        .collect()
}

/// Turn an edit modal confirmation into field updates on the variable `key`.
///
/// A string type without a usable length falls back to `default_max_length`;
/// any other type without options gets an empty option list.
pub fn apply_edit(
    vars: &[PromptVariable],
    key: &str,
    confirmation: &EditConfirmation,
    default_max_length: u32,
) -> Vec<PromptVariable> {
    let var_type = confirmation.var_type;
    if var_type == VariableType::String {
        let max_length = match &confirmation.value {
            Some(EditValue::MaxLength(n)) if *n > 0 => *n,
            _ => default_max_length,
        };
        return batch_update(
            vars,
            key,
            &[FieldUpdate::Type(var_type), FieldUpdate::MaxLength(max_length)],
            false,
        );
    }

    let options = match &confirmation.value {
        Some(EditValue::Options(options)) => options.clone(),
        _ => Vec::new(),
    };
    batch_update(
        vars,
        key,
        &[FieldUpdate::Type(var_type), FieldUpdate::Options(options)],
        var_type == VariableType::Paragraph,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_VALUE_MAX_LEN, MAX_VAR_KEY_LENGTH};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }

    fn var(key: &str, name: &str, kind: VariableKind) -> PromptVariable {
        PromptVariable {
            key: key.to_string(),
            name: name.to_string(),
            required: true,
            kind,
            is_context_var: false,
        }
    }

    fn sample() -> Vec<PromptVariable> {
        vec![
            var("topic", "Topic", VariableKind::String { max_length: 20 }),
            var(
                "tone",
                "Tone",
                VariableKind::Select {
                    options: vec!["calm".to_string(), "bold".to_string()],
                },
            ),
            var("body", "", VariableKind::Paragraph),
        ]
    }

    #[test]
    fn test_add_variable_appends_default() {
        init_tracing();
        let vars = sample();
        let next = add_variable(&vars);

        assert_eq!(next.len(), vars.len() + 1);
        let added = next.last().unwrap();
        assert_eq!(added.key, "");
        assert_eq!(added.var_type(), VariableType::String);
        assert_eq!(&next[..vars.len()], &vars[..]);
    }

    #[test]
    fn test_update_field_name() {
        let vars = sample();
        let next = update_field(&vars, "tone", FieldUpdate::Name("Voice".to_string()));
        assert_eq!(next[1].name, "Voice");
        assert_eq!(next[0], vars[0]);
        assert_eq!(next[2], vars[2]);
    }

    #[test]
    fn test_update_field_missing_key_is_noop() {
        let vars = sample();
        let next = update_field(&vars, "nope", FieldUpdate::Required(false));
        assert_eq!(next, vars);
    }

    #[test]
    fn test_toggle_optional_only_touches_target() {
        let vars = sample();
        let optional = true;
        let next = update_field(&vars, "topic", FieldUpdate::Required(!optional));

        assert!(!next[0].required);
        assert!(next[1].required);
        assert!(next[2].required);
    }

    #[test]
    fn test_batch_update_paragraph_strips_payload() {
        let vars = sample();
        let next = batch_update(
            &vars,
            "tone",
            &[
                FieldUpdate::Type(VariableType::Select),
                FieldUpdate::Options(vec!["x".to_string()]),
            ],
            true,
        );
        assert_eq!(next[1].kind, VariableKind::Paragraph);
        assert_eq!(next[1].options(), None);
        assert_eq!(next[1].max_length(), None);
    }

    #[test]
    fn test_max_length_ignored_for_non_string() {
        let vars = sample();
        let next = update_field(&vars, "body", FieldUpdate::MaxLength(10));
        assert_eq!(next[2].kind, VariableKind::Paragraph);
    }

    #[test]
    fn test_rename_invalid_key_leaves_list() {
        let vars = sample();
        let too_long = "k".repeat(31);
        assert!(rename_key(&vars, 0, &too_long, MAX_VAR_KEY_LENGTH).is_err());
        assert!(rename_key(&vars, 0, "bad key", MAX_VAR_KEY_LENGTH).is_err());
        assert!(rename_key(&vars, 0, "9key", MAX_VAR_KEY_LENGTH).is_err());
    }

    #[test]
    fn test_rename_respects_configured_key_limit() {
        let vars = sample();
        let err = rename_key(&vars, 0, "subject", 5).unwrap_err();
        assert_eq!(err, KeyError::TooLong { key: "subject".to_string(), max: 5 });
        let next = rename_key(&vars, 0, "subj", 5).unwrap();
        assert_eq!(next[0].key, "subj");
    }

    #[test]
    fn test_rename_to_duplicate_is_applied() {
        let vars = sample();
        let next = rename_key(&vars, 0, "tone", MAX_VAR_KEY_LENGTH).unwrap();
        assert_eq!(next[0].key, "tone");
        assert_eq!(next[0].name, "Topic");
        assert_eq!(next[1].key, "tone");
        assert_eq!(vars[0].key, "topic");
    }

    #[test]
    fn test_rename_to_empty_is_allowed() {
        let vars = sample();
        let next = rename_key(&vars, 1, "", MAX_VAR_KEY_LENGTH).unwrap();
        assert_eq!(next[1].key, "");
    }

    #[test]
    fn test_fill_name_if_empty() {
        let vars = sample();
        let next = fill_name_if_empty(&vars, 2, "body");
        assert_eq!(next[2].name, "body");

        let unchanged = fill_name_if_empty(&vars, 0, "topic");
        assert_eq!(unchanged[0].name, "Topic");

        let empty_key = fill_name_if_empty(&vars, 2, "");
        assert_eq!(empty_key[2].name, "");
    }

    #[test]
    fn test_remove_at() {
        let vars = sample();
        let next = remove_at(&vars, 1);
        assert_eq!(next.len(), 2);
        assert!(find_by_key(&next, "tone").is_none());

        assert_eq!(remove_at(&vars, 9), vars);
    }

    #[test]
    fn test_apply_edit_string_without_value_uses_default() {
        let vars = sample();
        let confirmation = EditConfirmation {
            var_type: VariableType::String,
            value: None,
        };
        let next = apply_edit(&vars, "tone", &confirmation, DEFAULT_VALUE_MAX_LEN);
        assert_eq!(
            next[1].kind,
            VariableKind::String {
                max_length: DEFAULT_VALUE_MAX_LEN
            }
        );
        assert_eq!(next[1].options(), None);
    }

    #[test]
    fn test_apply_edit_string_with_value() {
        let vars = sample();
        let confirmation = EditConfirmation {
            var_type: VariableType::String,
            value: Some(EditValue::MaxLength(64)),
        };
        let next = apply_edit(&vars, "topic", &confirmation, DEFAULT_VALUE_MAX_LEN);
        assert_eq!(next[0].max_length(), Some(64));
    }

    #[test]
    fn test_apply_edit_select_without_value_has_empty_options() {
        let vars = sample();
        let confirmation = EditConfirmation {
            var_type: VariableType::Select,
            value: None,
        };
        let next = apply_edit(&vars, "topic", &confirmation, DEFAULT_VALUE_MAX_LEN);
        assert_eq!(next[0].kind, VariableKind::Select { options: vec![] });
    }

    #[test]
    fn test_apply_edit_paragraph_ignores_value() {
        let vars = sample();
        let confirmation = EditConfirmation {
            var_type: VariableType::Paragraph,
            value: Some(EditValue::Options(vec!["a".to_string()])),
        };
        let next = apply_edit(&vars, "tone", &confirmation, DEFAULT_VALUE_MAX_LEN);
        assert_eq!(next[1].kind, VariableKind::Paragraph);
    }
}

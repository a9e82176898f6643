//! Format rules for variable keys.
//!
//! A key is at most `max_len` characters of ASCII letters, digits and
//! underscores, and must not start with a digit. The configured limit
//! defaults to [`crate::MAX_VAR_KEY_LENGTH`].

use thiserror::Error;

use crate::messages::{MessageKey, Notification, Translator};

/// Why a candidate key was rejected. Each variant carries the offending key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("variable key is required")]
    Empty { key: String },

    #[error("variable key '{key}' is longer than {max} characters")]
    TooLong { key: String, max: usize },

    #[error("variable key '{key}' may only contain letters, numbers and underscores")]
    InvalidCharacters { key: String },

    #[error("variable key '{key}' cannot start with a number")]
    StartsWithNumber { key: String },
}

impl KeyError {
    pub fn key(&self) -> &str {
        match self {
            KeyError::Empty { key }
            | KeyError::TooLong { key, .. }
            | KeyError::InvalidCharacters { key }
            | KeyError::StartsWithNumber { key } => key,
        }
    }

    /// Localized message to show for this error
    pub fn message_key(&self) -> MessageKey {
        match self {
            KeyError::Empty { .. } => MessageKey::KeyCanNotBeEmpty,
            KeyError::TooLong { .. } => MessageKey::KeyTooLong,
            KeyError::InvalidCharacters { .. } => MessageKey::KeyNotValid,
            KeyError::StartsWithNumber { .. } => MessageKey::KeyNotStartWithNumber,
        }
    }

    /// Error toast describing this rejection
    pub fn notification(&self, translator: &dyn Translator) -> Notification {
        let message = match self {
            KeyError::TooLong { key, max } => translator.translate(
                self.message_key(),
                &[("key", key.as_str()), ("max", max.to_string().as_str())],
            ),
            _ => translator.translate(self.message_key(), &[("key", self.key())]),
        };
        Notification::error(message)
    }
}

/// Validate one key. An empty key passes only when `can_be_empty` is set.
pub fn check_key(key: &str, can_be_empty: bool, max_len: usize) -> Result<(), KeyError> {
    if key.is_empty() {
        return if can_be_empty {
            Ok(())
        } else {
            Err(KeyError::Empty { key: String::new() })
        };
    }

    if key.chars().count() > max_len {
        return Err(KeyError::TooLong {
            key: key.to_string(),
            max: max_len,
        });
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(KeyError::InvalidCharacters {
            key: key.to_string(),
        });
    }

    if key.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(KeyError::StartsWithNumber {
            key: key.to_string(),
        });
    }

    Ok(())
}

/// Validate keys in order, stopping at the first failure
pub fn check_keys<S: AsRef<str>>(keys: &[S], can_be_empty: bool, max_len: usize) -> Result<(), KeyError> {
    keys.iter()
        .try_for_each(|key| check_key(key.as_ref(), can_be_empty, max_len))
}

/// Input length bound for key and name fields.
///
/// Values already longer than the key limit keep their length so existing
/// data is never truncated by the input element.
pub fn max_var_name_length(current: &str, max_len: usize) -> usize {
    current.chars().count().max(max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnglishCatalog, NotificationKind, MAX_VAR_KEY_LENGTH};

    fn check(key: &str, can_be_empty: bool) -> Result<(), KeyError> {
        check_key(key, can_be_empty, MAX_VAR_KEY_LENGTH)
    }

    #[test]
    fn test_valid_keys() {
        assert_eq!(check("topic", false), Ok(()));
        assert_eq!(check("_private_2", false), Ok(()));
        assert_eq!(check(&"a".repeat(MAX_VAR_KEY_LENGTH), false), Ok(()));
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(
            check("", false),
            Err(KeyError::Empty { key: String::new() })
        );
        assert_eq!(check("", true), Ok(()));
    }

    #[test]
    fn test_too_long_key() {
        let key = "a".repeat(MAX_VAR_KEY_LENGTH + 1);
        let err = check(&key, true).unwrap_err();
        assert_eq!(err.message_key(), MessageKey::KeyTooLong);
        assert_eq!(err.key(), key);
    }

    #[test]
    fn test_invalid_characters() {
        for key in ["has space", "dash-key", "ünïcode", "dot.key"] {
            let err = check(key, true).unwrap_err();
            assert_eq!(err.message_key(), MessageKey::KeyNotValid, "{}", key);
        }
    }

    #[test]
    fn test_starts_with_number() {
        let err = check("1st", true).unwrap_err();
        assert_eq!(
            err,
            KeyError::StartsWithNumber {
                key: "1st".to_string()
            }
        );
        assert_eq!(err.message_key(), MessageKey::KeyNotStartWithNumber);
    }

    #[test]
    fn test_check_keys_reports_first_failure() {
        let err = check_keys(&["ok", "bad key", "9lives"], false, MAX_VAR_KEY_LENGTH).unwrap_err();
        assert_eq!(err.key(), "bad key");
        assert!(check_keys(&["a", "b"], false, MAX_VAR_KEY_LENGTH).is_ok());
        assert!(check_keys::<&str>(&[], false, MAX_VAR_KEY_LENGTH).is_ok());
    }

    #[test]
    fn test_max_var_name_length() {
        assert_eq!(max_var_name_length("", MAX_VAR_KEY_LENGTH), MAX_VAR_KEY_LENGTH);
        assert_eq!(max_var_name_length(&"x".repeat(40), MAX_VAR_KEY_LENGTH), 40);
    }

    #[test]
    fn test_configured_limit() {
        assert_eq!(check_key("abcdef", false, 6), Ok(()));
        assert_eq!(
            check_key("abcdefg", false, 6),
            Err(KeyError::TooLong {
                key: "abcdefg".to_string(),
                max: 6
            })
        );
        assert_eq!(max_var_name_length("abc", 6), 6);
    }

    #[test]
    fn test_too_long_notification_names_limit() {
        let err = check_key("abcdefg", false, 6).unwrap_err();
        let notification = err.notification(&EnglishCatalog);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(
            notification.message,
            "abcdefg is too long. Can not be longer than 6 characters"
        );
    }

    #[test]
    fn test_invalid_key_notification() {
        let err = check("9lives", true).unwrap_err();
        assert_eq!(
            err.notification(&EnglishCatalog).message,
            "9lives can not start with a number"
        );
    }
}

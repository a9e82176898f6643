use serde::{Deserialize, Serialize};

/// Default `max_length` for string variables
pub const DEFAULT_VALUE_MAX_LEN: u32 = 48;

/// Default longest key accepted by [`crate::check_key`]
pub const MAX_VAR_KEY_LENGTH: usize = 30;

/// How the configured application is run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Chat,
    Completion,
}

/// Application-level facts the variable table reads from its surroundings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigContext {
    pub mode: AppMode,
    /// Number of datasets attached to the application
    pub dataset_count: usize,
}

impl ConfigContext {
    /// Context variables feed dataset retrieval only for completion apps with datasets
    pub fn guards_context_vars(&self) -> bool {
        self.mode == AppMode::Completion && self.dataset_count > 0
    }
}

/// Tunables for the variable table and its notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableTableConfig {
    pub duplicate_check_delay_ms: u32,
    pub default_max_length: u32,
    /// Longest key the table accepts
    pub max_key_length: usize,
    pub toast_duration_ms: u32,
}

impl Default for VariableTableConfig {
    fn default() -> Self {
        Self {
            duplicate_check_delay_ms: 1000,
            default_max_length: DEFAULT_VALUE_MAX_LEN,
            max_key_length: MAX_VAR_KEY_LENGTH,
            toast_duration_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = VariableTableConfig::default();
        assert_eq!(config.duplicate_check_delay_ms, 1000);
        assert_eq!(config.default_max_length, 48);
        assert_eq!(config.max_key_length, 30);
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let config: VariableTableConfig =
            serde_json::from_str(r#"{"duplicate_check_delay_ms": 250}"#).unwrap();
        assert_eq!(config.duplicate_check_delay_ms, 250);
        assert_eq!(config.default_max_length, DEFAULT_VALUE_MAX_LEN);
        assert_eq!(config.max_key_length, MAX_VAR_KEY_LENGTH);

        let config: VariableTableConfig = serde_json::from_str(r#"{"max_key_length": 12}"#).unwrap();
        assert_eq!(config.max_key_length, 12);
    }

    #[test]
    fn test_guards_context_vars() {
        let completion = ConfigContext {
            mode: AppMode::Completion,
            dataset_count: 2,
        };
        assert!(completion.guards_context_vars());

        let no_datasets = ConfigContext {
            mode: AppMode::Completion,
            dataset_count: 0,
        };
        assert!(!no_datasets.guards_context_vars());

        let chat = ConfigContext {
            mode: AppMode::Chat,
            dataset_count: 2,
        };
        assert!(!chat.guards_context_vars());
    }
}

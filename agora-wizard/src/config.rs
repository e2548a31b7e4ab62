//! Configuration for wizard sessions.

use serde::{Deserialize, Serialize};

/// Configuration for a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Timeout for backend calls (existence check and creation), in ms
    pub check_timeout_ms: u64,
    /// Whether to record the per-session transition history
    pub history_enabled: bool,
    /// Maximum history entries to retain before pruning
    pub history_max_entries: usize,
    /// Per-subscriber event channel depth
    pub event_buffer: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            check_timeout_ms: 10_000,
            history_enabled: true,
            history_max_entries: 1_000,
            event_buffer: 32,
        }
    }
}

impl WizardConfig {
    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert_eq!(config.check_timeout_ms, 10_000);
        assert!(config.history_enabled);
        assert_eq!(config.event_buffer, 32);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = WizardConfig {
            check_timeout_ms: 2_500,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = WizardConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.check_timeout_ms, 2_500);
    }
}

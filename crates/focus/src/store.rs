//! Focus configuration persistence
//!
//! The session configuration is saved as JSON after every successful `config`
//! and restored when the feature starts. Running countdowns are never saved.

use wellnus_core::{StorageError, Tokenizer};

use crate::session::SessionConfig;

/// Feature name used as the storage key
pub const FEATURE: &str = "focus";

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigTokenizer;

impl Tokenizer<SessionConfig> for ConfigTokenizer {
    fn tokenize(&self, config: &SessionConfig) -> Result<String, StorageError> {
        serde_json::to_string_pretty(config).map_err(|e| StorageError::Tokenize {
            feature: FEATURE.to_string(),
            reason: e.to_string(),
        })
    }

    fn detokenize(&self, text: &str) -> Result<SessionConfig, StorageError> {
        let config: SessionConfig =
            serde_json::from_str(text).map_err(|e| StorageError::Detokenize {
                feature: FEATURE.to_string(),
                reason: e.to_string(),
            })?;

        // Hand-edited files may hold anything
        config.validate().map_err(|e| StorageError::Detokenize {
            feature: FEATURE.to_string(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }
}

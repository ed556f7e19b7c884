//! Feature state storage
//!
//! Each feature's state is one opaque text blob, produced and consumed by that
//! feature's [`Tokenizer`]. The store only knows file names:
//! - `<data_dir>/<feature>.txt`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StorageError;

/// Converts feature state to and from its stored text form
pub trait Tokenizer<T> {
    /// Render state as text for storage
    fn tokenize(&self, state: &T) -> Result<String, StorageError>;

    /// Rebuild state from previously stored text
    fn detokenize(&self, text: &str) -> Result<T, StorageError>;
}

/// File-per-feature text store
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a store rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn feature_path(&self, feature: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", feature))
    }

    /// Save a feature's text, replacing anything stored before
    pub fn save(&self, feature: &str, text: &str) -> Result<(), StorageError> {
        let path = self.feature_path(feature);
        fs::write(&path, text)?;
        debug!(feature, path = %path.display(), "saved feature state");
        Ok(())
    }

    /// Load a feature's text, `None` if nothing was saved
    pub fn load(&self, feature: &str) -> Result<Option<String>, StorageError> {
        let path = self.feature_path(feature);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    /// Remove a feature's saved text
    pub fn clear(&self, feature: &str) -> Result<(), StorageError> {
        let path = self.feature_path(feature);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Save `state` through `tokenizer`
    pub fn save_with<T>(
        &self,
        feature: &str,
        tokenizer: &impl Tokenizer<T>,
        state: &T,
    ) -> Result<(), StorageError> {
        let text = tokenizer.tokenize(state)?;
        self.save(feature, &text)
    }

    /// Restore state through `tokenizer`. Unreadable data is logged and treated
    /// as absent so a corrupt file never blocks a feature from starting.
    pub fn restore_with<T>(&self, feature: &str, tokenizer: &impl Tokenizer<T>) -> Option<T> {
        let text = match self.load(feature) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!(feature, error = %e, "failed to read saved state");
                return None;
            }
        };

        match tokenizer.detokenize(&text) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(feature, error = %e, "ignoring unreadable saved state");
                None
            }
        }
    }
}

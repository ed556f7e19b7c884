//! Favourite question persistence
//!
//! Stored as a JSON array of question indices.

use wellnus_core::{StorageError, Tokenizer};

pub const FEATURE: &str = "reflect";

#[derive(Debug, Default, Clone, Copy)]
pub struct FavouritesTokenizer;

impl Tokenizer<Vec<usize>> for FavouritesTokenizer {
    fn tokenize(&self, favourites: &Vec<usize>) -> Result<String, StorageError> {
        serde_json::to_string(favourites).map_err(|e| StorageError::Tokenize {
            feature: FEATURE.to_string(),
            reason: e.to_string(),
        })
    }

    fn detokenize(&self, text: &str) -> Result<Vec<usize>, StorageError> {
        serde_json::from_str(text).map_err(|e| StorageError::Detokenize {
            feature: FEATURE.to_string(),
            reason: e.to_string(),
        })
    }
}

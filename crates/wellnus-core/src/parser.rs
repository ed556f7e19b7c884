//! Command-line tokenizer
//!
//! Turns `<keyword> [payload] [--flag [payload]]...` into an [`ArgumentMap`].
//! The keyword is stored both as [`ArgumentMap::keyword`] and as an ordinary
//! entry whose payload is the text between it and the first flag, so commands
//! look up `args.payload("config")` the same way they look up `args.payload("work")`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ParseError;

/// Prefix that introduces a named argument
pub const FLAG_MARKER: &str = "--";

/// Parsed arguments for a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentMap {
    keyword: String,
    entries: HashMap<String, String>,
}

impl ArgumentMap {
    /// The main keyword (first token of the line)
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Payload for a key, the keyword included. Empty string if none was given.
    pub fn payload(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Payload that followed the keyword
    pub fn keyword_payload(&self) -> &str {
        self.payload(&self.keyword).unwrap_or_default()
    }

    /// Number of entries, the keyword counts as one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flag names, excluding the keyword
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .filter(move |k| **k != self.keyword)
            .map(String::as_str)
    }

    /// Build a map directly from entries; `keyword` is inserted if absent.
    pub fn from_entries<I, K, V>(keyword: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        entries.entry(keyword.to_string()).or_default();
        Self {
            keyword: keyword.to_string(),
            entries,
        }
    }
}

/// Parse a raw line into an [`ArgumentMap`]
pub fn parse(raw: &str) -> Result<ArgumentMap, ParseError> {
    let mut tokens = raw.split_whitespace();
    let keyword = first_keyword(tokens.next())?;

    let mut entries = HashMap::new();
    let mut current_key = keyword.to_string();
    let mut payload: Vec<&str> = Vec::new();

    for token in tokens {
        match token.strip_prefix(FLAG_MARKER) {
            Some("") => return Err(ParseError::EmptyFlag),
            Some(name) => {
                insert_entry(&mut entries, current_key, &payload)?;
                current_key = name.to_string();
                payload.clear();
            }
            None => payload.push(token),
        }
    }
    insert_entry(&mut entries, current_key, &payload)?;

    debug!(keyword, entries = entries.len(), "parsed command line");

    Ok(ArgumentMap {
        keyword: keyword.to_string(),
        entries,
    })
}

/// Return only the keyword of a raw line
pub fn get_main_argument(raw: &str) -> Result<String, ParseError> {
    first_keyword(raw.split_whitespace().next()).map(str::to_string)
}

fn first_keyword(token: Option<&str>) -> Result<&str, ParseError> {
    match token {
        None => Err(ParseError::Empty),
        Some(t) if t.starts_with(FLAG_MARKER) => Err(ParseError::MissingKeyword(t.to_string())),
        Some(t) => Ok(t),
    }
}

fn insert_entry(
    entries: &mut HashMap<String, String>,
    key: String,
    payload: &[&str],
) -> Result<(), ParseError> {
    if entries.contains_key(&key) {
        return Err(ParseError::DuplicateArgument(key));
    }
    entries.insert(key, payload.join(" "));
    Ok(())
}

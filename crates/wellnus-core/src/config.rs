//! User configuration for WellNUS
//!
//! Read from `~/.config/wellnus/config.toml`. Every field is optional:
//!
//! ```toml
//! [focus]
//! cycles = 4
//! work = 25
//! break = 5
//! longbreak = 15
//!
//! [reflect]
//! questions_per_set = 5
//!
//! [shell]
//! history = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Global WellNUS configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub focus: FocusDefaults,

    #[serde(default)]
    pub reflect: ReflectSettings,

    #[serde(default)]
    pub shell: ShellSettings,
}

/// Starting values for a focus session, checked against bounds by the focus feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusDefaults {
    #[serde(default = "default_cycles")]
    pub cycles: u32,

    #[serde(default = "default_work")]
    pub work: u32,

    #[serde(rename = "break", default = "default_break")]
    pub break_minutes: u32,

    #[serde(rename = "longbreak", default = "default_long_break")]
    pub long_break: u32,
}

fn default_cycles() -> u32 {
    4
}

fn default_work() -> u32 {
    25
}

fn default_break() -> u32 {
    5
}

fn default_long_break() -> u32 {
    15
}

impl Default for FocusDefaults {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
            work: default_work(),
            break_minutes: default_break(),
            long_break: default_long_break(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectSettings {
    /// How many questions `get` draws at once
    #[serde(default = "default_questions_per_set")]
    pub questions_per_set: usize,
}

fn default_questions_per_set() -> usize {
    5
}

impl Default for ReflectSettings {
    fn default() -> Self {
        Self {
            questions_per_set: default_questions_per_set(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// Keep line-editor history between runs
    #[serde(default = "default_history")]
    pub history: bool,
}

fn default_history() -> bool {
    true
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            history: default_history(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

//! Standard paths used by WellNUS features

use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WELLNUS_DATA_DIR";

/// Standard WellNUS paths
#[derive(Debug, Clone)]
pub struct Paths {
    /// Data directory (~/.local/share/wellnus)
    pub data: PathBuf,
    /// Config directory (~/.config/wellnus)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("~/.local/share"))
                .join("wellnus"),
        };

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("wellnus");

        Self { data, config }
    }

    /// Default config file path
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }

    /// Line-editor history file
    pub fn history_file(&self) -> PathBuf {
        self.data.join("history.txt")
    }
}

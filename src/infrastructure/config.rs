//! Configuration management

use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "jotr.toml";

/// Environment variable overriding the notes file location
pub const STORAGE_ENV: &str = "JOTR_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the notes file
    pub storage: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: PathBuf::from("notes.json"),
        }
    }
}

impl Config {
    /// Resolve the effective configuration: the `--file` flag wins, then
    /// the `JOTR_FILE` environment variable, then `jotr.toml`, then the
    /// default `notes.json`.
    pub fn resolve(file_override: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = file_override {
            return Ok(Config { storage: path });
        }

        if let Ok(path) = std::env::var(STORAGE_ENV) {
            return Ok(Config {
                storage: PathBuf::from(path),
            });
        }

        Self::load(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a TOML file. A missing file is the default
    /// configuration; a malformed one is a configuration error, since the
    /// file is user-authored.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&contents)
            .map_err(|e| NotesError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| NotesError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;
        Ok(())
    }
}

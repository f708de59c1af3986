//! Config management use case

use crate::error::{NotesError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Get a single config value
pub fn get(config: &Config, key: &str) -> Result<String> {
    match key {
        "storage" => Ok(config.storage.display().to_string()),
        _ => Err(unknown_key(key)),
    }
}

/// Set a config value
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "storage" => {
            config.storage = PathBuf::from(value);
            Ok(())
        }
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> NotesError {
    NotesError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: storage",
        key
    ))
}

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::MentionsError;

const CONFIG_DIR: &str = "mentions";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's config file, falling back to defaults
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

/// Missing files give the defaults; unreadable or invalid files are logged
/// and also give the defaults.
pub fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let result = fs::read_to_string(path)
        .map_err(MentionsError::from)
        .and_then(|content| parse_config(&content));

    match result {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, MentionsError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;

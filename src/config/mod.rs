//! Configuration module for MedFinder
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "MEDFINDER_SETTINGS_PATH";

/// Default locations checked for a settings file, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/medfinder/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("medfinder/settings.yml"));
    }
    paths
}

/// Find the settings file to use
///
/// An explicit path must exist. Otherwise the environment variable and the
/// default paths are tried in order; `None` means defaults.
pub fn locate(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
        return Ok(Some(path));
    }

    Ok(std::env::var(SETTINGS_PATH_VAR)
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .chain(default_paths())
        .find(|path| path.exists()))
}

/// Load settings from a file or defaults, then apply environment overrides
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.merge_env();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_path_fails() {
        let err = locate(Some(PathBuf::from("/nonexistent/medfinder.yml"))).unwrap_err();
        assert!(err.to_string().contains("Settings file not found"));
    }

    #[test]
    fn test_load_defaults() {
        let settings = load(None).unwrap();
        assert_eq!(settings.search.population_size, 25);
    }
}

//! Settings structures for MedFinder configuration

use crate::cache::DEFAULT_TTL_SECONDS;
use crate::generator::catalog::POPULATION_SIZE;
use crate::search::DEFAULT_MAX_DISTANCE_KM;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MEDFINDER_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup; unparseable values are ignored
    pub fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("MEDFINDER_DEBUG") {
            self.general.debug = parse_flag(&val);
        }
        if let Some(port) = var("MEDFINDER_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("MEDFINDER_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("MEDFINDER_STATIC_DIR") {
            self.server.static_dir = Some(val).filter(|v| !v.is_empty());
        }
        if let Some(ttl) = var("MEDFINDER_CACHE_TTL").and_then(|v| v.parse().ok()) {
            self.search.cache_ttl = ttl;
        }
        if let Some(seed) = var("MEDFINDER_RNG_SEED").and_then(|v| v.parse().ok()) {
            self.search.rng_seed = Some(seed);
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name reported by /health
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "MedFinder".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Directory served for non-API paths
    pub static_dir: Option<String>,
    /// Send permissive CORS headers
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            static_dir: Some("static".to_string()),
            cors: true,
        }
    }
}

/// Doctor search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Records generated per population
    pub population_size: usize,
    /// Population lifetime in seconds
    pub cache_ttl: u64,
    /// Radius used when a request omits max_distance
    pub default_max_distance: f64,
    /// Anchor used when a request omits coordinates
    pub default_latitude: f64,
    pub default_longitude: f64,
    /// Fixed seed for reproducible populations
    pub rng_seed: Option<u64>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SIZE,
            cache_ttl: DEFAULT_TTL_SECONDS,
            default_max_distance: DEFAULT_MAX_DISTANCE_KM,
            default_latitude: 17.3850,
            default_longitude: 78.4867,
            rng_seed: None,
        }
    }
}

/// Read a boolean flag; `true`, `1`, `yes` and `on` enable it
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert!(!settings.general.debug);
        assert_eq!(settings.search.population_size, 25);
        assert_eq!(settings.search.cache_ttl, 3600);
        assert_eq!(settings.search.default_max_distance, 10.0);
    }

    #[test]
    fn test_partial_yaml() {
        let settings = Settings::from_yaml(
            "server:\n  port: 9000\nsearch:\n  cache_ttl: 60\n  rng_seed: 7\n",
        )
        .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.search.cache_ttl, 60);
        assert_eq!(settings.search.rng_seed, Some(7));
        assert_eq!(settings.search.population_size, 25);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MEDFINDER_DEBUG", "true"),
            ("MEDFINDER_PORT", "not-a-port"),
            ("MEDFINDER_BIND_ADDRESS", "0.0.0.0"),
            ("MEDFINDER_STATIC_DIR", ""),
            ("MEDFINDER_CACHE_TTL", "120"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert!(settings.general.debug);
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "0.0.0.0");
        assert!(settings.server.static_dir.is_none());
        assert_eq!(settings.search.cache_ttl, 120);
        assert!(settings.search.rng_seed.is_none());
    }

    #[test]
    fn test_debug_flag_values() {
        for (value, expected) in [
            ("1", true),
            ("0", false),
            ("TRUE", true),
            ("false", false),
            ("on", true),
            ("", false),
        ] {
            let mut settings = Settings::default();
            settings.merge_vars(|key| (key == "MEDFINDER_DEBUG").then(|| value.to_string()));
            assert_eq!(settings.general.debug, expected, "MEDFINDER_DEBUG={:?}", value);
        }
    }
}

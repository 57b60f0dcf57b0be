use crate::error::Result;
use crate::store::SeedPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_REPORT_PREFIX: &str = "rekap";

/// Configuration for absensi, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsensiConfig {
    /// Load the demo roster when no student data has been saved yet
    #[serde(default = "default_seed_roster")]
    pub seed_roster: bool,

    /// File name prefix for exported reports (e.g. "rekap" -> rekap_harian_2024-03-10.csv)
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,
}

fn default_seed_roster() -> bool {
    true
}

fn default_report_prefix() -> String {
    DEFAULT_REPORT_PREFIX.to_string()
}

impl Default for AbsensiConfig {
    fn default() -> Self {
        Self {
            seed_roster: default_seed_roster(),
            report_prefix: default_report_prefix(),
        }
    }
}

impl AbsensiConfig {
    pub const KEYS: [&'static str; 2] = ["seed-roster", "report-prefix"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AbsensiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        if self.seed_roster {
            SeedPolicy::SeedRoster
        } else {
            SeedPolicy::Empty
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed-roster" => Some(self.seed_roster.to_string()),
            "report-prefix" => Some(self.report_prefix.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "seed-roster" => {
                self.seed_roster = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("Invalid value for seed-roster: {}", value)),
                };
                Ok(())
            }
            "report-prefix" => {
                let prefix = value.trim();
                if prefix.is_empty() || prefix.contains(['/', '\\']) {
                    return Err(format!("Invalid value for report-prefix: {}", value));
                }
                self.report_prefix = prefix.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AbsensiConfig::default();
        assert!(config.seed_roster);
        assert_eq!(config.report_prefix, "rekap");
        assert_eq!(config.seed_policy(), SeedPolicy::SeedRoster);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = AbsensiConfig::load(dir.path()).unwrap();
        assert_eq!(config, AbsensiConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = AbsensiConfig::default();
        config.set("seed-roster", "off").unwrap();
        config.set("report-prefix", "absen").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = AbsensiConfig::load(dir.path()).unwrap();
        assert!(!loaded.seed_roster);
        assert_eq!(loaded.report_prefix, "absen");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"seed_roster": false}"#).unwrap();

        let loaded = AbsensiConfig::load(dir.path()).unwrap();
        assert!(!loaded.seed_roster);
        assert_eq!(loaded.report_prefix, "rekap");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = AbsensiConfig::default();
        assert!(config.set("seed-roster", "maybe").is_err());
        assert!(config.set("report-prefix", "a/b").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, AbsensiConfig::default());
    }
}

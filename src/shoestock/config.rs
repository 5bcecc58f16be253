use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "shoestock.json";
const DEFAULT_FILE: &str = "inventory.txt";
const DEFAULT_CURRENCY: &str = "R";

/// Keys understood by [`StockConfig::get`] and [`StockConfig::set`].
pub const KEYS: &[&str] = &["file", "strict", "currency"];

/// Configuration for shoestock, stored in shoestock.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Backing inventory file, relative paths resolve against the config dir
    #[serde(default = "default_file")]
    pub file: String,

    /// Refuse to load files with malformed lines instead of skipping them
    #[serde(default)]
    pub strict: bool,

    /// Currency symbol shown in front of costs and values
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            strict: false,
            currency: default_currency(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path, or return defaults if not found
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        self.save_file(config_dir.join(CONFIG_FILENAME))
    }

    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The inventory file, resolved against `base_dir` when relative.
    pub fn inventory_path(&self, base_dir: &Path) -> PathBuf {
        let file = Path::new(&self.file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            base_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file" => Some(self.file.clone()),
            "strict" => Some(self.strict.to_string()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StockError::Config("file cannot be empty".to_string()));
                }
                self.file = value.to_string();
            }
            "strict" => {
                self.strict = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(StockError::Config(format!(
                            "strict expects true or false, got '{}'",
                            other
                        )))
                    }
                };
            }
            "currency" => self.currency = value.trim().to_string(),
            other => {
                return Err(StockError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.file, "inventory.txt");
        assert!(!config.strict);
        assert_eq!(config.currency, "R");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = StockConfig::default();
        config.set("strict", "yes").unwrap();
        config.set("currency", "$").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = StockConfig::load(dir.path()).unwrap();
        assert!(loaded.strict);
        assert_eq!(loaded.currency, "$");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StockConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.file, "inventory.txt");
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_bool() {
        let mut config = StockConfig::default();
        assert!(matches!(config.set("color", "red"), Err(StockError::Config(_))));
        assert!(matches!(config.set("strict", "maybe"), Err(StockError::Config(_))));
        assert!(!config.strict);
    }

    #[test]
    fn test_inventory_path_resolution() {
        let mut config = StockConfig::default();
        let base = Path::new("/srv/shop");
        assert_eq!(config.inventory_path(base), base.join("inventory.txt"));

        let absolute = std::env::temp_dir().join("stock.txt");
        config.file = absolute.display().to_string();
        assert_eq!(config.inventory_path(base), absolute);
    }
}

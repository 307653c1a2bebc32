use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::discovery::DEFAULT_EXTENSION;
use crate::error::{ConvertError, Result};

const CONFIG_FILE: &str = "rules-converter.toml";

/// Default rules directory, relative to the working directory
pub const DEFAULT_RULES_DIR: &str = ".cursor/rules";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# rules-converter configuration file
# Location: ./rules-converter.toml

[convert]
# Directory scanned (recursively) for rule files
# Default: ".cursor/rules"
rules_dir = ".cursor/rules"

# Rule file extension
# Default: "mdc"
extension = "mdc"

# Wrap each generated block in <rules> ... </rules>
# Default: true
wrap = true
"#;

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Conversion-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertConfig {
    /// Directory holding the rule files
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,

    /// Rule file extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Wrap output blocks in marker lines
    #[serde(default = "default_wrap")]
    pub wrap: bool,
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RULES_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_wrap() -> bool {
    true
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            extension: default_extension(),
            wrap: default_wrap(),
        }
    }
}

/// A settable key in `rules-converter.toml`, written in dot notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RulesDir,
    Extension,
    Wrap,
}

impl ConfigKey {
    pub fn all() -> &'static [ConfigKey] {
        &[Self::RulesDir, Self::Extension, Self::Wrap]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RulesDir => "convert.rules_dir",
            Self::Extension => "convert.extension",
            Self::Wrap => "convert.wrap",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| ConvertError::ConfigKeyNotFound { key: s.to_string() })
    }
}

/// A config value with the type it has in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Path(PathBuf),
    Text(String),
    Bool(bool),
}

impl ConfigValue {
    /// The value as it would be written in TOML (strings quoted).
    pub fn to_toml(&self) -> String {
        toml::Value::from(self).to_string()
    }
}

impl From<&ConfigValue> for toml::Value {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Path(path) => toml::Value::String(path.display().to_string()),
            ConfigValue::Text(text) => toml::Value::String(text.clone()),
            ConfigValue::Bool(b) => toml::Value::Boolean(*b),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Text(text) => f.write_str(text),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn config_error(path: &Path, err: impl fmt::Display) -> ConvertError {
    ConvertError::ConfigParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl Config {
    /// Location of the config file for `base_dir`.
    pub fn file_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Read the config in `base_dir`; a missing file means all defaults.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = Self::file_path(base_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| config_error(&path, e))
    }

    pub fn save(&self, base_dir: &Path) -> Result<PathBuf> {
        let path = Self::file_path(base_dir);
        let content = toml::to_string_pretty(self).map_err(|e| config_error(&path, e))?;

        fs::create_dir_all(base_dir)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the commented default template. Returns `false` and leaves the file
    /// alone when one already exists.
    pub fn init(base_dir: &Path) -> Result<bool> {
        let path = Self::file_path(base_dir);
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(base_dir)?;
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(true)
    }

    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::RulesDir => ConfigValue::Path(self.convert.rules_dir.clone()),
            ConfigKey::Extension => ConfigValue::Text(self.convert.extension.clone()),
            ConfigKey::Wrap => ConfigValue::Bool(self.convert.wrap),
        }
    }

    /// Parse `raw` for `key`, store it, and return the stored value.
    pub fn set(&mut self, key: ConfigKey, raw: &str) -> Result<ConfigValue> {
        let invalid = || ConvertError::InvalidConfigValue {
            key: key.to_string(),
            value: raw.to_string(),
        };

        match key {
            ConfigKey::RulesDir => {
                let dir = raw.trim();
                if dir.is_empty() {
                    return Err(invalid());
                }
                self.convert.rules_dir = PathBuf::from(dir);
            }
            ConfigKey::Extension => {
                let ext = raw.trim().trim_start_matches('.');
                if ext.is_empty() {
                    return Err(invalid());
                }
                self.convert.extension = ext.to_string();
            }
            ConfigKey::Wrap => {
                self.convert.wrap = parse_bool(raw).ok_or_else(invalid)?;
            }
        }

        Ok(self.get(key))
    }

    pub fn list(&self) -> Vec<(ConfigKey, ConfigValue)> {
        ConfigKey::all()
            .iter()
            .map(|&key| (key, self.get(key)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use winit::event::VirtualKeyCode;

use crate::input::Button;
use crate::input_mapping::{key_from_name, InputMapper, DEFAULT_BINDINGS};

pub const CONFIG_PATH: &str = "picross.json";
pub const MAX_WINDOW_SCALE: u32 = 8;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown button name: {0}")]
    UnknownButton(String),
    #[error("Unknown key name: {0}")]
    UnknownKey(String),
    #[error("Key {key} is bound to both {first} and {second}")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },
    #[error("Window scale must be between 1 and 8, got {0}")]
    InvalidScale(u32),
}

/// Host settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_scale: u32,
    /// Button name to key name, e.g. `"a": "Z"`.
    pub keys: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let keys = DEFAULT_BINDINGS
            .iter()
            .map(|&(button, key)| (format!("{:?}", button).to_lowercase(), key.to_string()))
            .collect();
        Self { window_scale: 4, keys }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_WINDOW_SCALE).contains(&self.window_scale) {
            return Err(ConfigError::InvalidScale(self.window_scale));
        }
        self.bindings().map(|_| ())
    }

    /// Resolves the configured names into a key-to-button table.
    pub fn bindings(&self) -> Result<HashMap<VirtualKeyCode, Button>, ConfigError> {
        let mut bindings = HashMap::new();
        for (button_name, key_name) in &self.keys {
            let button = Button::from_name(button_name)
                .ok_or_else(|| ConfigError::UnknownButton(button_name.clone()))?;
            let key = key_from_name(key_name).ok_or_else(|| ConfigError::UnknownKey(key_name.clone()))?;
            if let Some(previous) = bindings.insert(key, button) {
                return Err(ConfigError::DuplicateKey {
                    key: key_name.clone(),
                    first: format!("{:?}", previous).to_lowercase(),
                    second: button_name.to_lowercase(),
                });
            }
        }
        Ok(bindings)
    }

    pub fn input_mapper(&self) -> InputMapper {
        match self.bindings() {
            Ok(bindings) => InputMapper::new(bindings),
            Err(err) => {
                log::warn!("Invalid key bindings, using defaults: {}", err);
                InputMapper::default()
            }
        }
    }

    /// Reads the config file, writing the defaults out if it doesn't exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            let config = Self::from_json(&text)?;
            log::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        let config = Self::default();
        fs::write(path, serde_json::to_string_pretty(&config)?)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    /// Like `load_or_create`, but never fails: problems are logged and defaults used.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_or_create(path).unwrap_or_else(|err| {
            log::warn!("{}; using default settings", err);
            Self::default()
        })
    }
}

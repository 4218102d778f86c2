//! Introspection configuration (TOML)
//!
//! ```toml
//! [auto_detect]
//! getters = true
//! setters = true
//! fields = true
//!
//! [serialization]
//! ignored_properties = ["password"]
//! inclusion = "non_null"
//!
//! [deserialization]
//! ignored_properties = []
//! force_access = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotations::Inclusion;
use crate::collector::IgnoredNames;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Top-level introspection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntrospectionConfig {
    /// Baseline auto-detection flags
    #[serde(default)]
    pub auto_detect: AutoDetectConfig,

    /// Settings for the serialization direction
    #[serde(default)]
    pub serialization: SerializationConfig,

    /// Settings for the deserialization direction
    #[serde(default)]
    pub deserialization: DeserializationConfig,
}

/// Baseline auto-detection, overridable per class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoDetectConfig {
    /// Detect `getX`/`isX` methods
    #[serde(default = "default_true")]
    pub getters: bool,

    /// Detect `setX` methods
    #[serde(default = "default_true")]
    pub setters: bool,

    /// Detect public fields
    #[serde(default = "default_true")]
    pub fields: bool,
}

impl Default for AutoDetectConfig {
    fn default() -> Self {
        Self {
            getters: true,
            setters: true,
            fields: true,
        }
    }
}

/// Serialization settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SerializationConfig {
    /// Property names never written
    #[serde(default)]
    pub ignored_properties: Vec<String>,

    /// Default inclusion when the class does not declare one
    #[serde(default)]
    pub inclusion: Inclusion,
}

/// Deserialization settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeserializationConfig {
    /// Property names never read
    #[serde(default)]
    pub ignored_properties: Vec<String>,

    /// Invoke non-public default constructors
    #[serde(default = "default_true")]
    pub force_access: bool,
}

impl Default for DeserializationConfig {
    fn default() -> Self {
        Self {
            ignored_properties: Vec::new(),
            force_access: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl SerializationConfig {
    /// Ignored names as a lookup set
    pub fn ignored(&self) -> IgnoredNames {
        self.ignored_properties.iter().cloned().collect()
    }
}

impl DeserializationConfig {
    /// Ignored names as a lookup set
    pub fn ignored(&self) -> IgnoredNames {
        self.ignored_properties.iter().cloned().collect()
    }
}

impl IntrospectionConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: IntrospectionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_ignored("serialization", &self.serialization.ignored_properties)?;
        validate_ignored("deserialization", &self.deserialization.ignored_properties)?;
        Ok(())
    }
}

fn validate_ignored(section: &str, names: &[String]) -> Result<(), ConfigError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(ConfigError::ValidationError(format!(
            "[{}] ignored_properties cannot contain empty names",
            section
        )));
    }
    Ok(())
}

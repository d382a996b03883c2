//! Configuration for the comparison pipeline
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (metadiff.toml)
//! - Environment variables (METADIFF_*)
//!
//! ## Example config file (metadiff.toml):
//! ```toml
//! [context]
//! identity_field = "fullName"
//!
//! [suppression]
//! markers = [
//!     { pattern = "valueSet", label = "valueSet" },
//!     { pattern = "picklistValues", label = "picklistValues" },
//! ]
//!
//! [decode]
//! sequence_fields = ["picklistValues", "fields"]
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::context::DEFAULT_IDENTITY_FIELD;
use crate::postprocess::{default_markers, NoiseMarker};

/// Main configuration for record comparison
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiffConfig {
    /// Context extraction settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Noise suppression settings
    #[serde(default)]
    pub suppression: SuppressionConfig,

    /// Decoder settings
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// Context extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Name of the identity field beneath the record root
    #[serde(default = "default_identity_field")]
    pub identity_field: String,
}

/// Noise suppression configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionConfig {
    /// Markers for known-noisy substructures; each suppressed group is
    /// replaced by one collapsed entry
    #[serde(default = "default_markers")]
    pub markers: Vec<NoiseMarker>,
}

/// Decoder configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DecodeConfig {
    /// Field names decoded as a sequence regardless of instance count
    #[serde(default)]
    pub sequence_fields: Vec<String>,
}

fn default_identity_field() -> String {
    DEFAULT_IDENTITY_FIELD.to_string()
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            identity_field: default_identity_field(),
        }
    }
}

impl Default for SuppressionConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
        }
    }
}

impl DiffConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["metadiff.toml", ".metadiff.toml", "config/metadiff.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "metadiff") {
            let xdg_config = config_dir.config_dir().join("metadiff.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (METADIFF_*)
        builder = builder.add_source(
            Environment::with_prefix("METADIFF")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

//! Configuration loading from bytes and from disk.

use std::fs;
use std::path::Path;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::schema::AgentConfig;
use crate::observability::report::ReportSink;

/// Syntax of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

impl AgentConfig {
    /// Parse a JSON document. Keys missing from `raw` keep their defaults.
    pub fn load_from_bytes(raw: &[u8]) -> ConfigResult<Self> {
        Self::load_from_slice(raw, ConfigFormat::Json)
    }

    /// Parse a document in the given format. A JSON `null` document yields the defaults.
    pub fn load_from_slice(raw: &[u8], format: ConfigFormat) -> ConfigResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => {
                serde_json::from_slice::<Option<Self>>(raw)?.unwrap_or_default()
            }
            ConfigFormat::Toml => {
                let text = std::str::from_utf8(raw).map_err(|e| {
                    ConfigError::Toml(<toml::de::Error as serde::de::Error>::custom(e))
                })?;
                toml::from_str(text)?
            }
        };
        Ok(config)
    }

    /// Read and parse a configuration file, picking the format from its extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| ConfigError::io(path, e))?;
        let format = ConfigFormat::from_path(path);

        tracing::debug!(path = %path.display(), ?format, bytes = raw.len(), "Read configuration file");
        Self::load_from_slice(&raw, format)
    }

    /// Pretty JSON rendering of the configuration, pools in positional form.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a configuration file and run initialization against `sink`.
pub fn load_config(
    path: &Path,
    sink: &mut dyn ReportSink,
) -> ConfigResult<AgentConfig> {
    let mut config = AgentConfig::load_from_file(path)?;
    config.initialize(sink);
    Ok(config)
}

//! Options file parsing (YAML/JSON).

use crate::config::error::ConfigError;
use crate::config::options::MockOptions;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Options file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Unknown,
}

/// Get options file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        _ => ConfigFileType::Unknown,
    }
}

/// Parse content based on the file type of `path`
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => Ok(serde_yaml::from_str(content)?),
        ConfigFileType::Json => Ok(serde_json::from_str(content)?),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Read and parse a middleware options file.
pub async fn load_options(path: &str) -> Result<MockOptions, ConfigError> {
    if get_file_type(path) == ConfigFileType::Unknown {
        return Err(ConfigError::UnknownFileType(path.to_string()));
    }
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
    let options: MockOptions = parse_config(&content, path)?;
    options.validate()?;
    tracing::debug!(path, "loaded mock options");
    Ok(options)
}

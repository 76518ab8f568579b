//! Loading of config data files (`.toml`, `.yaml`, `.yml`).

use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::FileStore;

/// Config data as written in a data file. Every key is optional so that
/// command-line flags can fill in or override values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDataFile {
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub kubernetes_version: Option<String>,
    #[serde(default)]
    pub unified_control_plane_image: Option<String>,
    #[serde(default)]
    pub docker_stable_tag: Option<String>,
}

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Toml,
    Yaml,
}

impl DataFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(DataFormat::Toml),
            "yaml" | "yml" => Ok(DataFormat::Yaml),
            _ => Err(AppError::UnsupportedDataFormat(path.display().to_string())),
        }
    }
}

/// Parse data file content in the given format.
pub fn parse_config_data(content: &str, format: DataFormat) -> Result<ConfigDataFile, AppError> {
    match format {
        DataFormat::Toml => Ok(toml::from_str(content)?),
        // serde_yaml rejects an empty document for a struct.
        DataFormat::Yaml if content.trim().is_empty() => Ok(ConfigDataFile::default()),
        DataFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Load and parse a data file through the file store.
pub fn load_config_data_file<F: FileStore>(
    path: &Path,
    files: &F,
) -> Result<ConfigDataFile, AppError> {
    let format = DataFormat::from_path(path)?;
    if !files.file_exists(path) {
        return Err(AppError::config_error(format!(
            "Config data file not found: {}",
            path.display()
        )));
    }
    let content = files.read_file(path)?;
    parse_config_data(&content, format)
}

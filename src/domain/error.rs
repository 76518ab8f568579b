use std::io;

use thiserror::Error;

/// Underlying diagnostic from the template engine.
pub type TemplateCause = Box<dyn std::error::Error + Send + Sync>;

/// Library-wide error type for kubeadm config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The config template is not syntactically valid.
    #[error("failed to parse config template: {0}")]
    TemplateParse(#[source] TemplateCause),

    /// The config template could not be executed against the supplied data.
    #[error("error executing config template: {0}")]
    TemplateExecution(#[source] TemplateCause),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or input issue.
    #[error("{0}")]
    Configuration(String),

    /// Config data file has an extension we cannot read.
    #[error("Unsupported config data format '{0}': expected .toml, .yaml or .yml")]
    UnsupportedDataFormat(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

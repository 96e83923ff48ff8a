use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// The simulation core never returns errors: bad control inputs are
/// clamped and numerical degeneracies recover locally, so only the
/// profile and constants loaders surface errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

use thiserror::Error;

pub type PreviewResult<T> = Result<T, PreviewError>;

#[derive(Error, Debug, Clone)]
pub enum PreviewError {
    #[error("Invalid custom property name '{name}': must start with a letter and contain only letters, digits, and hyphens")]
    InvalidVarName { name: String },

    #[error("Invalid value for custom property '{name}': {reason}")]
    InvalidVarValue { name: String, reason: String },

    #[error("Invalid resource URL '{value}': {reason}")]
    InvalidResourceUrl { value: String, reason: String },

    #[error("Invalid resource version '{value}': must be non-empty and contain only letters, digits, dots, underscores, and hyphens")]
    InvalidResourceVersion { value: String },

    #[error("YAML error: {0}")]
    YamlError(String),
}

impl From<serde_yaml::Error> for PreviewError {
    fn from(err: serde_yaml::Error) -> Self {
        PreviewError::YamlError(err.to_string())
    }
}

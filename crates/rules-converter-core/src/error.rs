use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Target must be either \"claude\" or \"gemini\" (got '{target}')")]
    InvalidTarget { target: String },

    #[error("Rules directory not found: {path}")]
    RulesDirNotFound { path: PathBuf },

    #[error("Rules path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("No rule files found in directory: {path}")]
    NoRuleFiles { path: PathBuf },

    #[error("Failed to read rule file {path}: {source}")]
    ReadRule {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidTarget { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 2,
            Self::RulesDirNotFound { .. } | Self::NotADirectory { .. } => 3,
            Self::NoRuleFiles { .. } => 4,
            Self::ReadRule { .. } | Self::Walk(_) => 5,
            _ => 1,
        }
    }

    /// Whether the error comes from the rule inputs rather than from setup.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::RulesDirNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::NoRuleFiles { .. }
                | Self::ReadRule { .. }
                | Self::Walk(_)
        )
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input aborted by user")]
    Aborted,

    #[error("Project directory already exists: {}", path.display())]
    PathConflict { path: PathBuf },

    #[error("Failed to {stage} at '{}': {source}", path.display())]
    Filesystem {
        stage: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No board profile configured for {board}")]
    ProfileNotFound { board: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ScaffoldError {
    /// 建立檔案系統錯誤，記錄失敗的階段與路徑
    pub fn filesystem(
        stage: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            stage,
            path: path.into(),
            source,
        }
    }

    /// 發生錯誤的管線階段
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::Aborted | Self::IoError(_) => "input",
            Self::PathConflict { .. } => "create project directory",
            Self::Filesystem { stage, .. } => *stage,
            Self::ProfileNotFound { .. } => "board profile lookup",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                "configuration"
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Use letters, digits, '-' or '_' in the project name",
            Self::Aborted => "Run the tool again when ready",
            Self::PathConflict { .. } => {
                "Choose a different project name or remove the existing directory"
            }
            Self::Filesystem { .. } => {
                "Check that the base path exists, is writable, and that the constraints file is present"
            }
            Self::ProfileNotFound { .. } => "Add the board to the [boards] table of the config file",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } | Self::TomlError(_) => {
                "Fix the configuration file or command line flags"
            }
            Self::IoError(_) => "Check that the terminal is readable and writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Aborted => "Aborted, nothing was written".to_string(),
            other => format!("{} failed: {}", other.stage(), other),
        }
    }

    /// 依錯誤種類決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Filesystem { .. } | Self::IoError(_) | Self::InvalidInput { .. } => 1,
            Self::PathConflict { .. } => 2,
            Self::ProfileNotFound { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => 3,
            Self::Aborted => 130,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

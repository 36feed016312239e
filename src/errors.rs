//! Unified application error type.
//! Loader, config, prompt and session code all return AppError so the
//! session loop can decide in one place what is recoverable.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,

    // ---------------------------
    // Dataset loading
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Cannot read dataset {}: {source}", .path.display())]
    DatasetUnreadable { path: PathBuf, source: io::Error },

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid start time on line {line}: '{value}'")]
    InvalidTimestamp { line: u64, value: String },

    // ---------------------------
    // Selection parsing
    // ---------------------------
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    /// Errors that end the current session iteration but leave the
    /// restart prompt available.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            AppError::Csv(_)
                | AppError::DatasetNotFound(_)
                | AppError::DatasetUnreadable { .. }
                | AppError::MissingColumn(_)
                | AppError::InvalidTimestamp { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

//! Error types and exit codes for refactor-extras

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for refactor-extras operations
#[derive(Error, Debug)]
pub enum RefactorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error on {}: {message}", path.display())]
    IoError { path: PathBuf, message: String },

    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },

    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },

    #[error("Invalid truncation precision: {digits} (expected 0 to 3)")]
    InvalidPrecision { digits: u8 },

    #[error("Failed to tokenize markup: {message}")]
    ParseFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Prompt failed: {message}")]
    PromptError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RefactorError {
    /// Wrap an [`std::io::Error`] with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound {
                path: path.display().to_string(),
            };
        }
        Self::IoError {
            path,
            message: err.to_string(),
        }
    }

    /// Convert error to the process exit code:
    /// - 0: Success (or cancelled by the user)
    /// - 1: File not found / IO error
    /// - 2: Operation rejected (reported through `Outcome`, not an error)
    /// - 3: Bad selection, cursor or precision argument
    /// - 4: Tokenizer failure
    /// - 5: Configuration error
    /// - 6: Prompt failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::IoError { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::InvalidSelection { .. } => ExitCode::from(3),
            Self::InvalidPosition { .. } => ExitCode::from(3),
            Self::InvalidPrecision { .. } => ExitCode::from(3),
            Self::ParseFailure { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(5),
            Self::PromptError { .. } => ExitCode::from(6),
        }
    }
}

/// Result type alias for refactor-extras operations
pub type Result<T> = std::result::Result<T, RefactorError>;

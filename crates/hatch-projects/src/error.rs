//! Error types for hatch-projects

use thiserror::Error;

/// Result type alias using hatch-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid template source reference
    #[error("Invalid template source: {reference}. Expected direct:<url>, github:<owner>/<repo>, gitlab:<owner>/<repo>, bitbucket:<owner>/<repo> or <owner>/<repo>, optionally followed by #<branch>")]
    InvalidTemplateSource { reference: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Destination already exists
    #[error("Destination already exists: {path}")]
    DestinationExists { path: String },

    /// Template download failed
    #[error("Failed to download template: {message}")]
    FetchFailed { message: String },

    /// Command not found on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Spawning a child process failed
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// package.json is valid JSON but not an object
    #[error("Invalid manifest at {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid template source error
    pub fn invalid_template_source(reference: impl Into<String>) -> Self {
        Self::InvalidTemplateSource {
            reference: reference.into(),
        }
    }

    /// Create a destination exists error
    pub fn destination_exists(path: impl Into<String>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// Create a fetch failed error
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a launch error
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Whether the child process could not be started at all
    pub fn is_launch_error(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. } | Self::Launch { .. })
    }
}

//! Failure classes of the create flow and how each one is reported

use thiserror::Error;
use tracing::debug;

use crate::output;

/// Why scaffolding stopped
#[derive(Error, Debug)]
pub enum CreateError {
    /// No project directory argument
    #[error("Please specify the project directory")]
    MissingDirectory,

    /// Something already occupies the target path
    #[error("{0} has exist in this directory")]
    DirectoryExists(String),

    /// The questions could not be shown or answered
    #[error("Init project fail, please retry")]
    Prompt(#[source] dialoguer::Error),

    /// Template download failed
    #[error("{0}")]
    Fetch(#[source] hatch_projects::Error),

    /// Version-control init could not be launched
    #[error("Git init fail: {0}")]
    VcsInit(#[source] hatch_projects::Error),

    /// Dependency install could not be launched
    #[error("Install dependencies fail: {0}")]
    Install(#[source] hatch_projects::Error),

    /// Anything else, reported with its full cause chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CreateError {
    /// Print the failure the way the user should see it
    pub fn report(&self) {
        match self {
            Self::MissingDirectory => output::usage(env!("CARGO_PKG_NAME")),
            Self::DirectoryExists(_) => output::alert(&self.to_string()),
            Self::Prompt(source) => {
                debug!("Prompt failed: {}", source);
                output::error(&self.to_string());
            }
            Self::Other(err) => output::error(&format!("{:#}", err)),
            _ => output::error(&self.to_string()),
        }
    }
}

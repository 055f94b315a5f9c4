//! Precondition checks run before anything touches the network

use hatch_projects::ProjectRequest;
use tracing::debug;

use super::error::CreateError;

/// Validate the project directory argument
///
/// Fails when the argument is missing or when anything already exists at that path.
pub(super) fn check(project_directory: Option<&str>) -> Result<ProjectRequest, CreateError> {
    let name = project_directory.ok_or(CreateError::MissingDirectory)?;
    let request = ProjectRequest::new(name);

    if request.target_exists() {
        return Err(CreateError::DirectoryExists(name.to_string()));
    }

    debug!("Target directory {} is free", name);
    Ok(request)
}

//! Post-fetch setup: version-control init and dependency install
//!
//! Both steps run a child process in the project directory with the terminal handed
//! over to it. A child that exits, whatever its exit code, counts as done; only a
//! child that cannot be started is an error.

use crate::error::{Error, Result};
use camino::Utf8Path;
use hatch_core::types::CommandConfig;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Run a command in `cwd` with inherited stdio and wait for it to exit
///
/// The command is resolved through `PATH` first, so shims such as `npm.cmd` on Windows
/// are found and a missing tool is reported as [`Error::CommandNotFound`].
pub async fn run_inherited(command: &CommandConfig, cwd: &Utf8Path) -> Result<ExitStatus> {
    let program =
        which::which(&command.command).map_err(|_| Error::command_not_found(&command.command))?;

    debug!("Running: {} (in {})", command.display(), cwd);
    let status = Command::new(&program)
        .args(&command.args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::launch(command.display(), e))?;

    if !status.success() {
        warn!("'{}' exited with {}", command.display(), status);
    }

    Ok(status)
}

/// Initialize version control in the project directory
pub async fn init_vcs(project_dir: &Utf8Path, command: &CommandConfig) -> Result<ExitStatus> {
    info!("Initializing version control in {}", project_dir);
    run_inherited(command, project_dir).await
}

/// Install dependencies, then run `on_complete`
///
/// `on_complete` runs once the installer has exited, regardless of its exit code. It is
/// never called when the installer cannot be launched.
pub async fn install_dependencies<F>(
    project_dir: &Utf8Path,
    command: &CommandConfig,
    on_complete: F,
) -> Result<ExitStatus>
where
    F: FnOnce(),
{
    info!("Installing dependencies in {}", project_dir);
    let status = run_inherited(command, project_dir).await?;
    on_complete();
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn temp_dir() -> (Utf8PathBuf, TempDir) {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (dir, temp)
    }

    #[tokio::test]
    async fn test_missing_command_is_launch_error() {
        let (dir, _temp) = temp_dir();
        let command = CommandConfig::new("hatch-no-such-installer", &["install"]);

        let mut completed = false;
        let result = install_dependencies(&dir, &command, || completed = true).await;

        let err = result.unwrap_err();
        assert!(err.is_launch_error());
        assert!(!completed);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_install_still_completes() {
        let (dir, _temp) = temp_dir();
        let command = CommandConfig::new("sh", &["-c", "exit 3"]);

        let mut completed = false;
        let status = install_dependencies(&dir, &command, || completed = true)
            .await
            .unwrap();

        assert_eq!(status.code(), Some(3));
        assert!(completed);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_project_directory() {
        let (dir, _temp) = temp_dir();
        let command = CommandConfig::new("sh", &["-c", "touch marker"]);

        let status = init_vcs(&dir, &command).await.unwrap();
        assert!(status.success());
        assert!(dir.join("marker").exists());
    }
}

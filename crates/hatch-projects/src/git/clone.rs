//! Template download by cloning the template repository

use crate::error::{Error, Result};
use crate::source::TemplateSource;
use crate::types::TemplateFlavor;
use camino::{Utf8Path, Utf8PathBuf};
use hatch_core::types::TemplateConfig;
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::{debug, info};

/// Everything needed to clone a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub source: TemplateSource,
    /// Branch to check out; falls back to the default branch when `None`
    pub branch: Option<String>,
    /// Shallow clone with depth 1
    pub shallow: bool,
}

impl FetchPlan {
    /// Resolve the plan from configuration
    ///
    /// `source_override` replaces the configured source reference. A flavor picks its
    /// configured branch, which takes precedence over a `#branch` in the reference.
    pub fn resolve(
        template: &TemplateConfig,
        source_override: Option<&str>,
        flavor: Option<TemplateFlavor>,
    ) -> Result<Self> {
        let source = TemplateSource::parse(source_override.unwrap_or(template.source.as_str()))?;

        let branch = match flavor {
            Some(flavor) => Some(flavor.branch(&template.branches).to_string()),
            None => source.branch.clone(),
        };

        Ok(Self {
            source,
            branch,
            shallow: template.shallow,
        })
    }

    /// Arguments passed to `git`
    pub fn clone_args(&self, destination: &Utf8Path) -> Vec<String> {
        let mut args = vec!["clone".to_string()];

        if self.shallow {
            args.push("--depth".to_string());
            args.push("1".to_string());
        }

        if let Some(branch) = &self.branch {
            args.push("--branch".to_string());
            args.push(branch.clone());
        }

        args.push(self.source.url.clone());
        args.push(destination.to_string());
        args
    }
}

/// Clone a template into `destination` and drop its git history
///
/// # Errors
/// Returns error if:
/// - Destination already exists
/// - Git is not installed
/// - The clone fails (unknown repository, missing branch, network)
///
/// A failed clone may leave a partial directory behind; it is not removed.
pub async fn fetch_template(plan: &FetchPlan, destination: &Utf8Path) -> Result<Utf8PathBuf> {
    info!("Fetching template: {} -> {}", plan.source.url, destination);

    if destination.exists() {
        return Err(Error::destination_exists(destination.as_str()));
    }

    let args = plan.clone_args(destination);
    debug!("Running: git {}", args.join(" "));

    let output = Command::new("git")
        .args(&args)
        // Fail instead of waiting on a credential prompt hidden behind the spinner
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::GitNotFound,
            _ => Error::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::fetch_failed(stderr.trim()));
    }

    let git_dir = destination.join(".git");
    if git_dir.exists() {
        debug!("Removing template history at {}", git_dir);
        tokio::fs::remove_dir_all(&git_dir).await?;
    }

    info!("Template fetched successfully");
    Ok(destination.to_path_buf())
}

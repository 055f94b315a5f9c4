//! `hatch <project-directory>` command handler
//!
//! Steps run strictly in order, each one awaited before the next starts:
//! preflight checks, questions, template download, package.json patch, git init,
//! dependency install. `--quick` skips the questions, the patch and git init.

mod error;
mod preflight;
mod questions;

pub use error::CreateError;

use anyhow::Context;
use camino::Utf8Path;
use console::style;
use hatch_core::config::HierarchicalConfigLoader;
use hatch_projects::git::{fetch_template, FetchPlan};
use hatch_projects::manifest::{patch_manifest, ManifestPatch};
use hatch_projects::setup::{init_vcs, install_dependencies};
use tracing::info;

use crate::cli::Cli;
use crate::output;

/// Create a new project from the template
pub async fn run(cli: Cli) -> Result<(), CreateError> {
    let request = preflight::check(cli.project_directory.as_deref())?;

    let config = HierarchicalConfigLoader::new()
        .and_then(|loader| loader.load())
        .context("Failed to load configuration")?;

    let root = request
        .root()
        .context("Failed to resolve the project directory")?;

    let answers = if cli.quick {
        None
    } else {
        let answers = tokio::task::spawn_blocking(questions::collect)
            .await
            .context("Question prompt did not finish")??;
        Some(answers)
    };

    let plan = FetchPlan::resolve(
        &config.template,
        cli.template.as_deref(),
        answers.as_ref().map(|a| a.template),
    )
    .map_err(CreateError::Fetch)?;

    println!("Creating a new react app in {}", style(&root).green());
    println!();
    download(&plan, &root).await?;

    if let Some(answers) = &answers {
        let patch = ManifestPatch::from_answers(&request.directory_name, answers);
        if patch_manifest(&root, &patch)
            .await
            .context("Failed to update package.json")?
        {
            info!("package.json updated for {}", request.directory_name);
        }

        init_vcs(&root, &config.vcs)
            .await
            .map_err(CreateError::VcsInit)?;
        output::success("Git init success");
    }

    let print_next_steps = || output::next_steps(&request.directory_name, &config.scripts);

    if cli.skip_install {
        print_next_steps();
        return Ok(());
    }

    println!();
    println!("Installing dependencies");
    install_dependencies(&root, &config.install, print_next_steps)
        .await
        .map_err(CreateError::Install)?;

    Ok(())
}

/// Download the template behind a spinner
async fn download(plan: &FetchPlan, root: &Utf8Path) -> Result<(), CreateError> {
    let spinner = output::spinner("Downloading react project template");
    let result = fetch_template(plan, root).await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            output::success("Download success");
            Ok(())
        }
        Err(err) => Err(CreateError::Fetch(err)),
    }
}

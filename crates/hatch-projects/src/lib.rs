//! # hatch-projects
//!
//! Project scaffolding library for the hatch CLI providing:
//! - Template source references and template download (`git clone`)
//! - package.json patching from collected answers
//! - Post-fetch setup (version-control init, dependency install)
//!
//! # Examples
//!
//! ## Scaffold a TypeScript project without prompts
//!
//! ```no_run
//! use hatch_core::types::HatchConfig;
//! use hatch_projects::git::{fetch_template, FetchPlan};
//! use hatch_projects::manifest::{patch_manifest, ManifestPatch};
//! use hatch_projects::setup::{init_vcs, install_dependencies};
//! use hatch_projects::{InitAnswers, TemplateFlavor};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HatchConfig::default();
//! let root = Utf8Path::new("/tmp/my-app");
//! let answers = InitAnswers::with_defaults(TemplateFlavor::TypeScript);
//!
//! let plan = FetchPlan::resolve(&config.template, None, Some(answers.template))?;
//! fetch_template(&plan, root).await?;
//! patch_manifest(root, &ManifestPatch::from_answers("my-app", &answers)).await?;
//! init_vcs(root, &config.vcs).await?;
//! install_dependencies(root, &config.install, || println!("done")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod manifest;
pub mod setup;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use source::TemplateSource;
pub use types::{InitAnswers, ProjectRequest, TemplateFlavor};

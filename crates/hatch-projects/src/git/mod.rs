//! Git operations module
//!
//! Templates are downloaded with `git clone`; the clone's own history is removed so the
//! new project can start a fresh repository.
//!
//! # Examples
//!
//! ```no_run
//! use hatch_core::types::TemplateConfig;
//! use hatch_projects::git::{fetch_template, FetchPlan};
//! use hatch_projects::TemplateFlavor;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = FetchPlan::resolve(&TemplateConfig::default(), None, Some(TemplateFlavor::TypeScript))?;
//! fetch_template(&plan, Utf8Path::new("/tmp/my-app")).await?;
//! # Ok(())
//! # }
//! ```

mod clone;

pub use clone::{fetch_template, FetchPlan};

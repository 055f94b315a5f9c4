//! Core types for project scaffolding

use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use hatch_core::types::FlavorBranches;
use regex::Regex;
use std::sync::OnceLock;

/// Version used when the version prompt is left blank
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Template flavor offered by the interactive flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFlavor {
    JavaScript,
    TypeScript,
}

impl TemplateFlavor {
    /// All flavors, in prompt order
    pub fn all() -> [Self; 2] {
        [Self::JavaScript, Self::TypeScript]
    }

    /// Get the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Branch of the template repository holding this flavor
    pub fn branch<'a>(&self, branches: &'a FlavorBranches) -> &'a str {
        match self {
            Self::JavaScript => &branches.javascript,
            Self::TypeScript => &branches.typescript,
        }
    }
}

impl std::fmt::Display for TemplateFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answers collected by the interactive flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitAnswers {
    pub template: TemplateFlavor,
    /// May be empty
    pub author: String,
    /// May be empty
    pub description: String,
    /// Always matches [`is_valid_version`]
    pub version: String,
}

impl InitAnswers {
    /// Answers for a flavor with every optional field left blank
    pub fn with_defaults(template: TemplateFlavor) -> Self {
        Self {
            template,
            author: String::new(),
            description: String::new(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

fn version_regex() -> &'static Regex {
    static VERSION: OnceLock<Regex> = OnceLock::new();
    VERSION.get_or_init(|| {
        Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{1,2}$").expect("version pattern is a valid regex")
    })
}

/// Check a version answer: three dot-separated numbers of one or two digits
pub fn is_valid_version(input: &str) -> bool {
    version_regex().is_match(input)
}

/// Validator for the version prompt, in the shape prompt libraries expect
pub fn validate_version(input: &str) -> std::result::Result<(), String> {
    if is_valid_version(input) {
        Ok(())
    } else {
        Err(format!(
            "Version must look like {} (up to two digits per part)",
            DEFAULT_VERSION
        ))
    }
}

/// A request to scaffold a project into a new directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Directory name as given on the command line
    pub directory_name: String,
}

impl ProjectRequest {
    pub fn new(directory_name: impl Into<String>) -> Self {
        Self {
            directory_name: directory_name.into(),
        }
    }

    /// Whether any filesystem entry (including a dangling symlink) occupies the target path
    pub fn target_exists(&self) -> bool {
        std::fs::symlink_metadata(&self.directory_name).is_ok()
    }

    /// Absolute path of the target directory
    pub fn root(&self) -> Result<Utf8PathBuf> {
        let absolute = std::path::absolute(&self.directory_name)?;
        Utf8PathBuf::from_path_buf(absolute)
            .map_err(|path| Error::invalid_path(path.to_string_lossy()))
    }
}

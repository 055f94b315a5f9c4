//! Configuration types for template fetching and post-fetch setup
//!
//! Everything here is read once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Complete hatch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HatchConfig {
    /// Template repository settings
    #[serde(default)]
    pub template: TemplateConfig,

    /// Version-control init command, run inside the new project
    #[serde(default = "default_vcs")]
    pub vcs: CommandConfig,

    /// Dependency install command, run inside the new project
    #[serde(default = "default_install")]
    pub install: CommandConfig,

    /// Run-script hints printed once the project is ready
    #[serde(default = "default_scripts")]
    pub scripts: Vec<ScriptHint>,
}

impl Default for HatchConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig::default(),
            vcs: default_vcs(),
            install: default_install(),
            scripts: default_scripts(),
        }
    }
}

/// User configuration file, where every section is optional.
///
/// Sections present in the file replace the corresponding defaults wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HatchConfigFile {
    #[serde(default)]
    pub template: Option<TemplateConfig>,
    #[serde(default)]
    pub vcs: Option<CommandConfig>,
    #[serde(default)]
    pub install: Option<CommandConfig>,
    #[serde(default)]
    pub scripts: Option<Vec<ScriptHint>>,
}

/// Template repository settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Source reference, e.g. `direct:https://host/repo.git#branch` or `owner/repo`
    #[serde(default = "default_template_source")]
    pub source: String,

    /// Shallow clone (`--depth 1`)
    #[serde(default = "default_shallow")]
    pub shallow: bool,

    /// Branch used for each template flavor
    #[serde(default)]
    pub branches: FlavorBranches,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            source: default_template_source(),
            shallow: default_shallow(),
            branches: FlavorBranches::default(),
        }
    }
}

/// Branch names for the JavaScript and TypeScript template flavors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlavorBranches {
    #[serde(default = "default_js_branch")]
    pub javascript: String,

    #[serde(default = "default_ts_branch")]
    pub typescript: String,
}

impl Default for FlavorBranches {
    fn default() -> Self {
        Self {
            javascript: default_js_branch(),
            typescript: default_ts_branch(),
        }
    }
}

/// An external command with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandConfig {
    pub fn new(command: impl Into<String>, args: &[&str]) -> Self {
        Self {
            command: command.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Parse a whitespace-separated command line such as `pnpm install --frozen-lockfile`
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_string();
        Some(Self {
            command,
            args: parts.map(String::from).collect(),
        })
    }

    /// Render as a single command line for display
    pub fn display(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A run-script hint shown in the "next steps" output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptHint {
    pub command: String,
    pub description: String,
}

fn default_template_source() -> String {
    "direct:https://github.com/maxiximxx/react-app-template.git".to_string()
}
fn default_shallow() -> bool {
    true
}
fn default_js_branch() -> String {
    "master".to_string()
}
fn default_ts_branch() -> String {
    "typescript".to_string()
}
fn default_vcs() -> CommandConfig {
    CommandConfig::new("git", &["init"])
}
fn default_install() -> CommandConfig {
    CommandConfig::new("npm", &["install"])
}
fn default_scripts() -> Vec<ScriptHint> {
    [
        ("npm run start", "Start the node server"),
        ("npm run dev", "Start the development server"),
        ("npm run build", "Bundle the app into static files for production"),
    ]
    .into_iter()
    .map(|(command, description)| ScriptHint {
        command: command.to_string(),
        description: description.to_string(),
    })
    .collect()
}

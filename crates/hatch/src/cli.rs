//! CLI argument parsing with clap

use clap::{ArgAction, Parser};

/// Hatch - scaffold a new React project from a remote template
#[derive(Parser, Debug)]
#[command(name = "hatch")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(override_usage = "hatch <project-directory> [options]")]
pub struct Cli {
    /// Directory to create the project in (must not exist yet)
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)] // handled by clap, never read
    version: Option<bool>,

    /// Skip the questions: download the default template without patching package.json
    /// or initializing git
    #[arg(long)]
    pub quick: bool,

    /// Template source, e.g. github:owner/repo#branch or direct:<git-url>
    #[arg(long, value_name = "SOURCE")]
    pub template: Option<String>,

    /// Do not run the dependency install command
    #[arg(long)]
    pub skip_install: bool,

    /// Increase log verbosity (--verbose, --verbose --verbose)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

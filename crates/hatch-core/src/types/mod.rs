//! Configuration types

mod config_types;

pub use config_types::{
    CommandConfig, FlavorBranches, HatchConfig, HatchConfigFile, ScriptHint, TemplateConfig,
};

//! # hatch-core
//!
//! Core library for the hatch CLI providing:
//! - Configuration types for template sources and post-fetch commands
//! - A hierarchical configuration loader (embedded defaults, user file, environment)
//! - The shared error type

pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};

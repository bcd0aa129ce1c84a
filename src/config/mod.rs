//! Configuration module for documentation extraction
//!
//! This module provides the `MetaConfig` struct and its builder. All values
//! are fixed constants from `utils::constants` unless overridden in code;
//! nothing is read from the environment.

pub mod builder;
pub mod types;

pub use builder::MetaConfigBuilder;
pub use types::MetaConfig;

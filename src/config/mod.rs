//! Configuration module for Wikia-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. The file is optional: every field has a default and the CLI can
//! override any of them.
//!
//! # Example
//!
//! ```no_run
//! use wikia_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Output directory: {}", config.harvest.output_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HarvestConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;

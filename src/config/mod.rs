//! Configuration module for Antologia
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section has baked-in defaults matching the target site, so
//! the binary can run with no configuration file at all.
//!
//! # Example
//!
//! ```no_run
//! use antologia::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("antologia.toml")).unwrap();
//! println!("Base URL: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, LimitsConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation for callers constructing configs in code
pub use validation::validate;

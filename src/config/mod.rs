//! Configuration loading and management for the CTC Decomposition Engine.
//!
//! This module provides the calculation configuration record with its
//! documented defaults, plus functionality to load effective-dated
//! statutory schemes from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SalaryConfig, SchemeConfig, SchemeMetadata, StatutoryRevision};

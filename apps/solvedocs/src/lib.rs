//! # solvedocs Library
//!
//! This library exposes the solvedocs modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod metadata;
pub mod scan;

pub use config::Config;
pub use error::{CliError, Result};

// Re-export the library crates for convenience
pub use solvedocs_client;
pub use solvedocs_core;

//! Integration test suite for unveil
//!
//! End-to-end tests that run the compiled binary against real files in a
//! temporary directory.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **extraction**: one source kind per test, sorting, quoting
//! - **output_file**: `--output` and atomic replacement
//! - **error_scenarios**: exit status, stderr and empty stdout on failure
//! - **cli_options**: help, version, environment defaults, logging flags

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli_options;
mod error_scenarios;
mod extraction;
mod output_file;

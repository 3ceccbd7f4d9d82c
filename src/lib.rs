//! unveil - extract values from configuration files into environment lines
//!
//! unveil reads scalar values out of JSON, YAML, TOML, INI and flat
//! `KEY=VALUE` files and prints them as sorted `KEY=VALUE` lines, ready to be
//! sourced by a shell or loaded as a dotenv file.
//!
//! # Pipeline
//!
//! ```text
//! argv ──► cli::dynamic ──► config::RunConfig ──► collector ──► [ExtractSpec]
//!                                                                    │
//!        output ◄── extract (EnvMap, quoted) ◄── resolver (per kind) ◄┘
//! ```
//!
//! 1. [`cli`] parses global options with clap and the user-named
//!    `--<kind>.<ID>.<field>` instance flags with [`cli::dynamic`].
//! 2. [`collector`] turns every instance into an [`spec::ExtractSpec`],
//!    deriving the variable name and the effective quote mode.
//! 3. [`extract`] resolves each spec through a [`resolver::ValueResolver`],
//!    quotes the value with [`quote::quote_value`] and stores it in a sorted
//!    map. The first failure aborts the run.
//! 4. [`output`] renders the map to a writer or atomically to a file.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line parsing and the `run` entry point
//! - [`collector`] - Instance to extraction-spec flattening
//! - [`config`] - Plain run configuration handed over by the CLI
//! - [`core`] - Error types and user-facing error formatting
//! - [`extract`] - Resolution loop producing the environment map
//! - [`output`] - `KEY=VALUE` rendering, stream and atomic file
//! - [`quote`] - Shell and JSON quoting modes
//! - [`resolver`] - Per-format value lookup
//! - [`spec`] - Source kinds and extraction specs
//! - [`utils`] - Filesystem helpers (atomic writes, path expansion)
//!
//! # Example
//!
//! ```bash
//! $ unveil --json.web.path=cfg.json --json.web.select=server.host --json.web.as=HOST \
//!          --file.env.path=app.env --file.env.select=TOKEN --quote single
//! ENV='secret'
//! HOST='localhost'
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod core;
pub mod extract;
pub mod output;
pub mod quote;
pub mod resolver;
pub mod spec;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

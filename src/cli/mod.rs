//! Command-line interface for unveil.
//!
//! Global options are declared with clap. Instance flags
//! (`--<kind>.<ID>.<field>`) are handled by [`dynamic`] because their names
//! are chosen by the user.
//!
//! # Example
//!
//! ```bash
//! unveil \
//!   --json.web.path=config.json --json.web.select=server.host --json.web.as=HOST \
//!   --ini.db.path=conf.ini --ini.db.select=DB.User \
//!   --quote single --output .env
//! ```
//!
//! # Environment
//!
//! | Variable | Flag |
//! |----------|------|
//! | `UNVEIL_QUOTE` | `--quote` |
//! | `UNVEIL_OUTPUT` | `--output` |
//! | `UNVEIL_EXPORT` | `--export` |
//! | `RUST_LOG` | overrides `--verbose` / `--quiet` |

pub mod dynamic;


use std::ffi::OsString;
use std::io::Write;
use std::sync::Once;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use crate::collector::collect;
use crate::config::{InstanceGroup, RunConfig};
use crate::core::UnveilError;
use crate::extract::extract_all;
use crate::output::{write_env_lines, write_env_lines_atomic};
use crate::quote::QuoteMode;
use crate::utils::fs::expand_path;

const INSTANCE_HELP: &str = "\
Instance flags (KIND is one of json, yaml, file, toml, ini):
  --KIND.ID.path PATH     path to the source file (required)
  --KIND.ID.select KEY    selector/key to extract (required)
  --KIND.ID.as VAR        destination variable. Defaults to ID in upper case.
  --KIND.ID.quote MODE    quote mode for this value [none, single, double, json]

Selectors: json/yaml/toml use dotted paths (server.host), ini uses Section.Key,
file uses the bare key.";

#[derive(Parser, Debug)]
#[command(
    name = "unveil",
    version,
    about = "Extract values from config files into sorted KEY=VALUE lines",
    after_help = INSTANCE_HELP
)]
pub struct Cli {
    /// Quote mode for values without a per-instance quote
    #[arg(
        long,
        value_enum,
        value_name = "MODE",
        default_value_t = QuoteMode::None,
        env = "UNVEIL_QUOTE"
    )]
    pub quote: QuoteMode,

    /// Write to file (atomically) instead of stdout
    #[arg(short, long, value_name = "PATH", env = "UNVEIL_OUTPUT")]
    pub output: Option<String>,

    /// Add "export" prefix to all variables
    #[arg(long, env = "UNVEIL_EXPORT")]
    pub export: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Combines the global options with the parsed instance groups.
    ///
    /// # Errors
    ///
    /// Fails if `--output` cannot be expanded. An empty `--output` means stdout.
    pub fn into_run_config(self, groups: Vec<InstanceGroup>) -> Result<RunConfig, UnveilError> {
        let output = self
            .output
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(expand_path)
            .transpose()?;
        Ok(RunConfig {
            quote: self.quote,
            output,
            export: self.export,
            groups,
        })
    }

    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Parses `args` (without the program name), extracts every declared value
/// and writes the result to the configured file or to `out`.
///
/// `--help` and `--version` text is written to `out`. Nothing is written to
/// `out` unless every value resolved.
///
/// # Errors
///
/// Any configuration, resolution or output error; see [`UnveilError`].
pub fn run<I, T>(args: I, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let split = dynamic::split_args(args.into_iter().map(Into::into).collect());
    let argv = std::iter::once(OsString::from("unveil")).chain(split.rest);

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render()).context("writing help text")?;
            out.flush().context("flushing output")?;
            return Ok(());
        }
        Err(e) => {
            let rendered = e.render().to_string();
            let message = rendered.trim().trim_start_matches("error: ").to_string();
            return Err(UnveilError::Usage { message }.into());
        }
    };

    init_logging(cli.log_level());

    let groups = dynamic::build_groups(&split.instance_flags)?;
    let config = cli.into_run_config(groups)?;
    execute(&config, out)
}

/// Runs an already parsed configuration: collect, resolve, render.
///
/// A configuration without instances is a no-op: nothing is written, not even
/// an empty output file.
///
/// # Errors
///
/// The first collection, resolution or output error.
pub fn execute(config: &RunConfig, out: &mut dyn Write) -> Result<()> {
    let specs = collect(config)?;
    if specs.is_empty() {
        tracing::debug!("no instances declared, nothing to do");
        return Ok(());
    }

    let kv = extract_all(&specs)?;

    match &config.output {
        Some(path) => write_env_lines_atomic(path, &kv, config.export)?,
        None => {
            write_env_lines(out, &kv, config.export)?;
            out.flush().map_err(|source| UnveilError::Write { source })?;
        }
    }

    tracing::debug!("wrote {} variable(s)", kv.len());
    Ok(())
}

/// Installs the stderr log subscriber once per process.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_logging(level: &str) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("unveil={level}"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

//! Error handling for unveil
//!
//! Two typed error enums cover the whole pipeline:
//! - [`UnveilError`] - configuration, collection, resolution and output failures
//! - [`ResolveError`] - why a single value could not be read from a source file
//!
//! Application glue works in [`anyhow::Result`]; the binary converts whatever
//! bubbles up into an [`ErrorContext`] via [`user_friendly_error`] and prints it
//! to stderr with an actionable suggestion.
//!
//! Every error is terminal for the run. Nothing retries and nothing reports
//! partial success: either the complete output is produced or none is.
//!
//! # Examples
//!
//! ```rust,no_run
//! use unveil::core::{user_friendly_error, UnveilError};
//!
//! let err = UnveilError::UnknownGroup { group: "xml".to_string() };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display();
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;

use crate::spec::SourceKind;

/// The main error type for unveil operations.
///
/// Variants are grouped by the stage that produces them:
///
/// ## Configuration
/// - [`UnknownDynamicGroup`], [`UnknownField`], [`MissingValue`],
///   [`MissingRequired`], [`InvalidQuote`], [`PathExpansion`], [`Usage`], [`Config`]
///
/// ## Collection
/// - [`UnknownGroup`]
///
/// ## Resolution
/// - [`Resolve`]
///
/// ## Output
/// - [`Write`], [`CreateDir`], [`TempFile`], [`WriteTemp`], [`Sync`], [`Rename`]
///
/// [`UnknownDynamicGroup`]: UnveilError::UnknownDynamicGroup
/// [`UnknownField`]: UnveilError::UnknownField
/// [`MissingValue`]: UnveilError::MissingValue
/// [`MissingRequired`]: UnveilError::MissingRequired
/// [`InvalidQuote`]: UnveilError::InvalidQuote
/// [`PathExpansion`]: UnveilError::PathExpansion
/// [`Usage`]: UnveilError::Usage
/// [`Config`]: UnveilError::Config
/// [`UnknownGroup`]: UnveilError::UnknownGroup
/// [`Resolve`]: UnveilError::Resolve
/// [`Write`]: UnveilError::Write
/// [`CreateDir`]: UnveilError::CreateDir
/// [`TempFile`]: UnveilError::TempFile
/// [`Sync`]: UnveilError::Sync
/// [`WriteTemp`]: UnveilError::WriteTemp
/// [`Rename`]: UnveilError::Rename
#[derive(Error, Debug)]
pub enum UnveilError {
    /// A `--<group>.<id>.<field>` flag named a group that is not registered.
    #[error("unknown dynamic group \"{group}\" in flag {flag}")]
    UnknownDynamicGroup { group: String, flag: String },

    /// A dynamic flag named a field other than path/select/as/quote.
    #[error("unknown field \"{field}\" for group \"{group}\" in flag {flag}")]
    UnknownField {
        group: String,
        field: String,
        flag: String,
    },

    #[error("flag needs an argument: {flag}")]
    MissingValue { flag: String },

    #[error("missing required flag {flag}")]
    MissingRequired { flag: String },

    #[error("invalid value \"{value}\" for flag {flag}: must be one of none, single, double, json")]
    InvalidQuote { flag: String, value: String },

    #[error("cannot expand path \"{path}\": {reason}")]
    PathExpansion { path: String, reason: String },

    /// The global flags could not be parsed.
    #[error("{message}")]
    Usage { message: String },

    /// Several configuration problems reported together, one per line.
    #[error("{}", join_lines(.0))]
    Config(Vec<UnveilError>),

    /// An instance group outside the supported source kinds reached the collector.
    #[error("unknown group \"{group}\"")]
    UnknownGroup { group: String },

    /// A value could not be resolved; the whole run is aborted.
    #[error("{kind} \"{variable}\" (path=\"{}\"): {source}", .path.display())]
    Resolve {
        kind: SourceKind,
        variable: String,
        path: PathBuf,
        #[source]
        source: ResolveError,
    },

    #[error("writing output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("creating output directory \"{}\": {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("creating temp file in \"{}\": {source}", .dir.display())]
    TempFile {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syncing temp file \"{}\": {source}", .path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing temp file \"{}\": {source}", .path.display())]
    WriteTemp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("renaming \"{}\" to \"{}\": {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn join_lines(errors: &[UnveilError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

impl UnveilError {
    /// Collapses a list of configuration errors: one error stays as-is,
    /// several become [`UnveilError::Config`].
    #[must_use]
    pub fn from_many(mut errors: Vec<UnveilError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Config(errors)),
        }
    }
}

/// Why a single locator could not be resolved to a string.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {kind} file {}: {message}", .path.display())]
    Parse {
        kind: SourceKind,
        path: PathBuf,
        message: String,
    },

    #[error("key \"{selector}\" not found in {}", .path.display())]
    SelectorNotFound { selector: String, path: PathBuf },

    #[error("value at \"{selector}\" is {found}, not a scalar")]
    NotScalar { selector: String, found: &'static str },

    #[error("invalid locator \"{locator}\": {reason}")]
    InvalidLocator { locator: String, reason: String },
}

/// A printable error with optional details and a suggestion for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub message: String,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Prints the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Converts any error into an [`ErrorContext`] with a suggestion where one applies.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(err) = error.downcast_ref::<UnveilError>() {
        return create_error_context(err);
    }

    // Context chains from anyhow carry the useful part in the causes.
    ErrorContext::new(format!("{error:#}"))
}

fn create_error_context(error: &UnveilError) -> ErrorContext {
    let ctx = ErrorContext::new(error.to_string());
    match error {
        UnveilError::UnknownDynamicGroup { .. } | UnveilError::UnknownGroup { .. } => ctx
            .with_suggestion("Use one of the supported groups: json, yaml, file, toml, ini")
            .with_details("Instance flags have the form --<group>.<ID>.<field>=<value>"),
        UnveilError::UnknownField { .. } => ctx
            .with_suggestion("Instance fields are path, select, as and quote"),
        UnveilError::MissingValue { .. } => {
            ctx.with_suggestion("Pass the value as --flag=value or --flag value")
        }
        UnveilError::MissingRequired { .. } => ctx.with_suggestion(
            "Every instance needs both --<group>.<ID>.path and --<group>.<ID>.select",
        ),
        UnveilError::InvalidQuote { .. } => {
            ctx.with_suggestion("Valid quote modes: none, single, double, json")
        }
        UnveilError::PathExpansion { .. } => ctx
            .with_suggestion("Define the referenced environment variable or use a literal path"),
        UnveilError::Usage { .. } | UnveilError::Config(_) => {
            ctx.with_suggestion("Run 'unveil --help' to see the flag syntax")
        }
        UnveilError::Resolve { source, .. } => match source {
            ResolveError::FileNotFound { .. } => {
                ctx.with_suggestion("Check that the file exists and the path is correct")
            }
            ResolveError::Read { .. } => {
                ctx.with_suggestion("Check the file permissions")
            }
            ResolveError::Parse { .. } => ctx
                .with_suggestion("Check the file syntax matches the group it was declared under"),
            ResolveError::SelectorNotFound { .. } => ctx
                .with_suggestion("Check the selector")
                .with_details(
                    "json, yaml and toml use dotted paths (server.host), ini uses Section.Key, \
                     file uses the bare key",
                ),
            ResolveError::NotScalar { .. } => ctx.with_suggestion(
                "Select a string, number or boolean; \
                 objects and lists cannot be written as a single value",
            ),
            ResolveError::InvalidLocator { .. } => ctx,
        },
        UnveilError::Write { .. } => ctx,
        UnveilError::CreateDir { .. }
        | UnveilError::TempFile { .. }
        | UnveilError::Sync { .. }
        | UnveilError::WriteTemp { .. }
        | UnveilError::Rename { .. } => ctx
            .with_suggestion("Check that the output directory is writable")
            .with_details("The output file was left unchanged"),
    }
}

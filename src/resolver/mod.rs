//! Resolves a single value from a source file.
//!
//! A [`Locator`] names the file syntax, the file, and a selector inside it. Its
//! string form is `<kind>:<path>//<selector>`:
//!
//! ```text
//! json:/etc/app/config.json//server.host
//! ini:conf.ini//Database.User
//! file:.env//API_KEY
//! ```
//!
//! [`ValueResolver`] is the seam the extraction engine depends on; the
//! [`FileResolver`] implementation reads the file from disk on every call and
//! decodes it with the format-specific readers in [`structured`] and [`ini`].
//!
//! # Selectors
//!
//! | Kind | Selector | Example |
//! |------|----------|---------|
//! | json, yaml, toml | dot-separated keys, numeric segments index arrays | `servers.0.host` |
//! | ini | `Section.Key`, split at the last dot; bare `Key` reads the unnamed section | `DB.User` |
//! | file | bare key | `TOKEN` |
//!
//! Only scalars can be selected. Objects, arrays and null are reported as
//! [`ResolveError::NotScalar`].

pub mod ini;
pub mod structured;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::ResolveError;
use crate::spec::{ExtractSpec, SourceKind};

/// Where to find one value: file syntax, file path and selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub selector: String,
}

impl Locator {
    pub fn new(kind: SourceKind, path: impl Into<PathBuf>, selector: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            selector: selector.into(),
        }
    }
}

impl From<&ExtractSpec> for Locator {
    fn from(spec: &ExtractSpec) -> Self {
        Self::new(spec.kind, &spec.path, &spec.selector)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}//{}", self.kind, self.path.display(), self.selector)
    }
}

impl FromStr for Locator {
    type Err = ResolveError;

    /// Parses `<kind>:<path>//<selector>`.
    ///
    /// The kind ends at the first `:` and the selector starts after the last
    /// `//`, so Windows drive letters and `//` inside the path both survive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ResolveError::InvalidLocator {
            locator: s.to_string(),
            reason: reason.to_string(),
        };

        let (kind, rest) = s.split_once(':').ok_or_else(|| invalid("missing \"<kind>:\" prefix"))?;
        let kind: SourceKind = kind
            .parse()
            .map_err(|e: crate::spec::UnknownSourceKind| invalid(&e.to_string()))?;
        let (path, selector) =
            rest.rsplit_once("//").ok_or_else(|| invalid("missing \"//<selector>\" suffix"))?;

        if path.is_empty() {
            return Err(invalid("empty path"));
        }
        if selector.is_empty() {
            return Err(invalid("empty selector"));
        }

        Ok(Self::new(kind, path, selector))
    }
}

/// Resolves a [`Locator`] to the string found at its selector.
pub trait ValueResolver {
    /// # Errors
    ///
    /// Returns a [`ResolveError`] describing why the value could not be read:
    /// missing file, malformed content, absent selector or non-scalar value.
    fn resolve(&self, locator: &Locator) -> Result<String, ResolveError>;
}

/// Reads values straight from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileResolver;

impl FileResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ValueResolver for FileResolver {
    fn resolve(&self, locator: &Locator) -> Result<String, ResolveError> {
        tracing::trace!("resolving {locator}");
        let content = read_source(&locator.path)?;
        let path = locator.path.as_path();
        let selector = locator.selector.as_str();

        match locator.kind {
            SourceKind::Json => structured::select_json(&content, selector, path),
            SourceKind::Yaml => structured::select_yaml(&content, selector, path),
            SourceKind::Toml => structured::select_toml(&content, selector, path),
            SourceKind::Ini => ini::select_ini(&content, selector, path),
            SourceKind::File => ini::select_flat(&content, selector, path),
        }
    }
}

/// Resolves a locator in its string form (`<kind>:<path>//<selector>`) with
/// the default [`FileResolver`].
///
/// # Errors
///
/// Returns [`ResolveError::InvalidLocator`] for a malformed string, otherwise
/// whatever [`FileResolver::resolve`] returns.
///
/// # Examples
///
/// ```rust,no_run
/// let host = unveil::resolver::resolve_str("json:config.json//server.host")?;
/// # Ok::<(), unveil::core::ResolveError>(())
/// ```
pub fn resolve_str(locator: &str) -> Result<String, ResolveError> {
    FileResolver.resolve(&locator.parse::<Locator>()?)
}

fn read_source(path: &Path) -> Result<String, ResolveError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ResolveError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ResolveError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

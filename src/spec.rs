//! Extraction specifications: "read key K from file F into variable V, quoted as Q".

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::quote::QuoteMode;

/// The syntax of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Json,
    Yaml,
    Toml,
    Ini,
    /// Flat `KEY=VALUE` lines.
    File,
}

impl SourceKind {
    /// Every supported kind, in the order their flag groups are registered.
    pub const ALL: [Self; 5] = [Self::Json, Self::Yaml, Self::File, Self::Toml, Self::Ini];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Ini => "ini",
            Self::File => "file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a group tag is not one of the five source kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source kind \"{0}\"")]
pub struct UnknownSourceKind(pub String);

impl FromStr for SourceKind {
    type Err = UnknownSourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSourceKind(s.to_string()))
    }
}

/// One extraction request.
///
/// Created by [`crate::collector::collect`] with `variable` already derived and
/// `quote` already resolved against the global default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSpec {
    /// Decoder to use for `path`.
    pub kind: SourceKind,
    /// File to read.
    pub path: PathBuf,
    /// Kind-specific selector inside the file.
    pub selector: String,
    /// Destination variable name.
    pub variable: String,
    /// Quoting applied to the resolved value.
    pub quote: QuoteMode,
}

//! Line-oriented formats: INI files and flat `KEY=VALUE` files.
//!
//! Both formats trim whitespace around keys and values and strip one pair of
//! matching surrounding quotes from a value. When a key repeats, the last
//! occurrence wins.

use std::collections::HashMap;
use std::path::Path;

use crate::core::ResolveError;
use crate::spec::SourceKind;

/// Parsed INI content keyed by `(section, key)`. Entries before the first
/// section header live in the section named `""`.
#[derive(Debug, Default)]
pub struct IniDocument {
    entries: HashMap<(String, String), String>,
}

impl IniDocument {
    /// Parses INI text.
    ///
    /// Accepts `[Section]` headers, `key = value` and `key: value` entries, and
    /// `;` or `#` comment lines.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending line for an unterminated
    /// section header or a line without a delimiter.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut doc = Self::default();
        let mut section = String::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| format!("line {}: unterminated section header", idx + 1))?;
                section = name.trim().to_string();
                continue;
            }

            let (key, value) = line
                .split_once(['=', ':'])
                .ok_or_else(|| format!("line {}: key-value delimiter not found", idx + 1))?;
            doc.entries
                .insert(
                    (section.clone(), key.trim().to_string()),
                    unquote(value.trim()).to_string(),
                );
        }

        Ok(doc)
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.entries
            .get(&(section.to_string(), key.to_string()))
            .map(String::as_str)
    }
}

/// Selects `Section.Key` (split at the last dot) or a bare `Key` from the
/// unnamed section.
pub fn select_ini(content: &str, selector: &str, path: &Path) -> Result<String, ResolveError> {
    let doc = IniDocument::parse(content).map_err(|message| ResolveError::Parse {
        kind: SourceKind::Ini,
        path: path.to_path_buf(),
        message,
    })?;

    let (section, key) = selector.rsplit_once('.').unwrap_or(("", selector));
    doc.get(section, key)
        .map(str::to_string)
        .ok_or_else(|| ResolveError::SelectorNotFound {
            selector: selector.to_string(),
            path: path.to_path_buf(),
        })
}

/// Parses flat `KEY=VALUE` lines. A leading `export ` is ignored.
///
/// # Errors
///
/// Returns a message naming the first line that has no `=`.
pub fn parse_flat(content: &str) -> Result<HashMap<String, String>, String> {
    let mut entries = HashMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map_or(line, str::trim_start);

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| format!("line {}: expected KEY=VALUE", idx + 1))?;
        entries.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    Ok(entries)
}

pub fn select_flat(content: &str, selector: &str, path: &Path) -> Result<String, ResolveError> {
    let mut entries = parse_flat(content).map_err(|message| ResolveError::Parse {
        kind: SourceKind::File,
        path: path.to_path_buf(),
        message,
    })?;

    entries.remove(selector).ok_or_else(|| ResolveError::SelectorNotFound {
        selector: selector.to_string(),
        path: path.to_path_buf(),
    })
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

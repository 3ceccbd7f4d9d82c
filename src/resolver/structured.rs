//! Dotted-path selection in JSON, YAML and TOML documents.
//!
//! Each format's value type implements [`Tree`], so walking a selector and
//! rendering the scalar at the end is shared.

use std::path::Path;

use crate::core::ResolveError;
use crate::spec::SourceKind;

/// A decoded document that can be walked one selector segment at a time.
pub trait Tree: Sized {
    /// Child under `segment`: a mapping key, or an index into a sequence.
    fn child(&self, segment: &str) -> Option<&Self>;

    /// The scalar as a string, or a short description of what was found instead.
    fn scalar(&self) -> Result<String, &'static str>;
}

/// Walks `selector` from `root` and renders the scalar found there.
///
/// # Errors
///
/// [`ResolveError::SelectorNotFound`] if any segment is missing,
/// [`ResolveError::NotScalar`] if the selector ends on a mapping, sequence or null.
pub fn select<T: Tree>(root: &T, selector: &str, path: &Path) -> Result<String, ResolveError> {
    let mut node = root;
    for segment in selector.split('.') {
        node = node.child(segment).ok_or_else(|| ResolveError::SelectorNotFound {
            selector: selector.to_string(),
            path: path.to_path_buf(),
        })?;
    }

    node.scalar().map_err(|found| ResolveError::NotScalar {
        selector: selector.to_string(),
        found,
    })
}

fn parse_error(kind: SourceKind, path: &Path, err: impl ToString) -> ResolveError {
    ResolveError::Parse {
        kind,
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn index(segment: &str) -> Option<usize> {
    segment.parse().ok()
}

pub fn select_json(content: &str, selector: &str, path: &Path) -> Result<String, ResolveError> {
    let root: serde_json::Value =
        serde_json::from_str(content).map_err(|e| parse_error(SourceKind::Json, path, e))?;
    select(&root, selector, path)
}

pub fn select_yaml(content: &str, selector: &str, path: &Path) -> Result<String, ResolveError> {
    let root: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| parse_error(SourceKind::Yaml, path, e))?;
    select(&root, selector, path)
}

pub fn select_toml(content: &str, selector: &str, path: &Path) -> Result<String, ResolveError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| parse_error(SourceKind::Toml, path, e))?;
    select(&toml::Value::Table(table), selector, path)
}

impl Tree for serde_json::Value {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(segment),
            Self::Array(items) => items.get(index(segment)?),
            _ => None,
        }
    }

    fn scalar(&self) -> Result<String, &'static str> {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Number(n) => Ok(n.to_string()),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Null => Err("null"),
            Self::Array(_) => Err("an array"),
            Self::Object(_) => Err("an object"),
        }
    }
}

impl Tree for serde_yaml::Value {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            // Non-string keys (`8080: x`, `true: y`) match their rendered form.
            Self::Mapping(map) => map.get(segment).or_else(|| {
                map.iter()
                    .find(|(key, _)| key.scalar().is_ok_and(|k| k == segment))
                    .map(|(_, value)| value)
            }),
            Self::Sequence(items) => items.get(index(segment)?),
            Self::Tagged(tagged) => tagged.value.child(segment),
            _ => None,
        }
    }

    fn scalar(&self) -> Result<String, &'static str> {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Number(n) => Ok(n.to_string()),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Null => Err("null"),
            Self::Sequence(_) => Err("a sequence"),
            Self::Mapping(_) => Err("a mapping"),
            Self::Tagged(tagged) => tagged.value.scalar(),
        }
    }
}

impl Tree for toml::Value {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Table(table) => table.get(segment),
            Self::Array(items) => items.get(index(segment)?),
            _ => None,
        }
    }

    fn scalar(&self) -> Result<String, &'static str> {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Integer(i) => Ok(i.to_string()),
            Self::Float(f) => Ok(format_float(*f)),
            Self::Boolean(b) => Ok(b.to_string()),
            Self::Datetime(dt) => Ok(dt.to_string()),
            Self::Array(_) => Err("an array"),
            Self::Table(_) => Err("a table"),
        }
    }
}

/// Shortest round-trip form. `1.0` stays `1.0` rather than collapsing to `1`;
/// very large or very small magnitudes use exponent notation (`1e300`).
fn format_float(f: f64) -> String {
    let magnitude = f.abs();
    if !f.is_finite() {
        f.to_string()
    } else if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-5) {
        format!("{f:e}")
    } else if f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

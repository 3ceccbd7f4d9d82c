//! Renders resolved values as `KEY=VALUE` lines.
//!
//! Keys are written in ascending byte order, one per line, each line ending
//! in `\n`. Values are written as-is: quoting already happened during
//! extraction. With `export` set every line becomes `export KEY=VALUE`.

use std::io::{self, Write};
use std::path::Path;

use crate::core::UnveilError;
use crate::extract::EnvMap;
use crate::utils::fs::atomic_write_with;

/// Writes sorted `KEY=VALUE` lines to `w`.
///
/// A write failure stops immediately. Lines already written stay written; the
/// caller treats a partial stream together with the error as a failed run.
///
/// # Errors
///
/// Returns [`UnveilError::Write`] if the writer fails.
///
/// # Examples
///
/// ```
/// use unveil::extract::EnvMap;
/// use unveil::output::write_env_lines;
///
/// let kv = EnvMap::from([("B".to_string(), "2".to_string()), ("A".to_string(), "1".to_string())]);
/// let mut out = Vec::new();
/// write_env_lines(&mut out, &kv, true).unwrap();
/// assert_eq!(out, b"export A=1\nexport B=2\n");
/// ```
pub fn write_env_lines<W: Write + ?Sized>(
    w: &mut W,
    kv: &EnvMap,
    export: bool,
) -> Result<(), UnveilError> {
    render_lines(w, kv, export).map_err(|source| UnveilError::Write { source })
}

/// Writes sorted `KEY=VALUE` lines to `path` atomically.
///
/// The parent directory tree is created if needed. The destination either
/// keeps its previous contents or receives the complete new contents.
///
/// # Errors
///
/// Any error from [`atomic_write_with`]; the temp file is always removed.
pub fn write_env_lines_atomic(path: &Path, kv: &EnvMap, export: bool) -> Result<(), UnveilError> {
    atomic_write_with(path, |w| render_lines(w, kv, export))
}

fn render_lines<W: Write + ?Sized>(w: &mut W, kv: &EnvMap, export: bool) -> io::Result<()> {
    let prefix = if export { "export " } else { "" };
    // EnvMap is a BTreeMap over String, so iteration is already byte-wise sorted.
    for (key, value) in kv {
        writeln!(w, "{prefix}{key}={value}")?;
    }
    Ok(())
}

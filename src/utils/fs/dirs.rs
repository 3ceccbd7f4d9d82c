//! Directory creation.

use std::fs;
use std::io;
use std::path::Path;

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// New directories get the platform's default permissions (respecting umask
/// on Unix).
///
/// # Errors
///
/// Fails if creation fails or `path` exists but is not a directory.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(io::Error::other(format!(
            "path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

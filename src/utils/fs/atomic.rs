//! Atomic file replacement using a temp-and-rename strategy.
//!
//! The temp file is created in the destination's own directory so the final
//! rename never crosses a filesystem. Readers of the destination see either
//! the previous contents or the complete new contents, never a partial write.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use super::dirs::ensure_dir;
use crate::core::UnveilError;

/// Prefix for temp files created next to the destination.
pub const TEMP_PREFIX: &str = ".unveil-";

/// Replaces `path` with whatever `render` writes, atomically.
///
/// Steps, in order: create the parent directory tree, create a temp file in
/// it, run `render` into the temp file, fsync, close, rename over `path`.
/// If any step fails the temp file is removed and `path` is left untouched.
///
/// # Arguments
///
/// * `path` - The destination file
/// * `render` - Writes the new contents; an error from it aborts the write
///
/// # Errors
///
/// One of [`UnveilError::CreateDir`], [`UnveilError::TempFile`],
/// [`UnveilError::WriteTemp`], [`UnveilError::Sync`] or [`UnveilError::Rename`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::io::Write;
/// use std::path::Path;
/// use unveil::utils::fs::atomic_write_with;
///
/// atomic_write_with(Path::new("out/app.env"), |w| w.write_all(b"A=1\n"))?;
/// # Ok::<(), unveil::core::UnveilError>(())
/// ```
pub fn atomic_write_with<F>(path: &Path, render: F) -> Result<(), UnveilError>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = parent_dir(path);
    ensure_dir(&dir).map_err(|source| UnveilError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    // Dropping `tmp` on any early return removes the temp file.
    let mut tmp = Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(&dir)
        .map_err(|source| UnveilError::TempFile {
            dir: dir.clone(),
            source,
        })?;
    let tmp_path = tmp.path().to_path_buf();
    tracing::trace!("writing {} via {}", path.display(), tmp_path.display());

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        render(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|source| UnveilError::WriteTemp {
                path: tmp_path.clone(),
                source,
            })?;
    }

    tmp.as_file().sync_all().map_err(|source| UnveilError::Sync {
        path: tmp_path.clone(),
        source,
    })?;

    // Closes the handle; the returned path still deletes itself on drop.
    let temp_path = tmp.into_temp_path();
    temp_path.persist(path).map_err(|err| UnveilError::Rename {
        from: tmp_path,
        to: path.to_path_buf(),
        source: err.error,
    })?;

    tracing::debug!("wrote {}", path.display());
    Ok(())
}

/// Directory the temp file goes in. A bare file name lives in `.`.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

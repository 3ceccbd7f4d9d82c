//! User-supplied path expansion.

use std::path::PathBuf;

use crate::core::UnveilError;

/// Expands a leading `~` and `$VAR` / `${VAR}` references in a user path.
///
/// # Errors
///
/// Returns [`UnveilError::PathExpansion`] if a referenced variable is not set.
///
/// # Examples
///
/// ```rust,no_run
/// use unveil::utils::fs::expand_path;
///
/// let path = expand_path("~/.config/app/settings.json")?;
/// # Ok::<(), unveil::core::UnveilError>(())
/// ```
pub fn expand_path(path: &str) -> Result<PathBuf, UnveilError> {
    shellexpand::full(path)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| UnveilError::PathExpansion {
            path: path.to_string(),
            reason: e.to_string(),
        })
}

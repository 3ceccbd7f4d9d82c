//! File system helpers: atomic replacement, directory creation and path expansion.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::io::Write;
//! use unveil::utils::fs::{atomic_write_with, expand_path};
//!
//! # fn example() -> Result<(), unveil::core::UnveilError> {
//! let path = expand_path("$HOME/.cache/app.env")?;
//! atomic_write_with(&path, |w| w.write_all(b"TOKEN=secret\n"))?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod paths;

pub use atomic::atomic_write_with;
pub use paths::expand_path;

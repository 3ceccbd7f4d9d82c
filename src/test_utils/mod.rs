//! Test utilities for unveil
//!
//! Helpers shared by unit tests and the integration suite: one-time logging
//! setup and a scratch directory for writing source files.
//!
//! # Example
//!
//! ```rust,no_run
//! use unveil::test_utils::SourceFiles;
//!
//! let files = SourceFiles::new();
//! let path = files.write("cfg.json", r#"{"server":{"host":"localhost"}}"#);
//! assert!(std::path::Path::new(&path).exists());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. An explicit `level` wins over
/// `RUST_LOG`; with neither, logging stays off.
///
/// # Arguments
///
/// * `level` - Optional log level to use. If None, uses `RUST_LOG` environment variable
///
/// ```bash
/// RUST_LOG=unveil=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A temporary directory holding source files for a test.
///
/// The directory is removed when the value is dropped.
pub struct SourceFiles {
    dir: TempDir,
}

impl SourceFiles {
    /// Creates an empty scratch directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Root of the scratch directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path for `name` inside the scratch directory. The file is not
    /// created.
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` to `name`, creating parent directories, and returns
    /// the path as a string ready to be spliced into a flag.
    ///
    /// # Panics
    ///
    /// Panics on any I/O error.
    pub fn write(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path.display().to_string()
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}

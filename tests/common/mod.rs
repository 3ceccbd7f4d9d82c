//! Common test utilities for unveil integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use unveil::test_utils::{SourceFiles, init_test_logging};

/// Environment variables that change CLI defaults and must not leak in from
/// the developer's shell.
const ISOLATED_VARS: &[&str] = &["UNVEIL_QUOTE", "UNVEIL_OUTPUT", "UNVEIL_EXPORT", "RUST_LOG"];

/// Builds an `unveil` command with a clean environment, running in `cwd`.
pub fn unveil(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("unveil").unwrap();
    for var in ISOLATED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(cwd);
    cmd
}

/// Scratch project directory with a few canonical source files.
///
/// Built on [`SourceFiles`], which owns the temporary directory.
pub struct Project {
    pub files: SourceFiles,
}

impl Project {
    pub fn new() -> Self {
        init_test_logging(None);
        Self {
            files: SourceFiles::new(),
        }
    }

    /// Project populated with one source file per supported kind.
    pub fn with_all_sources() -> Self {
        let project = Self::new();
        project.write(
            "cfg.json",
            r#"{"server":{"host":"localhost","ports":[80,443],"tls":true},"name":"o'neil"}"#,
        );
        project.write("cfg.yaml", "db:\n  user: alice\n  pool: 5\nempty: null\n");
        project.write("cfg.toml", "[server]\nhost = \"toml-host\"\nratio = 1.5\n");
        project.write("conf.ini", "; comment\n[DB]\nUser = \"alice\"\nPort: 5432\n");
        project.write("app.env", "# app env\nexport TOKEN=secret\nEMPTY=\n");
        project
    }

    pub fn root(&self) -> &Path {
        self.files.root()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.files.path(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> String {
        self.files.write(name, contents)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    pub fn cmd(&self) -> Command {
        unveil(self.root())
    }

    /// Entries of the project root whose name starts with `prefix`.
    pub fn entries_with_prefix(&self, prefix: &str) -> Vec<String> {
        fs::read_dir(self.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(prefix))
            .collect()
    }
}

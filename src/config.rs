//! Run configuration as handed over by the command-line layer.
//!
//! This is plain data. The CLI builds it once from global flags and the
//! `--<kind>.<ID>.<field>` instance flags; [`crate::collector::collect`] turns
//! it into [`crate::spec::ExtractSpec`]s.
//!
//! Group names stay strings here so that a group outside the supported source
//! kinds is rejected by the collector rather than being unrepresentable.

use std::path::PathBuf;

use crate::quote::QuoteMode;

/// Everything a single run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Quote mode for instances that do not set their own.
    pub quote: QuoteMode,
    /// Write atomically to this file instead of the output stream.
    pub output: Option<PathBuf>,
    /// Prefix every line with `export `.
    pub export: bool,
    /// Declared instances, grouped by source kind tag.
    pub groups: Vec<InstanceGroup>,
}

impl RunConfig {
    /// Total number of declared instances across all groups.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.groups.iter().map(|g| g.instances.len()).sum()
    }
}

/// Instances declared under one source kind tag (`json`, `yaml`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceGroup {
    pub name: String,
    pub instances: Vec<Instance>,
}

impl InstanceGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instances: Vec::new(),
        }
    }

    /// Builder-style helper used by tests and the flag parser.
    #[must_use]
    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.push(instance);
        self
    }
}

/// One named instance, e.g. `web` in `--json.web.path=cfg.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    /// Identifier within the group; upper-cased when no `as` is given.
    pub id: String,
    /// Source file, already `~`/`$VAR` expanded by the CLI layer.
    pub path: PathBuf,
    pub select: String,
    /// Destination variable, used verbatim.
    pub as_name: Option<String>,
    /// Per-instance quote mode tag.
    pub quote: Option<String>,
}

impl Instance {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>, select: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            select: select.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_as(mut self, name: impl Into<String>) -> Self {
        self.as_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }
}

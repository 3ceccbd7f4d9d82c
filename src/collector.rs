//! Flattens declared instances into [`ExtractSpec`]s.
//!
//! Two rules are applied per instance:
//!
//! - **Variable name**: `as` is used verbatim when given; otherwise the
//!   instance ID is upper-cased (`--json.web.path=...` writes `WEB`).
//! - **Quote mode**: a per-instance `quote` wins over the global default.
//!
//! Groups and instances are visited in the order they appear in
//! [`RunConfig::groups`]. Output is sorted downstream, so the order only
//! matters for which of two instances with the same variable name wins
//! (the later one).

use crate::config::{Instance, RunConfig};
use crate::core::UnveilError;
use crate::quote::QuoteMode;
use crate::spec::{ExtractSpec, SourceKind};

/// Builds one [`ExtractSpec`] per declared instance.
///
/// # Errors
///
/// Returns [`UnveilError::UnknownGroup`] if a group name is not one of the
/// supported source kinds.
///
/// # Examples
///
/// ```
/// use unveil::collector::collect;
/// use unveil::config::{Instance, InstanceGroup, RunConfig};
///
/// let config = RunConfig {
///     groups: vec![
///         InstanceGroup::new("json")
///             .with_instance(Instance::new("web", "cfg.json", "server.host")),
///     ],
///     ..RunConfig::default()
/// };
/// let specs = collect(&config).unwrap();
/// assert_eq!(specs[0].variable, "WEB");
/// ```
pub fn collect(config: &RunConfig) -> Result<Vec<ExtractSpec>, UnveilError> {
    let mut specs = Vec::with_capacity(config.instance_count());

    for group in &config.groups {
        let kind: SourceKind = group.name.parse().map_err(|_| UnveilError::UnknownGroup {
            group: group.name.clone(),
        })?;

        for instance in &group.instances {
            specs.push(build_spec(kind, instance, config.quote));
        }
    }

    tracing::debug!("collected {} extraction spec(s)", specs.len());
    Ok(specs)
}

fn build_spec(kind: SourceKind, instance: &Instance, default_quote: QuoteMode) -> ExtractSpec {
    let variable = match instance.as_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => instance.id.to_uppercase(),
    };

    let quote = match instance.quote.as_deref() {
        Some(tag) if !tag.is_empty() => QuoteMode::from_tag_lenient(tag),
        _ => default_quote,
    };

    ExtractSpec {
        kind,
        path: instance.path.clone(),
        selector: instance.select.clone(),
        variable,
        quote,
    }
}

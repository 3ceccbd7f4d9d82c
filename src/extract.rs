//! Resolves extraction specs into a map of destination variable to quoted value.
//!
//! Resolution is all-or-nothing: the first spec that fails aborts the run and
//! no partial map is returned. Duplicate variable names are not an error; the
//! later spec overwrites the earlier one.

use std::collections::BTreeMap;

use crate::core::UnveilError;
use crate::quote::quote_value;
use crate::resolver::{FileResolver, Locator, ValueResolver};
use crate::spec::ExtractSpec;

/// Destination variable to rendered value. Iterates in byte-wise key order.
pub type EnvMap = BTreeMap<String, String>;

/// Resolves every spec from disk with [`FileResolver`].
///
/// # Errors
///
/// Returns [`UnveilError::Resolve`] for the first spec that cannot be resolved.
pub fn extract_all(specs: &[ExtractSpec]) -> Result<EnvMap, UnveilError> {
    extract_all_with(specs, &FileResolver)
}

/// Resolves every spec through `resolver`, quoting each value per its spec.
///
/// # Errors
///
/// Returns [`UnveilError::Resolve`] naming the kind, variable and path of the
/// first failing spec and wrapping the underlying cause.
pub fn extract_all_with(
    specs: &[ExtractSpec],
    resolver: &dyn ValueResolver,
) -> Result<EnvMap, UnveilError> {
    let mut out = EnvMap::new();

    for spec in specs {
        let locator = Locator::from(spec);
        let value = resolver.resolve(&locator).map_err(|source| UnveilError::Resolve {
            kind: spec.kind,
            variable: spec.variable.clone(),
            path: spec.path.clone(),
            source,
        })?;

        tracing::debug!(variable = %spec.variable, quote = %spec.quote, "resolved {locator}");
        if out.insert(spec.variable.clone(), quote_value(&value, spec.quote)).is_some() {
            tracing::debug!("{} declared more than once, keeping the last value", spec.variable);
        }
    }

    Ok(out)
}

//! Dynamic instance flags: `--<kind>.<ID>.<field>=<value>`.
//!
//! clap cannot declare flags whose names are chosen by the user, so these are
//! pulled out of the argument list before clap sees it. Parsing happens in
//! two steps:
//!
//! 1. [`split_args`] separates instance flags from everything else. It never
//!    fails, so `--help` and `--version` work even next to broken instance
//!    flags.
//! 2. [`build_groups`] validates the instance flags and produces one
//!    [`InstanceGroup`] per source kind.
//!
//! A flag's value is either inline (`--json.web.path=cfg.json`) or the next
//! argument (`--json.web.path cfg.json`), unless that argument starts with `--`.
//! Within an instance, a repeated field keeps its last value.

use std::ffi::OsString;

use crate::config::{Instance, InstanceGroup};
use crate::core::UnveilError;
use crate::quote::QuoteMode;
use crate::spec::SourceKind;
use crate::utils::fs::expand_path;

/// Fields an instance accepts.
pub const FIELDS: [&str; 4] = ["path", "select", "as", "quote"];

/// One `--<group>.<id>.<field>` occurrence on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceFlag {
    /// The flag as written, including an inline value.
    pub flag: String,
    pub group: String,
    pub id: String,
    pub field: String,
    pub value: Option<String>,
}

/// Arguments after [`split_args`].
#[derive(Debug, Default)]
pub struct SplitArgs {
    pub instance_flags: Vec<InstanceFlag>,
    /// Everything else, for clap.
    pub rest: Vec<OsString>,
}

/// Separates instance flags from the remaining arguments.
///
/// `--` stops the scan; it and everything after it are passed through.
pub fn split_args(args: Vec<OsString>) -> SplitArgs {
    let mut split = SplitArgs::default();
    let mut iter = args.into_iter().peekable();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            split.rest.push(arg);
            split.rest.extend(iter);
            break;
        }

        let Some(parsed) = arg.to_str().and_then(parse_flag_name) else {
            split.rest.push(arg);
            continue;
        };
        let (group, id, field, inline) = parsed;

        let value = match inline {
            Some(v) => Some(v),
            None => match iter.peek().and_then(|next| next.to_str()) {
                Some(next) if !next.starts_with("--") => {
                    let v = next.to_string();
                    iter.next();
                    Some(v)
                }
                _ => None,
            },
        };

        split.instance_flags.push(InstanceFlag {
            flag: arg.to_string_lossy().into_owned(),
            group,
            id,
            field,
            value,
        });
    }

    split
}

/// Splits `--group.id.field[=value]`. The ID may itself contain dots.
fn parse_flag_name(arg: &str) -> Option<(String, String, String, Option<String>)> {
    let body = arg.strip_prefix("--")?;
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (body, None),
    };
    let (group, rest) = name.split_once('.')?;
    let (id, field) = rest.rsplit_once('.')?;
    if group.is_empty() || id.is_empty() || field.is_empty() {
        return None;
    }
    Some((group.to_string(), id.to_string(), field.to_string(), inline))
}

#[derive(Debug, Default)]
struct PendingInstance {
    id: String,
    path: Option<String>,
    select: Option<String>,
    as_name: Option<String>,
    quote: Option<String>,
}

/// Validates instance flags and groups them by source kind.
///
/// All five groups are always returned, in registration order (json, yaml,
/// file, toml, ini); instances keep the order in which their ID first appears.
///
/// # Errors
///
/// Every problem found is reported; several are combined into
/// [`UnveilError::Config`]. Checked: unknown group, unknown field, missing
/// value, invalid quote mode, missing `path`/`select`, unexpandable path.
pub fn build_groups(flags: &[InstanceFlag]) -> Result<Vec<InstanceGroup>, UnveilError> {
    let mut pending: Vec<(SourceKind, Vec<PendingInstance>)> =
        SourceKind::ALL.iter().map(|kind| (*kind, Vec::new())).collect();
    let mut errors = Vec::new();

    for flag in flags {
        let Some((_, instances)) = pending.iter_mut().find(|(kind, _)| kind.as_str() == flag.group)
        else {
            errors.push(UnveilError::UnknownDynamicGroup {
                group: flag.group.clone(),
                flag: flag.flag.clone(),
            });
            continue;
        };

        if !FIELDS.contains(&flag.field.as_str()) {
            errors.push(UnveilError::UnknownField {
                group: flag.group.clone(),
                field: flag.field.clone(),
                flag: flag.flag.clone(),
            });
            continue;
        }

        let Some(value) = flag.value.clone() else {
            errors.push(UnveilError::MissingValue {
                flag: flag.flag.clone(),
            });
            continue;
        };

        if flag.field == "quote" && value.parse::<QuoteMode>().is_err() {
            errors.push(UnveilError::InvalidQuote {
                flag: flag.flag.clone(),
                value,
            });
            continue;
        }

        let idx = match instances.iter().position(|i| i.id == flag.id) {
            Some(idx) => idx,
            None => {
                instances.push(PendingInstance {
                    id: flag.id.clone(),
                    ..PendingInstance::default()
                });
                instances.len() - 1
            }
        };
        let instance = &mut instances[idx];

        match flag.field.as_str() {
            "path" => instance.path = Some(value),
            "select" => instance.select = Some(value),
            "as" => instance.as_name = Some(value),
            _ => instance.quote = Some(value),
        }
    }

    if let Some(err) = UnveilError::from_many(errors) {
        return Err(err);
    }

    let mut groups = Vec::with_capacity(pending.len());
    let mut errors = Vec::new();

    for (kind, instances) in pending {
        let mut group = InstanceGroup::new(kind.as_str());
        for pending in instances {
            match finish_instance(kind, pending) {
                Ok(instance) => group.instances.push(instance),
                Err(mut errs) => errors.append(&mut errs),
            }
        }
        groups.push(group);
    }

    match UnveilError::from_many(errors) {
        Some(err) => Err(err),
        None => Ok(groups),
    }
}

fn finish_instance(
    kind: SourceKind,
    pending: PendingInstance,
) -> Result<Instance, Vec<UnveilError>> {
    let required = |field: &str, value: Option<String>| {
        value.filter(|v| !v.is_empty()).ok_or_else(|| UnveilError::MissingRequired {
            flag: format!("--{kind}.{}.{field}", pending.id),
        })
    };

    let path = required("path", pending.path.clone());
    let select = required("select", pending.select.clone());

    match (path, select) {
        (Ok(path), Ok(select)) => {
            let path = expand_path(&path).map_err(|e| vec![e])?;
            Ok(Instance {
                id: pending.id,
                path,
                select,
                as_name: pending.as_name,
                quote: pending.quote,
            })
        }
        (path, select) => Err([path.err(), select.err()].into_iter().flatten().collect()),
    }
}

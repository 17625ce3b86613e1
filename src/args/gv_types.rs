//! `--included-types-overrides` grammar

use indexmap::IndexMap;
use kube_codegen_types::GroupVersion;

use crate::error::{ArgsError, ArgsResult};

pub const INCLUDED_TYPES_OVERRIDES_FLAG: &str = "included-types-overrides";

/// Per group version allow-list; a present key restricts generation to exactly
/// the listed types
pub type IncludedTypesOverrides = IndexMap<GroupVersion, Vec<String>>;

/// Parse `group/version=Type1,Type2,...`.
///
/// Type names are taken as written; whether they exist is only known to the
/// generation phase.
pub fn parse_override_token(raw: &str) -> ArgsResult<(GroupVersion, Vec<String>)> {
    let malformed = |reason: &str| ArgsError::malformed(INCLUDED_TYPES_OVERRIDES_FLAG, raw, reason);

    let (gv_part, types_part) = raw
        .split_once('=')
        .ok_or_else(|| malformed("expected group/version=Type1,Type2,..."))?;

    let gv = GroupVersion::parse(gv_part).map_err(|e| malformed(&e.to_string()))?;

    if types_part.contains('=') {
        return Err(malformed("only one '=' is allowed"));
    }
    if types_part.trim().is_empty() {
        return Err(malformed("no types listed"));
    }

    let types = types_part
        .split(',')
        .map(|name| match name.trim() {
            "" => Err(malformed("empty type name")),
            name => Ok(name.to_string()),
        })
        .collect::<ArgsResult<Vec<_>>>()?;

    Ok((gv, types))
}

/// Apply override tokens in order; a later token for the same group version
/// replaces the whole list of the earlier one
pub fn collect_overrides<'a, I>(tokens: I) -> ArgsResult<IncludedTypesOverrides>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut overrides = IncludedTypesOverrides::new();
    for token in tokens {
        let (gv, types) = parse_override_token(token)?;
        overrides.insert(gv, types);
    }
    Ok(overrides)
}

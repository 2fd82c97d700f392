//! Decides whether a statement's `Condition` block pins a public grant to
//! known callers, and collects the organization ids it names.

use crate::accounts::arn_account_segment;
use crate::types::{Condition, Values, WILDCARD};

/// Operators whose keys can restrict a public principal.
pub const NARROWING_OPERATORS: [&str; 10] = [
    "ArnEquals",
    "ArnEqualsIfExists",
    "ArnLike",
    "ArnLikeIfExists",
    "StringEquals",
    "StringEqualsIfExists",
    "StringEqualsIgnoreCase",
    "StringEqualsIgnoreCaseIfExists",
    "StringLike",
    "StringLikeIfExists",
];

/// Global keys that restrict an `AWS` principal. Lowercase.
pub const AWS_PRINCIPAL_KEYS: [&str; 4] = [
    "aws:principalaccount",
    "aws:principalarn",
    "aws:principalorgid",
    "aws:principalorgpaths",
];

/// Global keys that restrict a `Service` principal. Lowercase.
pub const SERVICE_PRINCIPAL_KEYS: [&str; 3] =
    ["aws:sourcearn", "aws:sourceaccount", "aws:sourceowner"];

pub const ORGANIZATION_KEYS: [&str; 2] = ["aws:principalorgid", "aws:principalorgpaths"];

const IF_EXISTS_SUFFIX: &str = "IfExists";

/// True when `condition` turns a public grant into a restricted one.
///
/// A single entry is enough: an allow-listed operator without the `IfExists`
/// suffix, keyed by a trusted principal key (case-insensitive). ARN-valued
/// keys only count when none of their values carries a `*` account.
pub fn narrows_public_access(condition: &Condition, principal_is_public: bool) -> bool {
    if !principal_is_public {
        return false;
    }
    condition
        .entries()
        .any(|(operator, key, values)| entry_narrows(operator, key, values))
}

fn entry_narrows(operator: &str, key: &str, values: &Values) -> bool {
    if !NARROWING_OPERATORS.contains(&operator) || operator.ends_with(IF_EXISTS_SUFFIX) {
        return false;
    }
    let key = key.to_ascii_lowercase();
    if !is_trusted_key(&key) {
        return false;
    }
    match key.as_str() {
        "aws:principalarn" | "aws:sourcearn" => !values.iter().any(has_wildcard_account),
        _ => true,
    }
}

fn is_trusted_key(lowercase_key: &str) -> bool {
    AWS_PRINCIPAL_KEYS.contains(&lowercase_key) || SERVICE_PRINCIPAL_KEYS.contains(&lowercase_key)
}

fn has_wildcard_account(value: &str) -> bool {
    arn_account_segment(value) == Some(WILDCARD)
}

/// Values of `aws:PrincipalOrgID` / `aws:PrincipalOrgPaths`, under any
/// operator, in condition order.
pub fn organization_ids(condition: &Condition) -> Vec<String> {
    condition
        .entries()
        .filter(|(_, key, _)| ORGANIZATION_KEYS.contains(&key.to_ascii_lowercase().as_str()))
        .flat_map(|(_, _, values)| values.iter().map(str::to_string))
        .collect()
}

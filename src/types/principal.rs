//! The `Principal` / `NotPrincipal` element of a policy statement.

use std::collections::BTreeMap;

use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};

use super::values::Values;

/// The literal IAM uses for "any principal".
pub const WILDCARD: &str = "*";

/// Who a statement applies to.
///
/// IAM allows either the bare string `"*"` or a map of principal type to one
/// or many values. Both are decoded once, here, so nothing downstream has to
/// look at raw JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// The bare `"Principal": "*"` shorthand.
    Any,
    Specific(PrincipalMap),
}

/// The map form of a principal, keyed by principal type.
///
/// Types other than `AWS`, `Service` and `Federated` (e.g. `CanonicalUser`)
/// are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrincipalMap {
    #[serde(rename = "AWS", skip_serializing_if = "Values::is_empty")]
    pub aws: Values,
    #[serde(rename = "Service", skip_serializing_if = "Values::is_empty")]
    pub service: Values,
    #[serde(rename = "Federated", skip_serializing_if = "Values::is_empty")]
    pub federated: Values,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrincipal {
    Bare(String),
    Map(BTreeMap<String, Values>),
}

impl From<BTreeMap<String, Values>> for PrincipalMap {
    fn from(mut raw: BTreeMap<String, Values>) -> Self {
        PrincipalMap {
            aws: raw.remove("AWS").unwrap_or_default(),
            service: raw.remove("Service").unwrap_or_default(),
            federated: raw.remove("Federated").unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPrincipal::deserialize(deserializer)? {
            RawPrincipal::Bare(value) if value == WILDCARD => Principal::Any,
            RawPrincipal::Bare(value) => Principal::Specific(PrincipalMap {
                aws: Values::from(value.as_str()),
                ..PrincipalMap::default()
            }),
            RawPrincipal::Map(raw) => Principal::Specific(PrincipalMap::from(raw)),
        })
    }
}

/// Serializes to the canonical map form; `Any` becomes `{"AWS": ["*"]}`.
impl Serialize for Principal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Principal::Any => PrincipalMap {
                aws: Values::from(WILDCARD),
                ..PrincipalMap::default()
            }
            .serialize(serializer),
            Principal::Specific(map) => map.serialize(serializer),
        }
    }
}

impl Principal {
    pub fn is_any(&self) -> bool {
        matches!(self, Principal::Any)
    }

    /// `AWS` values as written. The any-principal marker yields `"*"`.
    pub fn aws(&self) -> Vec<&str> {
        match self {
            Principal::Any => vec![WILDCARD],
            Principal::Specific(map) => map.aws.iter().collect(),
        }
    }

    pub fn services(&self) -> &[String] {
        match self {
            Principal::Any => &[],
            Principal::Specific(map) => map.service.as_slice(),
        }
    }

    pub fn federated(&self) -> &[String] {
        match self {
            Principal::Any => &[],
            Principal::Specific(map) => map.federated.as_slice(),
        }
    }
}

//! One-or-many string values, the shape IAM uses for most policy elements.

use std::slice::Iter;

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered list of strings decoded from either a single JSON scalar or an
/// array of scalars.
///
/// Booleans and numbers are accepted and kept in their JSON text form, since
/// IAM accepts `true` and `"true"` interchangeably in conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Values(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Bool(bool),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::String(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl<'de> Deserialize<'de> for Values {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(scalar) => vec![scalar.into_string()],
            OneOrMany::Many(scalars) => scalars.into_iter().map(Scalar::into_string).collect(),
        };
        Ok(Values(values))
    }
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }
}

impl From<Vec<String>> for Values {
    fn from(value: Vec<String>) -> Self {
        Values(value)
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values(vec![value.to_string()])
    }
}

impl<S: Into<String>> FromIterator<S> for Values {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Values(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! A whole policy document.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::statement::Statement;

/// A policy document in canonical form: `Statement` is always a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Informational only, never validated.
    #[serde(rename = "Version", default)]
    pub version: String,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        rename = "Statement",
        default,
        deserialize_with = "deserialize_statements"
    )]
    pub statements: Vec<Statement>,
}

/// IAM allows `Statement` to be a single object or an array of objects.
fn deserialize_statements<'de, D>(deserializer: D) -> Result<Vec<Statement>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(statement_from_value)
            .collect::<Result<_, _>>()
            .map_err(D::Error::custom),
        other => statement_from_value(other)
            .map(|statement| vec![statement])
            .map_err(D::Error::custom),
    }
}

// Derived struct decoding also accepts a JSON array and fills fields by
// position, so objects are required explicitly.
fn statement_from_value(value: Value) -> Result<Statement, serde_json::Error> {
    match value {
        object @ Value::Object(_) => serde_json::from_value(object),
        other => Err(serde_json::Error::custom(format!(
            "invalid Statement element: expected an object or an array of objects, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Policy {
    /// Decode a parsed JSON document. Only an object is a policy.
    pub fn from_document(document: Value) -> Result<Self, serde_json::Error> {
        match document {
            object @ Value::Object(_) => serde_json::from_value(object),
            other => Err(serde_json::Error::custom(format!(
                "invalid policy document: expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

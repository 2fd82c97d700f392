//! A single statement of a policy document.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

use super::condition::Condition;
use super::effect::Effect;
use super::principal::Principal;
use super::values::Values;

/// One statement, as written.
///
/// `effect` stays a raw string so that a bad value surfaces as
/// [`PolicyError::InvalidEffect`] when the statement is evaluated rather than
/// as a decode error. `Action`, `Resource` and their negations are carried
/// opaquely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Kept raw; `null` and a missing key both decode to `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_principal: Option<Principal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Values>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_action: Option<Values>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Values>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_resource: Option<Values>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Statement {
    /// Parse the `Effect`, exactly `Allow` or `Deny`.
    pub fn effect(&self) -> Result<Effect, PolicyError> {
        let raw = self.effect.as_deref().unwrap_or_default();
        Effect::from_str(raw).map_err(|_| PolicyError::InvalidEffect(raw.to_string()))
    }

    /// The `Sid`, or `Statement[N]` for the 1-based position when the `Sid` is
    /// absent or empty.
    pub fn statement_id(&self, index: usize) -> String {
        match self.sid.as_deref() {
            Some(sid) if !sid.is_empty() => sid.to_string(),
            _ => format!("Statement[{}]", index + 1),
        }
    }

    pub fn has_not_action(&self) -> bool {
        self.not_action.is_some()
    }
}

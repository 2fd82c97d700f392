//! Evaluation mode and evaluator configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantNames;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::PolicyError;

/// Which rule set the aggregator applies.
///
/// * `Legacy` skips `Deny` statements and has no condition handling.
/// * `ConditionAware` additionally treats `NotAction` grants as public, lets
///   trusted condition keys narrow public grants, collects organization ids
///   from conditions and reports the ids of public statements.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EvaluationMode {
    Legacy,
    #[default]
    ConditionAware,
}

impl EvaluationMode {
    /// Parse a mode name (`legacy`, `condition_aware`).
    pub fn parse(value: &str) -> Result<Self, PolicyError> {
        Self::from_str(value).map_err(|_| {
            PolicyError::InvalidMode(format!(
                "{value} (expected one of: {})",
                Self::VARIANTS.join(", ")
            ))
        })
    }
}

/// Host-supplied evaluator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub mode: EvaluationMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_forms() {
        assert_eq!(EvaluationMode::Legacy.to_string(), "legacy");
        assert_eq!(EvaluationMode::ConditionAware.as_ref(), "condition_aware");
        assert_eq!(
            EvaluationMode::from_str("condition_aware").unwrap(),
            EvaluationMode::ConditionAware
        );
        assert!(EvaluationMode::from_str("extended").is_err());
    }

    #[test]
    fn test_mode_parse_reports_choices() {
        assert_eq!(EvaluationMode::parse("legacy").unwrap(), EvaluationMode::Legacy);
        let err = EvaluationMode::parse("Legacy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid evaluation mode: Legacy (expected one of: legacy, condition_aware)"
        );
    }

    #[test]
    fn test_config_defaults_to_condition_aware() {
        let config: EvaluatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.mode, EvaluationMode::ConditionAware);

        let config: EvaluatorConfig = serde_json::from_str(r#"{"mode": "legacy"}"#).unwrap();
        assert_eq!(config.mode, EvaluationMode::Legacy);
    }
}

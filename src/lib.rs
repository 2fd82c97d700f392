// src/lib.rs
pub use accounts::AccountId;
pub use adapter::evaluate_row;
pub use condition_match::{narrows_public_access, organization_ids};
pub use engine::PolicyEvaluator;
pub use error::PolicyError;
pub use loader::canonicalize;
pub use principal_match::evaluate_principal;
pub use traits::{PolicyDocumentSource, PolicyRow};
pub use types::{
    Condition, Effect, EvaluationMode, EvaluatorConfig, Policy, PolicyEvaluation, Principal,
    PrincipalMap, PrincipalSets, Statement, Values,
};

pub mod accounts;
pub mod adapter;
pub mod condition_match;
mod engine;
mod error;
mod loader;
mod principal_match;
mod traits;
pub mod types;

/// Evaluate `policy_text` for `owner_account_id` with the default,
/// condition-aware evaluator.
///
/// ```rust
/// let evaluation = iam_exposure_core::evaluate_policy(
///     r#"{"Statement": {"Effect": "Allow", "Principal": {"Service": "sns.amazonaws.com"}}}"#,
///     "012345678901",
/// ).unwrap();
/// assert!(evaluation.is_public);
/// assert_eq!(evaluation.allowed_principal_services, vec!["sns.amazonaws.com"]);
/// ```
pub fn evaluate_policy(
    policy_text: &str,
    owner_account_id: &str,
) -> Result<PolicyEvaluation, PolicyError> {
    PolicyEvaluator::new().evaluate(policy_text, owner_account_id)
}

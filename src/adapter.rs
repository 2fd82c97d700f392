//! Host-facing glue: run one evaluation for a policy source and hand the
//! result back as a single JSON row.
//!
//! This is the only layer that logs. The evaluator itself returns typed
//! errors and stays silent.

use serde_json::Value;
use tracing::{debug, warn};

use crate::engine::PolicyEvaluator;
use crate::error::PolicyError;
use crate::traits::PolicyDocumentSource;

/// Evaluate the policy supplied by `source` and serialize the result row.
pub fn evaluate_row<S>(evaluator: &PolicyEvaluator, source: &S) -> Result<Value, PolicyError>
where
    S: PolicyDocumentSource + ?Sized,
{
    debug!(
        event = "PolicyEvaluation",
        phase = "Request",
        source = source.source_name(),
        owner = source.owner_account_id(),
        mode = evaluator.mode().as_ref(),
        policy_bytes = source.policy_json().len()
    );

    let evaluation = match evaluator.evaluate(source.policy_json(), source.owner_account_id()) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            warn!(
                event = "PolicyEvaluation",
                phase = "Failed",
                source = source.source_name(),
                owner = source.owner_account_id(),
                error = %err
            );
            return Err(err);
        }
    };

    debug!(
        event = "PolicyEvaluation",
        phase = "Result",
        source = source.source_name(),
        is_public = evaluation.is_public,
        principals = evaluation.allowed_principals.len(),
        public_statements = ?evaluation.public_statement_ids
    );

    serde_json::to_value(evaluation)
        .map_err(|err| PolicyError::SerializeEvaluation(err.to_string()))
}

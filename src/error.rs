use thiserror::Error;

/// Everything that can abort a policy evaluation.
///
/// Evaluation is all-or-nothing: any of these aborts the whole call and no
/// partial result is produced.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("source account id is invalid: {0}")]
    InvalidAccountId(String),

    /// The policy text is not valid JSON or does not have the IAM policy shape.
    #[error(transparent)]
    MalformedPolicy(#[from] serde_json::Error),

    /// Carries the rejected `Effect` value; the message is fixed.
    #[error("element Effect is invalid - valid choices are 'Allow' or 'Deny'")]
    InvalidEffect(String),

    #[error("unabled to parse arn: {0}")]
    UnparseableArn(String),

    #[error("invalid evaluation mode: {0}")]
    InvalidMode(String),

    /// The result row could not be encoded for the host.
    #[error("failed to serialize evaluation: {0}")]
    SerializeEvaluation(String),
}

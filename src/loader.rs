use serde_json::Value;

use crate::error::PolicyError;
use crate::types::Policy;

/// Decode policy text into its canonical form.
///
/// An empty string means "no policy" and yields a policy with no statements,
/// as does `{}`. Anything else must be a JSON object holding a policy
/// document; decode failures and non-object documents surface as
/// `PolicyError::MalformedPolicy`.
///
/// Example:
/// ```rust
/// use iam_exposure_core::canonicalize;
/// let policy = canonicalize(r#"{
///     "Version": "2012-10-17",
///     "Statement": {"Effect": "Allow", "Principal": "*", "Action": "sqs:SendMessage"}
/// }"#).unwrap();
/// assert_eq!(policy.statements.len(), 1);
/// assert!(policy.statements[0].principal.as_ref().unwrap().is_any());
/// ```
pub fn canonicalize(text: &str) -> Result<Policy, PolicyError> {
    if text.is_empty() {
        return Ok(Policy::default());
    }
    let document: Value = serde_json::from_str(text)?;
    Ok(Policy::from_document(document)?)
}

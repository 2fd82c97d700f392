/// Anything that can hand a resource policy to the evaluator: a fetched
/// resource attribute, a query parameter, a stored row.
pub trait PolicyDocumentSource {
    /// The raw policy text; empty when the resource has no policy.
    fn policy_json(&self) -> &str;

    /// The 12-digit account that owns the resource.
    fn owner_account_id(&self) -> &str;

    /// A label for log events, e.g. the resource ARN. Empty by default.
    fn source_name(&self) -> &str {
        ""
    }
}

/// A policy document together with its owner, as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyRow {
    pub name: String,
    pub policy_json: String,
    pub owner_account_id: String,
}

impl PolicyRow {
    pub fn new(policy_json: impl Into<String>, owner_account_id: impl Into<String>) -> Self {
        PolicyRow {
            name: String::new(),
            policy_json: policy_json.into(),
            owner_account_id: owner_account_id.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl PolicyDocumentSource for PolicyRow {
    fn policy_json(&self) -> &str {
        &self.policy_json
    }

    fn owner_account_id(&self) -> &str {
        &self.owner_account_id
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

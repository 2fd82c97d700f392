//! Evaluation results: per-statement principal sets and the final policy row.

use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Principals reachable through one statement, or accumulated over many.
///
/// Sets are unordered while accumulating; [`PrincipalSets::into_evaluation`]
/// sorts each of them once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrincipalSets {
    /// Cross-account ids, plus `*` for a wildcard principal. Never the owner.
    pub account_ids: HashSet<String>,
    /// Principal strings exactly as written.
    pub principals: HashSet<String>,
    pub federated_identities: HashSet<String>,
    pub services: HashSet<String>,
    pub organization_ids: HashSet<String>,
    pub is_public: bool,
}

impl PrincipalSets {
    /// A public grant that names nobody in particular.
    pub fn public() -> Self {
        PrincipalSets {
            is_public: true,
            ..Self::default()
        }
    }

    /// Union the sets of `other` into `self`. `is_public` is left alone; the
    /// caller decides how statement flags combine.
    pub fn absorb(&mut self, other: PrincipalSets) {
        self.account_ids.extend(other.account_ids);
        self.principals.extend(other.principals);
        self.federated_identities.extend(other.federated_identities);
        self.services.extend(other.services);
        self.organization_ids.extend(other.organization_ids);
    }

    pub fn is_empty(&self) -> bool {
        self.account_ids.is_empty()
            && self.principals.is_empty()
            && self.federated_identities.is_empty()
            && self.services.is_empty()
            && self.organization_ids.is_empty()
    }

    pub fn into_evaluation(self, public_statement_ids: Vec<String>) -> PolicyEvaluation {
        PolicyEvaluation {
            allowed_organization_ids: sorted(self.organization_ids),
            allowed_principals: sorted(self.principals),
            allowed_principal_account_ids: sorted(self.account_ids),
            allowed_principal_federated_identities: sorted(self.federated_identities),
            allowed_principal_services: sorted(self.services),
            is_public: self.is_public,
            public_statement_ids: sorted(public_statement_ids),
            ..PolicyEvaluation::default()
        }
    }
}

fn sorted(values: impl IntoIterator<Item = String>) -> Vec<String> {
    values.into_iter().sorted().dedup().collect()
}

/// The evaluation row handed back to the host.
///
/// `access_level` and the `*_access_levels` / `shared_statement_ids` fields
/// are part of the consumer schema but no algorithm fills them; they are
/// always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PolicyEvaluation {
    pub access_level: String,
    pub allowed_organization_ids: Vec<String>,
    pub allowed_principals: Vec<String>,
    pub allowed_principal_account_ids: Vec<String>,
    pub allowed_principal_federated_identities: Vec<String>,
    pub allowed_principal_services: Vec<String>,
    pub is_public: bool,
    pub public_access_levels: Vec<String>,
    pub shared_access_levels: Vec<String>,
    pub private_access_levels: Vec<String>,
    pub public_statement_ids: Vec<String>,
    pub shared_statement_ids: Vec<String>,
}

use crate::accounts::AccountId;
use crate::condition_match::{narrows_public_access, organization_ids};
use crate::error::PolicyError;
use crate::loader;
use crate::principal_match::evaluate_principal;
use crate::types::{
    Effect, EvaluationMode, EvaluatorConfig, Policy, PolicyEvaluation, PrincipalSets, Statement,
};

/// The evaluator handle. Holds no policy state, so it is `Copy` and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyEvaluator {
    mode: EvaluationMode,
}

impl PolicyEvaluator {
    /// An evaluator in the default, condition-aware mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: switch the rule set.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn from_config(config: &EvaluatorConfig) -> Self {
        Self::new().with_mode(config.mode)
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Evaluate policy text on behalf of `owner_account_id`.
    ///
    /// The owner id is validated before the policy is even decoded, so an
    /// invalid owner is an error for an empty policy too.
    pub fn evaluate(
        &self,
        policy_text: &str,
        owner_account_id: &str,
    ) -> Result<PolicyEvaluation, PolicyError> {
        let owner = AccountId::parse(owner_account_id)?;
        let policy = loader::canonicalize(policy_text)?;
        self.aggregate(&policy, &owner)
    }

    /// Evaluate an already canonical policy.
    pub fn evaluate_policy(
        &self,
        policy: &Policy,
        owner_account_id: &str,
    ) -> Result<PolicyEvaluation, PolicyError> {
        let owner = AccountId::parse(owner_account_id)?;
        self.aggregate(policy, &owner)
    }

    fn aggregate(
        &self,
        policy: &Policy,
        owner: &AccountId,
    ) -> Result<PolicyEvaluation, PolicyError> {
        let mut accumulated = PrincipalSets::default();
        let mut public_statement_ids = Vec::new();

        for (index, statement) in policy.statements.iter().enumerate() {
            let effect = statement.effect()?;
            let Some(sets) = self.evaluate_statement(statement, effect, owner)? else {
                continue;
            };

            if sets.is_public {
                accumulated.is_public = true;
                if self.mode == EvaluationMode::ConditionAware {
                    public_statement_ids.push(statement.statement_id(index));
                }
            }
            accumulated.absorb(sets);
        }

        Ok(accumulated.into_evaluation(public_statement_ids))
    }

    /// `None` when the statement is skipped outright.
    fn evaluate_statement(
        &self,
        statement: &Statement,
        effect: Effect,
        owner: &AccountId,
    ) -> Result<Option<PrincipalSets>, PolicyError> {
        match (effect, self.mode) {
            (Effect::Deny, EvaluationMode::Legacy) => Ok(None),
            // TODO: let Deny statements cancel matching public Allow grants.
            (Effect::Deny, EvaluationMode::ConditionAware) => Ok(Some(PrincipalSets::default())),
            (Effect::Allow, EvaluationMode::Legacy) => {
                self.evaluate_principals(statement, owner).map(Some)
            }
            (Effect::Allow, EvaluationMode::ConditionAware) => {
                if statement.has_not_action() {
                    return Ok(Some(PrincipalSets::public()));
                }
                let mut sets = self.evaluate_principals(statement, owner)?;
                if let Some(condition) = &statement.condition {
                    if narrows_public_access(condition, sets.is_public) {
                        sets.is_public = false;
                    }
                    sets.organization_ids.extend(organization_ids(condition));
                }
                Ok(Some(sets))
            }
        }
    }

    fn evaluate_principals(
        &self,
        statement: &Statement,
        owner: &AccountId,
    ) -> Result<PrincipalSets, PolicyError> {
        match &statement.principal {
            Some(principal) => evaluate_principal(principal, owner),
            None => Ok(PrincipalSets::default()),
        }
    }
}

#[cfg(test)]
mod tests;

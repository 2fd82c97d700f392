use crate::accounts::{AccountId, AwsPrincipal};
use crate::error::PolicyError;
use crate::types::{Principal, PrincipalSets};

/// Classify every entry of one statement's principal block.
///
/// * `AWS` values land in `principals` as written; their resolved account
///   id lands in `account_ids` unless it is the owner's. `*` goes into both
///   and marks the statement public.
/// * `Service` values are public on their own: any caller can reach the
///   resource through that service.
/// * `Federated` values are recorded and never public.
///
/// One unparseable `AWS` value fails the whole statement.
pub fn evaluate_principal(
    principal: &Principal,
    owner: &AccountId,
) -> Result<PrincipalSets, PolicyError> {
    let mut sets = PrincipalSets::default();

    for value in principal.aws() {
        let classified = AwsPrincipal::classify(value)?;
        match classified.account() {
            None => {
                sets.is_public = true;
                sets.account_ids.insert(value.to_string());
            }
            Some(account) if account != owner.as_str() => {
                sets.account_ids.insert(account.to_string());
            }
            Some(_) => {}
        }
        sets.principals.insert(value.to_string());
    }

    for service in principal.services() {
        sets.services.insert(service.clone());
        sets.is_public = true;
    }

    sets.federated_identities.extend(principal.federated().iter().cloned());

    Ok(sets)
}

//! Account id and ARN classification.

use std::fmt::{Display, Formatter, Result as FmtResult};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PolicyError;
use crate::types::WILDCARD;

static ACCOUNT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("account id pattern compiles"));

// The account id is the fifth colon-separated segment.
static ARN_WITH_ACCOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:[a-z]*:[a-z]*:[a-z]*:([0-9]{12}):.*$").expect("arn pattern compiles")
});

pub fn is_account_id(value: &str) -> bool {
    ACCOUNT_ID.is_match(value)
}

/// A validated 12-digit AWS account id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn parse(value: &str) -> Result<Self, PolicyError> {
        if is_account_id(value) {
            Ok(AccountId(value.to_string()))
        } else {
            Err(PolicyError::InvalidAccountId(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// An `AWS` principal value, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwsPrincipal<'a> {
    Wildcard,
    Account(&'a str),
    Arn { arn: &'a str, account: &'a str },
}

impl<'a> AwsPrincipal<'a> {
    /// Classify a value from the `AWS` principal list. Anything that is not
    /// `*`, a bare account id, or an ARN carrying an account id is rejected.
    pub fn classify(value: &'a str) -> Result<Self, PolicyError> {
        if value == WILDCARD {
            return Ok(AwsPrincipal::Wildcard);
        }
        if is_account_id(value) {
            return Ok(AwsPrincipal::Account(value));
        }
        match ARN_WITH_ACCOUNT.captures(value).and_then(|caps| caps.get(1)) {
            Some(account) => Ok(AwsPrincipal::Arn {
                arn: value,
                account: account.as_str(),
            }),
            None => Err(PolicyError::UnparseableArn(value.to_string())),
        }
    }

    /// The resolved account id; `None` for the wildcard.
    pub fn account(&self) -> Option<&'a str> {
        match self {
            AwsPrincipal::Wildcard => None,
            AwsPrincipal::Account(account) => Some(account),
            AwsPrincipal::Arn { account, .. } => Some(account),
        }
    }
}

/// The account segment of anything shaped like an ARN
/// (`arn:partition:service:region:account:resource`), without validating it.
pub fn arn_account_segment(value: &str) -> Option<&str> {
    if !value.starts_with("arn:") {
        return None;
    }
    let segments: Vec<&str> = value.splitn(6, ':').collect();
    if segments.len() < 6 {
        return None;
    }
    Some(segments[4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        plain = { "123456789012", true },
        leading_zero = { "012345678901", true },
        too_short = { "12345678901", false },
        too_long = { "1234567890123", false },
        non_digit = { "12345678901a", false },
        empty = { "", false },
        padded = { " 123456789012", false },
    )]
    fn test_account_id_parse(value: &str, valid: bool) {
        match AccountId::parse(value) {
            Ok(account) => {
                assert!(valid);
                assert_eq!(account.as_str(), value);
            }
            Err(err) => {
                assert!(!valid);
                assert_eq!(err.to_string(), format!("source account id is invalid: {value}"));
            }
        }
    }

    #[parameterized(
        root = { "arn:aws:iam::444455554444:root", "444455554444" },
        role = { "arn:aws:iam::111122223333:role/service-role/my-role", "111122223333" },
        user = { "arn:aws:iam::123456789012:user/victor@xyz.com", "123456789012" },
        assumed_role = { "arn:aws:sts::012345678901:assumed-role/role-name/role-session-name", "012345678901" },
    )]
    fn test_classify_arn(value: &str, account: &str) {
        let principal = AwsPrincipal::classify(value).unwrap();
        assert_eq!(principal, AwsPrincipal::Arn { arn: value, account });
        assert_eq!(principal.account(), Some(account));
    }

    #[test]
    fn test_classify_wildcard_and_account() {
        assert_eq!(AwsPrincipal::classify("*").unwrap(), AwsPrincipal::Wildcard);
        assert_eq!(AwsPrincipal::classify("*").unwrap().account(), None);
        assert_eq!(
            AwsPrincipal::classify("444455554444").unwrap(),
            AwsPrincipal::Account("444455554444")
        );
    }

    #[parameterized(
        misplaced_account = { "arn:aws:sts::misformed:012345678901:assumed-role/role-name/role-session-name" },
        wildcard_account = { "arn:aws:iam::*:root" },
        short_account = { "arn:aws:iam::12345:root" },
        service_name = { "ec2.amazonaws.com" },
        partial_wildcard = { "1234*" },
    )]
    fn test_classify_rejects(value: &str) {
        let err = AwsPrincipal::classify(value).unwrap_err();
        assert_eq!(err.to_string(), format!("unabled to parse arn: {value}"));
    }

    #[parameterized(
        account = { "arn:aws:sns:us-east-1:111122223333:topic", Some("111122223333") },
        wildcard = { "arn:aws:iam::*:role/x", Some("*") },
        no_account = { "arn:aws:s3:::bucket", Some("") },
        resource_with_colons = { "arn:aws:logs:us-east-1:111122223333:log-group:g:*", Some("111122223333") },
        too_few_segments = { "arn:aws:iam", None },
        not_an_arn = { "111122223333", None },
    )]
    fn test_arn_account_segment(value: &str, expected: Option<&str>) {
        assert_eq!(arn_account_segment(value), expected);
    }
}

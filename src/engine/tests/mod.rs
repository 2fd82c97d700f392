use super::*;
use insta::assert_json_snapshot;
use yare::parameterized;


const OWNER: &str = "012345678901";

const PUBLIC_POLICY: &str = r#"{
    "Version": "2012-10-17",
    "Statement": [{"Effect": "Allow", "Principal": {"AWS": "*"}}]
}"#;

const MIXED_ACCOUNTS_POLICY: &str = r#"{
    "Version": "2012-10-17",
    "Statement": [{
        "Effect": "Allow",
        "Principal": {"AWS": [
            "444455554444",
            "arn:aws:iam::444455554444:root",
            "012345678901",
            "arn:aws:iam::012345678901:root"
        ]},
        "Action": "sqs:SendMessage"
    }]
}"#;

const SERVICE_POLICY: &str = r#"{
    "Version": "2012-10-17",
    "Statement": [{"Effect": "Allow", "Principal": {"Service": "ec2.amazonaws.com"}, "Action": "sts:AssumeRole"}]
}"#;

const FEDERATED_POLICY: &str = r#"{
    "Version": "2012-10-17",
    "Statement": [{
        "Effect": "Allow",
        "Principal": {"Federated": "cognito-identity.amazonaws.com"},
        "Action": "sts:AssumeRoleWithWebIdentity"
    }]
}"#;

// A public statement with a Sid, a public one without, and a private one.
const TOPIC_POLICY: &str = r#"{
    "Version": "2012-10-17",
    "Id": "topic-policy",
    "Statement": [
        {
            "Sid": "PublicSubscribe",
            "Effect": "Allow",
            "Principal": "*",
            "Action": "sns:Subscribe"
        },
        {
            "Effect": "Allow",
            "Principal": {"Service": "events.amazonaws.com"},
            "Action": "sns:Publish"
        },
        {
            "Sid": "Partner",
            "Effect": "Allow",
            "Principal": {"AWS": "arn:aws:iam::111122223333:role/publisher"},
            "Action": "sns:Publish"
        }
    ]
}"#;

fn policy_with_statements(statements: &[&str]) -> String {
    format!(
        r#"{{"Version": "2012-10-17", "Statement": [{}]}}"#,
        statements.join(",")
    )
}

fn allow_statement(principal: &str) -> String {
    format!(r#"{{"Effect": "Allow", "Principal": {principal}, "Action": "s3:GetObject"}}"#)
}

fn evaluator() -> PolicyEvaluator {
    PolicyEvaluator::new()
}

fn legacy_evaluator() -> PolicyEvaluator {
    PolicyEvaluator::new().with_mode(EvaluationMode::Legacy)
}

fn evaluate(policy_text: &str) -> PolicyEvaluation {
    evaluator().evaluate(policy_text, OWNER).unwrap()
}

fn evaluate_legacy(policy_text: &str) -> PolicyEvaluation {
    legacy_evaluator().evaluate(policy_text, OWNER).unwrap()
}

fn assert_public(evaluation: &PolicyEvaluation) {
    assert!(evaluation.is_public, "expected public, got {evaluation:?}");
}

fn assert_not_public(evaluation: &PolicyEvaluation) {
    assert!(!evaluation.is_public, "expected not public, got {evaluation:?}");
}

fn assert_no_principals(evaluation: &PolicyEvaluation) {
    assert!(evaluation.allowed_principals.is_empty());
    assert!(evaluation.allowed_principal_account_ids.is_empty());
    assert!(evaluation.allowed_principal_services.is_empty());
    assert!(evaluation.allowed_principal_federated_identities.is_empty());
    assert!(evaluation.allowed_organization_ids.is_empty());
}

include!("evaluate.rs");

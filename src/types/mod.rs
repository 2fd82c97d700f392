//! Canonical policy model and evaluation result types.
//!
//! IAM's policy grammar is loosely typed: `Statement` may be an object or a
//! list, `Principal` may be `"*"` or a map, and most values may be a string
//! or a list of strings. All of that is decoded here, once, into the types
//! below.

mod condition;
mod effect;
mod evaluation;
mod mode;
mod policy;
mod principal;
mod statement;
mod values;

pub use condition::Condition;
pub use effect::Effect;
pub use evaluation::{PolicyEvaluation, PrincipalSets};
pub use mode::{EvaluationMode, EvaluatorConfig};
pub use policy::Policy;
pub use principal::{Principal, PrincipalMap, WILDCARD};
pub use statement::Statement;
pub use values::Values;

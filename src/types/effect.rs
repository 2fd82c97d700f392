//! The `Effect` element of a policy statement.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// `Allow` or `Deny`. Parsing is exact and case-sensitive, like IAM itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Effect {
    Allow,
    Deny,
}

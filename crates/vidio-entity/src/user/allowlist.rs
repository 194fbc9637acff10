//! Admin allowlist entry.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person pre-approved to register as staff, matched by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PossibleAdmin {
    /// Row identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

//! Registration configuration.

use serde::{Deserialize, Serialize};

/// A person pre-approved to register as staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistSeed {
    /// First name, matched exactly.
    pub first_name: String,
    /// Last name, matched exactly.
    pub last_name: String,
}

/// Registration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Admin allowlist entries inserted at startup if not already present.
    #[serde(default)]
    pub admin_allowlist: Vec<AllowlistSeed>,
}

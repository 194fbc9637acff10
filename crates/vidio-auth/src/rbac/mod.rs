//! Permission checks for authenticated actors.
//!
//! There is a single privilege level: staff. Staff may delete audio
//! records; every authenticated user may view, search, and upload.

use vidio_core::error::AppError;

/// Anyone performing an action. Implemented by the request context.
pub trait Actor {
    /// Login name, for logs.
    fn username(&self) -> &str;

    /// Whether the actor holds staff rights.
    fn is_staff(&self) -> bool;
}

/// Operations gated behind staff rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Remove an audio record.
    DeleteAudio,
}

impl Permission {
    /// Message shown when the permission is missing.
    pub fn denied_message(&self) -> &'static str {
        match self {
            Self::DeleteAudio => "You do not have permission to delete this audio file.",
        }
    }
}

/// Enforces staff-only operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Whether `actor` holds `permission`.
    pub fn has_permission(&self, actor: &dyn Actor, permission: Permission) -> bool {
        match permission {
            Permission::DeleteAudio => actor.is_staff(),
        }
    }

    /// Returns an authorization error if `actor` lacks `permission`.
    pub fn require_permission(
        &self,
        actor: &dyn Actor,
        permission: Permission,
    ) -> Result<(), AppError> {
        if self.has_permission(actor, permission) {
            Ok(())
        } else {
            tracing::debug!(
                username = actor.username(),
                ?permission,
                "Permission denied"
            );
            Err(AppError::authorization(permission.denied_message()))
        }
    }
}

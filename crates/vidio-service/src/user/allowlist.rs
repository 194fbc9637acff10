//! Seeding the admin allowlist from configuration.

use std::sync::Arc;

use tracing::info;

use vidio_core::config::AllowlistSeed;
use vidio_core::error::AppError;
use vidio_database::AdminAllowlistRepo;

/// Maintains the admin allowlist.
#[derive(Debug, Clone)]
pub struct AllowlistService {
    allowlist: Arc<dyn AdminAllowlistRepo>,
}

impl AllowlistService {
    /// Creates a new allowlist service.
    pub fn new(allowlist: Arc<dyn AdminAllowlistRepo>) -> Self {
        Self { allowlist }
    }

    /// Insert every configured entry that is not already present.
    /// Returns how many were added.
    pub async fn seed(&self, entries: &[AllowlistSeed]) -> Result<usize, AppError> {
        let mut added = 0;
        for entry in entries {
            let first = entry.first_name.trim();
            let last = entry.last_name.trim();
            if first.is_empty() || last.is_empty() {
                continue;
            }
            if self.allowlist.insert_if_missing(first, last).await? {
                added += 1;
            }
        }
        if added > 0 {
            info!(added, "Seeded admin allowlist");
        }
        Ok(added)
    }
}

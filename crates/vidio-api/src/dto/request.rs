//! Query string DTOs.
//!
//! Form bodies deserialize straight into the service-layer form types.

use serde::{Deserialize, Serialize};

/// `?page=` on the listing. Kept as text so a bad value means page one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageParams {
    /// Raw page number.
    pub page: Option<String>,
}

/// `?q=&search_by=` on the search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Text to look for.
    pub q: Option<String>,
    /// Field to look in: `village`, `description` or `uploaded_at`.
    pub search_by: Option<String>,
}

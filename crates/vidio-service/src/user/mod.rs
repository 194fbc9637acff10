//! Account services: registration, login, profile, and the admin allowlist.

pub mod allowlist;
pub mod login;
pub mod profile;
pub mod registration;

pub use allowlist::AllowlistService;
pub use login::{LoginOutcome, LoginService};
pub use profile::{ProfileService, ProfileView};
pub use registration::RegistrationService;

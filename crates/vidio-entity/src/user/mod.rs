//! User, profile, and admin allowlist entities.

pub mod allowlist;
pub mod model;
pub mod profile;

pub use allowlist::PossibleAdmin;
pub use model::{CreateUser, UpdateUser, User};
pub use profile::{DEFAULT_AVATAR, Profile, UpdateProfile};

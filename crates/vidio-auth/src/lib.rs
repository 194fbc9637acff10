//! # vidio-auth
//!
//! Authentication and authorization building blocks for Vidio.
//!
//! ## Modules
//!
//! - `jwt`: bearer token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `rbac`: staff-only permission checks

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator, UserAttributes};
pub use rbac::{Actor, Permission, RbacEnforcer};

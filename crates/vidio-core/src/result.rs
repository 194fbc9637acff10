//! Convenience result type alias for Vidio.

use crate::error::AppError;

/// A specialized `Result` type for Vidio operations.
pub type AppResult<T> = Result<T, AppError>;

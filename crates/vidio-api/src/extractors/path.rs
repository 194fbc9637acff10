//! Typed path parameter helpers.

use vidio_core::error::AppError;

/// Parses an audio record id from a path segment. Anything that is not an
/// id cannot name a record, so it is reported as not found.
pub fn parse_audio_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::not_found(format!("Audio file {s} not found")))
}

#[cfg(test)]
mod tests {
    use vidio_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_parse_audio_id() {
        assert_eq!(parse_audio_id("42").unwrap(), 42);
        assert_eq!(parse_audio_id("abc").unwrap_err().kind, ErrorKind::NotFound);
    }
}

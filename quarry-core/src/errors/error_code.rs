//! Stable error codes.

/// Attaches a stable, machine-readable code to an error.
///
/// Codes are SCREAMING_SNAKE_CASE and never change once shipped; hosts key
/// on them instead of parsing display strings.
pub trait QuarryErrorCode {
    /// Returns the stable error code, e.g. `"RESOLVE_UNRECOGNIZED_FIELD"`.
    fn error_code(&self) -> &'static str;
}

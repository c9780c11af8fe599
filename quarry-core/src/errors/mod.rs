//! Error taxonomy for the quarry workspace.
//!
//! One enum per subsystem, each with stable error codes, aggregated into
//! [`QuarryError`] for callers that cross subsystem boundaries.

pub mod config_error;
pub mod decl_error;
pub mod error_code;
pub mod query_error;
pub mod registry_error;
pub mod resolve_error;
pub mod synth_error;

pub use config_error::ConfigError;
pub use decl_error::DeclError;
pub use error_code::QuarryErrorCode;
pub use query_error::QueryError;
pub use registry_error::RegistryError;
pub use resolve_error::ResolveError;
pub use synth_error::SynthError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum QuarryError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Declaration error: {0}")]
    Decl(#[from] DeclError),

    #[error("Synthetic target error: {0}")]
    Synth(#[from] SynthError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl QuarryErrorCode for QuarryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(e) => e.error_code(),
            Self::Resolve(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
            Self::Decl(e) => e.error_code(),
            Self::Synth(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias for results carrying a [`QuarryError`].
pub type QuarryResult<T> = Result<T, QuarryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_delegate_through_aggregate() {
        let err: QuarryError = RegistryError::MissingAlias.into();
        assert_eq!(err.error_code(), "REGISTRY_MISSING_ALIAS");

        let err: QuarryError = SynthError::HandlerPanicked.into();
        assert_eq!(err.error_code(), "SYNTH_HANDLER_PANICKED");

        let err: QuarryError = ConfigError::Parse {
            path: "quarry.toml".to_string(),
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }
}

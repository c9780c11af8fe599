//! Synthetic target protocol errors.

use super::error_code::QuarryErrorCode;

/// Errors raised by synthetic handler registration and generation.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// The handler's declared path is neither of the two reserved dispatch
    /// sentinels. Rejected at registration, not deferred to dispatch.
    #[error("Handler '{handler}' declares dispatch discriminator '{discriminator}', which is not a recognized request scope")]
    UndefinedDispatchDiscriminator {
        handler: String,
        discriminator: String,
    },

    #[error("Synthetic handler '{handler}' is already registered")]
    DuplicateHandler { handler: String },

    /// A handler-reported generation failure.
    #[error("Synthetic generation failed: {message}")]
    Generation { message: String },

    /// The handler panicked; the panic was contained to its scope.
    #[error("Synthetic handler panicked during generation")]
    HandlerPanicked,
}

impl QuarryErrorCode for SynthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UndefinedDispatchDiscriminator { .. } => "SYNTH_UNDEFINED_DISPATCH_DISCRIMINATOR",
            Self::DuplicateHandler { .. } => "SYNTH_DUPLICATE_HANDLER",
            Self::Generation { .. } => "SYNTH_GENERATION_FAILED",
            Self::HandlerPanicked => "SYNTH_HANDLER_PANICKED",
        }
    }
}

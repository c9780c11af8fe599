//! The synthetic handler trait and its output type.

use quarry_core::errors::SynthError;
use quarry_core::types::declaration::TargetDeclaration;

use super::request::SyntheticRequest;

/// Declarations a handler contributes under one synthetic path.
///
/// The path names a file that does not exist on disk. It places the
/// declarations in a directory exactly as a declaration file would, and it
/// must not collide with any declared file or with another handler's output.
#[derive(Debug, Clone)]
pub struct SyntheticAddressMap {
    pub path: String,
    pub declarations: Vec<TargetDeclaration>,
}

impl SyntheticAddressMap {
    pub fn new(path: &str, declarations: Vec<TargetDeclaration>) -> Self {
        Self {
            path: path.to_string(),
            declarations,
        }
    }
}

/// A generator of synthetic target declarations.
///
/// Handlers register under one of the two reserved dispatch sentinels via
/// `declared_path` and are invoked with requests scoped accordingly. A
/// handler may return declarations for any synthetic path, not just the
/// requested directory.
pub trait SyntheticHandler: Send + Sync {
    /// Unique handler name, used for registration and failure reporting.
    fn name(&self) -> &str;

    /// The dispatch sentinel this handler registers under.
    fn declared_path(&self) -> &str;

    /// Generate synthetic declarations for the requested scope.
    fn generate(&self, request: &SyntheticRequest) -> Result<Vec<SyntheticAddressMap>, SynthError>;
}

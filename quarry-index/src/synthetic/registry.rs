//! Registration of synthetic handlers.

use quarry_core::errors::SynthError;
use quarry_core::types::collections::FxHashSet;

use super::handler::SyntheticHandler;
use super::request::DispatchMode;

/// A handler together with the dispatch mode derived from its declared path.
pub struct RegisteredHandler {
    pub handler: Box<dyn SyntheticHandler>,
    pub mode: DispatchMode,
}

/// All registered synthetic handlers.
///
/// Mutable during startup registration, then read-only for the lifetime of
/// the process.
#[derive(Default)]
pub struct SyntheticRegistry {
    handlers: Vec<RegisteredHandler>,
    names: FxHashSet<String>,
}

impl SyntheticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, validating its name and dispatch discriminator.
    pub fn register(&mut self, handler: Box<dyn SyntheticHandler>) -> Result<(), SynthError> {
        let name = handler.name().to_string();
        if self.names.contains(&name) {
            return Err(SynthError::DuplicateHandler { handler: name });
        }
        let mode = DispatchMode::from_discriminator(&name, handler.declared_path())?;
        self.names.insert(name);
        self.handlers.push(RegisteredHandler { handler, mode });
        Ok(())
    }

    /// Registered handlers in registration order.
    pub fn handlers(&self) -> &[RegisteredHandler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

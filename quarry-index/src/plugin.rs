//! Plugin-facing registration surface.
//!
//! All registration happens through `&mut` access during startup. Once
//! plugins are loaded the registry is only ever borrowed immutably, so
//! field types, target types, and handlers are fixed for the run.

use quarry_core::errors::QuarryResult;
use quarry_core::types::identifiers::{FieldTypeId, TargetTypeId};
use quarry_model::fields::{FieldTypeDef, FieldTypeRegistry};
use quarry_model::targets::TargetTypeRegistry;

use crate::synthetic::{SyntheticHandler, SyntheticRegistry};

/// The registries a plugin can extend.
#[derive(Default)]
pub struct WorkspaceRegistry {
    pub fields: FieldTypeRegistry,
    pub targets: TargetTypeRegistry,
    pub synthetic: SyntheticRegistry,
}

impl WorkspaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field type and return its id.
    pub fn register_field_type(&mut self, definition: FieldTypeDef) -> QuarryResult<FieldTypeId> {
        Ok(self.fields.register(definition)?)
    }

    /// Define a target type over already-registered field types.
    pub fn register_target_type(
        &mut self,
        alias: &str,
        field_types: &[FieldTypeId],
    ) -> QuarryResult<TargetTypeId> {
        Ok(self.targets.define(alias, &self.fields, field_types)?)
    }

    /// Register a synthetic target handler.
    pub fn register_synthetic_handler(
        &mut self,
        handler: Box<dyn SyntheticHandler>,
    ) -> QuarryResult<()> {
        Ok(self.synthetic.register(handler)?)
    }

    /// Run a plugin's registration hook.
    pub fn load(&mut self, plugin: &dyn Plugin) -> QuarryResult<()> {
        tracing::debug!(plugin = plugin.name(), "loading plugin");
        plugin.register(self)
    }
}

/// An extension that contributes field types, target types, or synthetic
/// handlers.
pub trait Plugin {
    /// Plugin name, used in logs.
    fn name(&self) -> &str;

    /// Register everything this plugin contributes.
    fn register(&self, registry: &mut WorkspaceRegistry) -> QuarryResult<()>;
}

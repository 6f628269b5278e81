//! Definition registry.
//!
//! This module provides named storage for entity definitions, enforcing
//! name uniqueness across the definitions it owns.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::definition::EntityDef;
use crate::error::{FixtureError, FixtureResult};
use crate::metadata::SchemaAccessor;
use crate::provider::FieldDef;

/// Registry of entity definitions keyed by definition name.
///
/// Names are unique: registering a taken name fails and leaves the existing
/// entry untouched. Definitions live as long as the registry that owns
/// them.
#[derive(Default)]
pub struct DefinitionRegistry {
	defs: RwLock<HashMap<String, Arc<EntityDef>>>,
}

impl DefinitionRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a definition and registers it under its name.
	///
	/// # Arguments
	///
	/// * `accessor` - Schema metadata accessor bound to the ORM
	/// * `name` - Definition name, unique within this registry
	/// * `entity_type` - Identifier of the target entity type
	/// * `field_defs` - Caller-supplied field name to definition mapping
	/// * `config` - Opaque extra configuration, stored unchanged
	///
	/// # Errors
	///
	/// Fails with [`FixtureError::DuplicateDefinition`] if the name is
	/// taken, or with any error [`EntityDef::new`] produces.
	pub fn define(
		&self,
		accessor: &dyn SchemaAccessor,
		name: impl Into<String>,
		entity_type: impl Into<String>,
		field_defs: HashMap<String, FieldDef>,
		config: HashMap<String, Value>,
	) -> FixtureResult<Arc<EntityDef>> {
		let def = EntityDef::new(accessor, name, entity_type, field_defs, config)?;
		self.register(def)
	}

	/// Registers an already built definition under its name.
	///
	/// # Errors
	///
	/// Fails with [`FixtureError::DuplicateDefinition`] if the name is
	/// taken.
	pub fn register(&self, def: EntityDef) -> FixtureResult<Arc<EntityDef>> {
		let mut defs = self.defs.write();
		if defs.contains_key(def.name()) {
			return Err(FixtureError::DuplicateDefinition(def.name().to_string()));
		}

		tracing::debug!(
			name = %def.name(),
			entity_type = %def.entity_type(),
			"registered entity definition"
		);

		let def = Arc::new(def);
		defs.insert(def.name().to_string(), Arc::clone(&def));
		Ok(def)
	}

	/// Gets a definition by name.
	pub fn get(&self, name: &str) -> Option<Arc<EntityDef>> {
		self.defs.read().get(name).cloned()
	}

	/// Checks whether a definition is registered under the name.
	pub fn has(&self, name: &str) -> bool {
		self.defs.read().contains_key(name)
	}

	/// Returns all registered definition names.
	pub fn names(&self) -> Vec<String> {
		self.defs.read().keys().cloned().collect()
	}

	/// Returns the number of registered definitions.
	pub fn len(&self) -> usize {
		self.defs.read().len()
	}

	/// Returns true if no definitions are registered.
	pub fn is_empty(&self) -> bool {
		self.defs.read().is_empty()
	}

	/// Removes all definitions.
	///
	/// This is primarily useful for testing.
	pub fn clear(&self) {
		self.defs.write().clear();
	}
}

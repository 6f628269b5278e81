//! Entity definitions.
//!
//! An [`EntityDef`] is one named recipe for building instances of one entity
//! type: a complete, validated mapping from every field and association the
//! schema declares to a uniform value provider.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{FixtureError, FixtureResult};
use crate::metadata::{SchemaAccessor, SchemaMetadata};
use crate::provider::{FieldDef, FieldProvider};

/// A named, immutable recipe for creating instances of one entity type.
///
/// Construction validates every caller-supplied field name against the
/// schema, then fills every remaining declared field and association with
/// the value a blank instance carries for it. The resulting provider table
/// covers the declared names exactly. Definitions are read-only after
/// construction and safe to share across threads.
pub struct EntityDef {
	name: String,
	entity_type: String,
	metadata: Arc<dyn SchemaMetadata>,
	field_defs: HashMap<String, FieldProvider>,
	config: HashMap<String, Value>,
}

impl EntityDef {
	/// Builds a definition for `entity_type`.
	///
	/// Caller-supplied definitions are validated and stored before defaults
	/// are computed, so a default never overwrites an explicit choice.
	/// Default values are read off a single blank instance, captured once;
	/// providers never re-read them.
	///
	/// # Arguments
	///
	/// * `accessor` - Schema metadata accessor bound to the ORM
	/// * `name` - Definition name, unique within its registry
	/// * `entity_type` - Identifier of the target entity type
	/// * `field_defs` - Caller-supplied field name to definition mapping
	/// * `config` - Opaque extra configuration, stored unchanged
	///
	/// # Errors
	///
	/// Returns [`FixtureError::UnknownField`] if a supplied name is neither
	/// a field nor an association of the entity type. Errors from the
	/// schema collaborator (unresolvable type, metadata access failure,
	/// instantiation failure) propagate unchanged.
	pub fn new(
		accessor: &dyn SchemaAccessor,
		name: impl Into<String>,
		entity_type: impl Into<String>,
		field_defs: HashMap<String, FieldDef>,
		config: HashMap<String, Value>,
	) -> FixtureResult<Self> {
		let name = name.into();
		let entity_type = entity_type.into();
		let metadata = accessor.metadata(&entity_type)?;

		let mut def = Self {
			name,
			entity_type,
			metadata,
			field_defs: HashMap::new(),
			config,
		};

		def.read_field_defs(field_defs)?;
		def.default_defs_from_metadata()?;

		Ok(def)
	}

	fn read_field_defs(&mut self, defs: HashMap<String, FieldDef>) -> FixtureResult<()> {
		for (key, def) in defs {
			if self.metadata.has_field(&key) || self.metadata.has_association(&key) {
				self.field_defs.insert(key, FieldProvider::normalize(def));
			} else {
				return Err(FixtureError::UnknownField {
					entity_type: self.entity_type.clone(),
					field: key,
				});
			}
		}
		Ok(())
	}

	fn default_defs_from_metadata(&mut self) -> FixtureResult<()> {
		let blank = self.metadata.new_instance()?;

		let all_names = self
			.metadata
			.field_names()
			.into_iter()
			.chain(self.metadata.association_names());

		let mut filled = 0usize;
		for field_name in all_names {
			if self.field_defs.contains_key(&field_name) {
				continue;
			}
			// Captured once here; a null default stays a null constant.
			let default_value = self.metadata.field_value(blank.as_ref(), &field_name)?;
			self.field_defs
				.insert(field_name, FieldProvider::Constant(default_value));
			filled += 1;
		}

		tracing::debug!(
			entity_type = %self.entity_type,
			defaults = filled,
			"filled field definitions from blank instance"
		);

		Ok(())
	}

	/// Returns the name of the definition.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the identifier of the target entity type.
	pub fn entity_type(&self) -> &str {
		&self.entity_type
	}

	/// Returns the full field-provider mapping.
	///
	/// Contains an entry for every field and association the schema
	/// declares, no more, no fewer.
	pub fn field_defs(&self) -> &HashMap<String, FieldProvider> {
		&self.field_defs
	}

	/// Returns the schema metadata for the entity type.
	pub fn metadata(&self) -> &Arc<dyn SchemaMetadata> {
		&self.metadata
	}

	/// Returns the extra configuration mapping, unchanged.
	pub fn config(&self) -> &HashMap<String, Value> {
		&self.config
	}
}

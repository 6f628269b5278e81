//! Schema metadata access.
//!
//! This module defines the seam between entity definitions and the ORM's
//! metadata registry: a per-type [`SchemaMetadata`] capability and a
//! [`SchemaAccessor`] that resolves entity-type identifiers to it.
//! Implement both per ORM binding; an in-memory implementation is provided
//! in [`memory`] for tests and for consumers without a live ORM.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::error::FixtureResult;

pub mod memory;

pub use memory::{FieldSpec, MemoryAccessor, MemorySchema};

/// Read-only metadata for one entity type.
///
/// Field values cross this boundary as [`serde_json::Value`];
/// [`Value::Null`] is the "no value" sentinel.
pub trait SchemaMetadata: Send + Sync {
	/// Returns the identifier of the entity type this metadata describes.
	fn entity_type(&self) -> &str;

	/// Returns true if the schema declares a scalar field with this name.
	fn has_field(&self, name: &str) -> bool;

	/// Returns true if the schema declares an association with this name.
	fn has_association(&self, name: &str) -> bool;

	/// Returns the declared scalar field names.
	fn field_names(&self) -> Vec<String>;

	/// Returns the declared association names.
	fn association_names(&self) -> Vec<String>;

	/// Creates a fresh blank instance of the entity type.
	///
	/// The instance is opaque to this crate; it is only ever handed back to
	/// [`field_value`](Self::field_value) to read default values off it, and
	/// discarded afterwards.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::InstantiationError`](crate::error::FixtureError::InstantiationError)
	/// if the entity type cannot be instantiated.
	fn new_instance(&self) -> FixtureResult<Box<dyn Any>>;

	/// Reads the current value of a field or association off an instance.
	///
	/// # Arguments
	///
	/// * `instance` - An instance previously produced by [`new_instance`](Self::new_instance)
	/// * `name` - A declared field or association name
	fn field_value(&self, instance: &dyn Any, name: &str) -> FixtureResult<Value>;
}

/// Resolves entity-type identifiers to their schema metadata.
///
/// This is the handle a definition holds on the ORM's live metadata
/// registry.
pub trait SchemaAccessor: Send + Sync {
	/// Returns the metadata for the given entity type.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::UnknownEntityType`](crate::error::FixtureError::UnknownEntityType)
	/// if the type is not known to the registry.
	fn metadata(&self, entity_type: &str) -> FixtureResult<Arc<dyn SchemaMetadata>>;
}

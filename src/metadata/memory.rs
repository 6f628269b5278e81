//! In-memory schema metadata.
//!
//! This module provides a declarative implementation of the metadata seam,
//! used by this crate's tests and by consumers that define schemas by hand
//! instead of binding to a live ORM.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{SchemaAccessor, SchemaMetadata};
use crate::error::{FixtureError, FixtureResult};

/// One declared scalar field of an in-memory schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
	/// Field name.
	pub name: String,

	/// Value a freshly constructed instance carries for this field.
	pub default: Value,
}

/// In-memory metadata for one entity type.
///
/// Built declaratively with chained calls, declaration order preserved.
///
/// # Example
///
/// ```
/// use fixture_defs::metadata::{MemorySchema, SchemaMetadata};
/// use serde_json::{Value, json};
///
/// let schema = MemorySchema::new("app.Person")
/// 	.field("name", json!(""))
/// 	.field("email", Value::Null)
/// 	.association("group");
///
/// assert!(schema.has_field("name"));
/// assert!(schema.has_association("group"));
/// assert!(!schema.has_field("nickname"));
/// ```
#[derive(Debug, Clone)]
pub struct MemorySchema {
	entity_type: String,
	fields: Vec<FieldSpec>,
	associations: Vec<String>,
}

impl MemorySchema {
	/// Creates metadata for the given entity type with nothing declared.
	pub fn new(entity_type: impl Into<String>) -> Self {
		Self {
			entity_type: entity_type.into(),
			fields: Vec::new(),
			associations: Vec::new(),
		}
	}

	/// Declares a scalar field and the value blank instances carry for it.
	pub fn field(mut self, name: impl Into<String>, default: Value) -> Self {
		self.fields.push(FieldSpec {
			name: name.into(),
			default,
		});
		self
	}

	/// Declares an association. Blank instances carry no related object.
	pub fn association(mut self, name: impl Into<String>) -> Self {
		self.associations.push(name.into());
		self
	}
}

/// Blank instance produced by [`MemorySchema::new_instance`].
struct MemoryInstance {
	values: HashMap<String, Value>,
}

impl SchemaMetadata for MemorySchema {
	fn entity_type(&self) -> &str {
		&self.entity_type
	}

	fn has_field(&self, name: &str) -> bool {
		self.fields.iter().any(|f| f.name == name)
	}

	fn has_association(&self, name: &str) -> bool {
		self.associations.iter().any(|a| a == name)
	}

	fn field_names(&self) -> Vec<String> {
		self.fields.iter().map(|f| f.name.clone()).collect()
	}

	fn association_names(&self) -> Vec<String> {
		self.associations.clone()
	}

	fn new_instance(&self) -> FixtureResult<Box<dyn Any>> {
		let mut values: HashMap<String, Value> = self
			.fields
			.iter()
			.map(|f| (f.name.clone(), f.default.clone()))
			.collect();
		for association in &self.associations {
			values.insert(association.clone(), Value::Null);
		}
		Ok(Box::new(MemoryInstance { values }))
	}

	fn field_value(&self, instance: &dyn Any, name: &str) -> FixtureResult<Value> {
		let instance = instance.downcast_ref::<MemoryInstance>().ok_or_else(|| {
			FixtureError::MetadataError(format!(
				"instance is not a blank instance of {}",
				self.entity_type
			))
		})?;
		Ok(instance.values.get(name).cloned().unwrap_or(Value::Null))
	}
}

/// Accessor over a set of registered in-memory schemas.
#[derive(Debug, Default)]
pub struct MemoryAccessor {
	schemas: HashMap<String, Arc<MemorySchema>>,
}

impl MemoryAccessor {
	/// Creates an accessor with no schemas registered.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a schema under its entity type, replacing any previous one.
	pub fn register(&mut self, schema: MemorySchema) {
		self.schemas
			.insert(schema.entity_type.clone(), Arc::new(schema));
	}
}

impl SchemaAccessor for MemoryAccessor {
	fn metadata(&self, entity_type: &str) -> FixtureResult<Arc<dyn SchemaMetadata>> {
		self.schemas
			.get(entity_type)
			.cloned()
			.map(|schema| schema as Arc<dyn SchemaMetadata>)
			.ok_or_else(|| FixtureError::UnknownEntityType(entity_type.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn person() -> MemorySchema {
		MemorySchema::new("app.Person")
			.field("name", json!(""))
			.field("age", json!(0))
			.field("email", Value::Null)
			.association("group")
	}

	#[rstest]
	fn test_declared_names() {
		let schema = person();
		assert_eq!(schema.entity_type(), "app.Person");
		assert_eq!(schema.field_names(), vec!["name", "age", "email"]);
		assert_eq!(schema.association_names(), vec!["group"]);
		assert!(schema.has_field("age"));
		assert!(schema.has_association("group"));
		assert!(!schema.has_field("group"));
		assert!(!schema.has_association("age"));
	}

	#[rstest]
	fn test_blank_instance_carries_defaults() {
		let schema = person();
		let instance = schema.new_instance().unwrap();

		assert_eq!(schema.field_value(instance.as_ref(), "name").unwrap(), json!(""));
		assert_eq!(schema.field_value(instance.as_ref(), "age").unwrap(), json!(0));
		assert_eq!(
			schema.field_value(instance.as_ref(), "email").unwrap(),
			Value::Null
		);
		assert_eq!(
			schema.field_value(instance.as_ref(), "group").unwrap(),
			Value::Null
		);
	}

	#[rstest]
	fn test_field_value_rejects_foreign_instance() {
		let schema = person();
		let not_an_instance = "something else";
		let result = schema.field_value(&not_an_instance, "name");
		assert!(matches!(result, Err(FixtureError::MetadataError(_))));
	}

	#[rstest]
	fn test_accessor_resolves_registered_types() {
		let mut accessor = MemoryAccessor::new();
		accessor.register(person());

		let metadata = accessor.metadata("app.Person").unwrap();
		assert_eq!(metadata.entity_type(), "app.Person");

		let missing = accessor.metadata("app.Missing");
		assert!(matches!(
			missing,
			Err(FixtureError::UnknownEntityType(t)) if t == "app.Missing"
		));
	}
}

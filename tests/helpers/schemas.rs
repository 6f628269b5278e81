//! Shared schema fixtures for integration tests.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fixture_defs::error::{FixtureError, FixtureResult};
use fixture_defs::metadata::{MemoryAccessor, MemorySchema, SchemaAccessor, SchemaMetadata};
use serde_json::{Value, json};

/// `app.Person`: name (default ""), age (default 0), email (default null),
/// plus a `group` association.
pub fn person_schema() -> MemorySchema {
	MemorySchema::new("app.Person")
		.field("name", json!(""))
		.field("age", json!(0))
		.field("email", Value::Null)
		.association("group")
}

/// Accessor serving the person schema.
pub fn person_accessor() -> MemoryAccessor {
	let mut accessor = MemoryAccessor::new();
	accessor.register(person_schema());
	accessor
}

/// Schema wrapper counting collaborator calls.
pub struct CountingSchema {
	inner: MemorySchema,
	instances_created: AtomicUsize,
	values_read: AtomicUsize,
}

impl CountingSchema {
	/// Number of blank instances created so far.
	pub fn instances_created(&self) -> usize {
		self.instances_created.load(Ordering::Relaxed)
	}

	/// Number of field reads performed so far.
	pub fn values_read(&self) -> usize {
		self.values_read.load(Ordering::Relaxed)
	}
}

impl SchemaMetadata for CountingSchema {
	fn entity_type(&self) -> &str {
		self.inner.entity_type()
	}

	fn has_field(&self, name: &str) -> bool {
		self.inner.has_field(name)
	}

	fn has_association(&self, name: &str) -> bool {
		self.inner.has_association(name)
	}

	fn field_names(&self) -> Vec<String> {
		self.inner.field_names()
	}

	fn association_names(&self) -> Vec<String> {
		self.inner.association_names()
	}

	fn new_instance(&self) -> FixtureResult<Box<dyn Any>> {
		self.instances_created.fetch_add(1, Ordering::Relaxed);
		self.inner.new_instance()
	}

	fn field_value(&self, instance: &dyn Any, name: &str) -> FixtureResult<Value> {
		self.values_read.fetch_add(1, Ordering::Relaxed);
		self.inner.field_value(instance, name)
	}
}

/// Accessor serving one shared counting schema.
pub struct CountingAccessor {
	schema: Arc<CountingSchema>,
}

impl CountingAccessor {
	/// Wraps the given schema in call counters.
	pub fn new(inner: MemorySchema) -> Self {
		Self {
			schema: Arc::new(CountingSchema {
				inner,
				instances_created: AtomicUsize::new(0),
				values_read: AtomicUsize::new(0),
			}),
		}
	}

	/// The shared counting schema, for inspecting counters.
	pub fn schema(&self) -> &Arc<CountingSchema> {
		&self.schema
	}
}

impl SchemaAccessor for CountingAccessor {
	fn metadata(&self, entity_type: &str) -> FixtureResult<Arc<dyn SchemaMetadata>> {
		if entity_type == self.schema.entity_type() {
			Ok(Arc::clone(&self.schema) as Arc<dyn SchemaMetadata>)
		} else {
			Err(FixtureError::UnknownEntityType(entity_type.to_string()))
		}
	}
}

//! Entity definition normalization for ORM test fixtures.
//!
//! This crate turns caller-supplied field definitions into the canonical
//! provider table a fixture factory consumes when it builds entity
//! instances for tests:
//!
//! - **Entity Definitions**: named recipes mapping every declared field and
//!   association of an entity type to a uniform value provider
//! - **Schema Metadata**: a small capability interface implemented per ORM
//!   binding, with a declarative in-memory implementation included
//! - **Generators**: sequence and fake-data field definitions
//!
//! # Features
//!
//! - `faker` - Fake-data field definitions (enabled by default)
//! - `full` - All features enabled
//!
//! # Quick Start
//!
//! Declare a schema (or bind [`SchemaAccessor`] to your ORM's metadata
//! registry), then define how instances should be populated:
//!
//! ```
//! use std::collections::HashMap;
//!
//! use fixture_defs::prelude::*;
//! use serde_json::{Value, json};
//!
//! # fn main() -> FixtureResult<()> {
//! let mut accessor = MemoryAccessor::new();
//! accessor.register(
//! 	MemorySchema::new("app.Person")
//! 		.field("name", json!(""))
//! 		.field("age", json!(0))
//! 		.field("email", Value::Null),
//! );
//!
//! let mut fields = HashMap::new();
//! fields.insert("name".to_string(), FieldDef::value("Alice"));
//! fields.insert("age".to_string(), FieldDef::call(|_| json!(30)));
//!
//! let def = EntityDef::new(&accessor, "person", "app.Person", fields, HashMap::new())?;
//!
//! // Every declared field has a provider; unsupplied ones carry the
//! // value a blank instance holds for them.
//! assert_eq!(def.field_defs().len(), 3);
//! assert_eq!(def.field_defs()["name"].invoke(&[]), json!("Alice"));
//! assert_eq!(def.field_defs()["age"].invoke(&[]), json!(30));
//! assert_eq!(def.field_defs()["email"].invoke(&[]), Value::Null);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`EntityDef`](definition::EntityDef) - Validated, immutable provider
//!   table for one entity type
//! - [`SchemaMetadata`](metadata::SchemaMetadata) /
//!   [`SchemaAccessor`](metadata::SchemaAccessor) - The per-ORM metadata
//!   seam
//! - [`FieldDef`](provider::FieldDef) /
//!   [`FieldProvider`](provider::FieldProvider) - Raw and normalized
//!   definition shapes
//! - [`DefinitionRegistry`](registry::DefinitionRegistry) - Named
//!   definition storage with uniqueness enforcement
//! - [`Sequence`](generators::Sequence) and the `FakerType` fakers - Stock
//!   generators

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod definition;
pub mod error;
pub mod generators;
pub mod metadata;
pub mod prelude;
pub mod provider;
pub mod registry;

// Re-export commonly used types at crate root
pub use definition::EntityDef;
pub use error::{FixtureError, FixtureResult};
pub use metadata::{SchemaAccessor, SchemaMetadata};
pub use provider::{FieldDef, FieldProvider};
pub use registry::DefinitionRegistry;

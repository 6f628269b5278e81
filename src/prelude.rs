//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the fixture-defs crate.
//!
//! # Example
//!
//! ```
//! use fixture_defs::prelude::*;
//!
//! // Now you have access to:
//! // - Entity definitions and the registry
//! // - Schema metadata traits and the in-memory implementation
//! // - Field definition and provider types
//! // - Generators and error types
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Schema metadata
pub use crate::metadata::{
	FieldSpec, MemoryAccessor, MemorySchema, SchemaAccessor, SchemaMetadata,
};

// Definitions
pub use crate::definition::EntityDef;
pub use crate::provider::{FieldDef, FieldProvider, ProviderFn};
pub use crate::registry::DefinitionRegistry;

// Generators
pub use crate::generators::{Sequence, sequence};

// Faker generators when available
#[cfg(feature = "faker")]
pub use crate::generators::{FakerType, faker, generate_fake};

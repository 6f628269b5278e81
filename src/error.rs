//! Error types for entity definition handling.
//!
//! This module defines the error types used throughout the fixture-defs crate.

use thiserror::Error;

/// Errors that can occur while building or registering entity definitions.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// Caller referenced a field or association the schema does not declare.
	#[error("No such field in {entity_type}: {field}")]
	UnknownField {
		/// Entity type whose schema was consulted.
		entity_type: String,
		/// The undeclared field or association name.
		field: String,
	},

	/// The metadata accessor could not resolve the entity type.
	#[error("Unknown entity type: {0}")]
	UnknownEntityType(String),

	/// Metadata access failed inside the schema collaborator.
	#[error("Metadata error: {0}")]
	MetadataError(String),

	/// Blank-instance construction failed inside the schema collaborator.
	#[error("Instantiation error: {0}")]
	InstantiationError(String),

	/// A definition with the same name is already registered.
	#[error("Definition already registered: {0}")]
	DuplicateDefinition(String),
}

/// Result type alias for definition operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

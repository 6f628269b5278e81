//! Stock field definition generators.
//!
//! Sequence counters and fake-data producers, packaged as [`FieldDef`]s
//! ready to drop into an entity definition.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::provider::FieldDef;

/// Auto-incrementing counter for sequence-valued fields.
///
/// The first value is 1. The counter is safe to share across threads.
#[derive(Debug, Default)]
pub struct Sequence {
	counter: AtomicU64,
}

impl Sequence {
	/// Creates a sequence whose first value is 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the next value.
	pub fn next_value(&self) -> u64 {
		self.counter.fetch_add(1, Ordering::Relaxed) + 1
	}
}

/// Creates a sequence-valued field definition.
///
/// Every occurrence of `{n}` in the pattern is replaced with the sequence
/// number; a pattern without `{n}` gets the number appended. Each call to
/// this function starts its own counter at 1.
///
/// # Example
///
/// ```
/// use fixture_defs::generators::sequence;
/// use serde_json::json;
///
/// let def = sequence("user_{n}");
/// let provider = fixture_defs::FieldProvider::normalize(def);
/// assert_eq!(provider.invoke(&[]), json!("user_1"));
/// assert_eq!(provider.invoke(&[]), json!("user_2"));
/// ```
pub fn sequence(pattern: impl Into<String>) -> FieldDef {
	let pattern = pattern.into();
	let counter = Arc::new(Sequence::new());
	FieldDef::call(move |_args| {
		let n = counter.next_value();
		if pattern.contains("{n}") {
			Value::String(pattern.replace("{n}", &n.to_string()))
		} else {
			Value::String(format!("{pattern}{n}"))
		}
	})
}

/// Kinds of fake data a faker field definition can generate.
#[cfg(feature = "faker")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakerType {
	/// Login-style username.
	Username,
	/// Email address.
	Email,
	/// Given name.
	FirstName,
	/// Family name.
	LastName,
	/// Full name.
	Name,
	/// Single lowercase word.
	Word,
	/// Short sentence.
	Sentence,
}

/// Generates one fake value of the given kind.
#[cfg(feature = "faker")]
pub fn generate_fake(faker: &FakerType) -> Value {
	use fake::Fake;
	use fake::faker::internet::en::{FreeEmail, Username};
	use fake::faker::lorem::en::{Sentence, Word};
	use fake::faker::name::en::{FirstName, LastName, Name};

	let value: String = match faker {
		FakerType::Username => Username().fake(),
		FakerType::Email => FreeEmail().fake(),
		FakerType::FirstName => FirstName().fake(),
		FakerType::LastName => LastName().fake(),
		FakerType::Name => Name().fake(),
		FakerType::Word => Word().fake(),
		FakerType::Sentence => Sentence(3..8).fake(),
	};
	Value::String(value)
}

/// Creates a field definition producing a fresh fake value per invocation.
#[cfg(feature = "faker")]
pub fn faker(kind: FakerType) -> FieldDef {
	FieldDef::call(move |_args| generate_fake(&kind))
}

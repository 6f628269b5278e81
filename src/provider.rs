//! Field definition normalization.
//!
//! Callers describe field values in whatever shape is convenient — a plain
//! value or a callable — and definitions store them in a single normalized
//! form with a uniform invocation contract.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Zero-or-more-argument value producer.
///
/// The slice carries optional positional context from the fixture factory,
/// such as the partially built entity or a generation seed. Providers are
/// free to ignore it.
pub type ProviderFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Caller-facing raw field definition.
#[derive(Clone)]
pub enum FieldDef {
	/// A plain value, used verbatim for every instance built.
	Value(Value),

	/// A callable evaluated once per instance built.
	Call(Arc<ProviderFn>),
}

impl FieldDef {
	/// Creates a plain-value definition.
	pub fn value(value: impl Into<Value>) -> Self {
		FieldDef::Value(value.into())
	}

	/// Creates a callable definition.
	///
	/// The callable receives the positional context arguments the fixture
	/// factory passes at build time.
	pub fn call<F>(f: F) -> Self
	where
		F: Fn(&[Value]) -> Value + Send + Sync + 'static,
	{
		FieldDef::Call(Arc::new(f))
	}
}

impl fmt::Debug for FieldDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldDef::Value(value) => f.debug_tuple("Value").field(value).finish(),
			FieldDef::Call(_) => f.debug_tuple("Call").field(&"..").finish(),
		}
	}
}

impl From<Value> for FieldDef {
	fn from(value: Value) -> Self {
		FieldDef::Value(value)
	}
}

impl From<&str> for FieldDef {
	fn from(value: &str) -> Self {
		FieldDef::Value(Value::from(value))
	}
}

impl From<String> for FieldDef {
	fn from(value: String) -> Self {
		FieldDef::Value(Value::from(value))
	}
}

impl From<bool> for FieldDef {
	fn from(value: bool) -> Self {
		FieldDef::Value(Value::from(value))
	}
}

impl From<i64> for FieldDef {
	fn from(value: i64) -> Self {
		FieldDef::Value(Value::from(value))
	}
}

impl From<f64> for FieldDef {
	fn from(value: f64) -> Self {
		FieldDef::Value(Value::from(value))
	}
}

/// Normalized storage form of a field definition.
///
/// Every entry of a definition's provider table is one of these two shapes.
#[derive(Clone)]
pub enum FieldProvider {
	/// Always returns the value captured at normalization time.
	Constant(Value),

	/// Forwards every invocation to the wrapped callable.
	Generator(Arc<ProviderFn>),
}

impl FieldProvider {
	/// Normalizes a raw definition into its storage form.
	///
	/// Plain values are captured now and returned verbatim on every
	/// invocation; callables are stored and forwarded to as-is.
	pub fn normalize(def: FieldDef) -> Self {
		match def {
			FieldDef::Value(value) => FieldProvider::Constant(value),
			FieldDef::Call(f) => FieldProvider::Generator(f),
		}
	}

	/// Produces the field value.
	///
	/// Constants ignore `args` and return a clone of the captured value;
	/// generators receive `args` unchanged.
	pub fn invoke(&self, args: &[Value]) -> Value {
		match self {
			FieldProvider::Constant(value) => value.clone(),
			FieldProvider::Generator(f) => f(args),
		}
	}
}

impl fmt::Debug for FieldProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldProvider::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
			FieldProvider::Generator(_) => f.debug_tuple("Generator").field(&"..").finish(),
		}
	}
}

use crate::document::Document;
use crate::error::{MergeError, Result};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Ordered list of mapping keys leading from the document root to a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
	pub fn new<I, S>(keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		KeyPath(keys.into_iter().map(Into::into).collect())
	}

	/// Parse a key path supplied as a JSON array, e.g. `["server", "port"]`.
	///
	/// Blank input and JSON `null` mean "no path". Integer elements are
	/// accepted as their decimal form, since mapping keys are always text.
	pub fn parse_json(input: &str) -> Result<Option<KeyPath>> {
		if input.trim().is_empty() {
			return Ok(None);
		}

		let invalid = |reason: String| MergeError::InvalidKeyPath {
			input: input.to_string(),
			reason,
		};

		let value: Value = serde_json::from_str(input).map_err(|e| invalid(e.to_string()))?;

		let items = match value {
			Value::Null => return Ok(None),
			Value::Array(items) => items,
			other => {
				return Err(invalid(format!(
					"expected a JSON array of keys, found {}",
					json_type_name(&other)
				)));
			}
		};

		let keys = items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				Value::String(key) => Ok(key),
				Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
				other => Err(invalid(format!(
					"element {index} must be a string, found {}",
					json_type_name(&other)
				))),
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Some(KeyPath(keys)))
	}

	pub fn keys(&self) -> &[String] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, key) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{key:?}")?;
		}
		f.write_str("]")
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Walk `path` into `doc` and return the value found at its end.
///
/// With no path, or an empty one, the whole document is returned. Each step
/// must land on a mapping that contains the key; otherwise the walk fails
/// with [`MergeError::PathNotFound`] naming the key and the prefix consumed.
pub fn extract(doc: Document, path: Option<&KeyPath>) -> Result<Document> {
	let Some(path) = path else {
		return Ok(doc);
	};

	let mut current = doc;
	for (depth, key) in path.keys().iter().enumerate() {
		let found = match current {
			Document::Mapping(mut map) => map.shift_remove(key),
			other => {
				debug!(key = %key, depth, kind = %other.kind(), "cannot index into non-mapping");
				None
			}
		};

		current = found.ok_or_else(|| MergeError::PathNotFound {
			key: key.clone(),
			consumed: KeyPath(path.keys()[..depth].to_vec()),
		})?;
	}

	Ok(current)
}

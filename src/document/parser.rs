use crate::document::types::{Document, Mapping, Scalar};
use crate::error::{MergeError, Result};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Parse a YAML document from the given path.
pub fn parse_document_file(path: &Path) -> Result<Document> {
	let content = std::fs::read_to_string(path).map_err(|source| MergeError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_document_str(&content, path)
}

/// Parse a YAML document from a string (useful for testing).
///
/// `path` is only used for error reporting. A document that parses to
/// nothing (empty file, comments only, or an explicit null) is rejected.
pub fn parse_document_str(content: &str, path: &Path) -> Result<Document> {
	let mut value: Value =
		serde_yaml::from_str(content).map_err(|source| MergeError::Parse {
			path: path.to_path_buf(),
			source,
		})?;

	// Resolve `<<` merge keys before the tree is converted.
	value.apply_merge().map_err(|source| MergeError::Parse {
		path: path.to_path_buf(),
		source,
	})?;

	if value.is_null() {
		return Err(MergeError::EmptyDocument {
			path: path.to_path_buf(),
		});
	}

	let document = convert_value(value, path)?;
	debug!(path = %path.display(), kind = %document.kind(), "parsed document");
	Ok(document)
}

fn convert_value(value: Value, path: &Path) -> Result<Document> {
	let document = match value {
		Value::Null => Document::Scalar(Scalar::Null),
		Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
		Value::Number(n) => Document::Scalar(Scalar::Number(n)),
		Value::String(s) => Document::Scalar(Scalar::String(s)),
		Value::Sequence(items) => Document::Sequence(
			items
				.into_iter()
				.map(|item| convert_value(item, path))
				.collect::<Result<Vec<_>>>()?,
		),
		Value::Mapping(entries) => {
			let mut map = Mapping::with_capacity(entries.len());
			for (key, value) in entries {
				let key = mapping_key(key, path)?;
				// Keys that coerce to the same text collapse into the first slot.
				map.insert(key, convert_value(value, path)?);
			}
			Document::Mapping(map)
		}
		Value::Tagged(tagged) => convert_value(tagged.value, path)?,
	};

	Ok(document)
}

/// Coerce a YAML mapping key to the string key used by `Mapping`.
fn mapping_key(key: Value, path: &Path) -> Result<String> {
	match key {
		Value::String(s) => Ok(s),
		Value::Number(n) => Ok(n.to_string()),
		Value::Bool(b) => Ok(b.to_string()),
		Value::Null => Ok("null".to_string()),
		Value::Tagged(tagged) => mapping_key(tagged.value, path),
		Value::Sequence(_) => Err(MergeError::UnsupportedKey {
			path: path.to_path_buf(),
			kind: "sequence",
		}),
		Value::Mapping(_) => Err(MergeError::UnsupportedKey {
			path: path.to_path_buf(),
			kind: "mapping",
		}),
	}
}

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Ordered mapping node. Keys are unique and keep their insertion order.
pub type Mapping = IndexMap<String, Document>;

/// A leaf value of a parsed YAML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
	#[default]
	Null,
	Bool(bool),
	Number(serde_yaml::Number),
	String(String),
}

/// One parsed configuration file, or the result of merging several.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
	Scalar(Scalar),
	Sequence(Vec<Document>),
	Mapping(Mapping),
}

/// Shape of a document node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
	Scalar,
	Sequence,
	Mapping,
}

impl DocumentKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			DocumentKind::Scalar => "scalar",
			DocumentKind::Sequence => "sequence",
			DocumentKind::Mapping => "mapping",
		}
	}
}

impl fmt::Display for DocumentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Default for Document {
	fn default() -> Self {
		Document::Scalar(Scalar::Null)
	}
}

impl Document {
	/// The starting point of a merge fold.
	pub fn empty_mapping() -> Self {
		Document::Mapping(Mapping::new())
	}

	pub fn kind(&self) -> DocumentKind {
		match self {
			Document::Scalar(_) => DocumentKind::Scalar,
			Document::Sequence(_) => DocumentKind::Sequence,
			Document::Mapping(_) => DocumentKind::Mapping,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Document::Scalar(Scalar::Null))
	}

	/// Borrow the mapping node, if this is one.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Document::Mapping(map) => Some(map),
			_ => None,
		}
	}
}

impl From<Scalar> for Document {
	fn from(scalar: Scalar) -> Self {
		Document::Scalar(scalar)
	}
}

impl From<bool> for Document {
	fn from(value: bool) -> Self {
		Document::Scalar(Scalar::Bool(value))
	}
}

impl From<i64> for Document {
	fn from(value: i64) -> Self {
		Document::Scalar(Scalar::Number(value.into()))
	}
}

impl From<f64> for Document {
	fn from(value: f64) -> Self {
		Document::Scalar(Scalar::Number(value.into()))
	}
}

impl From<&str> for Document {
	fn from(value: &str) -> Self {
		Document::Scalar(Scalar::String(value.to_string()))
	}
}

impl From<String> for Document {
	fn from(value: String) -> Self {
		Document::Scalar(Scalar::String(value))
	}
}

impl From<Vec<Document>> for Document {
	fn from(items: Vec<Document>) -> Self {
		Document::Sequence(items)
	}
}

impl From<Mapping> for Document {
	fn from(map: Mapping) -> Self {
		Document::Mapping(map)
	}
}

use std::path::PathBuf;

use crate::merge::KeyPath;

/// Library-level structured errors for merge-yaml.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
	#[error("Failed to read YAML file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse YAML file: {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("YAML file is empty or null: {path}")]
	EmptyDocument { path: PathBuf },

	#[error("Unsupported {kind} mapping key in YAML file: {path}")]
	UnsupportedKey { path: PathBuf, kind: &'static str },

	#[error("Key path not found: {key:?} (after {consumed})")]
	PathNotFound { key: String, consumed: KeyPath },

	#[error("Invalid key path {input:?}: {reason}")]
	InvalidKeyPath { input: String, reason: String },

	#[error("Failed to serialize merged document as {format}: {message}")]
	Serialize {
		format: &'static str,
		message: String,
	},

	#[error("Failed to write output file: {path}")]
	OutputWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using MergeError.
pub type Result<T> = std::result::Result<T, MergeError>;

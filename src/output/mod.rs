//! Serializing the extracted value and publishing it to the caller.
//!
//! This module handles:
//! - Rendering a `Document` as JSON or YAML
//! - Appending named outputs to a GitHub Actions output file
//! - Formatting failures as workflow `::error::` annotations

use crate::document::Document;
use crate::error::{MergeError, Result};
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Name of the output slot used when none is configured.
pub const DEFAULT_OUTPUT_NAME: &str = "data";

/// Serialization format for the emitted value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	#[default]
	Json,
	Yaml,
}

impl OutputFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			OutputFormat::Json => "json",
			OutputFormat::Yaml => "yaml",
		}
	}
}

/// Render `doc` in the requested format.
///
/// JSON is compact unless `pretty` is set. Trailing newlines are trimmed.
pub fn render(doc: &Document, format: OutputFormat, pretty: bool) -> Result<String> {
	let serialize_error = |message: String| MergeError::Serialize {
		format: format.as_str(),
		message,
	};

	let rendered = match format {
		OutputFormat::Json if pretty => {
			serde_json::to_string_pretty(doc).map_err(|e| serialize_error(e.to_string()))?
		}
		OutputFormat::Json => {
			serde_json::to_string(doc).map_err(|e| serialize_error(e.to_string()))?
		}
		OutputFormat::Yaml => serde_yaml::to_string(doc)
			.map_err(|e| serialize_error(e.to_string()))?
			.trim_end()
			.to_string(),
	};

	Ok(rendered)
}

/// Append `name` = `value` to a GitHub Actions output file.
///
/// Uses the multi-line `name<<DELIMITER` form so values may contain newlines.
pub fn write_output(path: &Path, name: &str, value: &str) -> Result<()> {
	let output_error = |source: std::io::Error| MergeError::OutputWrite {
		path: path.to_path_buf(),
		source,
	};

	let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
	if name.contains(&delimiter) || value.contains(&delimiter) {
		return Err(output_error(std::io::Error::new(
			std::io::ErrorKind::InvalidData,
			"output contains the generated delimiter",
		)));
	}

	let mut file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(output_error)?;

	write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n").map_err(output_error)?;

	debug!(path = %path.display(), name, bytes = value.len(), "wrote output");
	Ok(())
}

/// Format `message` as a workflow `::error::` command.
pub fn failure_annotation(message: &str) -> String {
	let escaped = message
		.replace('%', "%25")
		.replace('\r', "%0D")
		.replace('\n', "%0A");
	format!("::error::{escaped}")
}

use crate::output::{DEFAULT_OUTPUT_NAME, OutputFormat};
use serde::Deserialize;
use std::path::PathBuf;

/// Settings from a single `.merge-yaml.toml` file.
///
/// Every field is optional so files can be layered; the most specific file
/// that sets a field wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// If true, stop directory cascade and jump directly to ~/.merge-yaml.toml.
	#[serde(default)]
	pub root: bool,

	/// Format of the emitted value (`json` or `yaml`).
	pub output_format: Option<OutputFormat>,

	/// Pretty-print JSON output.
	pub pretty: Option<bool>,

	/// Name of the output slot written to the GitHub output file.
	pub output_name: Option<String>,

	/// Environment variable name that, if truthy, skips ~/.merge-yaml.toml lookup.
	/// Useful for CI environments.
	pub user_config_lookup_disable_env_var: Option<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Effective settings after layering every config file in the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub output_format: OutputFormat,
	pub pretty: bool,
	pub output_name: String,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			output_format: OutputFormat::default(),
			pretty: false,
			output_name: DEFAULT_OUTPUT_NAME.to_string(),
		}
	}
}

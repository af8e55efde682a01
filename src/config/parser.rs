use crate::config::types::Config;
use crate::error::{MergeError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| MergeError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	toml::from_str(content).map_err(|source| MergeError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::output::OutputFormat;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let content = "";
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(!config.root);
		assert!(config.output_format.is_none());
		assert!(config.pretty.is_none());
		assert!(config.output_name.is_none());
		assert!(config.user_config_lookup_disable_env_var.is_none());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
root = true
output-format = "yaml"
pretty = true
output-name = "settings"
user-config-lookup-disable-env-var = "CI"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.root);
		assert_eq!(config.output_format, Some(OutputFormat::Yaml));
		assert_eq!(config.pretty, Some(true));
		assert_eq!(config.output_name, Some("settings".to_string()));
		assert_eq!(
			config.user_config_lookup_disable_env_var,
			Some("CI".to_string())
		);
	}

	#[test]
	fn test_unknown_output_format_is_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(r#"output-format = "xml""#, &path);

		match result {
			Err(MergeError::ConfigParseError { path, .. }) => {
				assert_eq!(path, PathBuf::from("test.toml"));
			}
			other => panic!("Expected ConfigParseError, got {other:?}"),
		}
	}

	#[test]
	fn test_unknown_key_is_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str("sequence-strategy = \"replace\"", &path);
		assert!(matches!(result, Err(MergeError::ConfigParseError { .. })));
	}

	#[test]
	fn test_invalid_toml() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str("invalid toml [[[", &path);
		assert!(matches!(result, Err(MergeError::ConfigParseError { .. })));
	}
}

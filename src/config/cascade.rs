use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, Settings};
use crate::error::{MergeError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in each directory of the cascade and in the home directory.
pub const CONFIG_FILE_NAME: &str = ".merge-yaml.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.merge-yaml.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.merge-yaml.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let home_dir = dirs::home_dir().ok_or(MergeError::HomeDirectoryNotFound)?;
	discover_configs_with_home(start_dir, &home_dir)
}

fn discover_configs_with_home(start_dir: &Path, home_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let user_path = home_dir.join(CONFIG_FILE_NAME);
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		// The user config is handled last, even when the walk passes through home.
		if config_path != user_path && config_path.exists() {
			debug!(path = %config_path.display(), "found config file");
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		current_dir = dir.parent();
	}

	if !user_config_disabled(&configs) && user_path.exists() {
		debug!(path = %user_path.display(), "found user config file");
		let config = parse_config_file(&user_path)?;
		configs.push(LoadedConfig {
			config,
			path: user_path,
		});
	}

	Ok(configs)
}

/// Whether any discovered config disables the user config via a truthy env var.
fn user_config_disabled(configs: &[LoadedConfig]) -> bool {
	configs.iter().any(|loaded| {
		loaded
			.config
			.user_config_lookup_disable_env_var
			.as_deref()
			.is_some_and(is_env_truthy)
	})
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Layer configs into effective settings.
///
/// Configs are in cascade order, so for each field the first config that
/// sets it wins. Unset fields fall back to [`Settings::default`].
pub fn merge_settings(configs: &[LoadedConfig]) -> Settings {
	let defaults = Settings::default();

	Settings {
		output_format: configs
			.iter()
			.find_map(|loaded| loaded.config.output_format)
			.unwrap_or(defaults.output_format),
		pretty: configs
			.iter()
			.find_map(|loaded| loaded.config.pretty)
			.unwrap_or(defaults.pretty),
		output_name: configs
			.iter()
			.find_map(|loaded| loaded.config.output_name.clone())
			.unwrap_or(defaults.output_name),
	}
}

/// Convenience function to discover, load, and layer settings from a directory.
pub fn load_settings(start_dir: &Path) -> Result<Settings> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_settings(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(MergeError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

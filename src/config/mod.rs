//! Tool settings for merge-yaml.
//!
//! This module handles:
//! - `.merge-yaml.toml` parsing
//! - Directory cascade discovery
//! - Layering settings into their effective values

pub mod cascade;
pub mod parser;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, discover_configs, load_settings, merge_settings, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, LoadedConfig, Settings};

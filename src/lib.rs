//! merge-yaml - CLI tool for deep-merging YAML config files.
//!
//! This library provides the core functionality for merge-yaml, including:
//! - YAML parsing into an ordered `Document` tree
//! - Deep merging of documents in file order
//! - Key-path extraction from the merged document
//! - JSON/YAML rendering and GitHub Actions output files
//! - Tool settings discovery via `.merge-yaml.toml` cascade
//!
//! # Example
//!
//! ```no_run
//! use merge_yaml_cli::merge::{KeyPath, merge_files};
//! use merge_yaml_cli::output::{OutputFormat, render};
//! use std::path::PathBuf;
//!
//! let files = vec![PathBuf::from("base.yaml"), PathBuf::from("prod.yaml")];
//! let key_path = KeyPath::parse_json(r#"["server", "port"]"#).unwrap();
//!
//! let value = merge_files(&files, key_path.as_ref()).unwrap();
//! println!("{}", render(&value, OutputFormat::Json, false).unwrap());
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod merge;
pub mod output;

pub use document::Document;
pub use error::{MergeError, Result};

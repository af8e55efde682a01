use crate::document::{Document, load_documents};
use crate::error::Result;
use crate::merge::extract::{KeyPath, extract};
use crate::merge::merger::merge_all;
use std::path::PathBuf;
use tracing::info;

/// Load, merge, and extract in one step.
///
/// Files are parsed in order and merged left to right. Any failure aborts the
/// whole run, so no partially merged document is ever returned.
pub fn merge_files(paths: &[PathBuf], key_path: Option<&KeyPath>) -> Result<Document> {
	let documents = load_documents(paths)?;
	let merged = merge_all(documents);

	match key_path {
		Some(path) => info!(key_path = %path, "extracting key path"),
		None => info!("no key path, emitting whole document"),
	}
	extract(merged, key_path)
}

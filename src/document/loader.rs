use crate::document::parser::parse_document_file;
use crate::document::types::Document;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Split a newline-separated list of file paths.
///
/// Entries are trimmed and blank lines dropped. Order is preserved, since
/// later files take precedence when merged.
pub fn parse_file_list(input: &str) -> Vec<PathBuf> {
	input
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(PathBuf::from)
		.collect()
}

/// Parse every file in order, stopping at the first failure.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<Document>> {
	info!(count = paths.len(), "loading YAML files");

	paths.iter().map(|path| load_document(path)).collect()
}

fn load_document(path: &Path) -> Result<Document> {
	debug!(path = %path.display(), "processing file");
	parse_document_file(path)
}

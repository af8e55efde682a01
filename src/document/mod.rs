//! YAML document model and loading for merge-yaml.
//!
//! This module handles:
//! - The `Document` tree (scalars, sequences, ordered mappings)
//! - YAML parsing into that tree
//! - Turning an input file list into parsed documents

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::{load_documents, parse_file_list};
pub use parser::{parse_document_file, parse_document_str};
pub use types::{Document, DocumentKind, Mapping, Scalar};

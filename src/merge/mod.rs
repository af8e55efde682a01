//! Deep merge and key-path extraction over `Document` trees.
//!
//! This module handles:
//! - Folding parsed documents into one, later documents taking precedence
//! - Navigating the merged document by a list of mapping keys
//! - The load, merge, extract pipeline used by the CLI

pub mod extract;
pub mod merger;
pub mod pipeline;

pub use extract::{KeyPath, extract};
pub use merger::{merge, merge_all};
pub use pipeline::merge_files;

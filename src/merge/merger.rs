use crate::document::{Document, Mapping};
use tracing::{debug, trace};

/// Deep-merge `incoming` onto `base`.
///
/// - Two mappings merge key by key: `base` keys keep their position, shared
///   keys recurse, and keys only in `incoming` are appended.
/// - Two sequences concatenate, `base` items first.
/// - Anything else is replaced by `incoming`.
pub fn merge(base: Document, incoming: Document) -> Document {
	match (base, incoming) {
		(Document::Mapping(base), Document::Mapping(incoming)) => {
			Document::Mapping(merge_mappings(base, incoming))
		}
		(Document::Sequence(mut base), Document::Sequence(incoming)) => {
			base.extend(incoming);
			Document::Sequence(base)
		}
		(base, incoming) => {
			trace!(base = %base.kind(), incoming = %incoming.kind(), "replacing value");
			incoming
		}
	}
}

fn merge_mappings(mut base: Mapping, incoming: Mapping) -> Mapping {
	for (key, value) in incoming {
		match base.get_mut(&key) {
			Some(slot) => {
				let existing = std::mem::take(slot);
				*slot = merge(existing, value);
			}
			None => {
				base.insert(key, value);
			}
		}
	}
	base
}

/// Fold `docs` left to right with [`merge`], starting from an empty mapping.
///
/// Later documents take precedence. No documents yields an empty mapping.
pub fn merge_all<I>(docs: I) -> Document
where
	I: IntoIterator<Item = Document>,
{
	docs.into_iter()
		.enumerate()
		.fold(Document::empty_mapping(), |merged, (index, doc)| {
			debug!(index, kind = %doc.kind(), "merging document");
			merge(merged, doc)
		})
}

use serde::{Deserialize, Serialize};
use svg_document::uuid::is_generated_identifier;
use svg_document::{Document, ElementKind, NodeId};

/// One row of the Layers panel. Rows are regenerated from the document on every rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerPanelEntry {
	pub identifier: String,
	pub depth: usize,
	pub label: String,
	pub kind: ElementKind,
	pub hidden: bool,
	pub active: bool,
}

/// Walks the document in pre-order and produces the Layers panel rows.
///
/// The root itself is not listed. `<defs>` and everything inside it are skipped, and only containers have their
/// children listed. Every listed element is given an identifier if it did not have one yet.
pub fn build_layer_panel(document: &mut Document, selected: Option<&str>) -> Vec<LayerPanelEntry> {
	let mut entries = Vec::new();
	let root = document.root();
	push_children(document, root, 0, selected, &mut entries);
	entries
}

fn push_children(document: &mut Document, parent: NodeId, depth: usize, selected: Option<&str>, entries: &mut Vec<LayerPanelEntry>) {
	let children = document.children(parent).collect::<Vec<_>>();

	for child in children {
		let Some(kind) = document.kind(child) else { continue };
		if kind.is_metadata() {
			continue;
		}
		let Some(identifier) = document.ensure_identifier(child) else { continue };

		entries.push(LayerPanelEntry {
			label: layer_label(kind, &identifier),
			active: selected == Some(identifier.as_str()),
			hidden: document.is_hidden(child),
			identifier,
			depth,
			kind,
		});

		if kind.is_container() {
			push_children(document, child, depth + 1, selected, entries);
		}
	}
}

/// `"{icon} {tag}"`, followed by `" #{identifier}"` when the identifier was chosen by the user.
pub fn layer_label(kind: ElementKind, identifier: &str) -> String {
	let mut label = format!("{} {}", kind.icon(), kind.tag_name());
	if !is_generated_identifier(identifier) {
		label.push_str(" #");
		label.push_str(identifier);
	}
	label
}

/// Recomputes every entry's `active` flag against the selection and returns the matching entry's identifier.
pub fn highlight_active(entries: &mut [LayerPanelEntry], selected: Option<&str>) -> Option<String> {
	let mut matched = None;
	for entry in entries.iter_mut() {
		entry.active = selected == Some(entry.identifier.as_str());
		if entry.active {
			matched = Some(entry.identifier.clone());
		}
	}
	matched
}

use svg_document::{Document, NodeId};

/// Weak reference to the selected element, held as its identifier and resolved against the document on every use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	selected: Option<String>,
}

impl Selection {
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	pub fn resolve(&self, document: &Document) -> Option<NodeId> {
		self.selected.as_deref().and_then(|identifier| document.find(identifier))
	}

	/// Stores the new reference. Identifiers that do not resolve are stored as nothing selected.
	pub fn set(&mut self, identifier: Option<String>, document: &Document) {
		self.selected = identifier.filter(|identifier| document.find(identifier).is_some());
	}

	pub fn clear(&mut self) {
		self.selected = None;
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use svg_document::{Element, ElementKind};

	#[test]
	fn stale_references_resolve_to_nothing() {
		let mut document = Document::default();
		let node = document.add_element(document.root(), Element::new(ElementKind::Text).with_identifier("t1")).unwrap();

		let mut selection = Selection::default();
		selection.set(Some("t1".to_string()), &document);
		assert_eq!(selection.resolve(&document), Some(node));

		document.delete(node).unwrap();
		assert_eq!(selection.selected(), Some("t1"));
		assert_eq!(selection.resolve(&document), None);

		selection.set(Some("t1".to_string()), &document);
		assert_eq!(selection.selected(), None);
	}
}

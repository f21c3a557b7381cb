use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::element::{Element, ElementHighlight, ElementKind, is_attribute_name};
use crate::structure::{AxisIter, DescendantsIter, Structure};
use crate::uuid::{generate_identifier, generate_uuid};
use crate::{DocumentError, DocumentResponse, Operation, Placement};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Handle to a node in the document arena. Only meaningful for the document that issued it and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
	pub fn new() -> Self {
		Self(generate_uuid())
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// An SVG document: a rooted, ordered tree of elements whose root is the canvas `<svg>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "crate::serialization::DocumentFile", try_from = "crate::serialization::DocumentFile")]
pub struct Document {
	root: NodeId,
	elements: HashMap<NodeId, Element>,
	structure: Structure,
	/// Lookup table from identifier to node, kept in sync with every element's `identifier`
	identifiers: HashMap<String, NodeId>,
}

impl Default for Document {
	fn default() -> Self {
		let root = Element::new(ElementKind::SVG)
			.with_attribute("width", DEFAULT_CANVAS_WIDTH.to_string())
			.with_attribute("height", DEFAULT_CANVAS_HEIGHT.to_string())
			.with_attribute("viewBox", format!("0 0 {DEFAULT_CANVAS_WIDTH} {DEFAULT_CANVAS_HEIGHT}"));
		Self::with_root(root)
	}
}

impl Document {
	/// Creates a document containing only the given root element.
	pub(crate) fn with_root(mut element: Element) -> Self {
		let root = NodeId::new();
		element.highlight = ElementHighlight::empty();

		let mut identifiers = HashMap::new();
		if let Some(identifier) = take_identifier_attribute(&mut element) {
			identifiers.insert(identifier, root);
		}

		Self {
			root,
			elements: HashMap::from([(root, element)]),
			structure: Structure::with_root(root),
			identifiers,
		}
	}

	pub fn root(&self) -> NodeId {
		self.root
	}

	pub fn exists(&self, node: NodeId) -> bool {
		self.elements.contains_key(&node)
	}

	/// Number of elements in the document, including the root.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	pub fn element(&self, node: NodeId) -> Option<&Element> {
		self.elements.get(&node)
	}

	fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, DocumentError> {
		self.elements.get_mut(&node).ok_or(DocumentError::ElementNotFound(node))
	}

	fn ensure_exists(&self, node: NodeId) -> Result<(), DocumentError> {
		if self.exists(node) { Ok(()) } else { Err(DocumentError::ElementNotFound(node)) }
	}

	pub fn kind(&self, node: NodeId) -> Option<ElementKind> {
		self.element(node).map(|element| element.kind)
	}

	pub fn parent(&self, node: NodeId) -> Option<NodeId> {
		self.structure.parent(node)
	}

	pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
		self.structure.previous_sibling(node)
	}

	pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
		self.structure.next_sibling(node)
	}

	pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
		self.structure.first_child(node)
	}

	pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
		self.structure.last_child(node)
	}

	pub fn children(&self, node: NodeId) -> AxisIter<'_> {
		self.structure.children(node)
	}

	/// The node itself followed by each of its ancestors up to the root.
	pub fn ancestors(&self, node: NodeId) -> AxisIter<'_> {
		self.structure.ancestors(node)
	}

	/// All nodes below `node` in document order, excluding `node` itself.
	pub fn descendants(&self, node: NodeId) -> DescendantsIter<'_> {
		self.structure.descendants(node)
	}

	/// Whether `node` is `ancestor` or lies anywhere in its subtree.
	pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
		self.exists(ancestor) && self.exists(node) && self.structure.is_inclusive_ancestor(ancestor, node)
	}

	// ========
	// Identity
	// ========

	/// Resolves an identifier through the lookup table.
	pub fn find(&self, identifier: &str) -> Option<NodeId> {
		self.identifiers.get(identifier).copied().filter(|&node| self.exists(node))
	}

	pub fn identifier(&self, node: NodeId) -> Option<&str> {
		self.element(node).and_then(Element::identifier)
	}

	/// Returns the node's identifier, first assigning it a fresh generated one if it has none.
	/// Once assigned, an identifier never changes. Returns `None` only for nodes not in the document.
	pub fn ensure_identifier(&mut self, node: NodeId) -> Option<String> {
		let element = self.elements.get(&node)?;
		if let Some(identifier) = element.identifier() {
			return Some(identifier.to_string());
		}

		let identifier = loop {
			let candidate = generate_identifier();
			if !self.identifiers.contains_key(&candidate) {
				break candidate;
			}
			log::trace!("Generated identifier {candidate} collided, retrying");
		};

		self.identifiers.insert(identifier.clone(), node);
		self.elements.get_mut(&node)?.identifier = Some(identifier.clone());
		Some(identifier)
	}

	fn register_identifier(&mut self, element: &mut Element, node: NodeId) -> Result<(), DocumentError> {
		if let Some(identifier) = take_identifier_attribute(element) {
			if self.identifiers.contains_key(&identifier) {
				return Err(DocumentError::DuplicateIdentifier(identifier));
			}
			self.identifiers.insert(identifier, node);
		}
		Ok(())
	}

	// =========
	// Structure
	// =========

	/// Appends a new element as the last child of `parent` and returns its handle.
	pub fn add_element(&mut self, parent: NodeId, mut element: Element) -> Result<NodeId, DocumentError> {
		self.ensure_exists(parent)?;
		element.check_attribute_names()?;

		let node = self.unused_node_id();
		element.highlight = ElementHighlight::empty();
		self.register_identifier(&mut element, node)?;

		self.elements.insert(node, element);
		self.structure.push_child(parent, node);
		Ok(node)
	}

	fn unused_node_id(&self) -> NodeId {
		loop {
			let node = NodeId::new();
			if !self.exists(node) {
				return node;
			}
		}
	}

	/// Moves `node` (with its whole subtree) to the given placement.
	/// All checks run before anything is touched, so a rejected move leaves the tree unchanged.
	pub fn move_element(&mut self, node: NodeId, placement: Placement) -> Result<(), DocumentError> {
		self.ensure_exists(node)?;
		if node == self.root {
			return Err(DocumentError::CannotMoveRoot);
		}

		let target = placement.target();
		self.ensure_exists(target)?;
		if self.structure.is_inclusive_ancestor(node, target) {
			return Err(DocumentError::WouldCreateCycle { node, target });
		}
		if !matches!(placement, Placement::Into(_)) && self.parent(target).is_none() {
			return Err(DocumentError::NoParent(target));
		}

		self.structure.detach(node);
		match placement {
			Placement::Into(parent) => self.structure.push_child(parent, node),
			Placement::Before(sibling) => self.structure.add_before(sibling, node),
			Placement::After(sibling) => self.structure.add_after(sibling, node),
		}
		Ok(())
	}

	/// Deletes `node` and its entire subtree, returning the removed nodes in document order.
	pub fn delete(&mut self, node: NodeId) -> Result<Vec<NodeId>, DocumentError> {
		self.ensure_exists(node)?;
		if node == self.root {
			return Err(DocumentError::CannotDeleteRoot);
		}

		let deleted = self.structure.delete(node);
		for node in &deleted {
			if let Some(identifier) = self.elements.remove(node).and_then(|element| element.identifier) {
				self.identifiers.remove(&identifier);
			}
		}
		Ok(deleted)
	}

	// ==========
	// Attributes
	// ==========

	pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
		self.element(node)?.attribute(name)
	}

	/// The `id` attribute is owned by the identity assigner and cannot be written here.
	pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DocumentError> {
		check_attribute_name(name)?;
		self.element_mut(node)?.attributes.insert(name.to_string(), value.to_string());
		Ok(())
	}

	pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<Option<String>, DocumentError> {
		check_attribute_name(name)?;
		Ok(self.element_mut(node)?.attributes.remove(name))
	}

	/// Sets a single inline-style property, an empty value removes it.
	pub fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DocumentError> {
		self.element_mut(node)?.set_style_property(property, value);
		Ok(())
	}

	pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DocumentError> {
		self.element_mut(node)?.text = text.to_string();
		Ok(())
	}

	// ==========
	// Visibility
	// ==========

	pub fn is_hidden(&self, node: NodeId) -> bool {
		self.element(node).is_some_and(Element::is_hidden)
	}

	/// Returns whether the node is hidden after the toggle.
	pub fn toggle_visibility(&mut self, node: NodeId) -> Result<bool, DocumentError> {
		Ok(self.element_mut(node)?.toggle_visibility())
	}

	/// Turns a transient highlight on or off and returns whether anything changed.
	pub fn set_highlight(&mut self, node: NodeId, highlight: ElementHighlight, enabled: bool) -> Result<bool, DocumentError> {
		let element = self.element_mut(node)?;
		let before = element.highlight;
		element.highlight.set(highlight, enabled);
		Ok(before != element.highlight)
	}

	/// Mutate the document by applying the `operation` to it. If the operation necessitates a
	/// reaction from the frontend, responses may be returned.
	pub fn handle_operation(&mut self, operation: &Operation) -> Result<Option<Vec<DocumentResponse>>, DocumentError> {
		use DocumentResponse::*;

		let responses = match operation {
			Operation::AddElement { parent, element } => {
				let node = self.add_element(*parent, element.as_ref().clone())?;
				Some(vec![CreatedElement { node }, StructureChanged, DocumentChanged])
			}
			Operation::DeleteElement { node } => {
				self.delete(*node)?;
				Some(vec![DeletedElement { node: *node }, StructureChanged, DocumentChanged])
			}
			Operation::MoveElement { node, placement } => {
				self.move_element(*node, *placement)?;
				Some(vec![StructureChanged, DocumentChanged])
			}
			Operation::SetAttribute { node, name, value } => {
				self.set_attribute(*node, name, value)?;
				Some(vec![ElementChanged { node: *node }, DocumentChanged])
			}
			Operation::RemoveAttribute { node, name } => self.remove_attribute(*node, name)?.map(|_| vec![ElementChanged { node: *node }, DocumentChanged]),
			Operation::SetStyleProperty { node, property, value } => {
				self.set_style_property(*node, property, value)?;
				Some(vec![ElementChanged { node: *node }, DocumentChanged])
			}
			Operation::SetTextContent { node, text } => {
				self.set_text(*node, text)?;
				Some(vec![ElementChanged { node: *node }, DocumentChanged])
			}
			Operation::ToggleElementVisibility { node } => {
				let hidden = self.toggle_visibility(*node)?;
				log::debug!("Element {node} is now {}", if hidden { "hidden" } else { "visible" });
				Some(vec![ElementChanged { node: *node }, DocumentChanged])
			}
		};
		Ok(responses)
	}
}

fn check_attribute_name(name: &str) -> Result<(), DocumentError> {
	if name == "id" {
		return Err(DocumentError::ReservedAttribute(name.to_string()));
	}
	if !is_attribute_name(name) {
		return Err(DocumentError::InvalidAttributeName(name.to_string()));
	}
	Ok(())
}

/// An `id` attribute and the identifier field describe the same thing; the field wins.
fn take_identifier_attribute(element: &mut Element) -> Option<String> {
	if let Some(id) = element.attributes.remove("id") {
		element.identifier.get_or_insert(id);
	}
	element.identifier.clone()
}

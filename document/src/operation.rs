use crate::{Element, NodeId};

use serde::{Deserialize, Serialize};

/// Where a moved element ends up relative to a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
	/// Last child of the target
	Into(NodeId),
	/// Sibling immediately before the target
	Before(NodeId),
	/// Sibling immediately after the target
	After(NodeId),
}

impl Placement {
	pub fn target(&self) -> NodeId {
		match *self {
			Placement::Into(target) | Placement::Before(target) | Placement::After(target) => target,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
	AddElement {
		parent: NodeId,
		element: Box<Element>,
	},
	DeleteElement {
		node: NodeId,
	},
	MoveElement {
		node: NodeId,
		placement: Placement,
	},
	SetAttribute {
		node: NodeId,
		name: String,
		value: String,
	},
	RemoveAttribute {
		node: NodeId,
		name: String,
	},
	SetStyleProperty {
		node: NodeId,
		property: String,
		value: String,
	},
	SetTextContent {
		node: NodeId,
		text: String,
	},
	ToggleElementVisibility {
		node: NodeId,
	},
}

use crate::NodeId;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentResponse {
	/// For the purposes of rendering, this triggers a re-render of the entire document.
	DocumentChanged,
	/// The parent/child/sibling relations changed somewhere, so the Layers panel needs rebuilding.
	StructureChanged,
	CreatedElement {
		node: NodeId,
	},
	DeletedElement {
		node: NodeId,
	},
	/// Triggers an update of the element's entry in the Layers panel and, if selected, the Properties panel.
	ElementChanged {
		node: NodeId,
	},
}

impl fmt::Display for DocumentResponse {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			DocumentResponse::DocumentChanged => write!(f, "DocumentChanged"),
			DocumentResponse::StructureChanged => write!(f, "StructureChanged"),
			DocumentResponse::CreatedElement { .. } => write!(f, "CreatedElement"),
			DocumentResponse::DeletedElement { .. } => write!(f, "DeletedElement"),
			DocumentResponse::ElementChanged { .. } => write!(f, "ElementChanged"),
		}
	}
}

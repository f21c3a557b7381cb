use crate::NodeId;

use thiserror::Error;

/// A set of different errors that can occur when using this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	#[error("No element with id {0} exists in the document")]
	ElementNotFound(NodeId),

	#[error("Element {0} has no parent to be placed next to")]
	NoParent(NodeId),

	#[error("The document root cannot be moved")]
	CannotMoveRoot,

	#[error("The document root cannot be deleted")]
	CannotDeleteRoot,

	#[error("Placing element {node} relative to {target} would make it its own descendant")]
	WouldCreateCycle { node: NodeId, target: NodeId },

	#[error("Unsupported element <{0}>")]
	UnsupportedElement(String),

	#[error("The identifier \"{0}\" is already used by another element")]
	DuplicateIdentifier(String),

	#[error("The \"{0}\" attribute is managed by the editor and cannot be set directly")]
	ReservedAttribute(String),

	#[error("\"{0}\" is not a valid attribute name")]
	InvalidAttributeName(String),

	#[error("Invalid document file: {0}")]
	InvalidFile(String),
}

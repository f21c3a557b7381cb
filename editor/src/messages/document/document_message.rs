use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasDimension {
	Width,
	Height,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DocumentMessage {
	/// Creates an element with default attributes next to or inside the selection, then selects it
	AddElement {
		kind: ElementKind,
	},
	/// A click inside the canvas area, `None` meaning the empty area around the canvas itself
	CanvasClick {
		identifier: Option<String>,
	},
	DeleteSelected,
	/// The document was swapped out wholesale, so anything referring to the previous tree is stale
	DocumentReplaced,
	/// Rebuilds the Layers panel from the document
	DocumentStructureChanged,
	ExportDocument,
	HighlightActive,
	/// Pointer movement over the canvas while in inspect mode
	HoverElement {
		identifier: Option<String>,
	},
	/// Sets the `href` of the selected image, or adds a new image if no image is selected
	InsertImage {
		href: String,
	},
	LoadDocument {
		content: String,
	},
	ReplaceDocument {
		document: Box<Document>,
	},
	SaveDocument,
	SelectElement {
		identifier: Option<String>,
	},
	SetAttribute {
		name: String,
		value: String,
	},
	SetCanvasBackground {
		color: String,
	},
	SetCanvasSize {
		dimension: CanvasDimension,
		value: f64,
	},
	SetTextContent {
		text: String,
	},
	ToggleInspectMode,
	ToggleVisibility {
		identifier: String,
	},
}

impl_message!(Message, Document, DocumentMessage);

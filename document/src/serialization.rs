use crate::consts::DOCUMENT_FORMAT_VERSION;
use crate::{Document, DocumentError, Element, NodeId};

use serde::{Deserialize, Serialize};

/// On-disk shape of a document: the element tree nested by ownership, with the arena handles left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile {
	pub version: String,
	pub root: SerializedElement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedElement {
	#[serde(flatten)]
	pub element: Element,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<SerializedElement>,
}

impl SerializedElement {
	fn from_node(document: &Document, node: NodeId) -> Option<Self> {
		let mut element = document.element(node)?.clone();
		element.highlight = Default::default();
		let children = document.children(node).filter_map(|child| Self::from_node(document, child)).collect();
		Some(Self { element, children })
	}
}

impl From<Document> for DocumentFile {
	fn from(document: Document) -> Self {
		let root = SerializedElement::from_node(&document, document.root()).unwrap_or_else(|| SerializedElement {
			element: Element::new(crate::ElementKind::SVG),
			children: Vec::new(),
		});
		Self {
			version: DOCUMENT_FORMAT_VERSION.to_string(),
			root,
		}
	}
}

impl TryFrom<DocumentFile> for Document {
	type Error = DocumentError;

	fn try_from(file: DocumentFile) -> Result<Self, Self::Error> {
		if file.version != DOCUMENT_FORMAT_VERSION {
			return Err(DocumentError::InvalidFile(format!("unsupported version {}, expected {DOCUMENT_FORMAT_VERSION}", file.version)));
		}

		let SerializedElement { element, children } = file.root;
		if !element.kind.is_container() {
			return Err(DocumentError::InvalidFile(format!("the root must be a container, found <{}>", element.kind)));
		}
		element.check_attribute_names().map_err(invalid_content)?;

		let mut document = Document::with_root(element);
		let mut stack = vec![(document.root(), children)];
		while let Some((parent, children)) = stack.pop() {
			for SerializedElement { element, children } in children {
				let node = document.add_element(parent, element).map_err(invalid_content)?;
				if !children.is_empty() {
					stack.push((node, children));
				}
			}
		}
		Ok(document)
	}
}

/// Content that the document model refuses is reported as a fault of the file.
pub(crate) fn invalid_content(error: DocumentError) -> DocumentError {
	match error {
		DocumentError::DuplicateIdentifier(identifier) => DocumentError::InvalidFile(format!("the identifier \"{identifier}\" is used more than once")),
		DocumentError::InvalidAttributeName(name) => DocumentError::InvalidFile(format!("\"{name}\" is not a valid attribute name")),
		error => error,
	}
}

impl Document {
	pub fn serialize_document(&self) -> String {
		serde_json::to_string(self).unwrap_or_else(|error| {
			log::error!("Failed to serialize the document: {error}");
			String::new()
		})
	}

	/// Loads a document previously written by [`Document::serialize_document`].
	pub fn with_content(serialized_content: &str) -> Result<Self, DocumentError> {
		serde_json::from_str(serialized_content).map_err(|error| DocumentError::InvalidFile(error.to_string()))
	}
}

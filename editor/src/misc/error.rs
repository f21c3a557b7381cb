use svg_document::DocumentError;

use thiserror::Error;

/// The error type used by the editor.
#[derive(Clone, Debug, Error)]
pub enum EditorError {
	#[error("The operation caused a document error:\n{0}")]
	Document(String),

	#[error("Failed to read or write JSON:\n{0}")]
	Serialization(String),

	#[error("{0}")]
	Misc(String),
}

macro_rules! derive_from {
	($type:ty, $kind:ident) => {
		impl From<$type> for EditorError {
			fn from(error: $type) -> Self {
				EditorError::$kind(format!("{error}"))
			}
		}
	};
}

derive_from!(&str, Misc);
derive_from!(String, Misc);
derive_from!(DocumentError, Document);
derive_from!(serde_json::Error, Serialization);

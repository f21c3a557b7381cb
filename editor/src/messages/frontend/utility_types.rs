use serde::{Deserialize, Serialize};

/// How the host's drag transfer should present the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragEffect {
	Move,
}

/// Snapshot of one element for the host's properties panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProperties {
	pub identifier: String,
	pub tag_name: String,
	pub attributes: Vec<(String, String)>,
	/// Character content, present only for text elements
	pub text: Option<String>,
}

/// Canvas-level settings shown when nothing is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasProperties {
	pub width: String,
	pub height: String,
	pub view_box: String,
	pub background: String,
}

use crate::messages::prelude::*;

/// Pointer gestures on the Layers panel rows, identified by the row's element identifier.
///
/// `pointer_offset` is the pointer's vertical distance from the top of the hovered row and `entry_height` the row's height,
/// both in the same units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LayersPanelMessage {
	ClickEntry {
		identifier: String,
	},
	/// The drag was cancelled or finished without a drop
	DragEnd,
	DragLeave {
		identifier: String,
	},
	DragOver {
		identifier: String,
		pointer_offset: f64,
		entry_height: f64,
	},
	DragStart {
		identifier: String,
	},
	/// `payload` is the identifier handed to the host at `DragStart`
	Drop {
		payload: String,
		identifier: String,
		pointer_offset: f64,
		entry_height: f64,
	},
	/// A drop on the area that stands for the document root
	DropOnRoot {
		payload: String,
	},
}

impl_message!(Message, LayersPanel, LayersPanelMessage);

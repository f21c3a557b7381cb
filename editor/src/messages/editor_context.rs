use crate::messages::document::utility_types::layer_panel::LayerPanelEntry;
use crate::messages::document::utility_types::selection::Selection;
use crate::messages::prelude::*;

/// State shared by the message handlers, owned by the dispatcher and lent to whichever handler is processing a message.
#[derive(Debug, Default)]
pub struct EditorContext {
	pub document: Document,
	pub selection: Selection,
	pub layers_panel: LayersPanelState,
	/// Whether the host has a properties panel ready to receive `RenderProperties`
	pub properties_panel_mounted: bool,
	pub inspect_mode: bool,
}

#[derive(Debug, Default)]
pub struct LayersPanelState {
	/// Entries from the most recent rebuild, in display order
	pub entries: Vec<LayerPanelEntry>,
	pub mounted: bool,
}

impl EditorContext {
	pub fn new(document: Document) -> Self {
		Self { document, ..Default::default() }
	}

	/// The currently selected element, if it is still part of the document.
	pub fn selected_node(&self) -> Option<NodeId> {
		self.selection.resolve(&self.document)
	}
}

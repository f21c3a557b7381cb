use crate::application::Editor;
use crate::application::set_uuid_seed;
use crate::messages::document::utility_types::layer_panel::LayerPanelEntry;
use crate::messages::panel::PanelType;
use crate::messages::prelude::*;

/// Height given to every Layers panel row in drag gestures
const ENTRY_HEIGHT: f64 = 20.;

/// A set of utility functions to make the writing of editor test more declarative
pub struct EditorTestUtils {
	pub editor: Editor,
}

impl EditorTestUtils {
	/// An editor with both host panels mounted.
	pub fn create() -> Self {
		let mut editor = Self::create_unmounted();

		for panel in [PanelType::Layers, PanelType::Properties] {
			editor.handle_message(PanelMessage::SetMounted { panel, mounted: true });
		}

		editor
	}

	/// An editor whose host has not mounted any panel yet.
	pub fn create_unmounted() -> Self {
		let _ = env_logger::builder().is_test(true).try_init();
		set_uuid_seed(0);

		Self { editor: Editor::new() }
	}

	pub fn handle_message(&mut self, message: impl Into<Message>) -> Vec<FrontendMessage> {
		self.editor.handle_message(message)
	}

	pub fn context(&self) -> &EditorContext {
		&self.editor.dispatcher.context
	}

	pub fn document(&self) -> &Document {
		&self.context().document
	}

	/// Direct access for setting up fixtures, bypassing the message system.
	pub fn document_mut(&mut self) -> &mut Document {
		&mut self.editor.dispatcher.context.document
	}

	/// Appends an element without rebuilding the Layers panel.
	pub fn add(&mut self, parent: NodeId, element: Element) -> NodeId {
		self.document_mut().add_element(parent, element).expect("Failed to add the element")
	}

	pub fn select(&mut self, identifier: &str) -> Vec<FrontendMessage> {
		self.handle_message(DocumentMessage::SelectElement {
			identifier: Some(identifier.to_string()),
		})
	}

	pub fn selected(&self) -> Option<String> {
		self.context().selection.selected().map(str::to_string)
	}

	/// Drops `payload` onto `target` without a preceding drag over, returning the responses of the drop alone.
	pub fn drop(&mut self, payload: &str, target: &str, pointer_offset: f64, entry_height: f64) -> Vec<FrontendMessage> {
		self.handle_message(LayersPanelMessage::Drop {
			payload: payload.to_string(),
			identifier: target.to_string(),
			pointer_offset,
			entry_height,
		})
	}

	/// Runs a whole drag gesture with the pointer at `fraction` of the target row, returning the responses of the drop.
	pub fn drag_and_drop(&mut self, payload: &str, target: &str, fraction: f64) -> Vec<FrontendMessage> {
		let pointer_offset = fraction * ENTRY_HEIGHT;

		self.handle_message(LayersPanelMessage::DragStart { identifier: payload.to_string() });
		self.handle_message(LayersPanelMessage::DragOver {
			identifier: target.to_string(),
			pointer_offset,
			entry_height: ENTRY_HEIGHT,
		});
		self.drop(payload, target, pointer_offset, ENTRY_HEIGHT)
	}

	pub fn layers_panel_entries(&self) -> Vec<LayerPanelEntry> {
		self.context().layers_panel.entries.clone()
	}

	/// `(identifier, depth)` of every Layers panel row.
	pub fn layer_summary(&self) -> Vec<(String, usize)> {
		self.context().layers_panel.entries.iter().map(|entry| (entry.identifier.clone(), entry.depth)).collect()
	}

	/// `(identifier, depth)` of every element below the root in document order, read from the tree itself.
	pub fn tree(&self) -> Vec<(String, usize)> {
		let document = self.document();
		let root = document.root();

		document
			.descendants(root)
			.map(|node| {
				let identifier = document.identifier(node).unwrap_or_default().to_string();
				let depth = document.ancestors(node).skip(1).take_while(|&ancestor| ancestor != root).count();
				(identifier, depth)
			})
			.collect()
	}
}

pub mod test_prelude {
	pub use crate::application::Editor;
	pub use crate::messages::document::CanvasDimension;
	pub use crate::messages::document::utility_types::layer_panel::LayerPanelEntry;
	pub use crate::messages::frontend::utility_types::{CanvasProperties, ElementProperties};
	pub use crate::messages::layers_panel::utility_types::DropZone;
	pub use crate::messages::panel::PanelType;
	pub use crate::messages::prelude::*;
	pub use crate::test_utils::EditorTestUtils;
	pub use pretty_assertions::assert_eq;
	pub use svg_document::ShapeKind;
	pub use svg_document::uuid::is_generated_identifier;
}

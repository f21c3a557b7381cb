use super::utility_types::{CanvasProperties, DragEffect, ElementProperties};
use crate::messages::document::utility_types::layer_panel::LayerPanelEntry;
use crate::messages::layers_panel::utility_types::DropZone;
use crate::messages::prelude::*;

/// Everything the editor asks of its host, collected and returned from `Editor::handle_message`.
#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum FrontendMessage {
	// Display prefix: make the frontend show something, like a dialog
	DisplayError {
		title: String,
		description: String,
	},

	// Trigger prefix: cause a browser API to do something
	TriggerExportSvg {
		svg: String,
		name: String,
	},
	TriggerSaveDocument {
		document: String,
		name: String,
	},

	// Update prefix: give the frontend a new value or state for it to use
	RenderCanvasProperties {
		properties: CanvasProperties,
	},
	RenderProperties {
		properties: ElementProperties,
	},
	ScrollLayerIntoView {
		identifier: String,
		smooth: bool,
	},
	SetDragPayload {
		payload: String,
		effect: DragEffect,
	},
	UpdateDropIndicator {
		identifier: String,
		zone: Option<DropZone>,
	},
	UpdateElementHighlight {
		identifier: String,
		highlight: ElementHighlight,
	},
	UpdateInspectMode {
		active: bool,
	},
	UpdateLayerDragging {
		identifier: String,
		dragging: bool,
	},
	UpdateLayerHighlight {
		active: Option<String>,
	},
	UpdateLayersPanel {
		entries: Vec<LayerPanelEntry>,
	},
}

impl_message!(Message, Frontend, FrontendMessage);

use super::CanvasDimension;
use super::utility_types::layer_panel::{build_layer_panel, highlight_active};
use crate::consts::*;
use crate::messages::frontend::utility_types::{CanvasProperties, ElementProperties};
use crate::messages::prelude::*;
use crate::misc::EditorError;

use svg_document::style::style_property;
use svg_document::{DocumentResponse, RenderMode, ShapeKind};

pub struct DocumentMessageContext<'a> {
	pub context: &'a mut EditorContext,
	pub preferences: &'a PreferencesMessageHandler,
}

#[derive(Debug, Default)]
pub struct DocumentMessageHandler {
	/// Identifier of the element carrying the inspect mode hover highlight
	hovered: Option<String>,
}

impl MessageHandler<DocumentMessage, DocumentMessageContext<'_>> for DocumentMessageHandler {
	fn process_message(&mut self, message: DocumentMessage, responses: &mut VecDeque<Message>, data: DocumentMessageContext) {
		let DocumentMessageContext { context, preferences } = data;

		match message {
			DocumentMessage::AddElement { kind } => {
				let parent = insertion_parent(context, true);
				create_element(context, parent, default_element(kind), responses);
			}
			DocumentMessage::CanvasClick { identifier } => {
				let document = &context.document;
				match identifier.as_deref().map(|identifier| document.find(identifier)) {
					// The empty area around the canvas deselects in either mode
					None => responses.add(DocumentMessage::SelectElement { identifier: None }),
					// The element was removed since the host rendered it
					Some(None) => {}
					Some(Some(node)) if node == document.root() => {
						if !context.inspect_mode {
							responses.add(DocumentMessage::SelectElement { identifier: None });
						}
					}
					Some(Some(node)) => {
						if context.inspect_mode && !is_inspectable(document, node) {
							return;
						}
						responses.add(DocumentMessage::SelectElement { identifier });
						if context.inspect_mode {
							responses.add(DocumentMessage::ToggleInspectMode);
						}
					}
				}
			}
			DocumentMessage::DeleteSelected => {
				let Some(node) = context.selected_node() else { return };

				match context.document.handle_operation(&Operation::DeleteElement { node }) {
					Ok(_) => {
						context.selection.clear();
						responses.add(DocumentMessage::DocumentStructureChanged);
						responses.add(DocumentMessage::SelectElement { identifier: None });
					}
					Err(error) => warn!("Could not delete the selected element: {error}"),
				}
			}
			DocumentMessage::DocumentReplaced => {
				self.hovered = None;
				context.selection.clear();

				responses.add(LayersPanelMessage::DragEnd);
				responses.add(DocumentMessage::DocumentStructureChanged);
				responses.add(DocumentMessage::SelectElement { identifier: None });
			}
			DocumentMessage::DocumentStructureChanged => {
				if !context.layers_panel.mounted {
					return;
				}

				let selected = context.selected_node().and(context.selection.selected()).map(str::to_string);
				let entries = build_layer_panel(&mut context.document, selected.as_deref());
				trace!("Rebuilt the Layers panel with {} entries", entries.len());

				context.layers_panel.entries = entries.clone();
				responses.add(FrontendMessage::UpdateLayersPanel { entries });
			}
			DocumentMessage::ExportDocument => {
				responses.add(FrontendMessage::TriggerExportSvg {
					svg: context.document.render_svg(RenderMode::Export),
					name: preferences.export_file_name.clone(),
				});
			}
			DocumentMessage::HighlightActive => {
				if !context.layers_panel.mounted {
					return;
				}

				let selected = context.selected_node().and(context.selection.selected());
				let active = highlight_active(&mut context.layers_panel.entries, selected);

				responses.add(FrontendMessage::UpdateLayerHighlight { active: active.clone() });
				if let Some(identifier) = active {
					responses.add(FrontendMessage::ScrollLayerIntoView {
						identifier,
						smooth: preferences.smooth_scroll,
					});
				}
			}
			DocumentMessage::HoverElement { identifier } => {
				if context.inspect_mode {
					self.set_hovered(context, identifier, responses);
				}
			}
			DocumentMessage::InsertImage { href } => {
				let selected_image = context.selected_node().filter(|&node| context.document.kind(node) == Some(ElementKind::Image));

				match selected_image {
					Some(node) => {
						let operation = Operation::SetAttribute {
							node,
							name: "href".into(),
							value: href,
						};
						match context.document.handle_operation(&operation) {
							Ok(_) => render_properties(context, responses),
							Err(error) => warn!("Could not replace the image source: {error}"),
						}
					}
					None => {
						let parent = insertion_parent(context, false);
						let image = default_element(ElementKind::Image).with_attribute("href", href);
						create_element(context, parent, image, responses);
					}
				}
			}
			DocumentMessage::LoadDocument { content } => match load_document(&content) {
				Ok(document) => responses.add(DocumentMessage::ReplaceDocument { document: Box::new(document) }),
				Err(error) => {
					let error = EditorError::from(error);
					warn!("Failed to load a document: {error}");
					responses.add(FrontendMessage::DisplayError {
						title: "The document could not be opened".into(),
						description: error.to_string(),
					});
				}
			},
			DocumentMessage::ReplaceDocument { document } => {
				context.document = *document;
				responses.add(DocumentMessage::DocumentReplaced);
			}
			DocumentMessage::SaveDocument => {
				responses.add(FrontendMessage::TriggerSaveDocument {
					document: context.document.serialize_document(),
					name: preferences.save_file_name.clone(),
				});
			}
			DocumentMessage::SelectElement { identifier } => {
				if let Some(previous) = context.selected_node() {
					update_highlight(&mut context.document, previous, ElementHighlight::SELECTED_OUTLINE, false, responses);
				}

				let root = context.document.root();
				let identifier = identifier.filter(|identifier| context.document.find(identifier) != Some(root));
				context.selection.set(identifier, &context.document);

				if let Some(node) = context.selected_node() {
					update_highlight(&mut context.document, node, ElementHighlight::SELECTED_OUTLINE, true, responses);
				}

				render_properties(context, responses);
				responses.add(DocumentMessage::HighlightActive);
			}
			DocumentMessage::SetAttribute { name, value } => {
				let Some(node) = context.selected_node() else {
					debug!("Ignoring attribute \"{name}\" with nothing selected");
					return;
				};

				// Visibility is derived from these two
				let affects_visibility = name == "style" || name == "display";
				match context.document.handle_operation(&Operation::SetAttribute { node, name, value }) {
					Ok(_) if affects_visibility => responses.add(DocumentMessage::DocumentStructureChanged),
					Ok(_) => {}
					Err(error) => warn!("Could not set the attribute: {error}"),
				}
			}
			DocumentMessage::SetCanvasBackground { color } => {
				let operation = Operation::SetStyleProperty {
					node: context.document.root(),
					property: "background".into(),
					value: color,
				};
				if let Err(error) = context.document.handle_operation(&operation) {
					warn!("Could not set the canvas background: {error}");
				}
			}
			DocumentMessage::SetCanvasSize { dimension, value } => {
				if !value.is_finite() || value <= 0. {
					debug!("Ignoring canvas {dimension:?} of {value}");
					return;
				}

				let document = &mut context.document;
				let root = document.root();
				let name = match dimension {
					CanvasDimension::Width => "width",
					CanvasDimension::Height => "height",
				};
				if let Err(error) = document.handle_operation(&Operation::SetAttribute {
					node: root,
					name: name.into(),
					value: value.to_string(),
				}) {
					warn!("Could not resize the canvas: {error}");
					return;
				}

				let width = document.attribute(root, "width").unwrap_or_default();
				let height = document.attribute(root, "height").unwrap_or_default();
				let view_box = Operation::SetAttribute {
					node: root,
					name: "viewBox".into(),
					value: format!("0 0 {width} {height}"),
				};
				if let Err(error) = document.handle_operation(&view_box) {
					warn!("Could not update the canvas viewBox: {error}");
				}

				if context.properties_panel_mounted {
					responses.add(FrontendMessage::RenderCanvasProperties {
						properties: canvas_properties(&context.document),
					});
				}
			}
			DocumentMessage::SetTextContent { text } => {
				let Some(node) = context.selected_node().filter(|&node| context.document.kind(node) == Some(ElementKind::Text)) else {
					debug!("Text content can only be set on a selected text element");
					return;
				};

				if let Err(error) = context.document.handle_operation(&Operation::SetTextContent { node, text }) {
					warn!("Could not set the text content: {error}");
				}
			}
			DocumentMessage::ToggleInspectMode => {
				context.inspect_mode = !context.inspect_mode;
				if !context.inspect_mode {
					self.set_hovered(context, None, responses);
				}
				responses.add(FrontendMessage::UpdateInspectMode { active: context.inspect_mode });
			}
			DocumentMessage::ToggleVisibility { identifier } => {
				let Some(node) = context.document.find(&identifier) else {
					debug!("Cannot toggle the visibility of \"{identifier}\" which is no longer in the document");
					return;
				};

				match context.document.handle_operation(&Operation::ToggleElementVisibility { node }) {
					Ok(_) => responses.add(DocumentMessage::DocumentStructureChanged),
					Err(error) => warn!("Could not toggle visibility: {error}"),
				}
			}
		}
	}
}

impl DocumentMessageHandler {
	/// Moves the inspect mode hover highlight. The root and unresolvable identifiers clear it.
	fn set_hovered(&mut self, context: &mut EditorContext, identifier: Option<String>, responses: &mut VecDeque<Message>) {
		let document = &mut context.document;
		let root = document.root();
		let identifier = identifier.filter(|identifier| document.find(identifier).is_some_and(|node| node != root && is_inspectable(document, node)));
		if identifier == self.hovered {
			return;
		}

		if let Some(previous) = self.hovered.take().and_then(|previous| document.find(&previous)) {
			update_highlight(document, previous, ElementHighlight::HOVER, false, responses);
		}
		if let Some(node) = identifier.as_deref().and_then(|identifier| document.find(identifier)) {
			update_highlight(document, node, ElementHighlight::HOVER, true, responses);
		}
		self.hovered = identifier;
	}
}

/// Metadata such as `<defs>` is never rendered, so inspect mode neither hovers nor picks it or anything inside it.
fn is_inspectable(document: &Document, node: NodeId) -> bool {
	!document.ancestors(node).any(|ancestor| document.kind(ancestor).is_some_and(|kind| kind.is_metadata()))
}

/// SVG markup opens like a file from any other editor, anything else is read as a saved document.
fn load_document(content: &str) -> Result<Document, DocumentError> {
	if content.trim_start().starts_with('<') {
		Document::from_svg(content)
	} else {
		Document::with_content(content)
	}
}

/// Where new elements go: into the selected container, otherwise next to the selected element when allowed, otherwise the root.
fn insertion_parent(context: &EditorContext, next_to_selection: bool) -> NodeId {
	let document = &context.document;
	let root = document.root();

	match context.selected_node() {
		Some(node) if document.kind(node).is_some_and(|kind| kind.is_container()) => node,
		Some(node) if next_to_selection => document.parent(node).unwrap_or(root),
		_ => root,
	}
}

fn default_element(kind: ElementKind) -> Element {
	let attributes: &[(&str, &str)] = match kind {
		ElementKind::Shape(ShapeKind::Rect) => DEFAULT_RECT_ATTRIBUTES,
		ElementKind::Shape(ShapeKind::Path) => DEFAULT_PATH_ATTRIBUTES,
		ElementKind::Text => DEFAULT_TEXT_ATTRIBUTES,
		ElementKind::Image => DEFAULT_IMAGE_ATTRIBUTES,
		_ => &[],
	};

	let element = attributes.iter().fold(Element::new(kind), |element, &(name, value)| element.with_attribute(name, value));
	if kind == ElementKind::Text { element.with_text(DEFAULT_TEXT_CONTENT) } else { element }
}

/// Adds the element, then rebuilds the Layers panel and selects it.
fn create_element(context: &mut EditorContext, parent: NodeId, element: Element, responses: &mut VecDeque<Message>) {
	let operation = Operation::AddElement { parent, element: Box::new(element) };

	let created = match context.document.handle_operation(&operation) {
		Ok(document_responses) => document_responses.into_iter().flatten().find_map(|response| match response {
			DocumentResponse::CreatedElement { node } => Some(node),
			_ => None,
		}),
		Err(error) => {
			warn!("Could not add the element: {error}");
			return;
		}
	};
	let Some(identifier) = created.and_then(|node| context.document.ensure_identifier(node)) else { return };

	responses.add(DocumentMessage::DocumentStructureChanged);
	responses.add(DocumentMessage::SelectElement { identifier: Some(identifier) });
}

/// Turns a transient highlight on or off, telling the host only when it changed.
fn update_highlight(document: &mut Document, node: NodeId, highlight: ElementHighlight, enabled: bool, responses: &mut VecDeque<Message>) {
	match document.set_highlight(node, highlight, enabled) {
		Ok(true) => {
			let Some(element) = document.element(node) else { return };
			let Some(identifier) = element.identifier() else { return };
			responses.add(FrontendMessage::UpdateElementHighlight {
				identifier: identifier.to_string(),
				highlight: element.highlight(),
			});
		}
		Ok(false) => {}
		Err(error) => debug!("Could not update the highlight of {node}: {error}"),
	}
}

/// Sends the selected element's properties, or the canvas settings when nothing is selected.
fn render_properties(context: &EditorContext, responses: &mut VecDeque<Message>) {
	if !context.properties_panel_mounted {
		return;
	}

	let document = &context.document;
	let Some(element) = context.selected_node().and_then(|node| document.element(node)) else {
		responses.add(FrontendMessage::RenderCanvasProperties {
			properties: canvas_properties(document),
		});
		return;
	};

	let properties = ElementProperties {
		identifier: element.identifier().unwrap_or_default().to_string(),
		tag_name: element.kind.tag_name().to_string(),
		attributes: element.attributes().map(|(name, value)| (name.to_string(), value.to_string())).collect(),
		text: (element.kind == ElementKind::Text).then(|| element.text().to_string()),
	};
	responses.add(FrontendMessage::RenderProperties { properties });
}

fn canvas_properties(document: &Document) -> CanvasProperties {
	let root = document.root();
	let attribute = |name: &str| document.attribute(root, name).unwrap_or_default().to_string();

	CanvasProperties {
		width: attribute("width"),
		height: attribute("height"),
		view_box: attribute("viewBox"),
		background: document
			.attribute(root, "style")
			.and_then(|style| style_property(style, "background"))
			.unwrap_or(DEFAULT_CANVAS_BACKGROUND)
			.to_string(),
	}
}

use super::utility_types::{DragSession, DropZone};
use crate::messages::frontend::utility_types::DragEffect;
use crate::messages::prelude::*;

/// Turns drag gestures on the Layers panel into moves in the document tree.
///
/// Gestures that cannot be resolved (stale identifiers, drops into the dragged element's own subtree) end the
/// session without touching the document or rebuilding the panel.
#[derive(Debug, Default)]
pub struct LayersPanelMessageHandler {
	drag_session: Option<DragSession>,
}

impl MessageHandler<LayersPanelMessage, &mut EditorContext> for LayersPanelMessageHandler {
	fn process_message(&mut self, message: LayersPanelMessage, responses: &mut VecDeque<Message>, context: &mut EditorContext) {
		match message {
			LayersPanelMessage::ClickEntry { identifier } => {
				responses.add(DocumentMessage::SelectElement { identifier: Some(identifier) });
			}
			LayersPanelMessage::DragEnd => {
				if let Some(session) = self.drag_session.take() {
					end_session(session, responses);
				}
			}
			LayersPanelMessage::DragLeave { identifier } => {
				if let Some(session) = self.drag_session.as_mut().filter(|session| session.zone_for(&identifier).is_some()) {
					session.hovered = None;
				}
				responses.add(FrontendMessage::UpdateDropIndicator { identifier, zone: None });
			}
			LayersPanelMessage::DragOver {
				identifier,
				pointer_offset,
				entry_height,
			} => {
				let Some(session) = self.drag_session.as_mut() else { return };
				if session.dragged == identifier {
					return;
				}
				let Some(target) = context.document.find(&identifier) else {
					debug!("Dragged over \"{identifier}\" which is no longer in the document");
					return;
				};

				let is_container = context.document.kind(target).is_some_and(|kind| kind.is_container());
				let zone = DropZone::classify(is_container, DropZone::fraction(pointer_offset, entry_height));
				if session.zone_for(&identifier) == Some(zone) {
					return;
				}

				if let Some((previous, _)) = session.hovered.take() {
					responses.add(FrontendMessage::UpdateDropIndicator { identifier: previous, zone: None });
				}
				responses.add(FrontendMessage::UpdateDropIndicator {
					identifier: identifier.clone(),
					zone: Some(zone),
				});
				session.hovered = Some((identifier, zone));
			}
			LayersPanelMessage::DragStart { identifier } => {
				if let Some(session) = self.drag_session.take() {
					end_session(session, responses);
				}
				if context.document.find(&identifier).is_none() {
					debug!("Ignoring drag of \"{identifier}\" which is no longer in the document");
					return;
				}

				responses.add(FrontendMessage::SetDragPayload {
					payload: identifier.clone(),
					effect: DragEffect::Move,
				});
				responses.add(FrontendMessage::UpdateLayerDragging {
					identifier: identifier.clone(),
					dragging: true,
				});
				self.drag_session = Some(DragSession::new(identifier));
			}
			LayersPanelMessage::Drop {
				payload,
				identifier,
				pointer_offset,
				entry_height,
			} => {
				let session = self.drag_session.take();
				let remembered_zone = session.as_ref().and_then(|session| session.zone_for(&identifier));
				if let Some(session) = session {
					end_session(session, responses);
				}
				responses.add(FrontendMessage::UpdateDropIndicator {
					identifier: identifier.clone(),
					zone: None,
				});

				let document = &context.document;
				let (Some(dragged), Some(target)) = (document.find(&payload), document.find(&identifier)) else {
					debug!("Drop of \"{payload}\" onto \"{identifier}\" could not be resolved");
					return;
				};
				if document.contains(dragged, target) {
					debug!("Refusing to drop \"{payload}\" into its own subtree");
					return;
				}

				let zone = remembered_zone.unwrap_or_else(|| {
					let is_container = document.kind(target).is_some_and(|kind| kind.is_container());
					DropZone::classify(is_container, DropZone::fraction(pointer_offset, entry_height))
				});
				move_element(context, dragged, zone.placement(target), payload, responses);
			}
			LayersPanelMessage::DropOnRoot { payload } => {
				if let Some(session) = self.drag_session.take() {
					end_session(session, responses);
				}

				let document = &context.document;
				let Some(dragged) = document.find(&payload) else {
					debug!("Drop of \"{payload}\" onto the root could not be resolved");
					return;
				};
				let root = document.root();
				if dragged == root || document.parent(dragged) == Some(root) {
					return;
				}

				move_element(context, dragged, Placement::Into(root), payload, responses);
			}
		}
	}
}

/// Clears the row styling left behind by a drag session.
fn end_session(session: DragSession, responses: &mut VecDeque<Message>) {
	if let Some((hovered, _)) = session.hovered {
		responses.add(FrontendMessage::UpdateDropIndicator { identifier: hovered, zone: None });
	}
	responses.add(FrontendMessage::UpdateLayerDragging {
		identifier: session.dragged,
		dragging: false,
	});
}

fn move_element(context: &mut EditorContext, node: NodeId, placement: Placement, identifier: String, responses: &mut VecDeque<Message>) {
	match context.document.handle_operation(&Operation::MoveElement { node, placement }) {
		Ok(_) => {
			responses.add(DocumentMessage::DocumentStructureChanged);
			responses.add(DocumentMessage::SelectElement { identifier: Some(identifier) });
		}
		Err(error) => debug!("Drop of \"{identifier}\" was rejected: {error}"),
	}
}

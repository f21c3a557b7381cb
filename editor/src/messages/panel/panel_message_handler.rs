use super::PanelType;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct PanelMessageHandler;

impl MessageHandler<PanelMessage, &mut EditorContext> for PanelMessageHandler {
	fn process_message(&mut self, message: PanelMessage, responses: &mut VecDeque<Message>, context: &mut EditorContext) {
		match message {
			PanelMessage::SetMounted { panel, mounted } => {
				debug!("{panel:?} panel {}", if mounted { "mounted" } else { "unmounted" });

				match panel {
					PanelType::Layers => {
						context.layers_panel.mounted = mounted;
						if mounted {
							responses.add(DocumentMessage::DocumentStructureChanged);
						} else {
							context.layers_panel.entries.clear();
						}
					}
					PanelType::Properties => {
						context.properties_panel_mounted = mounted;
						if mounted {
							let identifier = context.selection.selected().map(str::to_string);
							responses.add(DocumentMessage::SelectElement { identifier });
						}
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use crate::test_utils::test_prelude::*;
	use crate::test_utils::test_prelude::assert_eq;

	#[test]
	fn nothing_is_sent_to_unmounted_panels() {
		let mut editor = EditorTestUtils::create_unmounted();
		let root = editor.document().root();
		editor.add(root, Element::new(ElementKind::Shape(ShapeKind::Rect)).with_identifier("r1"));

		let responses = editor.handle_message(DocumentMessage::DocumentStructureChanged);
		assert_eq!(responses, vec![]);

		let responses = editor.handle_message(DocumentMessage::SelectElement { identifier: Some("r1".into()) });
		assert!(!responses.iter().any(|message| matches!(
			message,
			FrontendMessage::RenderProperties { .. } | FrontendMessage::UpdateLayerHighlight { .. } | FrontendMessage::ScrollLayerIntoView { .. }
		)));
		assert_eq!(editor.selected().as_deref(), Some("r1"));
	}

	#[test]
	fn mounting_catches_the_panel_up() {
		let mut editor = EditorTestUtils::create_unmounted();
		let root = editor.document().root();
		editor.add(root, Element::new(ElementKind::Shape(ShapeKind::Rect)).with_identifier("r1"));
		editor.handle_message(DocumentMessage::SelectElement { identifier: Some("r1".into()) });

		let responses = editor.handle_message(PanelMessage::SetMounted {
			panel: PanelType::Layers,
			mounted: true,
		});
		assert!(responses.iter().any(|message| matches!(message, FrontendMessage::UpdateLayersPanel { entries } if entries.len() == 1 && entries[0].active)));

		let responses = editor.handle_message(PanelMessage::SetMounted {
			panel: PanelType::Properties,
			mounted: true,
		});
		assert!(responses.iter().any(|message| matches!(message, FrontendMessage::RenderProperties { properties } if properties.identifier == "r1")));

		editor.handle_message(PanelMessage::SetMounted {
			panel: PanelType::Layers,
			mounted: false,
		});
		assert!(editor.layers_panel_entries().is_empty());
	}
}

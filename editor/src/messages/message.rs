use crate::messages::prelude::*;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Message {
	NoOp,
	Batched(Box<[Message]>),

	Document(DocumentMessage),
	Frontend(FrontendMessage),
	LayersPanel(LayersPanelMessage),
	Panel(PanelMessage),
	Preferences(PreferencesMessage),
}

impl Message {
	/// Short name of the message used when logging the dispatch tree, without its payload.
	pub fn local_name(&self) -> String {
		fn variant_name(debug: String) -> String {
			debug.split([' ', '(', '{']).next().unwrap_or_default().to_string()
		}

		match self {
			Message::NoOp => "NoOp".to_string(),
			Message::Batched(messages) => format!("Batched({})", messages.len()),
			Message::Document(message) => format!("Document::{}", variant_name(format!("{message:?}"))),
			Message::Frontend(message) => format!("Frontend::{}", variant_name(format!("{message:?}"))),
			Message::LayersPanel(message) => format!("LayersPanel::{}", variant_name(format!("{message:?}"))),
			Message::Panel(message) => format!("Panel::{}", variant_name(format!("{message:?}"))),
			Message::Preferences(message) => format!("Preferences::{}", variant_name(format!("{message:?}"))),
		}
	}
}

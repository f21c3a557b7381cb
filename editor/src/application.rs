use crate::dispatcher::Dispatcher;
use crate::messages::prelude::*;
pub use svg_document::uuid::*;

pub struct Editor {
	pub dispatcher: Dispatcher,
}

impl Editor {
	/// Construct the editor with an empty default canvas.
	/// Provide a random seed with `svg_editor::application::set_uuid_seed(seed)` before the first identifier is generated.
	pub fn new() -> Self {
		Self { dispatcher: Dispatcher::new() }
	}

	pub fn with_preferences(preferences: PreferencesMessageHandler) -> Self {
		Self {
			dispatcher: Dispatcher::with_preferences(preferences),
		}
	}

	/// Runs the message and everything it triggers, then hands back what the host should do.
	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message, true);

		std::mem::take(&mut self.dispatcher.responses)
	}

	pub fn document(&self) -> &Document {
		&self.dispatcher.context.document
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new()
	}
}

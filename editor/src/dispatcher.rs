use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct Dispatcher {
	message_queues: Vec<VecDeque<Message>>,
	pub responses: Vec<FrontendMessage>,
	pub message_handlers: DispatcherMessageHandlers,
	pub context: EditorContext,
}

#[derive(Debug, Default)]
pub struct DispatcherMessageHandlers {
	document_message_handler: DocumentMessageHandler,
	layers_panel_message_handler: LayersPanelMessageHandler,
	panel_message_handler: PanelMessageHandler,
	pub preferences_message_handler: PreferencesMessageHandler,
}

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_preferences(preferences: PreferencesMessageHandler) -> Self {
		Self {
			message_handlers: DispatcherMessageHandlers {
				preferences_message_handler: preferences,
				..Default::default()
			},
			..Default::default()
		}
	}

	// If the deepest queues (higher index in queues list) are now empty (after being popped from) then remove them
	fn cleanup_queues(&mut self) {
		while self.message_queues.last().filter(|queue| queue.is_empty()).is_some() {
			self.message_queues.pop();
		}
	}

	/// Add a message to a queue so that it can be executed.
	/// If `process_after_all_current` is set, all currently queued messages (including children) will be processed first.
	/// If not set, it (and its children) will be processed as soon as possible.
	pub fn schedule_execution(message_queues: &mut Vec<VecDeque<Message>>, process_after_all_current: bool, messages: impl IntoIterator<Item = Message>) {
		match message_queues.first_mut() {
			// If there are currently messages being processed and we are processing after them, add to the end of the first queue
			Some(queue) if process_after_all_current => queue.extend(messages),
			// In all other cases, make a new inner queue and add our message there
			_ => message_queues.push(VecDeque::from_iter(messages)),
		}
	}

	/// Processes the message and every message it causes, depth first, before returning.
	pub fn handle_message<T: Into<Message>>(&mut self, message: T, process_after_all_current: bool) {
		let message = message.into();

		Self::schedule_execution(&mut self.message_queues, process_after_all_current, [message]);

		while let Some(message) = self.message_queues.last_mut().and_then(VecDeque::pop_front) {
			self.log_message(&message, &self.message_queues);

			// Create a new queue for the child messages
			let mut queue = VecDeque::new();

			// Process the action by forwarding it to the relevant message handler, or saving the FrontendMessage to be sent to the frontend
			match message {
				Message::NoOp => {}
				Message::Batched(messages) => {
					messages.into_iter().for_each(|message| self.handle_message(message, false));
				}
				Message::Document(message) => {
					let context = DocumentMessageContext {
						context: &mut self.context,
						preferences: &self.message_handlers.preferences_message_handler,
					};
					self.message_handlers.document_message_handler.process_message(message, &mut queue, context);
				}
				Message::Frontend(message) => {
					// `FrontendMessage`s are saved and will be sent to the frontend after the message queue is done being processed
					self.responses.push(message);
				}
				Message::LayersPanel(message) => {
					self.message_handlers.layers_panel_message_handler.process_message(message, &mut queue, &mut self.context);
				}
				Message::Panel(message) => {
					self.message_handlers.panel_message_handler.process_message(message, &mut queue, &mut self.context);
				}
				Message::Preferences(message) => {
					self.message_handlers.preferences_message_handler.process_message(message, &mut queue, ());
				}
			}

			// If there are child messages, append the queue to the list of queues
			if !queue.is_empty() {
				self.message_queues.push(queue);
			}

			self.cleanup_queues();
		}
	}

	/// Create the tree structure for logging the messages as a tree
	fn create_indents(queues: &[VecDeque<Message>]) -> String {
		String::from_iter(queues.iter().enumerate().skip(1).map(|(index, queue)| {
			if index == queues.len() - 1 {
				if queue.is_empty() { "└── " } else { "├── " }
			} else if queue.is_empty() {
				"   "
			} else {
				"│    "
			}
		}))
	}

	/// Logs a message that is about to be executed as a branch of the tree of messages it came from.
	fn log_message(&self, message: &Message, queues: &[VecDeque<Message>]) {
		if log::log_enabled!(log::Level::Trace) {
			trace!("{}{}", Self::create_indents(queues), message.local_name());
		}
	}
}

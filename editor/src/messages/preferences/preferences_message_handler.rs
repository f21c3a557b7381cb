use crate::consts::{DEFAULT_EXPORT_FILE_NAME, DEFAULT_SAVE_FILE_NAME};
use crate::messages::prelude::*;
use crate::misc::EditorError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesMessageHandler {
	/// Whether the Layers panel animates scrolling the active entry into view
	pub smooth_scroll: bool,
	pub export_file_name: String,
	pub save_file_name: String,
}

impl Default for PreferencesMessageHandler {
	fn default() -> Self {
		Self {
			smooth_scroll: true,
			export_file_name: DEFAULT_EXPORT_FILE_NAME.into(),
			save_file_name: DEFAULT_SAVE_FILE_NAME.into(),
		}
	}
}

impl PreferencesMessageHandler {
	/// Missing fields take their default value.
	pub fn from_json(preferences: &str) -> Result<Self, EditorError> {
		Ok(serde_json::from_str(preferences)?)
	}

	pub fn to_json(&self) -> Result<String, EditorError> {
		Ok(serde_json::to_string(self)?)
	}
}

impl MessageHandler<PreferencesMessage, ()> for PreferencesMessageHandler {
	fn process_message(&mut self, message: PreferencesMessage, responses: &mut VecDeque<Message>, _data: ()) {
		match message {
			PreferencesMessage::Load { preferences } => match Self::from_json(&preferences) {
				Ok(preferences) => *self = preferences,
				Err(error) => {
					warn!("Ignoring unreadable preferences: {error}");
					responses.add(FrontendMessage::DisplayError {
						title: "Preferences could not be loaded".into(),
						description: error.to_string(),
					});
				}
			},
			PreferencesMessage::ResetToDefaults => *self = Self::default(),

			PreferencesMessage::ExportFileName { name } => self.export_file_name = name,
			PreferencesMessage::SaveFileName { name } => self.save_file_name = name,
			PreferencesMessage::SmoothScroll { enabled } => self.smooth_scroll = enabled,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn partial_json_keeps_defaults() {
		let preferences = PreferencesMessageHandler::from_json(r#"{"smooth_scroll":false}"#).unwrap();
		assert!(!preferences.smooth_scroll);
		assert_eq!(preferences.save_file_name, DEFAULT_SAVE_FILE_NAME);
		assert_eq!(preferences.export_file_name, DEFAULT_EXPORT_FILE_NAME);
	}

	#[test]
	fn load_and_reset() {
		let mut preferences = PreferencesMessageHandler::default();
		let mut responses = VecDeque::new();

		let saved = PreferencesMessageHandler {
			smooth_scroll: false,
			export_file_name: "drawing.svg".into(),
			save_file_name: "drawing.json".into(),
		};
		preferences.process_message(PreferencesMessage::Load { preferences: saved.to_json().unwrap() }, &mut responses, ());
		assert_eq!(preferences, saved);

		preferences.process_message(PreferencesMessage::Load { preferences: "[1, 2".into() }, &mut responses, ());
		assert_eq!(preferences, saved);
		assert!(matches!(responses.pop_front(), Some(Message::Frontend(FrontendMessage::DisplayError { .. }))));

		preferences.process_message(PreferencesMessage::ResetToDefaults, &mut responses, ());
		assert_eq!(preferences, PreferencesMessageHandler::default());
	}
}

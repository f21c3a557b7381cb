use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum PreferencesMessage {
	/// Replaces every preference with the ones in a JSON object written by `PreferencesMessageHandler::to_json`
	Load { preferences: String },
	ResetToDefaults,

	ExportFileName { name: String },
	SaveFileName { name: String },
	SmoothScroll { enabled: bool },
}

impl_message!(Message, Preferences, PreferencesMessage);

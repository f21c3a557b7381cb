use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

/// The host panels that receive editor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelType {
	Layers,
	Properties,
}

/// Sent by the host when a panel becomes ready or goes away. Until then, output for that panel is not produced.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum PanelMessage {
	SetMounted { panel: PanelType, mounted: bool },
}

impl_message!(Message, Panel, PanelMessage);

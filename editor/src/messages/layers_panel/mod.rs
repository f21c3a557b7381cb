mod layers_panel_message;
mod layers_panel_message_handler;

pub mod utility_types;

#[doc(inline)]
pub use layers_panel_message::LayersPanelMessage;
#[doc(inline)]
pub use layers_panel_message_handler::LayersPanelMessageHandler;

mod panel_message;
mod panel_message_handler;

#[doc(inline)]
pub use panel_message::{PanelMessage, PanelType};
#[doc(inline)]
pub use panel_message_handler::PanelMessageHandler;

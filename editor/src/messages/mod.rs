//! The root-level messages forming the first layer of the message system architecture.

pub mod document;
pub mod editor_context;
pub mod frontend;
pub mod layers_panel;
pub mod message;
pub mod panel;
pub mod preferences;
pub mod prelude;

// Message, MessageHandler, and utility traits
pub use crate::messages::message::Message;
pub use crate::utility_traits::{MessageHandler, Responses};

// Message and MessageHandler
pub use crate::messages::document::{DocumentMessage, DocumentMessageContext, DocumentMessageHandler};
pub use crate::messages::frontend::FrontendMessage;
pub use crate::messages::layers_panel::{LayersPanelMessage, LayersPanelMessageHandler};
pub use crate::messages::panel::{PanelMessage, PanelMessageHandler};
pub use crate::messages::preferences::{PreferencesMessage, PreferencesMessageHandler};

// Shared editor state
pub use crate::messages::editor_context::EditorContext;

// Document
pub use svg_document::{Document, DocumentError, Element, ElementHighlight, ElementKind, NodeId, Operation, Placement};

// Miscellaneous
pub use log::{debug, error, info, trace, warn};
pub use std::collections::{HashMap, HashSet, VecDeque};

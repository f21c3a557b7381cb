pub mod consts;
pub mod document;
pub mod element;
pub mod error;
pub mod import;
pub mod operation;
pub mod render;
pub mod response;
pub mod serialization;
pub mod structure;
pub mod style;
pub mod uuid;

pub use document::{Document, NodeId};
pub use element::{ContainerKind, Element, ElementHighlight, ElementKind, ShapeKind};
pub use error::DocumentError;
pub use operation::{Operation, Placement};
pub use render::RenderMode;
pub use response::DocumentResponse;

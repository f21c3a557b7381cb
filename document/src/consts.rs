// IDENTITY
/// Every identifier produced by the identity assigner starts with this prefix, anything else came from the user or a loaded file.
pub const GENERATED_IDENTIFIER_PREFIX: &str = "el-";

// FILE FORMAT
pub const DOCUMENT_FORMAT_VERSION: &str = "0.1.0";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// STYLING
pub const SELECTED_OUTLINE_CLASS: &str = "selected-element-outline";
pub const HOVER_HIGHLIGHT_CLASS: &str = "hover-highlight";

// CANVAS
pub const DEFAULT_CANVAS_WIDTH: f64 = 600.;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.;

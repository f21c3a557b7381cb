// DRAG AND DROP
/// A drop on a container between these fractions of the entry height reparents into it
pub const DROP_INTO_BAND_START: f64 = 0.25;
pub const DROP_INTO_BAND_END: f64 = 0.75;
/// Outside the into band, the upper part of an entry places before it and the lower part after it
pub const DROP_BEFORE_THRESHOLD: f64 = 0.5;

// CANVAS
pub const DEFAULT_CANVAS_BACKGROUND: &str = "#ffffff";

// NEW ELEMENTS
pub const DEFAULT_RECT_ATTRIBUTES: &[(&str, &str)] = &[("x", "10"), ("y", "10"), ("width", "50"), ("height", "50"), ("fill", "#007acc")];
pub const DEFAULT_TEXT_ATTRIBUTES: &[(&str, &str)] = &[("x", "20"), ("y", "40"), ("font-size", "20"), ("fill", "#ffffff")];
pub const DEFAULT_TEXT_CONTENT: &str = "New Text";
pub const DEFAULT_PATH_ATTRIBUTES: &[(&str, &str)] = &[("d", "M 10 10 L 50 10 L 30 50 Z"), ("fill", "#28a745")];
pub const DEFAULT_IMAGE_ATTRIBUTES: &[(&str, &str)] = &[("x", "0"), ("y", "0"), ("width", "100"), ("height", "100")];

// FILES
pub const DEFAULT_SAVE_FILE_NAME: &str = "document.json";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "image.svg";

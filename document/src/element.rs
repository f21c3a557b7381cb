use crate::DocumentError;
use crate::style;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
	/// `<g>`
	Group,
	/// `<svg>`, both the document root and nested viewports
	Svg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	Rect,
	Circle,
	Ellipse,
	Line,
	Polyline,
	Polygon,
	Path,
}

/// The closed set of element types the editor understands.
/// Anything else is refused at the boundary by [`ElementKind::from_tag`] rather than silently treated as a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ElementKind {
	Container(ContainerKind),
	Shape(ShapeKind),
	Text,
	Image,
	/// Non-visual resource definitions (`<defs>`), never shown in the Layers panel.
	Metadata,
}

impl ElementKind {
	pub const GROUP: Self = Self::Container(ContainerKind::Group);
	pub const SVG: Self = Self::Container(ContainerKind::Svg);

	pub fn from_tag(tag: &str) -> Option<Self> {
		let kind = match tag {
			"g" => Self::Container(ContainerKind::Group),
			"svg" => Self::Container(ContainerKind::Svg),
			"rect" => Self::Shape(ShapeKind::Rect),
			"circle" => Self::Shape(ShapeKind::Circle),
			"ellipse" => Self::Shape(ShapeKind::Ellipse),
			"line" => Self::Shape(ShapeKind::Line),
			"polyline" => Self::Shape(ShapeKind::Polyline),
			"polygon" => Self::Shape(ShapeKind::Polygon),
			"path" => Self::Shape(ShapeKind::Path),
			"text" => Self::Text,
			"image" => Self::Image,
			"defs" => Self::Metadata,
			_ => return None,
		};
		Some(kind)
	}

	pub fn tag_name(&self) -> &'static str {
		match self {
			Self::Container(ContainerKind::Group) => "g",
			Self::Container(ContainerKind::Svg) => "svg",
			Self::Shape(ShapeKind::Rect) => "rect",
			Self::Shape(ShapeKind::Circle) => "circle",
			Self::Shape(ShapeKind::Ellipse) => "ellipse",
			Self::Shape(ShapeKind::Line) => "line",
			Self::Shape(ShapeKind::Polyline) => "polyline",
			Self::Shape(ShapeKind::Polygon) => "polygon",
			Self::Shape(ShapeKind::Path) => "path",
			Self::Text => "text",
			Self::Image => "image",
			Self::Metadata => "defs",
		}
	}

	/// Whether children of this element take part in the visible layer structure.
	pub fn is_container(&self) -> bool {
		matches!(self, Self::Container(_))
	}

	pub fn is_metadata(&self) -> bool {
		matches!(self, Self::Metadata)
	}

	/// The glyph shown in front of the element's name in the Layers panel.
	pub fn icon(&self) -> &'static str {
		match self {
			Self::Shape(ShapeKind::Rect) => "🟥",
			Self::Shape(ShapeKind::Circle) => "⚫",
			Self::Shape(ShapeKind::Path) => "✒️",
			Self::Text => "Tt",
			Self::Image => "🖼️",
			Self::Container(ContainerKind::Group) => "📁",
			_ => "🔹",
		}
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag_name())
	}
}

impl From<ElementKind> for String {
	fn from(kind: ElementKind) -> Self {
		kind.tag_name().to_string()
	}
}

impl TryFrom<String> for ElementKind {
	type Error = DocumentError;

	fn try_from(tag: String) -> Result<Self, Self::Error> {
		Self::from_tag(&tag).ok_or(DocumentError::UnsupportedElement(tag))
	}
}

bitflags! {
	/// Transient styling the host applies to an element on the canvas, never saved or exported.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
	pub struct ElementHighlight: u8 {
		const SELECTED_OUTLINE = 1 << 0;
		const HOVER = 1 << 1;
	}
}

impl Default for ElementHighlight {
	fn default() -> Self {
		Self::empty()
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
	pub kind: ElementKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) identifier: Option<String>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub(crate) attributes: BTreeMap<String, String>,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub(crate) text: String,
	/// Inner markup of a metadata element, kept verbatim since its contents are outside the element vocabulary
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub(crate) markup: String,
	#[serde(skip)]
	pub(crate) highlight: ElementHighlight,
}

impl Element {
	pub fn new(kind: ElementKind) -> Self {
		Self {
			kind,
			identifier: None,
			attributes: BTreeMap::new(),
			text: String::new(),
			markup: String::new(),
			highlight: ElementHighlight::empty(),
		}
	}

	/// Gives the element a user-chosen identifier before it is added to a document.
	pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
		self.identifier = Some(identifier.into());
		self
	}

	/// An `id` attribute is treated as the element's identifier.
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		if name == "id" {
			self.identifier = Some(value.into());
		} else {
			self.attributes.insert(name, value.into());
		}
		self
	}

	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	pub fn identifier(&self) -> Option<&str> {
		self.identifier.as_deref()
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Only metadata elements carry markup, anything else renders its children instead.
	pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
		if self.kind.is_metadata() {
			self.markup = markup.into();
		}
		self
	}

	pub fn markup(&self) -> &str {
		&self.markup
	}

	pub fn highlight(&self) -> ElementHighlight {
		self.highlight
	}

	/// Rejects attributes whose name could not be written back out as markup.
	pub(crate) fn check_attribute_names(&self) -> Result<(), DocumentError> {
		match self.attributes.keys().find(|name| !is_attribute_name(name)) {
			Some(name) => Err(DocumentError::InvalidAttributeName(name.clone())),
			None => Ok(()),
		}
	}

	/// Hidden through either encoding: the inline `style="display: none"` or the `display="none"` presentation attribute.
	pub fn is_hidden(&self) -> bool {
		let style_hidden = self.attribute("style").and_then(|style| style::style_property(style, "display")).is_some_and(style::is_display_none);
		let attribute_hidden = self.attribute("display").is_some_and(style::is_display_none);
		style_hidden || attribute_hidden
	}

	pub(crate) fn set_style_property(&mut self, property: &str, value: &str) {
		let style = style::set_style_property(self.attribute("style").unwrap_or_default(), property, value);
		if style.is_empty() {
			self.attributes.remove("style");
		} else {
			self.attributes.insert("style".to_string(), style);
		}
	}

	/// Flips the visibility and returns whether the element is now hidden.
	///
	/// Showing clears both encodings, while hiding only writes the inline style.
	pub(crate) fn toggle_visibility(&mut self) -> bool {
		if self.is_hidden() {
			self.set_style_property("display", "");
			self.attributes.remove("display");
			false
		} else {
			self.set_style_property("display", "none");
			true
		}
	}
}

/// Whether `name` is an XML `Name`, which is what the DOM's `setAttribute` accepts.
pub fn is_attribute_name(name: &str) -> bool {
	let mut characters = name.chars();
	characters.next().is_some_and(is_name_start_character) && characters.all(is_name_character)
}

fn is_name_start_character(character: char) -> bool {
	matches!(character,
		':' | 'A'..='Z' | '_' | 'a'..='z'
		| '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
		| '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
		| '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
		| '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}'
	)
}

fn is_name_character(character: char) -> bool {
	is_name_start_character(character) || matches!(character, '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn tags_round_trip_through_the_closed_vocabulary() {
		for tag in ["g", "svg", "rect", "circle", "ellipse", "line", "polyline", "polygon", "path", "text", "image", "defs"] {
			assert_eq!(ElementKind::from_tag(tag).map(|kind| kind.tag_name()), Some(tag));
		}
		assert_eq!(ElementKind::from_tag("foreignObject"), None);
		assert_eq!(ElementKind::try_from("blink".to_string()), Err(DocumentError::UnsupportedElement("blink".to_string())));
	}

	#[test]
	fn only_groups_and_svgs_are_containers() {
		assert!(ElementKind::GROUP.is_container());
		assert!(ElementKind::SVG.is_container());
		assert!(!ElementKind::Shape(ShapeKind::Rect).is_container());
		assert!(!ElementKind::Text.is_container());
		assert!(!ElementKind::Metadata.is_container());
	}

	#[test]
	fn icons_fall_back_for_unlisted_kinds() {
		assert_eq!(ElementKind::GROUP.icon(), "📁");
		assert_eq!(ElementKind::Shape(ShapeKind::Rect).icon(), "🟥");
		assert_eq!(ElementKind::Shape(ShapeKind::Ellipse).icon(), "🔹");
		assert_eq!(ElementKind::SVG.icon(), "🔹");
	}

	#[test]
	fn attribute_names_follow_xml() {
		for name in ["fill", "stroke-width", "xlink:href", "data-layer.2", "_private", "émoji"] {
			assert!(is_attribute_name(name), "{name} should be accepted");
		}
		for name in ["", "1x", "-x", "x y", "x\"/><script>alert(1)</script><rect y", "a=b", "fill>"] {
			assert!(!is_attribute_name(name), "{name} should be rejected");
		}
	}

	#[test]
	fn markup_is_kept_only_for_metadata() {
		assert_eq!(Element::new(ElementKind::Metadata).with_markup("<linearGradient/>").markup(), "<linearGradient/>");
		assert_eq!(Element::new(ElementKind::GROUP).with_markup("<linearGradient/>").markup(), "");
	}

	#[test]
	fn hidden_by_either_encoding() {
		assert!(!Element::new(ElementKind::Text).is_hidden());
		assert!(Element::new(ElementKind::Text).with_attribute("display", "none").is_hidden());
		assert!(Element::new(ElementKind::Text).with_attribute("style", "fill: red; display: none").is_hidden());
		assert!(!Element::new(ElementKind::Text).with_attribute("style", "display: inline").is_hidden());
	}

	#[test]
	fn toggling_twice_restores_a_visible_element() {
		let original = Element::new(ElementKind::Shape(ShapeKind::Rect)).with_attribute("style", "fill: red;");
		let mut element = original.clone();

		assert!(element.toggle_visibility());
		assert_eq!(element.attribute("style"), Some("fill: red; display: none;"));
		assert_eq!(element.attribute("display"), None);

		assert!(!element.toggle_visibility());
		assert_eq!(element, original);
	}

	#[test]
	fn toggling_twice_keeps_unnormalized_style_text() {
		for style in ["fill:red", "fill:red;stroke:blue"] {
			let original = Element::new(ElementKind::Shape(ShapeKind::Rect)).with_attribute("style", style);
			let mut element = original.clone();

			assert!(element.toggle_visibility());
			assert!(element.is_hidden());
			assert!(!element.toggle_visibility());
			assert_eq!(element, original);
		}
	}

	#[test]
	fn showing_clears_both_encodings() {
		let mut element = Element::new(ElementKind::Image).with_attribute("display", "none").with_attribute("style", "display: none;");

		assert!(!element.toggle_visibility());
		assert_eq!(element.attribute("display"), None);
		assert_eq!(element.attribute("style"), None);

		// Hiding again only uses the inline style
		assert!(element.toggle_visibility());
		assert_eq!(element.attribute("style"), Some("display: none;"));
		assert_eq!(element.attribute("display"), None);
	}
}

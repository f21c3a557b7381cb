use crate::consts::{HOVER_HIGHLIGHT_CLASS, SELECTED_OUTLINE_CLASS, SVG_NAMESPACE};
use crate::{Document, Element, ElementHighlight, NodeId};

/// What the markup is for, which decides whether transient editor state is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
	/// Markup shown in the editor canvas, including the highlight classes
	#[default]
	Canvas,
	/// Standalone SVG file with all editor state stripped
	Export,
}

/// Mutable state used whilst rendering to an SVG
struct SvgRender {
	svg: String,
	indent: usize,
	tags: usize,
	mode: RenderMode,
}

impl SvgRender {
	fn new(mode: RenderMode) -> Self {
		Self {
			svg: String::new(),
			indent: 0,
			tags: 0,
			mode,
		}
	}

	fn indent(&mut self) {
		if !self.svg.is_empty() {
			self.svg.push('\n');
		}
		self.svg.extend(std::iter::repeat_n('\t', self.indent));
	}

	fn parent_tag(&mut self, name: &str, attributes: impl FnOnce(&mut SvgRenderAttrs), inner: impl FnOnce(&mut Self)) {
		self.tags += 1;
		self.indent();
		self.svg.push('<');
		self.svg.push_str(name);
		attributes(&mut SvgRenderAttrs(self));
		self.svg.push('>');

		let length = self.svg.len();
		let tags = self.tags;
		self.indent += 1;
		inner(self);
		self.indent -= 1;

		if self.svg.len() != length {
			// Text-only content stays on the same line as its tags
			if self.tags != tags {
				self.indent();
			}
			self.svg.push_str("</");
			self.svg.push_str(name);
			self.svg.push('>');
		} else {
			self.svg.pop();
			self.svg.push_str("/>");
		}
	}

	fn text(&mut self, content: &str) {
		self.svg.push_str(&escape(content));
	}

	fn element(&mut self, document: &Document, node: NodeId) {
		let Some(element) = document.element(node) else { return };
		let is_root = node == document.root();
		let mode = self.mode;

		self.parent_tag(
			element.kind.tag_name(),
			|attributes| {
				if is_root {
					attributes.push("xmlns", SVG_NAMESPACE);
				}
				if let Some(identifier) = element.identifier() {
					attributes.push("id", identifier);
				}
				for (name, value) in element.attributes().filter(|&(name, _)| name != "class" && name != "xmlns") {
					attributes.push(name, value);
				}
				if let Some(class) = class_list(element, mode) {
					attributes.push("class", &class);
				}
			},
			|render| {
				if !element.text().is_empty() {
					render.text(element.text());
				}
				if element.kind.is_metadata() {
					render.svg.push_str(element.markup());
				}
				for child in document.children(node) {
					render.element(document, child);
				}
			},
		);
	}
}

struct SvgRenderAttrs<'a>(&'a mut SvgRender);

impl SvgRenderAttrs<'_> {
	fn push(&mut self, name: &str, value: &str) {
		let svg = &mut self.0.svg;
		svg.push(' ');
		svg.push_str(name);
		svg.push_str("=\"");
		svg.push_str(&escape(value));
		svg.push('"');
	}
}

/// The element's own classes, plus the highlight classes when rendering for the canvas.
fn class_list(element: &Element, mode: RenderMode) -> Option<String> {
	let mut classes: Vec<&str> = element.attribute("class").map(|class| class.split_whitespace().collect()).unwrap_or_default();
	if mode == RenderMode::Canvas {
		let highlight = element.highlight();
		if highlight.contains(ElementHighlight::SELECTED_OUTLINE) {
			classes.push(SELECTED_OUTLINE_CLASS);
		}
		if highlight.contains(ElementHighlight::HOVER) {
			classes.push(HOVER_HIGHLIGHT_CLASS);
		}
	}
	(!classes.is_empty()).then(|| classes.join(" "))
}

fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for character in text.chars() {
		match character {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(character),
		}
	}
	escaped
}

impl Document {
	/// Writes the whole document out as SVG markup.
	pub fn render_svg(&self, mode: RenderMode) -> String {
		let mut render = SvgRender::new(mode);
		render.element(self, self.root());
		render.svg
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{ElementKind, ShapeKind};

	use pretty_assertions::assert_eq;

	fn document_with_selected_rect() -> Document {
		let mut document = Document::default();
		let root = document.root();
		let group = document.add_element(root, Element::new(ElementKind::GROUP).with_identifier("g1")).unwrap();
		let rect = document
			.add_element(group, Element::new(ElementKind::Shape(ShapeKind::Rect)).with_identifier("r1").with_attribute("class", "brand"))
			.unwrap();
		document.set_highlight(rect, ElementHighlight::SELECTED_OUTLINE, true).unwrap();
		document.add_element(root, Element::new(ElementKind::Text).with_text("Fish & <Chips>")).unwrap();
		document
	}

	#[test]
	fn export_strips_editor_state() {
		let svg = document_with_selected_rect().render_svg(RenderMode::Export);
		assert_eq!(
			svg,
			"<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"400\" viewBox=\"0 0 600 400\" width=\"600\">\n\
			\t<g id=\"g1\">\n\
			\t\t<rect id=\"r1\" class=\"brand\"/>\n\
			\t</g>\n\
			\t<text>Fish &amp; &lt;Chips&gt;</text>\n\
			</svg>"
		);
		assert!(!svg.contains(SELECTED_OUTLINE_CLASS));
	}

	#[test]
	fn canvas_keeps_highlight_classes() {
		let svg = document_with_selected_rect().render_svg(RenderMode::Canvas);
		assert!(svg.contains(r#"<rect id="r1" class="brand selected-element-outline"/>"#));
	}

	#[test]
	fn metadata_markup_is_written_verbatim() {
		let mut document = Document::default();
		let markup = r##"<linearGradient id="fade"><stop offset="0"/></linearGradient>"##;
		document.add_element(document.root(), Element::new(ElementKind::Metadata).with_markup(markup)).unwrap();
		assert!(document.render_svg(RenderMode::Export).contains(&format!("<defs>{markup}</defs>")));
	}

	#[test]
	fn attribute_values_are_escaped() {
		let mut document = Document::default();
		let root = document.root();
		let node = document.add_element(root, Element::new(ElementKind::Image)).unwrap();
		document.set_attribute(node, "href", "a\"b<c>").unwrap();
		assert!(document.render_svg(RenderMode::Export).contains(r#"href="a&quot;b&lt;c&gt;""#));
	}
}

//! Reads SVG markup into a document, so files written by [`Document::render_svg`] or by other editors can be opened.

use crate::serialization::invalid_content;
use crate::{Document, DocumentError, Element, ElementKind, NodeId};

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::fmt::Display;

fn invalid(error: impl Display) -> DocumentError {
	DocumentError::InvalidFile(error.to_string())
}

/// An element whose end tag has not been reached yet, with the character data collected so far for text elements.
struct OpenElement {
	node: NodeId,
	text: Option<String>,
}

impl OpenElement {
	fn push_text(&mut self, text: &str) {
		if let Some(content) = &mut self.text {
			content.push_str(text);
		}
	}
}

impl Document {
	/// Parses SVG markup, making its outermost `<svg>` the root.
	///
	/// Elements outside the element vocabulary are skipped together with their content, while the inside of
	/// `<defs>` is kept verbatim. A root with a size but no `viewBox` is given one spanning that size.
	pub fn from_svg(markup: &str) -> Result<Self, DocumentError> {
		let mut reader = Reader::from_str(markup);

		let (start, has_content) = loop {
			match reader.read_event().map_err(invalid)? {
				Event::Start(start) => break (start, true),
				Event::Empty(start) => break (start, false),
				Event::Eof => return Err(DocumentError::InvalidFile("no <svg> element was found".to_string())),
				_ => {}
			}
		};

		let tag = tag_name(&reader, &start)?;
		if ElementKind::from_tag(&tag) != Some(ElementKind::SVG) {
			return Err(DocumentError::InvalidFile(format!("the root must be an <svg> element, found <{tag}>")));
		}
		let mut root = read_attributes(&reader, &start, ElementKind::SVG)?;
		root.check_attribute_names().map_err(invalid_content)?;
		fill_view_box(&mut root);

		let mut document = Document::with_root(root);
		if has_content {
			document.read_children(&mut reader)?;
		}
		Ok(document)
	}

	/// Reads everything up to the end tag of the root.
	fn read_children(&mut self, reader: &mut Reader<&[u8]>) -> Result<(), DocumentError> {
		let mut open = vec![OpenElement { node: self.root(), text: None }];

		while let Some(parent) = open.last_mut() {
			let (start, has_content) = match reader.read_event().map_err(invalid)? {
				Event::Start(start) => (start, true),
				Event::Empty(start) => (start, false),
				Event::End(_) => {
					if let Some(OpenElement { node, text: Some(text) }) = open.pop() {
						self.set_text(node, &text)?;
					}
					continue;
				}
				Event::Text(text) => {
					parent.push_text(&reader.decoder().decode(&text).map_err(invalid)?);
					continue;
				}
				Event::CData(data) => {
					parent.push_text(&reader.decoder().decode(&data).map_err(invalid)?);
					continue;
				}
				Event::GeneralRef(reference) => {
					let character = match reference.resolve_char_ref().map_err(invalid)? {
						Some(character) => character.to_string(),
						None => {
							let name = reader.decoder().decode(&reference).map_err(invalid)?;
							let Some(entity) = resolve_predefined_entity(&name) else {
								return Err(DocumentError::InvalidFile(format!("unknown entity &{name};")));
							};
							entity.to_string()
						}
					};
					parent.push_text(&character);
					continue;
				}
				Event::Eof => return Err(DocumentError::InvalidFile("the file ended inside an element".to_string())),
				_ => continue,
			};
			let parent = parent.node;

			let tag = tag_name(reader, &start)?;
			let Some(kind) = ElementKind::from_tag(&tag) else {
				log::warn!("Skipping the unsupported <{tag}> element and its content");
				if has_content {
					reader.read_to_end(start.to_end().name()).map_err(invalid)?;
				}
				continue;
			};

			let mut element = read_attributes(reader, &start, kind)?;
			if kind.is_metadata() && has_content {
				element = element.with_markup(reader.read_text(start.to_end().name()).map_err(invalid)?);
			}
			let node = self.add_element(parent, element).map_err(invalid_content)?;

			if has_content && !kind.is_metadata() {
				let text = (kind == ElementKind::Text).then(String::new);
				open.push(OpenElement { node, text });
			}
		}

		Ok(())
	}
}

fn tag_name(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<String, DocumentError> {
	Ok(reader.decoder().decode(start.local_name().as_ref()).map_err(invalid)?.into_owned())
}

fn read_attributes(reader: &Reader<&[u8]>, start: &BytesStart, kind: ElementKind) -> Result<Element, DocumentError> {
	let decoder = reader.decoder();
	let mut element = Element::new(kind);

	for attribute in start.attributes() {
		let attribute = attribute.map_err(invalid)?;
		let name = decoder.decode(attribute.key.as_ref()).map_err(invalid)?;
		// Written back on the root by the renderer
		if name == "xmlns" {
			continue;
		}
		let value = attribute.decode_and_unescape_value(decoder).map_err(invalid)?;
		element = element.with_attribute(name, value);
	}

	Ok(element)
}

fn fill_view_box(root: &mut Element) {
	if root.attribute("viewBox").is_some() {
		return;
	}
	if let (Some(width), Some(height)) = (root.attribute("width"), root.attribute("height")) {
		let view_box = format!("0 0 {width} {height}");
		root.attributes.insert("viewBox".to_string(), view_box);
	}
}

//! Helpers for the two ways SVG expresses presentation: the inline `style` attribute (a CSS declaration list)
//! and plain presentation attributes such as `display="none"`.
//!
//! Edits splice the declaration text in place. Declarations that are not touched keep their exact bytes,
//! so removing a property that was previously set gives back the text from before it was set.

/// The property name of one `;`-separated segment, if it is a declaration at all.
fn declaration_property(segment: &str) -> Option<&str> {
	let (property, _) = segment.split_once(':')?;
	let property = property.trim();
	(!property.is_empty()).then_some(property)
}

pub fn style_property<'a>(style: &'a str, property: &str) -> Option<&'a str> {
	style.split(';').rev().find_map(|declaration| {
		let (name, value) = declaration.split_once(':')?;
		name.trim().eq_ignore_ascii_case(property).then(|| value.trim())
	})
}

/// Returns the style text without any declaration of `property`.
///
/// A terminated declaration is dropped along with its `;` and one space in front of it.
/// An unterminated last declaration is dropped along with the `;` that separated it from the one before.
pub fn remove_style_property(style: &str, property: &str) -> String {
	let mut result = String::with_capacity(style.len());
	let mut removed_first = false;

	for (index, segment) in style.split_inclusive(';').enumerate() {
		if !declaration_property(segment).is_some_and(|name| name.eq_ignore_ascii_case(property)) {
			result.push_str(segment);
			continue;
		}

		if segment.ends_with(';') {
			let leading = &segment[..segment.len() - segment.trim_start().len()];
			result.push_str(leading.strip_prefix(' ').unwrap_or(leading));
		} else if result.ends_with(';') {
			result.pop();
		}
		removed_first |= index == 0;
	}

	if removed_first {
		result = result.trim_start().to_string();
	}
	if result.trim().is_empty() { String::new() } else { result }
}

/// Returns the new style text with `property` set to `value`, appended after the remaining declarations.
/// An empty `value` removes the property, mirroring `element.style.property = ''`.
pub fn set_style_property(style: &str, property: &str, value: &str) -> String {
	let mut style = remove_style_property(style, property);
	if value.is_empty() {
		return style;
	}

	let property = property.to_ascii_lowercase();
	if style.is_empty() {
		format!("{property}: {value};")
	} else if style.trim_end().ends_with(';') {
		style.push_str(&format!(" {property}: {value};"));
		style
	} else {
		style.push_str(&format!("; {property}: {value}"));
		style
	}
}

/// Whether a `display` value (from either encoding) hides the element.
pub fn is_display_none(value: &str) -> bool {
	value.trim().eq_ignore_ascii_case("none")
}

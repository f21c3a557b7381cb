use crate::consts::{DROP_BEFORE_THRESHOLD, DROP_INTO_BAND_END, DROP_INTO_BAND_START};

use serde::{Deserialize, Serialize};
use svg_document::{NodeId, Placement};

/// Where a dragged row would land relative to the row under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropZone {
	Before,
	After,
	Into,
}

impl DropZone {
	/// Only containers accept `Into`, and only in the middle band of the row.
	pub fn classify(is_container: bool, fraction: f64) -> Self {
		if is_container && fraction > DROP_INTO_BAND_START && fraction < DROP_INTO_BAND_END {
			DropZone::Into
		} else if fraction < DROP_BEFORE_THRESHOLD {
			DropZone::Before
		} else {
			DropZone::After
		}
	}

	/// The pointer position as a fraction of the row height. Rows without a height count as being hit at the top.
	pub fn fraction(pointer_offset: f64, entry_height: f64) -> f64 {
		if entry_height > 0. && pointer_offset.is_finite() { pointer_offset / entry_height } else { 0. }
	}

	pub fn placement(self, target: NodeId) -> Placement {
		match self {
			DropZone::Before => Placement::Before(target),
			DropZone::After => Placement::After(target),
			DropZone::Into => Placement::Into(target),
		}
	}
}

/// State between a `DragStart` and the matching drop or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
	pub dragged: String,
	/// The row most recently classified and the zone it was classified as
	pub hovered: Option<(String, DropZone)>,
}

impl DragSession {
	pub fn new(dragged: String) -> Self {
		Self { dragged, hovered: None }
	}

	/// The zone last classified for `identifier`, if the pointer is still over that row.
	pub fn zone_for(&self, identifier: &str) -> Option<DropZone> {
		self.hovered.as_ref().filter(|(hovered, _)| hovered == identifier).map(|&(_, zone)| zone)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn classification_bands() {
		assert_eq!(DropZone::classify(false, 0.1), DropZone::Before);
		assert_eq!(DropZone::classify(true, 0.1), DropZone::Before);
		assert_eq!(DropZone::classify(true, 0.5), DropZone::Into);
		assert_eq!(DropZone::classify(false, 0.9), DropZone::After);
		assert_eq!(DropZone::classify(true, 0.9), DropZone::After);
	}

	#[test]
	fn band_edges_are_exclusive() {
		assert_eq!(DropZone::classify(true, 0.25), DropZone::Before);
		assert_eq!(DropZone::classify(true, 0.75), DropZone::After);
		assert_eq!(DropZone::classify(false, 0.5), DropZone::After);
		assert_eq!(DropZone::classify(false, 0.49), DropZone::Before);
	}

	#[test]
	fn degenerate_rows_count_as_the_top() {
		assert_eq!(DropZone::fraction(5., 0.), 0.);
		assert_eq!(DropZone::fraction(5., -10.), 0.);
		assert_eq!(DropZone::fraction(f64::NAN, 20.), 0.);
		assert_eq!(DropZone::fraction(5., 20.), 0.25);
	}

	#[test]
	fn the_zone_belongs_to_the_hovered_row() {
		let mut session = DragSession::new("a".to_string());
		assert_eq!(session.zone_for("b"), None);
		session.hovered = Some(("b".to_string(), DropZone::Into));
		assert_eq!(session.zone_for("b"), Some(DropZone::Into));
		assert_eq!(session.zone_for("c"), None);
	}
}

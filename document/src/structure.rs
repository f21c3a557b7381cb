use crate::NodeId;

use std::collections::HashMap;

/// Parent, sibling, and child links of every node in the tree, kept separately from the element data.
#[derive(Debug, Clone, Default)]
pub(crate) struct Structure {
	relations: HashMap<NodeId, NodeRelations>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NodeRelations {
	parent: Option<NodeId>,
	previous_sibling: Option<NodeId>,
	next_sibling: Option<NodeId>,
	first_child: Option<NodeId>,
	last_child: Option<NodeId>,
}

impl Structure {
	pub fn with_root(root: NodeId) -> Self {
		let mut structure = Self::default();
		structure.relations.insert(root, NodeRelations::default());
		structure
	}

	fn get_relations(&self, node: NodeId) -> Option<&NodeRelations> {
		self.relations.get(&node)
	}

	fn get_structure_mut(&mut self, node: NodeId) -> &mut NodeRelations {
		self.relations.entry(node).or_default()
	}

	pub fn parent(&self, node: NodeId) -> Option<NodeId> {
		self.get_relations(node).and_then(|relations| relations.parent)
	}

	pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
		self.get_relations(node).and_then(|relations| relations.previous_sibling)
	}

	pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
		self.get_relations(node).and_then(|relations| relations.next_sibling)
	}

	pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
		self.get_relations(node).and_then(|relations| relations.first_child)
	}

	pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
		self.get_relations(node).and_then(|relations| relations.last_child)
	}

	/// Iterator over all direct children, in document order
	pub fn children(&self, node: NodeId) -> AxisIter<'_> {
		AxisIter {
			node: self.first_child(node),
			next_node: Self::next_sibling,
			structure: self,
		}
	}

	/// The node itself followed by its parent, grandparent, and so on up to the root
	pub fn ancestors(&self, node: NodeId) -> AxisIter<'_> {
		AxisIter {
			node: Some(node),
			next_node: Self::parent,
			structure: self,
		}
	}

	/// The node itself followed by its last child, that child's last child, and so on
	fn last_children(&self, node: NodeId) -> AxisIter<'_> {
		AxisIter {
			node: Some(node),
			next_node: Self::last_child,
			structure: self,
		}
	}

	/// Pre-order traversal of everything below the node, not including the node itself
	pub fn descendants(&self, node: NodeId) -> DescendantsIter<'_> {
		DescendantsIter {
			front: self.first_child(node),
			back: self.last_child(node).and_then(|child| self.last_children(child).last()),
			structure: self,
		}
	}

	/// Whether `ancestor` is `node` or one of its ancestors
	pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
		self.ancestors(node).any(|candidate| candidate == ancestor)
	}

	fn is_detached(&self, node: NodeId) -> bool {
		self.get_relations(node).is_none_or(|relations| relations.parent.is_none() && relations.previous_sibling.is_none() && relations.next_sibling.is_none())
	}

	/// Add a node as the last child of `parent`
	pub fn push_child(&mut self, parent: NodeId, new: NodeId) {
		debug_assert!(self.is_detached(new), "Cannot attach a node that is still linked into the tree");
		self.get_structure_mut(new).parent = Some(parent);
		if let Some(last_child) = self.get_structure_mut(parent).last_child.replace(new) {
			self.get_structure_mut(new).previous_sibling = Some(last_child);
			self.get_structure_mut(last_child).next_sibling = Some(new);
		}

		let parent = self.get_structure_mut(parent);
		if parent.first_child.is_none() {
			parent.first_child = Some(new);
		}
	}

	/// Add `new` as the sibling immediately before `reference`, which must have a parent
	pub fn add_before(&mut self, reference: NodeId, new: NodeId) {
		debug_assert!(self.is_detached(new), "Cannot attach a node that is still linked into the tree");
		let parent = self.parent(reference);
		self.get_structure_mut(new).next_sibling = Some(reference);
		self.get_structure_mut(new).parent = parent;
		if let Some(old_previous_sibling) = self.get_structure_mut(reference).previous_sibling.replace(new) {
			self.get_structure_mut(old_previous_sibling).next_sibling = Some(new);
			self.get_structure_mut(new).previous_sibling = Some(old_previous_sibling);
		} else if let Some(parent) = parent {
			self.get_structure_mut(parent).first_child = Some(new);
		}
	}

	/// Add `new` as the sibling immediately after `reference`, which must have a parent
	pub fn add_after(&mut self, reference: NodeId, new: NodeId) {
		debug_assert!(self.is_detached(new), "Cannot attach a node that is still linked into the tree");
		let parent = self.parent(reference);
		self.get_structure_mut(new).previous_sibling = Some(reference);
		self.get_structure_mut(new).parent = parent;
		if let Some(old_next_sibling) = self.get_structure_mut(reference).next_sibling.replace(new) {
			self.get_structure_mut(old_next_sibling).previous_sibling = Some(new);
			self.get_structure_mut(new).next_sibling = Some(old_next_sibling);
		} else if let Some(parent) = parent {
			self.get_structure_mut(parent).last_child = Some(new);
		}
	}

	/// Unlink a node from its parent and siblings, keeping its own subtree intact so it can be attached elsewhere
	pub fn detach(&mut self, node: NodeId) {
		let Some(&relations) = self.get_relations(node) else { return };
		let NodeRelations {
			parent,
			previous_sibling,
			next_sibling,
			..
		} = relations;

		if let Some(previous_sibling) = previous_sibling {
			self.get_structure_mut(previous_sibling).next_sibling = next_sibling;
		}
		if let Some(next_sibling) = next_sibling {
			self.get_structure_mut(next_sibling).previous_sibling = previous_sibling;
		}
		if let Some(parent) = parent {
			let parent = self.get_structure_mut(parent);
			if parent.first_child == Some(node) {
				parent.first_child = next_sibling;
			}
			if parent.last_child == Some(node) {
				parent.last_child = previous_sibling;
			}
		}

		let relations = self.get_structure_mut(node);
		relations.parent = None;
		relations.previous_sibling = None;
		relations.next_sibling = None;
	}

	/// Delete a node and all its descendants, returning every removed node in pre-order
	pub fn delete(&mut self, node: NodeId) -> Vec<NodeId> {
		self.detach(node);

		let mut deleted = vec![node];
		deleted.extend(self.descendants(node));
		for node in &deleted {
			self.relations.remove(node);
		}
		deleted
	}
}

/// Iterator over specified axis.
#[derive(Clone)]
pub struct AxisIter<'a> {
	node: Option<NodeId>,
	next_node: fn(&Structure, NodeId) -> Option<NodeId>,
	structure: &'a Structure,
}

impl Iterator for AxisIter<'_> {
	type Item = NodeId;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.node.take();
		self.node = node.and_then(|node| (self.next_node)(self.structure, node));
		node
	}
}

#[derive(Clone)]
pub struct DescendantsIter<'a> {
	front: Option<NodeId>,
	back: Option<NodeId>,
	structure: &'a Structure,
}

impl Iterator for DescendantsIter<'_> {
	type Item = NodeId;

	fn next(&mut self) -> Option<Self::Item> {
		if self.front == self.back {
			self.back = None;
			self.front.take()
		} else {
			let node = self.front.take();
			if let Some(node) = node {
				self.front = self
					.structure
					.first_child(node)
					.or_else(|| self.structure.ancestors(node).find_map(|ancestor| self.structure.next_sibling(ancestor)));
			}
			node
		}
	}
}

impl DoubleEndedIterator for DescendantsIter<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front == self.back {
			self.front = None;
			self.back.take()
		} else {
			let node = self.back.take();
			if let Some(node) = node {
				self.back = self
					.structure
					.previous_sibling(node)
					.and_then(|sibling| self.structure.last_children(sibling).last())
					.or_else(|| self.structure.parent(node));
			}
			node
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn ids(iter: impl Iterator<Item = NodeId>) -> Vec<u64> {
		iter.map(|node| node.0).collect()
	}

	#[test]
	fn test_tree() {
		let root = NodeId(0);
		let structure = &mut Structure::with_root(root);
		structure.push_child(root, NodeId(3));
		assert_eq!(ids(structure.children(root)), vec![3]);
		structure.push_child(root, NodeId(6));
		assert_eq!(ids(structure.children(root)), vec![3, 6]);
		assert_eq!(ids(structure.descendants(root)), vec![3, 6]);
		structure.add_after(NodeId(3), NodeId(4));
		structure.add_before(NodeId(3), NodeId(2));
		structure.add_before(NodeId(6), NodeId(5));
		structure.add_after(NodeId(6), NodeId(9));
		structure.push_child(NodeId(6), NodeId(8));
		structure.add_before(NodeId(8), NodeId(7));
		structure.add_before(NodeId(2), NodeId(1));
		assert_eq!(ids(structure.children(root)), vec![1, 2, 3, 4, 5, 6, 9]);
		assert_eq!(ids(structure.descendants(root)), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
		assert_eq!(ids(structure.descendants(root).rev()), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
		assert!(structure.children(root).all(|child| structure.parent(child) == Some(root)));

		assert_eq!(ids(structure.delete(NodeId(6)).into_iter()), vec![6, 7, 8]);
		structure.delete(NodeId(1));
		structure.push_child(NodeId(9), NodeId(10));
		assert_eq!(ids(structure.children(root)), vec![2, 3, 4, 5, 9]);
		assert_eq!(ids(structure.descendants(root)), vec![2, 3, 4, 5, 9, 10]);
		assert_eq!(ids(structure.descendants(root).rev()), vec![10, 9, 5, 4, 3, 2]);
		assert_eq!(structure.parent(NodeId(7)), None);
	}

	#[test]
	fn detached_subtrees_can_be_reattached() {
		let root = NodeId(0);
		let structure = &mut Structure::with_root(root);
		structure.push_child(root, NodeId(1));
		structure.push_child(root, NodeId(2));
		structure.push_child(NodeId(1), NodeId(3));
		structure.push_child(NodeId(1), NodeId(4));

		structure.detach(NodeId(1));
		assert_eq!(ids(structure.children(root)), vec![2]);
		assert_eq!(ids(structure.children(NodeId(1))), vec![3, 4]);

		structure.add_after(NodeId(2), NodeId(1));
		assert_eq!(ids(structure.descendants(root)), vec![2, 1, 3, 4]);

		structure.detach(NodeId(4));
		structure.push_child(NodeId(2), NodeId(4));
		assert_eq!(ids(structure.descendants(root)), vec![2, 4, 1, 3]);
		assert_eq!(ids(structure.ancestors(NodeId(4))), vec![4, 2, 0]);
		assert!(structure.is_inclusive_ancestor(NodeId(2), NodeId(4)));
		assert!(structure.is_inclusive_ancestor(NodeId(4), NodeId(4)));
		assert!(!structure.is_inclusive_ancestor(NodeId(1), NodeId(4)));
	}

	#[test]
	fn descendants_of_a_leaf_are_empty() {
		let root = NodeId(0);
		let structure = &mut Structure::with_root(root);
		structure.push_child(root, NodeId(1));
		structure.push_child(root, NodeId(2));
		assert!(structure.descendants(NodeId(1)).next().is_none());
		assert_eq!(structure.first_child(NodeId(1)), None);
	}
}

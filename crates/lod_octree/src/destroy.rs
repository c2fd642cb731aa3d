//! Explicit post-order release of an octree.

use crate::node::{Branch, OctreeNode};

/// Release `node` and everything below it, children before their parent.
///
/// Takes the tree by value, so a tree cannot be destroyed twice. Returns the
/// number of nodes released.
pub fn destroy(node: OctreeNode) -> usize {
  match node {
    OctreeNode::Branch(Branch { children, .. }) => {
      let children: [OctreeNode; 8] = *children;
      let released: usize = children.into_iter().map(destroy).sum();
      released + 1
    }
    OctreeNode::Leaf(leaf) => {
      drop(leaf);
      1
    }
  }
}

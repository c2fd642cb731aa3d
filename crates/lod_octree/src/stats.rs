//! Structural statistics for a built octree.

use crate::node::OctreeNode;

/// Node and occupancy counts collected from a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
  /// Number of branch nodes.
  pub branches: usize,
  /// Number of leaf nodes.
  pub leaves: usize,
  /// Object indices stored across all leaves, counting duplicates.
  pub leaf_occurrences: usize,
  /// Largest object count held by a single leaf.
  pub max_leaf_len: usize,
}

impl TreeStats {
  /// Walk `root` and collect its statistics.
  pub fn collect(root: &OctreeNode) -> Self {
    let mut stats = Self::default();
    stats.visit(root);
    stats
  }

  fn visit(&mut self, node: &OctreeNode) {
    match node {
      OctreeNode::Branch(branch) => {
        self.branches += 1;
        for child in branch.children.iter() {
          self.visit(child);
        }
      }
      OctreeNode::Leaf(leaf) => {
        self.leaves += 1;
        self.leaf_occurrences += leaf.objects.len();
        self.max_leaf_len = self.max_leaf_len.max(leaf.objects.len());
      }
    }
  }

  /// Total node count.
  #[inline]
  pub fn nodes(&self) -> usize {
    self.branches + self.leaves
  }

  /// Occurrences beyond one per object, i.e. boundary duplicates.
  ///
  /// Objects outside the tree make this an underestimate.
  #[inline]
  pub fn duplicates(&self, object_count: usize) -> usize {
    self.leaf_occurrences.saturating_sub(object_count)
  }
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use super::*;
  use crate::bounds::BoundingBox;
  use crate::build::build_root;

  fn world() -> BoundingBox {
    BoundingBox::new(Vec3::splat(-10.0), Vec3::splat(10.0))
  }

  #[test]
  fn test_node_counts_per_depth() {
    for max_depth in 0..=3u32 {
      let stats = TreeStats::collect(&build_root(world(), &[], max_depth));
      assert_eq!(stats.leaves, 8usize.pow(max_depth));
      assert_eq!(stats.branches, (8usize.pow(max_depth) - 1) / 7);
      assert_eq!(stats.leaf_occurrences, 0);
    }
  }

  #[test]
  fn test_interior_object_counted_once() {
    let stats = TreeStats::collect(&build_root(world(), &[Vec3::splat(3.0)], 2));
    assert_eq!(stats.leaf_occurrences, 1);
    assert_eq!(stats.max_leaf_len, 1);
    assert_eq!(stats.duplicates(1), 0);
  }

  #[test]
  fn test_origin_object_lands_in_all_eight_octants() {
    // The root center is a corner of all 8 octants
    let stats = TreeStats::collect(&build_root(world(), &[Vec3::ZERO], 1));
    assert_eq!(stats.leaf_occurrences, 8);
    assert_eq!(stats.duplicates(1), 7);
  }
}

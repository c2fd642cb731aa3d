//! Camera-centric LOD tier assignment.
//!
//! Walks from the root toward the camera one branch level at a time. At each
//! level the child containing the camera is refined further while the 7
//! siblings are finished off with the current (coarser) tier. The leaf-parent
//! branch that finally contains the camera gets tier 0.
//!
//! # Depth caveat
//!
//! Sibling subtrees are located by descending `level` times with the same
//! child index. For `max_depth <= 2` that is a single hop onto the sibling's
//! leaf-parent branch and every object is reached. Deeper trees only reach one
//! leaf-parent per sibling; objects that are never reached keep the coarsest
//! tier.

use glam::Vec3;

use crate::config::LodConfig;
use crate::node::{octant_containing, Branch, OctreeNode};

/// Compute one LOD tier per object for a camera at `camera`.
///
/// Tiers run from 0 (finest) to `max_depth - 1` (coarsest). Every entry is
/// initialized to the coarsest tier before the walk, so objects outside the
/// tree still get a valid value.
///
/// `object_count` must be the number of positions the tree was built over.
/// Callers outside the crate go through [`Octree::query_lods`], which passes
/// the count recorded at build time.
///
/// # Panics
/// If the tree stores an object index `>= object_count`, or if the tree's
/// shape does not match `max_depth`.
///
/// [`Octree::query_lods`]: crate::tree::Octree::query_lods
pub(crate) fn compute_lods(
  root: &OctreeNode,
  camera: Vec3,
  object_count: usize,
  max_depth: u32,
) -> Vec<u32> {
  let coarsest = LodConfig::new(max_depth).coarsest_tier();
  let mut lods = vec![coarsest; object_count];

  let mut current = match root {
    OctreeNode::Branch(branch) => branch,
    OctreeNode::Leaf(leaf) => {
      // max_depth == 0: a single tier covers everything
      for &object in &leaf.objects {
        assign(&mut lods, object, 0);
      }
      return lods;
    }
  };

  for level in (1..=coarsest).rev() {
    let camera_octant = octant_containing(current.bounds.center(), camera);

    for octant in (0..8).filter(|&octant| octant != camera_octant) {
      let mut next = current;
      for _ in 0..level {
        next = expect_branch(&next.children[octant]);
      }
      set_levels_of_detail(next, &mut lods, level);
    }

    current = expect_branch(&current.children[camera_octant]);
  }

  set_levels_of_detail(current, &mut lods, 0);
  lods
}

/// Assign `tier` to every object held by the 8 leaf children of `branch`.
///
/// # Panics
/// If any child of `branch` is not a leaf.
pub fn set_levels_of_detail(branch: &Branch, lods: &mut [u32], tier: u32) {
  for child in branch.children.iter() {
    let OctreeNode::Leaf(leaf) = child else {
      panic!("set_levels_of_detail called on a branch whose children are not leaves");
    };
    for &object in &leaf.objects {
      assign(lods, object, tier);
    }
  }
}

#[inline]
fn assign(lods: &mut [u32], object: u32, tier: u32) {
  let count = lods.len();
  let Some(slot) = lods.get_mut(object as usize) else {
    panic!("object index {object} out of range for {count} objects");
  };
  *slot = tier;
}

#[inline]
fn expect_branch(node: &OctreeNode) -> &Branch {
  match node {
    OctreeNode::Branch(branch) => branch,
    OctreeNode::Leaf(_) => panic!("octree is shallower than its configured max_depth"),
  }
}

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

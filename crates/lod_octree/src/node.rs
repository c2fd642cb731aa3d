//! OctreeNode - tagged Branch/Leaf node owning its subtree.
//!
//! # Octant order
//!
//! Children are stored in a fixed order. The bottom layer (-Y) walks the
//! square clockwise starting at the min corner, the top layer (+Y) repeats
//! the same walk:
//!
//! ```text
//! idx  x  y  z
//!  0   -  -  -
//!  1   +  -  -
//!  2   +  -  +
//!  3   -  -  +
//!  4   -  +  -
//!  5   +  +  -
//!  6   +  +  +
//!  7   -  +  +
//! ```
//!
//! The builder and the LOD selector both go through [`OCTANT_OFFSETS`] and
//! [`octant_index`], so they can never disagree about which child is which.

use glam::{BVec3, Vec3};
use smallvec::SmallVec;

use crate::bounds::BoundingBox;

/// Object indices stored in a leaf. Duplicates across leaves are allowed.
pub type ObjectSet = SmallVec<[u32; 4]>;

/// Per-axis 0/1 offset of each octant from its parent's min corner, in
/// child order.
pub const OCTANT_OFFSETS: [[u8; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [1, 0, 1],
  [0, 0, 1],
  [0, 1, 0],
  [1, 1, 0],
  [1, 1, 1],
  [0, 1, 1],
];

/// Per-axis mask of the octant's positive sides.
#[inline]
pub fn octant_positive(octant: usize) -> BVec3 {
  let [x, y, z] = OCTANT_OFFSETS[octant];
  BVec3::new(x == 1, y == 1, z == 1)
}

/// Octant index for a combination of per-axis "positive side" flags.
///
/// x contributes 1 and y contributes 4. The z digit depends on x because the
/// walk around each layer is clockwise: `z * (3 - 2x)` maps (-x,+z) to 3 and
/// (+x,+z) to 2.
#[inline]
pub fn octant_index(x_pos: bool, y_pos: bool, z_pos: bool) -> usize {
  let x = x_pos as usize;
  let y = y_pos as usize;
  let z = z_pos as usize;
  x + 4 * y + z * (3 - 2 * x)
}

/// Octant of `center`'s children that contains `point`.
///
/// A component exactly on the center plane counts as the positive side.
#[inline]
pub fn octant_containing(center: Vec3, point: Vec3) -> usize {
  let delta = point - center;
  octant_index(delta.x >= 0.0, delta.y >= 0.0, delta.z >= 0.0)
}

/// Internal node owning exactly 8 children.
#[derive(Debug)]
pub struct Branch {
  pub bounds: BoundingBox,
  pub children: Box<[OctreeNode; 8]>,
}

/// Terminal node holding the objects classified into its region.
#[derive(Debug)]
pub struct Leaf {
  pub bounds: BoundingBox,
  pub objects: ObjectSet,
}

/// Octree node.
///
/// A branch exclusively owns its children, so dropping (or destroying) the
/// root releases the whole tree exactly once.
#[derive(Debug)]
pub enum OctreeNode {
  Branch(Branch),
  Leaf(Leaf),
}

impl OctreeNode {
  /// Bounding box of this node.
  #[inline]
  pub fn bounds(&self) -> &BoundingBox {
    match self {
      OctreeNode::Branch(branch) => &branch.bounds,
      OctreeNode::Leaf(leaf) => &leaf.bounds,
    }
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self, OctreeNode::Leaf(_))
  }

  /// Child at `octant`, or None for a leaf.
  #[inline]
  pub fn child(&self, octant: usize) -> Option<&OctreeNode> {
    match self {
      OctreeNode::Branch(branch) => Some(&branch.children[octant]),
      OctreeNode::Leaf(_) => None,
    }
  }

  /// Visit every leaf under this node, in child order.
  pub fn for_each_leaf<'a>(&'a self, visit: &mut impl FnMut(&'a Leaf)) {
    match self {
      OctreeNode::Branch(branch) => {
        for child in branch.children.iter() {
          child.for_each_leaf(visit);
        }
      }
      OctreeNode::Leaf(leaf) => visit(leaf),
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

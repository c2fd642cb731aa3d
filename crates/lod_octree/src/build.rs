//! Recursive octree construction from a fixed set of object positions.

use glam::Vec3;

use crate::bounds::BoundingBox;
use crate::node::{Branch, Leaf, ObjectSet, OctreeNode};

/// Build the subtree for `bounds` holding `objects`.
///
/// Subdivides into the 8 octants until `depth` reaches `max_depth`, where the
/// incoming object set becomes a leaf unchanged. Every object is tested
/// against all 8 octants with the inclusive point test, so an object lying
/// on a shared face is classified into every octant that touches it.
///
/// An empty object set still recurses to `max_depth` and produces empty
/// leaves.
///
/// # Panics
/// If an object index is out of range for `positions`.
pub fn build(
  bounds: BoundingBox,
  objects: ObjectSet,
  positions: &[Vec3],
  depth: u32,
  max_depth: u32,
) -> OctreeNode {
  if depth >= max_depth {
    return OctreeNode::Leaf(Leaf { bounds, objects });
  }

  let octants = bounds.octants();
  let mut next_objects: [ObjectSet; 8] = Default::default();

  for &object in &objects {
    let position = positions[object as usize];
    for (octant, octant_bounds) in octants.iter().enumerate() {
      if octant_bounds.contains_point(position) {
        next_objects[octant].push(object);
      }
    }
  }

  let children = std::array::from_fn(|octant| {
    let objects = std::mem::take(&mut next_objects[octant]);
    build(octants[octant], objects, positions, depth + 1, max_depth)
  });

  OctreeNode::Branch(Branch {
    bounds,
    children: Box::new(children),
  })
}

/// Build a whole tree over `positions`, seeding the root with every object.
///
/// Objects outside `bounds` are kept at the root but drop out at the first
/// subdivision since no octant contains them.
///
/// # Panics
/// If there are more positions than a `u32` object index can address.
pub fn build_root(bounds: BoundingBox, positions: &[Vec3], max_depth: u32) -> OctreeNode {
  build(bounds, seed_objects(positions.len()), positions, 0, max_depth)
}

/// Indices `0..count` as the root's object set.
fn seed_objects(count: usize) -> ObjectSet {
  let Ok(count) = u32::try_from(count) else {
    panic!("{count} objects exceed the u32 object index range");
  };
  (0..count).collect()
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;

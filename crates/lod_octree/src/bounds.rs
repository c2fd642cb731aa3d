//! Axis-aligned bounding box used to partition the octree.

use glam::Vec3;

use crate::node::octant_positive;

/// Axis-aligned bounding box.
///
/// Stores the derived center and half-size alongside the corners so the
/// builder and selector never recompute them. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
  min: Vec3,
  max: Vec3,
  center: Vec3,
  extents: Vec3,
}

impl BoundingBox {
  /// Create a box from its min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "bounding box min must be <= max on all axes"
    );
    Self {
      min,
      max,
      center: (min + max) * 0.5,
      extents: (max - min) * 0.5,
    }
  }

  /// Create a box from its center and half-extents.
  pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
    debug_assert!(
      extents.x >= 0.0 && extents.y >= 0.0 && extents.z >= 0.0,
      "bounding box extents must be non-negative"
    );
    Self {
      min: center - extents,
      max: center + extents,
      center,
      extents,
    }
  }

  /// Minimum corner (inclusive).
  #[inline]
  pub fn min(&self) -> Vec3 {
    self.min
  }

  /// Maximum corner (inclusive).
  #[inline]
  pub fn max(&self) -> Vec3 {
    self.max
  }

  #[inline]
  pub fn center(&self) -> Vec3 {
    self.center
  }

  /// Half-size along each axis.
  #[inline]
  pub fn extents(&self) -> Vec3 {
    self.extents
  }

  /// Full size (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  /// Check if this box overlaps another.
  ///
  /// Boxes that only touch on a face, edge or corner count as overlapping.
  #[inline]
  pub fn overlaps(&self, other: &BoundingBox) -> bool {
    self.min.x <= other.max.x
      && self.max.x >= other.min.x
      && self.min.y <= other.max.y
      && self.max.y >= other.min.y
      && self.min.z <= other.max.z
      && self.max.z >= other.min.z
  }

  /// Check if a point lies inside or exactly on the boundary of this box.
  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    point.x >= self.min.x
      && point.x <= self.max.x
      && point.y >= self.min.y
      && point.y <= self.max.y
      && point.z >= self.min.z
      && point.z <= self.max.z
  }

  /// Child box for the given octant (0-7), in the order of
  /// [`OCTANT_OFFSETS`](crate::node::OCTANT_OFFSETS).
  ///
  /// Per axis the child spans `[min, center]` on the negative side and
  /// `[center, max]` on the positive side, which is `[min + s * extents,
  /// center + s * extents]` for the octant's 0/1 offset `s`. Picking the
  /// parent's own corners keeps siblings sharing bit-identical faces.
  pub fn octant(&self, octant: usize) -> BoundingBox {
    let positive = octant_positive(octant);
    BoundingBox::new(
      Vec3::select(positive, self.center, self.min),
      Vec3::select(positive, self.max, self.center),
    )
  }

  /// All 8 child boxes in octant order.
  pub fn octants(&self) -> [BoundingBox; 8] {
    std::array::from_fn(|octant| self.octant(octant))
  }
}

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

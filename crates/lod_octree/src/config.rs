//! LodConfig - the single knob shared by tree construction and tier tables.

use crate::error::{LodError, Result};

/// Deepest tree accepted by [`LodConfig::validate`].
///
/// A tree of depth `d` has `8^d` leaves; 8^10 is already over a billion.
pub const MAX_DEPTH_LIMIT: u32 = 10;

/// Configuration for octree LOD selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LodConfig {
  /// Tree depth, which is also the number of distinct LOD tiers.
  ///
  /// 0 builds a single leaf. Tier assignment is only exact up to depth 2.
  pub max_depth: u32,
}

impl LodConfig {
  pub const fn new(max_depth: u32) -> Self {
    Self { max_depth }
  }

  /// Number of LOD tiers a query can produce (at least 1).
  #[inline]
  pub fn tier_count(&self) -> u32 {
    self.max_depth.max(1)
  }

  /// Coarsest tier value (`max_depth - 1`, or 0 for a single-leaf tree).
  #[inline]
  pub fn coarsest_tier(&self) -> u32 {
    self.tier_count() - 1
  }

  /// Whether every object is guaranteed to be reached by the traversal.
  #[inline]
  pub fn is_exact(&self) -> bool {
    self.max_depth <= 2
  }

  pub fn validate(&self) -> Result<()> {
    if self.max_depth > MAX_DEPTH_LIMIT {
      return Err(LodError::InvalidConfig(format!(
        "max_depth {} exceeds the limit of {}",
        self.max_depth, MAX_DEPTH_LIMIT
      )));
    }
    Ok(())
  }
}

impl Default for LodConfig {
  /// Two tiers: full detail near the camera, reduced detail elsewhere.
  fn default() -> Self {
    Self::new(2)
  }
}

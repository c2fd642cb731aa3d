//! Per-object distance-threshold LOD selection.
//!
//! The brute-force alternative to the octree walk: measure every object's
//! distance to the observer and count how many thresholds it exceeds. Used
//! to cross-check octree tiers and as a fallback for tiny scenes.
//!
//! ```text
//! threshold[i] = base + base * multiplier * i
//! ```

use glam::Vec3;

/// Default distance of the first threshold in world units.
pub const DEFAULT_BASE_THRESHOLD: f32 = 10.0;

/// Default growth factor between consecutive thresholds.
pub const DEFAULT_THRESHOLD_MULTIPLIER: f32 = 2.0;

/// Distance thresholds, one per tier.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceThresholds {
  thresholds: Vec<f32>,
}

impl DistanceThresholds {
  /// Thresholds for `tiers` tiers growing linearly from `base`.
  pub fn new(base: f32, multiplier: f32, tiers: u32) -> Self {
    let thresholds = (0..tiers)
      .map(|tier| base + base * multiplier * tier as f32)
      .collect();
    Self { thresholds }
  }

  /// Default thresholds for `tiers` tiers.
  pub fn with_tiers(tiers: u32) -> Self {
    Self::new(DEFAULT_BASE_THRESHOLD, DEFAULT_THRESHOLD_MULTIPLIER, tiers)
  }

  pub fn thresholds(&self) -> &[f32] {
    &self.thresholds
  }

  /// Number of tiers these thresholds select between.
  #[inline]
  pub fn tier_count(&self) -> u32 {
    self.thresholds.len() as u32
  }

  /// Tier for an object `distance` away from the observer.
  ///
  /// Counts the thresholds strictly exceeded, never reaching past the
  /// coarsest tier. The last threshold bounds nothing and is ignored.
  pub fn tier_for_distance(&self, distance: f32) -> u32 {
    let bounded = self.thresholds.len().saturating_sub(1);
    self.thresholds[..bounded]
      .iter()
      .take_while(|&&threshold| distance > threshold)
      .count() as u32
  }

  /// Tier for every object in `positions` as seen from `observer`.
  pub fn select(&self, positions: &[Vec3], observer: Vec3) -> Vec<u32> {
    positions
      .iter()
      .map(|position| self.tier_for_distance(position.distance(observer)))
      .collect()
  }
}

//! Error types for the lod_octree crate.
//!
//! Only the collaborator-facing surface is fallible. Broken internal
//! contracts (a malformed tree, an out-of-range object index) panic instead.

use thiserror::Error;

/// Result type for lod_octree operations.
pub type Result<T> = std::result::Result<T, LodError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LodError {
  /// A tier table entry does not carry one representation per tier.
  #[error("object {object} has {found} detail tiers, expected {expected}")]
  TierCountMismatch {
    object: usize,
    expected: usize,
    found: usize,
  },

  /// A LOD array does not match the number of objects it indexes.
  #[error("expected {expected} LOD entries, got {found}")]
  ObjectCountMismatch { expected: usize, found: usize },

  /// A tier value exceeds the coarsest tier available.
  #[error("object {object} requested tier {tier}, but only {tiers} tiers exist")]
  TierOutOfRange { object: usize, tier: u32, tiers: u32 },

  /// Configuration rejected by validation.
  #[error("invalid LOD configuration: {0}")]
  InvalidConfig(String),
}

//! TierTable - per-object representations indexed by LOD tier.
//!
//! The render side keeps one representation per tier for every object
//! (tier 0 = full detail). The table is validated against the same
//! [`LodConfig`] the tree was built with, so every tier a query can return
//! has something behind it.

use crate::config::LodConfig;
use crate::error::{LodError, Result};

/// Per-object, per-tier lookup table.
#[derive(Clone, Debug)]
pub struct TierTable<T> {
  entries: Vec<Vec<T>>,
  tiers: u32,
}

impl<T> TierTable<T> {
  /// Create a table where `entries[object][tier]` is the representation of
  /// `object` at `tier`.
  ///
  /// Every object must provide exactly `config.tier_count()` tiers.
  pub fn new(entries: Vec<Vec<T>>, config: &LodConfig) -> Result<Self> {
    let tiers = config.tier_count();
    if let Some((object, found)) = entries
      .iter()
      .map(Vec::len)
      .enumerate()
      .find(|&(_, len)| len != tiers as usize)
    {
      return Err(LodError::TierCountMismatch {
        object,
        expected: tiers as usize,
        found,
      });
    }
    Ok(Self { entries, tiers })
  }

  /// Number of objects.
  #[inline]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Tiers per object.
  #[inline]
  pub fn tiers(&self) -> u32 {
    self.tiers
  }

  /// Representation of `object` at `tier`.
  pub fn get(&self, object: usize, tier: u32) -> Option<&T> {
    self.entries.get(object)?.get(tier as usize)
  }

  /// Resolve a LOD array (one tier per object) to representations.
  pub fn select(&self, lods: &[u32]) -> Result<Vec<&T>> {
    if lods.len() != self.entries.len() {
      return Err(LodError::ObjectCountMismatch {
        expected: self.entries.len(),
        found: lods.len(),
      });
    }

    lods
      .iter()
      .zip(&self.entries)
      .enumerate()
      .map(|(object, (&tier, entry))| {
        entry.get(tier as usize).ok_or(LodError::TierOutOfRange {
          object,
          tier,
          tiers: self.tiers,
        })
      })
      .collect()
  }
}

//! Octree - owning handle over a built tree.
//!
//! Lifecycle: [`build_tree`] once at load time, [`query_lods`] every frame,
//! [`destroy_tree`] at shutdown. The tree is never mutated in between, so any
//! number of readers may share `&Octree`.

use glam::Vec3;
use rayon::prelude::*;

use crate::bounds::BoundingBox;
use crate::build::build_root;
use crate::config::LodConfig;
use crate::destroy::destroy;
use crate::node::OctreeNode;
use crate::select::compute_lods;
use crate::stats::TreeStats;

/// A static octree over a fixed set of object positions.
#[derive(Debug)]
pub struct Octree {
  root: OctreeNode,
  config: LodConfig,
  object_count: usize,
}

impl Octree {
  /// Build a tree over `positions` inside `world_bounds`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build"))]
  pub fn build(world_bounds: BoundingBox, positions: &[Vec3], config: &LodConfig) -> Self {
    #[cfg(feature = "tracing")]
    {
      let _span = tracing::info_span!("check_inputs").entered();
      if !config.is_exact() {
        tracing::warn!(
          max_depth = config.max_depth,
          "LOD tiers are unverified beyond depth 2; unreached objects fall back to the coarsest tier"
        );
      }
      let outside = positions
        .iter()
        .filter(|&&position| !world_bounds.contains_point(position))
        .count();
      if outside > 0 {
        tracing::warn!(outside, "objects outside the world bounds will not be classified");
      }
    }

    let root = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("build_root").entered();
      build_root(world_bounds, positions, config.max_depth)
    };

    #[cfg(feature = "tracing")]
    {
      let _span = tracing::info_span!("collect_stats").entered();
      let stats = TreeStats::collect(&root);
      tracing::debug!(
        objects = positions.len(),
        branches = stats.branches,
        leaves = stats.leaves,
        duplicates = stats.duplicates(positions.len()),
        "octree built"
      );
    }

    Self {
      root,
      config: *config,
      object_count: positions.len(),
    }
  }

  /// One LOD tier per object for an observer at `observer`.
  ///
  /// Always returns [`Self::object_count`] entries, including objects that
  /// fell outside the world bounds.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::query_lods"))]
  pub fn query_lods(&self, observer: Vec3) -> Vec<u32> {
    compute_lods(&self.root, observer, self.object_count, self.config.max_depth)
  }

  /// Query several observers in parallel against the shared tree.
  ///
  /// Returns one LOD array per observer, in input order.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::query_lods_batch"))]
  pub fn query_lods_batch(&self, observers: &[Vec3]) -> Vec<Vec<u32>> {
    if observers.is_empty() {
      return Vec::new();
    }

    observers
      .par_iter()
      .map(|&observer| self.query_lods(observer))
      .collect()
  }

  /// Release the tree, returning how many nodes were freed.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::destroy"))]
  pub fn destroy(self) -> usize {
    destroy(self.root)
  }

  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  pub fn config(&self) -> &LodConfig {
    &self.config
  }

  /// Number of objects the tree was built over.
  #[inline]
  pub fn object_count(&self) -> usize {
    self.object_count
  }

  pub fn bounds(&self) -> &BoundingBox {
    self.root.bounds()
  }

  pub fn stats(&self) -> TreeStats {
    TreeStats::collect(&self.root)
  }
}

/// Build a tree over `positions` with `max_depth` levels.
pub fn build_tree(world_bounds: BoundingBox, positions: &[Vec3], max_depth: u32) -> Octree {
  Octree::build(world_bounds, positions, &LodConfig::new(max_depth))
}

/// One LOD tier per object of `tree` for an observer at `observer`.
pub fn query_lods(tree: &Octree, observer: Vec3) -> Vec<u32> {
  tree.query_lods(observer)
}

/// Release `tree`. Consumes the handle, so it cannot be destroyed twice.
pub fn destroy_tree(tree: Octree) -> usize {
  tree.destroy()
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

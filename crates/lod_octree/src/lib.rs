//! lod_octree - camera-driven level-of-detail selection over a static octree
//!
//! A tree is built once over a fixed set of object positions. Each frame the
//! tree is walked from the root toward the observer, and every object is
//! classified into a detail tier without measuring its distance.
//!
//! # LOD Convention
//!
//! LOD 0 = finest detail, `max_depth - 1` = coarsest. The octant chain that
//! contains the observer is always tier 0; sibling octants split off higher up
//! the tree get coarser tiers.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use lod_octree::{build_tree, destroy_tree, query_lods, BoundingBox};
//!
//! let world = BoundingBox::new(Vec3::splat(-10.0), Vec3::splat(10.0));
//! let tree = build_tree(world, &[Vec3::splat(5.0)], 2);
//!
//! assert_eq!(query_lods(&tree, Vec3::splat(5.0)), vec![0]);
//! assert_eq!(query_lods(&tree, Vec3::splat(-9.0)), vec![1]);
//!
//! destroy_tree(tree);
//! ```

pub mod bounds;
pub mod build;
pub mod config;
pub mod destroy;
pub mod distance;
pub mod error;
pub mod node;
pub mod select;
pub mod stats;
pub mod tiers;
pub mod tree;

// Re-exports
pub use bounds::BoundingBox;
pub use config::{LodConfig, MAX_DEPTH_LIMIT};
pub use distance::DistanceThresholds;
pub use error::{LodError, Result};
pub use node::{Branch, Leaf, ObjectSet, OctreeNode};
pub use select::set_levels_of_detail;
pub use stats::TreeStats;
pub use tiers::TierTable;
pub use tree::{build_tree, destroy_tree, query_lods, Octree};

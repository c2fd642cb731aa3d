//! Scene configuration parsing.

use anyhow::{Context, Result};
use glam::Vec3;
use lod_octree::{BoundingBox, DistanceThresholds, LodConfig};
use serde::Deserialize;
use std::path::Path;

/// Root configuration for a demo scene.
#[derive(Debug, Deserialize)]
pub struct SceneConfig {
	/// Octree depth, which is also the number of detail tiers.
	#[serde(default = "default_max_depth")]
	pub max_depth: u32,
	/// Number of frames to simulate.
	#[serde(default = "default_frames")]
	pub frames: u32,
	/// World bounds the octree is built over.
	pub world: WorldConfig,
	/// Distance thresholds used to cross-check the octree tiers.
	#[serde(default)]
	pub distance: DistanceConfig,
	/// Camera path.
	pub camera: CameraConfig,
	/// Scene objects.
	pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Deserialize)]
pub struct WorldConfig {
	pub min: [f32; 3],
	pub max: [f32; 3],
}

#[derive(Debug, Deserialize)]
pub struct DistanceConfig {
	/// First threshold in world units.
	#[serde(default = "default_base")]
	pub base: f32,
	/// Growth factor between thresholds.
	#[serde(default = "default_multiplier")]
	pub multiplier: f32,
}

impl Default for DistanceConfig {
	fn default() -> Self {
		Self {
			base: default_base(),
			multiplier: default_multiplier(),
		}
	}
}

/// Camera moves linearly between waypoints, looping back to the first.
#[derive(Debug, Deserialize)]
pub struct CameraConfig {
	pub waypoints: Vec<[f32; 3]>,
}

/// A placed object with one asset per detail tier (tier 0 first).
#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
	pub name: String,
	pub position: [f32; 3],
	pub tiers: Vec<String>,
}

fn default_max_depth() -> u32 {
	LodConfig::default().max_depth
}

fn default_frames() -> u32 {
	120
}

fn default_base() -> f32 {
	lod_octree::distance::DEFAULT_BASE_THRESHOLD
}

fn default_multiplier() -> f32 {
	lod_octree::distance::DEFAULT_THRESHOLD_MULTIPLIER
}

impl SceneConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scene file: {}", path.display()))?;
		let config: SceneConfig =
			toml::from_str(&content).with_context(|| "Failed to parse scene TOML")?;
		config.validate()?;
		Ok(config)
	}

	/// Check everything serde cannot express.
	pub fn validate(&self) -> Result<()> {
		self.lod_config()
			.validate()
			.context("Invalid max_depth")?;

		let min = Vec3::from(self.world.min);
		let max = Vec3::from(self.world.max);
		if !min.cmple(max).all() {
			anyhow::bail!("world.min {:?} must be <= world.max {:?}", min, max);
		}
		if self.camera.waypoints.is_empty() {
			anyhow::bail!("camera.waypoints must contain at least one point");
		}
		if self.frames == 0 {
			anyhow::bail!("frames must be at least 1");
		}
		Ok(())
	}

	pub fn lod_config(&self) -> LodConfig {
		LodConfig::new(self.max_depth)
	}

	pub fn world_bounds(&self) -> BoundingBox {
		BoundingBox::new(Vec3::from(self.world.min), Vec3::from(self.world.max))
	}

	pub fn positions(&self) -> Vec<Vec3> {
		self.objects
			.iter()
			.map(|object| Vec3::from(object.position))
			.collect()
	}

	pub fn distance_thresholds(&self) -> DistanceThresholds {
		DistanceThresholds::new(
			self.distance.base,
			self.distance.multiplier,
			self.lod_config().tier_count(),
		)
	}

	pub fn waypoints(&self) -> Vec<Vec3> {
		self.camera.waypoints.iter().copied().map(Vec3::from).collect()
	}
}

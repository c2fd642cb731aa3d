//! Headless LOD demo.
//!
//! Stands in for a render loop: loads a scene, builds the octree once, moves
//! the camera along a scripted path and, every frame, picks each object's
//! detail-tier asset from the octree query. Tier changes are logged along
//! with how often the octree agrees with plain distance thresholds.
//!
//! ```text
//! RUST_LOG=lod_demo=debug cargo run -p lod_demo -- --config crates/lod_demo/scenes/backpacks.toml
//! ```

mod camera;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use lod_octree::{Octree, TierTable};
use std::path::PathBuf;
use std::time::Duration;
use web_time::Instant;

use camera::CameraPath;
use config::SceneConfig;

/// Octree LOD selection demo.
#[derive(Parser, Debug)]
#[command(name = "lod_demo")]
#[command(about = "Simulates a camera flying through a scene and reports per-object LOD tiers")]
struct Args {
	/// Path to scene TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Override the number of simulated frames.
	#[arg(short, long)]
	frames: Option<u32>,

	/// Override the octree depth (number of detail tiers).
	#[arg(short, long)]
	max_depth: Option<u32>,
}

fn main() -> Result<()> {
	init_tracing();
	let args = Args::parse();

	tracing::info!(path = %args.config.display(), "loading scene");
	let mut scene = SceneConfig::load(&args.config)?;
	if let Some(frames) = args.frames {
		scene.frames = frames;
	}
	if let Some(max_depth) = args.max_depth {
		scene.max_depth = max_depth;
	}
	scene.validate().context("Invalid command line overrides")?;

	let lod_config = scene.lod_config();
	let tiers = TierTable::new(
		scene.objects.iter().map(|object| object.tiers.clone()).collect(),
		&lod_config,
	)
	.context("Every object needs one asset per detail tier")?;

	let positions = scene.positions();
	let tree = Octree::build(scene.world_bounds(), &positions, &lod_config);
	let stats = tree.stats();
	tracing::info!(
		objects = positions.len(),
		max_depth = lod_config.max_depth,
		leaves = stats.leaves,
		duplicates = stats.duplicates(positions.len()),
		"octree ready"
	);

	let summary = run_frames(&scene, &tree, &tiers)?;
	tracing::info!(
		frames = summary.frames,
		tier_changes = summary.tier_changes,
		distance_agreement = %format!("{:.1}%", summary.agreement() * 100.0),
		avg_query_us = summary.average_query().as_micros() as u64,
		"simulation finished"
	);

	let released = tree.destroy();
	tracing::info!(nodes = released, "octree released");
	Ok(())
}

/// Totals gathered over a run.
struct RunSummary {
	frames: u32,
	tier_changes: usize,
	agreeing: usize,
	compared: usize,
	query_time: Duration,
}

impl RunSummary {
	fn agreement(&self) -> f64 {
		if self.compared == 0 {
			return 1.0;
		}
		self.agreeing as f64 / self.compared as f64
	}

	fn average_query(&self) -> Duration {
		self.query_time / self.frames.max(1)
	}
}

fn run_frames(scene: &SceneConfig, tree: &Octree, tiers: &TierTable<String>) -> Result<RunSummary> {
	let path = CameraPath::new(scene.waypoints());
	let thresholds = scene.distance_thresholds();
	let positions = scene.positions();

	let mut summary = RunSummary {
		frames: scene.frames,
		tier_changes: 0,
		agreeing: 0,
		compared: 0,
		query_time: Duration::ZERO,
	};
	let mut previous: Option<Vec<u32>> = None;

	for frame in 0..scene.frames {
		let camera = path.position_at(frame, scene.frames);

		let start = Instant::now();
		let lods = tree.query_lods(camera);
		let elapsed = start.elapsed();
		summary.query_time += elapsed;

		let assets = tiers.select(&lods)?;
		let by_distance = thresholds.select(&positions, camera);
		summary.compared += lods.len();
		summary.agreeing += lods.iter().zip(&by_distance).filter(|(a, b)| a == b).count();

		for (object, (&tier, asset)) in lods.iter().zip(&assets).enumerate() {
			let changed = previous.as_ref().map_or(true, |prev| prev[object] != tier);
			if changed {
				if previous.is_some() {
					summary.tier_changes += 1;
				}
				tracing::info!(
					frame,
					object = %scene.objects[object].name,
					tier,
					asset = %asset,
					"detail tier changed"
				);
			}
		}

		tracing::debug!(
			frame,
			camera = ?camera,
			query_us = elapsed.as_micros() as u64,
			"frame"
		);
		previous = Some(lods);
	}

	Ok(summary)
}

fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer())
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();
}

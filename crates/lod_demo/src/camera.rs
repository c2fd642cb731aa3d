//! Scripted camera moving along a closed waypoint loop.

use glam::Vec3;

/// Closed polyline the camera travels once over the whole run.
pub struct CameraPath {
	waypoints: Vec<Vec3>,
}

impl CameraPath {
	/// Create a path from at least one waypoint.
	pub fn new(waypoints: Vec<Vec3>) -> Self {
		debug_assert!(!waypoints.is_empty(), "camera path needs a waypoint");
		Self { waypoints }
	}

	/// Camera position at `frame` of `frames`, starting and ending on the
	/// first waypoint.
	pub fn position_at(&self, frame: u32, frames: u32) -> Vec3 {
		let segments = self.waypoints.len();
		if segments == 1 || frames == 0 {
			return self.waypoints[0];
		}

		let t = (frame % frames) as f32 / frames as f32 * segments as f32;
		let segment = (t as usize).min(segments - 1);
		let from = self.waypoints[segment];
		let to = self.waypoints[(segment + 1) % segments];
		from.lerp(to, t - segment as f32)
	}
}

//! Tunable parameters for the particle background.
//!
//! All fields have defaults, so a partial JSON object (or none at all) is a
//! valid configuration.

use serde::Deserialize;

/// Density, interaction and environment settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
	/// Particles per 10,000 px² before the fixed `120` multiplier.
	pub density: f64,
	/// Lower bound on the population size.
	pub min_particles: usize,
	/// Upper bound on the population size. Bounds the all-pairs connection
	/// pass, so raising it raises per-frame cost quadratically.
	pub max_particles: usize,
	/// Cap applied to `devicePixelRatio`.
	pub max_pixel_ratio: f64,
	/// Quiet period after the last resize event before reseeding.
	pub resize_debounce_ms: u32,
	/// Pointer repulsion radius for a particle at depth 0.
	pub pointer_radius: f64,
	/// Connection distance for a pair of particles at depth 0.
	pub link_distance: f64,
	/// Class on `<html>` that marks the dark theme.
	pub dark_class: String,
}

impl Default for BackgroundConfig {
	fn default() -> Self {
		Self {
			density: 0.10,
			min_particles: 70,
			max_particles: 240,
			max_pixel_ratio: 2.0,
			resize_debounce_ms: 150,
			pointer_radius: 120.0,
			link_distance: 100.0,
			dark_class: "dark".to_string(),
		}
	}
}

impl BackgroundConfig {
	/// Parse a JSON object, falling back to defaults for absent fields.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

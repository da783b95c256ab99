//! Simulation context shared by the frame loop and the input callbacks.
//!
//! One `BackgroundState` exists per mounted component. It owns the particle
//! population, pointer, active scheme, viewport and RNG; nothing outside the
//! component reads or writes it.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::BackgroundConfig;
use super::particles::{ParticleField, target_count};
use super::render::{self, FrameParams, Surface};
use super::simulation::{self, Pointer};
use super::theme::ColorScheme;
use super::viewport::Viewport;

pub struct BackgroundState {
	pub field: ParticleField,
	pub pointer: Pointer,
	pub scheme: ColorScheme,
	pub viewport: Viewport,
	/// Timestamp of the most recent frame, in milliseconds.
	pub time: f64,
	pub config: BackgroundConfig,
	rng: SmallRng,
}

impl BackgroundState {
	pub fn new(config: BackgroundConfig, viewport: Viewport, scheme: ColorScheme, seed: u64) -> Self {
		let mut state = Self {
			field: ParticleField::default(),
			pointer: Pointer::default(),
			scheme,
			viewport,
			time: 0.0,
			config,
			rng: SmallRng::seed_from_u64(seed),
		};
		state.reseed();
		state
	}

	/// Replace the whole population for the current viewport.
	pub fn reseed(&mut self) {
		let count = target_count(self.viewport.area(), &self.config);
		self.field = ParticleField::seed(
			&mut self.rng,
			count,
			self.viewport.width,
			self.viewport.height,
			self.scheme,
		);
		debug!(
			"particle-backdrop: seeded {} particles for {}x{}",
			count, self.viewport.width, self.viewport.height
		);
	}

	/// Adopt a new viewport and reseed.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.reseed();
	}

	/// Switch schemes, retinting particles in place. Returns whether the
	/// scheme actually changed.
	pub fn set_scheme(&mut self, scheme: ColorScheme) -> bool {
		if scheme == self.scheme {
			return false;
		}
		self.scheme = scheme;
		self.field.retint(&mut self.rng, scheme);
		debug!("particle-backdrop: theme changed to {:?}", scheme);
		true
	}

	/// Advance the simulation to `now`, then draw it.
	pub fn frame<S: Surface + ?Sized>(&mut self, now: f64, surface: &mut S) {
		self.time = now;
		let (width, height) = (self.viewport.width, self.viewport.height);
		simulation::step(
			&mut self.field,
			&self.pointer,
			self.config.pointer_radius,
			now,
			width,
			height,
		);
		render::render(
			surface,
			&self.field,
			&FrameParams {
				width,
				height,
				time: now,
				scheme: self.scheme,
				pointer: self.pointer,
				link_distance: self.config.link_distance,
			},
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_background::render::tests::RecordingSurface;

	fn state(width: f64, height: f64, scheme: ColorScheme) -> BackgroundState {
		let viewport = Viewport::new(width, height, 1.0, &BackgroundConfig::default());
		BackgroundState::new(BackgroundConfig::default(), viewport, scheme, 42)
	}

	#[test]
	fn full_hd_seeds_cap() {
		assert_eq!(state(1920.0, 1080.0, ColorScheme::Dark).field.len(), 240);
	}

	#[test]
	fn small_viewport_seeds_proportionally() {
		assert_eq!(state(400.0, 300.0, ColorScheme::Light).field.len(), 144);
	}

	#[test]
	fn resize_replaces_population() {
		let mut s = state(400.0, 300.0, ColorScheme::Light);
		let config = s.config.clone();
		let before = s.field.particles.clone();
		s.resize(Viewport::new(1920.0, 1080.0, 2.0, &config));
		assert_eq!(s.field.len(), 240);
		s.resize(Viewport::new(400.0, 300.0, 1.0, &config));
		assert_eq!(s.field.len(), 144);
		assert_ne!(s.field.particles, before);
	}

	#[test]
	fn theme_round_trip() {
		let mut s = state(800.0, 600.0, ColorScheme::Dark);
		let positions: Vec<_> = s.field.particles.iter().map(|p| (p.x, p.y)).collect();

		assert!(!s.set_scheme(ColorScheme::Dark));
		assert!(s.set_scheme(ColorScheme::Light));
		assert!(s.set_scheme(ColorScheme::Dark));

		assert_eq!(s.field.len(), positions.len());
		for (p, pos) in s.field.particles.iter().zip(&positions) {
			assert_eq!((p.x, p.y), *pos);
			assert!(ColorScheme::Dark.hue_range().contains(&p.hue));
			assert!((0.15..=0.65).contains(&p.alpha));
		}
	}

	#[test]
	fn frame_steps_then_draws() {
		let mut s = state(400.0, 300.0, ColorScheme::Dark);
		let before: Vec<_> = s.field.particles.iter().map(|p| (p.x, p.y)).collect();
		let mut surface = RecordingSurface::default();

		s.frame(16.0, &mut surface);

		assert_eq!(s.time, 16.0);
		assert_eq!(surface.circles(), 144);
		let moved = s
			.field
			.particles
			.iter()
			.zip(&before)
			.filter(|(p, (x, y))| p.x != *x || p.y != *y)
			.count();
		assert!(moved > 0);
	}

	#[test]
	fn pointer_repels_near_particle() {
		let mut s = state(400.0, 300.0, ColorScheme::Dark);
		s.field.particles.truncate(1);
		{
			let p = &mut s.field.particles[0];
			(p.x, p.y, p.z, p.vx, p.vy) = (200.0, 150.0, 0.0, 0.0, 0.0);
		}
		s.pointer.move_to(150.0, 150.0);
		s.frame(0.0, &mut RecordingSurface::default());
		assert!(s.field.particles[0].vx > 0.0);
	}
}

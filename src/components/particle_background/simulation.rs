//! Per-frame particle motion: pointer repulsion, drift, and edge wrap.
//!
//! Repulsion impulses accumulate into velocity; nothing in the step damps
//! them, so sustained pointer contact leaves particles permanently faster.

use super::particles::{Particle, ParticleField};

/// Margin outside the viewport a particle may travel before wrapping.
pub const WRAP_MARGIN: f64 = 10.0;

const REPULSION_STRENGTH: f64 = 0.8;
const IMPULSE_SCALE: f64 = 0.35;
const DISTANCE_EPSILON: f64 = 0.001;
const DRIFT_AMPLITUDE: f64 = 0.01;

/// Off-screen position used while the pointer is outside the window.
const POINTER_PARKED: f64 = -9999.0;

/// Latest pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
	pub active: bool,
}

impl Default for Pointer {
	fn default() -> Self {
		Self {
			x: POINTER_PARKED,
			y: POINTER_PARKED,
			active: false,
		}
	}
}

impl Pointer {
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
		self.active = true;
	}

	pub fn leave(&mut self) {
		*self = Self::default();
	}
}

/// Velocity impulse pushing `p` away from the pointer, if it is in range.
///
/// The interaction radius shrinks with depth, so near particles react from
/// further away.
pub fn repulsion(p: &Particle, pointer: &Pointer, base_radius: f64) -> Option<(f64, f64)> {
	if !pointer.active {
		return None;
	}
	let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
	let dist2 = dx * dx + dy * dy;
	let radius = base_radius * (1.0 - p.z);
	let r2 = radius * radius;
	if dist2 >= r2 {
		return None;
	}
	let force = (1.0 - dist2 / r2) * REPULSION_STRENGTH;
	let inv = 1.0 / (dist2.sqrt() + DISTANCE_EPSILON);
	Some((dx * inv * force * IMPULSE_SCALE, dy * inv * force * IMPULSE_SCALE))
}

/// Idle oscillation for the particle at `index`, `time` in milliseconds.
pub fn drift(index: usize, z: f64, time: f64) -> (f64, f64) {
	let i = index as f64;
	let near = 1.0 - z;
	(
		((time * 0.0005 + i) * 0.7).sin() * DRIFT_AMPLITUDE * near,
		((time * 0.0006 + i) * 0.6).cos() * DRIFT_AMPLITUDE * near,
	)
}

/// Toroidal wrap: leaving past one margin re-enters at the opposite one.
pub fn wrap(value: f64, extent: f64) -> f64 {
	if value > extent + WRAP_MARGIN {
		-WRAP_MARGIN
	} else if value < -WRAP_MARGIN {
		extent + WRAP_MARGIN
	} else {
		value
	}
}

/// Advance every particle by one frame.
pub fn step(
	field: &mut ParticleField,
	pointer: &Pointer,
	pointer_radius: f64,
	time: f64,
	width: f64,
	height: f64,
) {
	for (i, p) in field.particles.iter_mut().enumerate() {
		if let Some((ix, iy)) = repulsion(p, pointer, pointer_radius) {
			p.vx += ix;
			p.vy += iy;
		}

		let (drift_x, drift_y) = drift(i, p.z, time);
		p.x = wrap(p.x + p.vx + drift_x, width);
		p.y = wrap(p.y + p.vy + drift_y, height);
	}
}

//! Particle records and the population that owns them.

use rand::Rng;

use super::config::BackgroundConfig;
use super::theme::ColorScheme;

/// A single background particle.
///
/// `z` is depth in `[0, 1)`; lower is nearer, which means larger, brighter,
/// faster-reacting and longer-reaching connections.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub size: f64,
	pub vx: f64,
	pub vy: f64,
	pub hue: f64,
	pub alpha: f64,
}

pub const MIN_SIZE: f64 = 0.6;
pub const MAX_SIZE: f64 = 3.2;

/// Exponent skewing the depth distribution towards the viewer.
const DEPTH_SKEW: f64 = 1.6;

impl Particle {
	/// Sample a particle uniformly placed in a `width` x `height` viewport.
	pub fn sample<R: Rng>(
		rng: &mut R,
		width: f64,
		height: f64,
		scheme: ColorScheme,
	) -> Self {
		let z = unit(rng).powf(DEPTH_SKEW);
		let near = 1.0 - z;
		let speed = rng.gen_range(scheme.speed_range());
		Self {
			x: unit(rng) * width,
			y: unit(rng) * height,
			z,
			size: (near * rng.gen_range(1.2..2.4)).clamp(MIN_SIZE, MAX_SIZE),
			vx: (unit(rng) - 0.5) * speed,
			vy: (unit(rng) - 0.5) * speed,
			hue: rng.gen_range(scheme.hue_range()),
			alpha: rng.gen_range(scheme.alpha_range()) * near,
		}
	}

	/// Re-roll the hue and rescale opacity for a newly active scheme.
	/// Position, depth and velocity are left alone.
	pub fn retint<R: Rng>(&mut self, rng: &mut R, scheme: ColorScheme) {
		let (factor, min, max) = scheme.retint();
		self.hue = rng.gen_range(scheme.hue_range());
		self.alpha = (self.alpha * factor).clamp(min, max);
	}
}

fn unit<R: Rng>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// Number of particles for a viewport of `area` px², clamped to the
/// configured bounds.
pub fn target_count(area: f64, config: &BackgroundConfig) -> usize {
	let raw = ((area / 10_000.0) * config.density * 120.0).floor();
	let raw = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
	raw.clamp(config.min_particles, config.max_particles.max(config.min_particles))
}

/// The live particle set. Always replaced as a whole on reseed.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
}

impl ParticleField {
	pub fn seed<R: Rng>(
		rng: &mut R,
		count: usize,
		width: f64,
		height: f64,
		scheme: ColorScheme,
	) -> Self {
		Self {
			particles: (0..count)
				.map(|_| Particle::sample(rng, width, height, scheme))
				.collect(),
		}
	}

	pub fn retint<R: Rng>(&mut self, rng: &mut R, scheme: ColorScheme) {
		for p in &mut self.particles {
			p.retint(rng, scheme);
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn target_count_scenarios() {
		let config = BackgroundConfig::default();
		assert_eq!(target_count(1920.0 * 1080.0, &config), 240);
		assert_eq!(target_count(400.0 * 300.0, &config), 144);
		assert_eq!(target_count(0.0, &config), 70);
		assert_eq!(target_count(320.0 * 200.0, &config), 76);
	}

	#[test]
	fn target_count_bounded_and_monotonic() {
		let config = BackgroundConfig::default();
		let mut last = 0;
		for step in 0..2_000 {
			let area = step as f64 * 1_500.0;
			let n = target_count(area, &config);
			assert!((70..=240).contains(&n), "area {area} gave {n}");
			assert!(n >= last, "count decreased at area {area}");
			last = n;
		}
	}

	#[test]
	fn sampled_particles_within_bounds() {
		let mut rng = SmallRng::seed_from_u64(7);
		for scheme in [ColorScheme::Dark, ColorScheme::Light] {
			let field = ParticleField::seed(&mut rng, 500, 800.0, 600.0, scheme);
			for p in &field.particles {
				assert!((0.0..1.0).contains(&p.z));
				assert!((MIN_SIZE..=MAX_SIZE).contains(&p.size));
				assert!(p.alpha >= 0.0);
				assert!(scheme.hue_range().contains(&p.hue));
				assert!((0.0..800.0).contains(&p.x));
				assert!((0.0..600.0).contains(&p.y));
				let max_v = scheme.speed_range().end / 2.0;
				assert!(p.vx.abs() <= max_v && p.vy.abs() <= max_v);
			}
		}
	}

	#[test]
	fn depth_skews_near() {
		let mut rng = SmallRng::seed_from_u64(11);
		let field = ParticleField::seed(&mut rng, 2_000, 100.0, 100.0, ColorScheme::Dark);
		let near = field.particles.iter().filter(|p| p.z < 0.5).count();
		// P(u^1.6 < 0.5) = 0.5^(1/1.6) ≈ 0.65
		assert!(near > 1_150, "only {near} near particles");
	}

	#[test]
	fn reseed_yields_exact_count() {
		let mut rng = SmallRng::seed_from_u64(3);
		let a = ParticleField::seed(&mut rng, 144, 400.0, 300.0, ColorScheme::Light);
		let b = ParticleField::seed(&mut rng, 144, 400.0, 300.0, ColorScheme::Light);
		assert_eq!(a.len(), 144);
		assert_eq!(b.len(), 144);
		assert_ne!(a.particles, b.particles);
	}

	#[test]
	fn retint_round_trip_keeps_motion() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut field = ParticleField::seed(&mut rng, 100, 400.0, 300.0, ColorScheme::Dark);
		let before = field.particles.clone();

		field.retint(&mut rng, ColorScheme::Light);
		for p in &field.particles {
			assert!(ColorScheme::Light.hue_range().contains(&p.hue));
			assert!((0.12..=0.45).contains(&p.alpha));
		}

		field.retint(&mut rng, ColorScheme::Dark);
		assert_eq!(field.len(), before.len());
		for (p, q) in field.particles.iter().zip(&before) {
			assert!(ColorScheme::Dark.hue_range().contains(&p.hue));
			assert!((0.15..=0.65).contains(&p.alpha));
			assert_eq!((p.x, p.y, p.z, p.vx, p.vy), (q.x, q.y, q.z, q.vx, q.vy));
		}
	}
}

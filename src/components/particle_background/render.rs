//! Frame rendering for the particle background.
//!
//! Each frame is drawn in four passes:
//! 1. Animated linear gradient covering the viewport
//! 2. Orbiting radial glow, blended additively
//! 3. Particles, offset by pointer parallax
//! 4. Proximity lines between nearby particles
//!
//! Drawing goes through [`Surface`] so the passes can run against a canvas
//! context in the browser and a recorder in tests.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField};
use super::simulation::Pointer;
use super::theme::{ColorScheme, GradientStop};

/// Maximum parallax shift in pixels, reached at the viewport edges.
const PARALLAX_RANGE: f64 = 8.0;
const LINK_OPACITY: f64 = 0.35;

/// Compositing mode for fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
	/// Normal painting (`source-over`).
	Over,
	/// Additive painting (`lighter`).
	Lighter,
}

impl Blend {
	fn as_css(self) -> &'static str {
		match self {
			Blend::Over => "source-over",
			Blend::Lighter => "lighter",
		}
	}
}

/// Minimal 2D drawing target used by the renderer.
pub trait Surface {
	/// Fill the `width` x `height` rect at the origin with a linear gradient
	/// running from `from` to `to`.
	fn fill_linear_gradient(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		stops: &[GradientStop],
		width: f64,
		height: f64,
	);

	/// Fill a circle with a radial gradient from its center outwards.
	fn fill_radial_gradient(
		&mut self,
		center: (f64, f64),
		radius: f64,
		stops: &[GradientStop],
		blend: Blend,
	);

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &str);

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn fill_linear_gradient(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		stops: &[GradientStop],
		width: f64,
		height: f64,
	) {
		let gradient = self.create_linear_gradient(from.0, from.1, to.0, to.1);
		for s in stops {
			let _ = gradient.add_color_stop(s.offset as f32, &s.color.to_css());
		}
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_radial_gradient(
		&mut self,
		center: (f64, f64),
		radius: f64,
		stops: &[GradientStop],
		blend: Blend,
	) {
		let Ok(gradient) =
			self.create_radial_gradient(center.0, center.1, 0.0, center.0, center.1, radius)
		else {
			return;
		};
		for s in stops {
			let _ = gradient.add_color_stop(s.offset as f32, &s.color.to_css());
		}
		let _ = self.set_global_composite_operation(blend.as_css());
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.fill();
		let _ = self.set_global_composite_operation(Blend::Over.as_css());
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
		self.set_line_width(width);
		self.set_stroke_style_str(color);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Everything a frame needs besides the particles themselves.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
	pub width: f64,
	pub height: f64,
	/// Animation clock in milliseconds.
	pub time: f64,
	pub scheme: ColorScheme,
	pub pointer: Pointer,
	pub link_distance: f64,
}

/// Renders one complete frame.
pub fn render<S: Surface + ?Sized>(surface: &mut S, field: &ParticleField, frame: &FrameParams) {
	draw_background(surface, frame);
	draw_glow(surface, frame);
	draw_particles(surface, field, frame);
	draw_links(surface, field, frame);
}

/// Slowly swinging gradient direction, in radians.
pub fn gradient_angle(time: f64) -> f64 {
	((time * 0.00025).sin() + 1.0) * PI * 0.35 + 0.2
}

/// Center of the glow, orbiting around the middle of the viewport.
pub fn glow_center(time: f64, width: f64, height: f64) -> (f64, f64) {
	(
		((time * 0.0004).cos() * 0.25 + 0.5) * width,
		((time * 0.0003).sin() * 0.25 + 0.5) * height,
	)
}

/// Parallax offset for a particle at depth 0; callers scale by `1 - z`.
pub fn parallax(pointer: &Pointer, width: f64, height: f64) -> (f64, f64) {
	if !pointer.active || width <= 0.0 || height <= 0.0 {
		return (0.0, 0.0);
	}
	(
		(pointer.x / width - 0.5) * PARALLAX_RANGE,
		(pointer.y / height - 0.5) * PARALLAX_RANGE,
	)
}

/// Opacity of the line between `a` and `b`, or `None` if they are too far
/// apart. Nearer pairs connect over longer distances.
pub fn link_opacity(a: &Particle, b: &Particle, base_distance: f64, scheme: ColorScheme) -> Option<f64> {
	let max_d = base_distance * (1.0 - (a.z + b.z) * 0.5);
	if max_d <= 0.0 {
		return None;
	}
	let dist = (a.x - b.x).hypot(a.y - b.y);
	if dist >= max_d {
		return None;
	}
	Some((1.0 - dist / max_d) * LINK_OPACITY * scheme.link_factor())
}

fn draw_background<S: Surface + ?Sized>(surface: &mut S, frame: &FrameParams) {
	let angle = gradient_angle(frame.time);
	surface.fill_linear_gradient(
		(0.0, 0.0),
		(angle.cos() * frame.width, angle.sin() * frame.height),
		frame.scheme.background_stops(),
		frame.width,
		frame.height,
	);
}

fn draw_glow<S: Surface + ?Sized>(surface: &mut S, frame: &FrameParams) {
	let center = glow_center(frame.time, frame.width, frame.height);
	let radius = frame.width.max(frame.height) * 0.6;
	surface.fill_radial_gradient(center, radius, frame.scheme.glow_stops(), Blend::Lighter);
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, field: &ParticleField, frame: &FrameParams) {
	let (px, py) = parallax(&frame.pointer, frame.width, frame.height);
	for p in &field.particles {
		let near = 1.0 - p.z;
		let color = frame.scheme.particle_color(p.hue, p.alpha);
		surface.fill_circle((p.x + px * near, p.y + py * near), p.size, &color.to_css());
	}
}

// All pairs, O(n²). The population cap keeps this within a frame budget.
fn draw_links<S: Surface + ?Sized>(surface: &mut S, field: &ParticleField, frame: &FrameParams) {
	let line = frame.scheme.link_color();
	let particles = &field.particles;
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			if let Some(opacity) = link_opacity(a, b, frame.link_distance, frame.scheme) {
				let color = line.with_alpha(opacity * line.a);
				surface.stroke_line((a.x, a.y), (b.x, b.y), 1.0, &color.to_css());
			}
		}
	}
}

//! Light and dark color schemes for the background.
//!
//! Every theme-dependent constant lives here: particle sampling ranges, the
//! retint factors applied on a theme flip, gradient stops, and line colors.

use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// HSL color with alpha, used for particle fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub hue: f64,
	/// Saturation in percent.
	pub saturation: f64,
	/// Lightness in percent.
	pub lightness: f64,
	pub alpha: f64,
}

impl Hsla {
	pub fn to_css(self) -> String {
		format!(
			"hsla({}, {}%, {}%, {})",
			self.hue, self.saturation, self.lightness, self.alpha
		)
	}
}

/// A single gradient stop at `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	pub offset: f64,
	pub color: Color,
}

const fn stop(offset: f64, color: Color) -> GradientStop {
	GradientStop { offset, color }
}

const DARK_BACKGROUND: [GradientStop; 3] = [
	stop(0.0, Color::rgba(6, 11, 25, 0.9)),
	stop(0.48, Color::rgba(20, 15, 45, 0.85)),
	stop(1.0, Color::rgba(10, 24, 46, 0.9)),
];

const LIGHT_BACKGROUND: [GradientStop; 3] = [
	stop(0.0, Color::rgba(245, 247, 255, 0.95)),
	stop(0.5, Color::rgba(232, 238, 252, 0.95)),
	stop(1.0, Color::rgba(240, 246, 255, 0.95)),
];

const DARK_GLOW: [GradientStop; 3] = [
	stop(0.0, Color::rgba(80, 120, 255, 0.18)),
	stop(0.5, Color::rgba(120, 90, 255, 0.12)),
	stop(1.0, Color::rgba(0, 0, 0, 0.0)),
];

const LIGHT_GLOW: [GradientStop; 3] = [
	stop(0.0, Color::rgba(120, 160, 255, 0.12)),
	stop(0.5, Color::rgba(160, 190, 255, 0.08)),
	stop(1.0, Color::rgba(255, 255, 255, 0.0)),
];

/// Which of the two page themes is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	/// The default page theme.
	#[default]
	Light,
	/// Active while `<html>` carries the dark marker class.
	Dark,
}

impl ColorScheme {
	/// Map the page's dark-mode flag to a scheme.
	pub fn from_dark(is_dark: bool) -> Self {
		if is_dark { Self::Dark } else { Self::Light }
	}

	/// Range the per-particle drift speed is sampled from.
	pub fn speed_range(self) -> Range<f64> {
		match self {
			Self::Dark => 0.05..0.2,
			Self::Light => 0.04..0.16,
		}
	}

	/// Range particle hues are sampled from, in degrees.
	pub fn hue_range(self) -> Range<f64> {
		match self {
			Self::Dark => 200.0..260.0,
			Self::Light => 200.0..230.0,
		}
	}

	/// Base opacity range, later scaled by `1 - z`.
	pub fn alpha_range(self) -> Range<f64> {
		match self {
			Self::Dark => 0.25..0.55,
			Self::Light => 0.18..0.38,
		}
	}

	/// Multiplier and clamp bounds applied to existing alphas when switching
	/// into this scheme.
	pub fn retint(self) -> (f64, f64, f64) {
		match self {
			Self::Dark => (1.25, 0.15, 0.65),
			Self::Light => (0.85, 0.12, 0.45),
		}
	}

	/// Fill color for a particle with the given hue and opacity.
	pub fn particle_color(self, hue: f64, alpha: f64) -> Hsla {
		let (saturation, lightness) = match self {
			Self::Dark => (70.0, 70.0),
			Self::Light => (60.0, 35.0),
		};
		Hsla {
			hue,
			saturation,
			lightness,
			alpha,
		}
	}

	/// Stops of the full-viewport backdrop gradient.
	pub fn background_stops(self) -> &'static [GradientStop] {
		match self {
			Self::Dark => &DARK_BACKGROUND,
			Self::Light => &LIGHT_BACKGROUND,
		}
	}

	/// Stops of the orbiting radial glow.
	pub fn glow_stops(self) -> &'static [GradientStop] {
		match self {
			Self::Dark => &DARK_GLOW,
			Self::Light => &LIGHT_GLOW,
		}
	}

	/// Scales the base connection opacity.
	pub fn link_factor(self) -> f64 {
		match self {
			Self::Dark => 1.1,
			Self::Light => 0.9,
		}
	}

	/// Connection line color; its alpha is a further multiplier on the
	/// computed opacity.
	pub fn link_color(self) -> Color {
		match self {
			Self::Dark => Color::rgba(255, 255, 255, 0.7),
			Self::Light => Color::rgba(0, 0, 0, 0.45),
		}
	}
}

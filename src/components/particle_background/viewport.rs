//! Viewport size and pixel density, and applying them to the canvas.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::BackgroundConfig;

/// Logical viewport size in CSS pixels plus the capped device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, device_pixel_ratio: f64, config: &BackgroundConfig) -> Self {
		let pixel_ratio = device_pixel_ratio.min(config.max_pixel_ratio);
		let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			pixel_ratio,
		}
	}

	/// Read the current window size and pixel ratio.
	pub fn from_window(window: &Window, config: &BackgroundConfig) -> Option<Self> {
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;
		Some(Self::new(width, height, window.device_pixel_ratio(), config))
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	/// Backing store size in device pixels, at least 1x1.
	pub fn physical_size(&self) -> (u32, u32) {
		(
			((self.width * self.pixel_ratio).floor() as u32).max(1),
			((self.height * self.pixel_ratio).floor() as u32).max(1),
		)
	}

	/// Size the canvas backing store for this viewport and scale the context
	/// so drawing happens in CSS pixels.
	pub fn apply(&self, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
		let (w, h) = self.physical_size();
		canvas.set_width(w);
		canvas.set_height(h);
		let style = canvas.style();
		let _ = style.set_property("width", &format!("{}px", self.width));
		let _ = style.set_property("height", &format!("{}px", self.height));
		let _ = ctx.set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0);
	}
}

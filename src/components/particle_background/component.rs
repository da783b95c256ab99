//! Leptos component wrapping the particle background canvas.
//!
//! The canvas is fixed behind the page and ignores pointer events, so the
//! content above it stays interactive. Pointer tracking happens on the
//! window instead.

use leptos::prelude::*;
use log::warn;
use web_sys::HtmlCanvasElement;

use super::config::BackgroundConfig;
use super::host::Host;

/// Renders the animated particle background.
///
/// The theme is read from (and watched on) the `<html>` element's class
/// list; the component never writes it. Without a `config` prop the
/// defaults are used.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<BackgroundConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let host = StoredValue::new_local(None::<Host>);
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match Host::mount(canvas, config.clone()) {
			Some(mounted) => host.set_value(Some(mounted)),
			None => warn!("particle-backdrop: 2D canvas unavailable, background disabled"),
		}
	});

	on_cleanup(move || host.set_value(None));

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0;"
		/>
	}
}

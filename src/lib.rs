//! particle-backdrop: animated particle background for a portfolio site.
//!
//! This crate provides a WASM canvas component that renders a depth-layered
//! particle field with pointer interaction and light/dark theming, plus a
//! small host page that mounts it behind ordinary content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_background::{BackgroundConfig, ColorScheme, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Load background settings from a script element with id="background-config".
/// Missing element or invalid JSON falls back to the defaults.
fn load_config() -> BackgroundConfig {
	let Some(json_text) = config_script_text() else {
		return BackgroundConfig::default();
	};

	match BackgroundConfig::from_json(&json_text) {
		Ok(config) => {
			info!("particle-backdrop: loaded config {:?}", config);
			config
		}
		Err(e) => {
			warn!("particle-backdrop: failed to parse config: {}", e);
			BackgroundConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("background-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Flip the theme marker class on `<html>`. Returns the new dark state.
fn toggle_dark_class(dark_class: &str) -> Option<bool> {
	let root = web_sys::window()?.document()?.document_element()?;
	root.class_list().toggle(dark_class).ok()
}

fn has_dark_class(dark_class: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.is_some_and(|root| root.class_list().contains(dark_class))
}

/// Main application component.
/// Mounts the particle background behind the page content and offers a
/// theme toggle that flips the `<html>` class the background observes.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let dark_class = config.dark_class.clone();
	let (is_dark, set_dark) = signal(has_dark_class(&dark_class));

	let on_toggle = move |_| {
		if let Some(now_dark) = toggle_dark_class(&dark_class) {
			set_dark.set(now_dark);
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config />
		<main class="page-content" style="position: relative; z-index: 1;">
			<h1>"Portfolio"</h1>
			<p class="subtitle">"Move the pointer across the page to stir the particles."</p>
			<button class="theme-toggle" on:click=on_toggle>
				{move || if is_dark.get() { "Light mode" } else { "Dark mode" }}
			</button>
		</main>
	}
}

//! Animated particle background.
//!
//! Draws a drifting, depth-layered particle field on a full-viewport canvas:
//! - Population sized to the viewport area and reseeded on resize
//! - Pointer repulsion and parallax
//! - Animated gradient backdrop with an additive glow
//! - Proximity lines between nearby particles
//! - Light/dark recoloring driven by a class on `<html>`
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::ParticleBackground;
//!
//! view! {
//!     <ParticleBackground />
//!     <main class="content">"..."</main>
//! }
//! ```

mod component;
mod config;
mod frame_loop;
mod host;
mod lifetime;
mod particles;
mod render;
mod simulation;
mod state;
mod theme;
mod viewport;

pub use component::ParticleBackground;
pub use config::BackgroundConfig;
pub use theme::ColorScheme;

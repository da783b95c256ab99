//! Shared liveness flag for browser callbacks.
//!
//! Every listener, observer, timer and frame callback registered by the
//! component is wrapped with the same [`Lifetime`]. Once it ends, the wrapped
//! callbacks return immediately even if the browser still delivers an event.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct Lifetime {
	alive: Rc<Cell<bool>>,
}

impl Default for Lifetime {
	fn default() -> Self {
		Self::new()
	}
}

impl Lifetime {
	pub fn new() -> Self {
		Self {
			alive: Rc::new(Cell::new(true)),
		}
	}

	pub fn is_alive(&self) -> bool {
		self.alive.get()
	}

	/// End the lifetime for every clone. Idempotent.
	pub fn end(&self) {
		self.alive.set(false);
	}

	/// Wrap a zero-argument callback so it only runs while alive.
	pub fn guard<F>(&self, mut f: F) -> impl FnMut() + 'static
	where
		F: FnMut() + 'static,
	{
		let alive = self.alive.clone();
		move || {
			if alive.get() {
				f();
			}
		}
	}

	/// Wrap a single-argument callback so it only runs while alive.
	pub fn guard_with<A, F>(&self, mut f: F) -> impl FnMut(A) + 'static
	where
		A: 'static,
		F: FnMut(A) + 'static,
	{
		let alive = self.alive.clone();
		move |arg| {
			if alive.get() {
				f(arg);
			}
		}
	}
}

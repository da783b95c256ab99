//! Cancellable request → run → request-next animation loop.
//!
//! The loop itself is agnostic of how frames are requested; the host passes
//! in `requestAnimationFrame`/`cancelAnimationFrame` wrappers. Liveness is
//! checked before each frame and again before re-requesting, so a frame that
//! tears the component down never schedules a successor.

use std::cell::Cell;

use super::lifetime::Lifetime;

/// Identifier returned by the frame scheduler.
pub type FrameId = i32;

#[derive(Debug)]
pub struct FrameLoop {
	lifetime: Lifetime,
	pending: Cell<Option<FrameId>>,
	frames: Cell<u64>,
}

impl FrameLoop {
	pub fn new(lifetime: Lifetime) -> Self {
		Self {
			lifetime,
			pending: Cell::new(None),
			frames: Cell::new(0),
		}
	}

	/// Request the first frame.
	pub fn start(&self, request: impl FnOnce() -> Option<FrameId>) {
		if self.lifetime.is_alive() && self.pending.get().is_none() {
			self.pending.set(request());
		}
	}

	/// Body of the frame callback. Returns whether a next frame was requested.
	pub fn run(
		&self,
		now: f64,
		frame: impl FnOnce(f64),
		request: impl FnOnce() -> Option<FrameId>,
	) -> bool {
		self.pending.set(None);
		if !self.lifetime.is_alive() {
			return false;
		}
		frame(now);
		self.frames.set(self.frames.get() + 1);
		if !self.lifetime.is_alive() {
			return false;
		}
		self.pending.set(request());
		self.pending.get().is_some()
	}

	/// Stop the loop, cancelling the outstanding request if there is one.
	pub fn cancel(&self, cancel: impl FnOnce(FrameId)) {
		self.lifetime.end();
		if let Some(id) = self.pending.take() {
			cancel(id);
		}
	}

	pub fn pending(&self) -> Option<FrameId> {
		self.pending.get()
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames.get()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	/// Fake scheduler handing out increasing ids.
	#[derive(Default)]
	struct Scheduler {
		next: Cell<FrameId>,
		cancelled: RefCell<Vec<FrameId>>,
	}

	impl Scheduler {
		fn request(&self) -> Option<FrameId> {
			self.next.set(self.next.get() + 1);
			Some(self.next.get())
		}
	}

	#[test]
	fn runs_and_reschedules() {
		let scheduler = Scheduler::default();
		let frames = FrameLoop::new(Lifetime::new());
		frames.start(|| scheduler.request());
		assert_eq!(frames.pending(), Some(1));

		let mut seen = Vec::new();
		for t in [16.0, 32.0, 48.0] {
			assert!(frames.run(t, |now| seen.push(now), || scheduler.request()));
		}
		assert_eq!(seen, vec![16.0, 32.0, 48.0]);
		assert_eq!(frames.pending(), Some(4));
		assert_eq!(frames.frames(), 3);
	}

	#[test]
	fn cancel_releases_pending_and_blocks_frames() {
		let scheduler = Scheduler::default();
		let frames = FrameLoop::new(Lifetime::new());
		frames.start(|| scheduler.request());
		frames.run(16.0, |_| {}, || scheduler.request());

		frames.cancel(|id| scheduler.cancelled.borrow_mut().push(id));
		assert_eq!(*scheduler.cancelled.borrow(), vec![2]);
		assert_eq!(frames.pending(), None);

		// A late callback delivered after teardown does nothing.
		let ran = Rc::new(Cell::new(0));
		let rescheduled = frames.run(
			32.0,
			|_| ran.set(ran.get() + 1),
			|| scheduler.request(),
		);
		assert!(!rescheduled);
		assert_eq!(ran.get(), 0);
		assert_eq!(scheduler.next.get(), 2);

		frames.start(|| scheduler.request());
		assert_eq!(frames.pending(), None);
	}

	#[test]
	fn teardown_inside_frame_stops_rescheduling() {
		let lifetime = Lifetime::new();
		let scheduler = Scheduler::default();
		let frames = FrameLoop::new(lifetime.clone());
		frames.start(|| scheduler.request());

		let rescheduled = frames.run(16.0, |_| lifetime.end(), || scheduler.request());
		assert!(!rescheduled);
		assert_eq!(frames.pending(), None);
		assert_eq!(scheduler.next.get(), 1);
	}
}

//! Browser wiring: listeners, theme observer, debounced resize, frame loop.
//!
//! [`Host`] owns everything acquired on mount. Dropping it releases all of
//! it: the pending animation frame is cancelled, listeners are removed, the
//! observer is disconnected and any pending resize timer is cleared.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, MutationObserver,
	MutationObserverInit, MutationRecord, Window,
};

use super::config::BackgroundConfig;
use super::frame_loop::{FrameId, FrameLoop};
use super::lifetime::Lifetime;
use super::state::BackgroundState;
use super::theme::ColorScheme;
use super::viewport::Viewport;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct Host {
	window: Window,
	root: Element,
	lifetime: Lifetime,
	frames: Rc<FrameLoop>,
	animate: FrameCallback,
	on_resize: Closure<dyn FnMut()>,
	on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
	on_pointer_leave: Closure<dyn FnMut()>,
	_on_mutation: Closure<dyn FnMut(js_sys::Array)>,
	observer: MutationObserver,
	resize_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Get the 2D context, or `None` if the browser cannot provide one.
fn acquire_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<FrameId> {
	let callback = callback.borrow();
	let callback = callback.as_ref()?;
	window
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.ok()
}

fn is_dark(root: &Element, dark_class: &str) -> bool {
	root.class_list().contains(dark_class)
}

impl Host {
	/// Set up the background on `canvas`. Returns `None` without registering
	/// anything if the window, document or 2D context is unavailable.
	pub fn mount(canvas: HtmlCanvasElement, config: BackgroundConfig) -> Option<Self> {
		let window = web_sys::window()?;
		let root = window.document()?.document_element()?;
		let ctx = acquire_context(&canvas)?;
		let viewport = Viewport::from_window(&window, &config)?;
		viewport.apply(&canvas, &ctx);

		let scheme = ColorScheme::from_dark(is_dark(&root, &config.dark_class));
		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
		let delay = config.resize_debounce_ms;
		let dark_class = config.dark_class.clone();
		let state = Rc::new(RefCell::new(BackgroundState::new(
			config, viewport, scheme, seed,
		)));
		info!(
			"particle-backdrop: mounted {}x{} @{}x, {} particles, {:?}",
			viewport.width,
			viewport.height,
			viewport.pixel_ratio,
			state.borrow().field.len(),
			scheme
		);

		let lifetime = Lifetime::new();
		let resize_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

		let on_resize = {
			let (window, canvas, ctx, state, timer, lifetime_inner) = (
				window.clone(),
				canvas.clone(),
				ctx.clone(),
				state.clone(),
				resize_timer.clone(),
				lifetime.clone(),
			);
			Closure::<dyn FnMut()>::new(lifetime.guard(move || {
				let (window, canvas, ctx, state) =
					(window.clone(), canvas.clone(), ctx.clone(), state.clone());
				let fire = lifetime_inner.guard(move || {
					let Some(viewport) = Viewport::from_window(&window, &state.borrow().config)
					else {
						return;
					};
					viewport.apply(&canvas, &ctx);
					state.borrow_mut().resize(viewport);
				});
				// Replacing the previous timeout cancels it.
				*timer.borrow_mut() = Some(Timeout::new(delay, fire));
			}))
		};

		let on_pointer_move = {
			let state = state.clone();
			Closure::<dyn FnMut(MouseEvent)>::new(lifetime.guard_with(move |ev: MouseEvent| {
				state
					.borrow_mut()
					.pointer
					.move_to(ev.client_x() as f64, ev.client_y() as f64);
			}))
		};

		let on_pointer_leave = {
			let state = state.clone();
			Closure::<dyn FnMut()>::new(lifetime.guard(move || {
				state.borrow_mut().pointer.leave();
			}))
		};

		let on_mutation = {
			let (root, state) = (root.clone(), state.clone());
			Closure::<dyn FnMut(js_sys::Array)>::new(lifetime.guard_with(
				move |records: js_sys::Array| {
					let class_changed = records
						.iter()
						.filter_map(|r| r.dyn_into::<MutationRecord>().ok())
						.any(|r| r.attribute_name().as_deref() == Some("class"));
					if class_changed {
						let scheme = ColorScheme::from_dark(is_dark(&root, &dark_class));
						state.borrow_mut().set_scheme(scheme);
					}
				},
			))
		};
		let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref()).ok()?;

		let frames = Rc::new(FrameLoop::new(lifetime.clone()));
		let animate: FrameCallback = Rc::new(RefCell::new(None));
		{
			let (window, state, frames_inner, animate_inner) =
				(window.clone(), state.clone(), frames.clone(), animate.clone());
			let mut ctx = ctx;
			*animate.borrow_mut() = Some(Closure::new(move |now: f64| {
				frames_inner.run(
					now,
					|now| state.borrow_mut().frame(now, &mut ctx),
					|| request_frame(&window, &animate_inner),
				);
			}));
		}

		let host = Self {
			window,
			root,
			lifetime,
			frames,
			animate,
			on_resize,
			on_pointer_move,
			on_pointer_leave,
			_on_mutation: on_mutation,
			observer,
			resize_timer,
		};
		host.register();
		Some(host)
	}

	fn register(&self) {
		let _ = self
			.window
			.add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		let _ = self.window.add_event_listener_with_callback(
			"mousemove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		);
		let _ = self.root.add_event_listener_with_callback(
			"mouseleave",
			self.on_pointer_leave.as_ref().unchecked_ref(),
		);

		let init = MutationObserverInit::new();
		init.set_attributes(true);
		init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
		let _ = self.observer.observe_with_options(&self.root, &init);

		self.frames
			.start(|| request_frame(&self.window, &self.animate));
		debug!(
			"particle-backdrop: listeners registered, first frame {:?}",
			self.frames.pending()
		);
	}
}

impl Drop for Host {
	fn drop(&mut self) {
		self.lifetime.end();
		self.frames.cancel(|id| {
			let _ = self.window.cancel_animation_frame(id);
		});
		self.animate.borrow_mut().take();

		let _ = self.window.remove_event_listener_with_callback(
			"resize",
			self.on_resize.as_ref().unchecked_ref(),
		);
		let _ = self.window.remove_event_listener_with_callback(
			"mousemove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		);
		let _ = self.root.remove_event_listener_with_callback(
			"mouseleave",
			self.on_pointer_leave.as_ref().unchecked_ref(),
		);
		self.observer.disconnect();
		let _ = self.observer.take_records();
		self.resize_timer.borrow_mut().take();

		debug!(
			"particle-backdrop: released after {} frames",
			self.frames.frames()
		);
	}
}

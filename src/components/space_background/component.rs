//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fixed full-viewport canvas, builds a [`Starfield`]
//! once the canvas is mounted and drives it with `requestAnimationFrame`. A
//! window resize regenerates the stars for the new size. Both the pending
//! frame and the resize listener are released when the owning scope is
//! cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::starfield::Starfield;
use super::theme::Theme;

/// Simulation state paired with the theme it was built from.
struct Background {
	field: Starfield<StdRng>,
	theme: Theme,
}

impl Background {
	fn mount(canvas: &HtmlCanvasElement, width: f64, height: f64, theme: &Theme) -> Self {
		size_canvas(canvas, width, height);
		Self {
			field: Starfield::new(width, height, theme, StdRng::from_entropy()),
			theme: theme.clone(),
		}
	}

	/// Follow a viewport resize: the canvas takes the new size and the stars
	/// are regenerated for it.
	fn fit(&mut self, canvas: &HtmlCanvasElement, width: f64, height: f64) {
		size_canvas(canvas, width, height);
		self.field.resize(width, height);
	}
}

/// A repeating `requestAnimationFrame` callback.
///
/// The loop re-arms itself after every frame. Dropping the handle cancels the
/// pending request and releases the callback.
pub struct FrameLoop {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Schedule `on_frame` for the next frame and every frame after it.
	/// Returns `None` outside a browser window.
	pub fn start(mut on_frame: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let request_id = Rc::new(Cell::new(None));
		let (callback_inner, request_inner) = (callback.clone(), request_id.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			on_frame();
			let next = callback_inner.borrow().as_ref().and_then(|cb| {
				web_sys::window()?
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok()
			});
			request_inner.set(next);
		}));

		let first = callback
			.borrow()
			.as_ref()
			.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		request_id.set(first);

		Some(Self {
			callback,
			request_id,
		})
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let (Some(id), Some(window)) = (self.request_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		// Breaks the closure's reference back to its own slot.
		self.callback.borrow_mut().take();
	}
}

fn viewport_size() -> Option<(f64, f64)> {
	let window = web_sys::window()?;
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w.floor(), h.floor()))
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders the animated starfield behind the page.
///
/// The canvas ignores pointer events and sits below all content. Nebulae keep
/// the layout computed for the first viewport size; stars are regenerated on
/// every resize.
#[component]
pub fn SpaceBackground(
	/// Color preset; defaults to deep space.
	#[prop(default = Theme::default())]
	theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let background = StoredValue::new_local(None::<Background>);
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);
	let style = format!(
		"position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0; opacity: {};",
		theme.canvas_opacity
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if background.with_value(|bg| bg.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		let Some((w, h)) = viewport_size() else {
			return;
		};

		let mounted = Background::mount(&canvas, w, h, &theme);
		info!(
			"portfolio: starfield mounted at {}x{} with {} stars",
			w,
			h,
			mounted.field.particles().len()
		);
		background.set_value(Some(mounted));

		let frame = FrameLoop::start(move || {
			background.try_update_value(|bg| {
				if let Some(bg) = bg {
					render::draw(&bg.field, &ctx, &bg.theme);
					bg.field.step();
				}
			});
		});
		frame_loop.set_value(frame);
	});

	let resize_handle = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let Some((w, h)) = viewport_size() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		background.try_update_value(|bg| {
			if let Some(bg) = bg {
				bg.fit(&canvas, w, h);
				debug!(
					"portfolio: starfield resized to {}x{} ({} stars)",
					w,
					h,
					bg.field.particles().len()
				);
			}
		});
	});

	on_cleanup(move || {
		resize_handle.remove();
		let _ = frame_loop.try_update_value(|frame| frame.take());
		debug!("portfolio: starfield torn down");
	});

	view! { <canvas node_ref=canvas_ref class="space-background" style=style /> }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use leptos::task::tick;
	use wasm_bindgen_test::*;

	use super::*;
	use crate::components::browser::{dispatch, host, next_frame};

	wasm_bindgen_test_configure!(run_in_browser);

	fn detached_canvas() -> HtmlCanvasElement {
		web_sys::window()
			.and_then(|w| w.document())
			.expect("document")
			.create_element("canvas")
			.expect("canvas")
			.dyn_into()
			.expect("canvas element")
	}

	#[wasm_bindgen_test]
	async fn dropped_loop_stops_counting() {
		let count = Rc::new(Cell::new(0u32));
		let counter = count.clone();
		let frame = FrameLoop::start(move || counter.set(counter.get() + 1)).expect("window");
		assert_eq!(count.get(), 0);

		for _ in 0..4 {
			next_frame().await;
		}
		assert!(count.get() >= 3, "loop ran {} times", count.get());
		assert!(frame.request_id.get().is_some());

		let slot = frame.callback.clone();
		drop(frame);
		assert!(slot.borrow().is_none());

		let stopped_at = count.get();
		for _ in 0..4 {
			next_frame().await;
		}
		assert_eq!(count.get(), stopped_at);
	}

	#[wasm_bindgen_test]
	fn fit_regenerates_stars_for_new_size() {
		let canvas = detached_canvas();
		let mut bg = Background::mount(&canvas, 400.0, 300.0, &Theme::default());
		assert_eq!(bg.field.particles().len(), 30);
		let nebulae = bg.field.nebulae().to_vec();

		bg.fit(&canvas, 800.0, 600.0);
		assert_eq!(bg.field.particles().len(), 120);
		assert_eq!((canvas.width(), canvas.height()), (800, 600));
		assert_eq!(bg.field.nebulae(), nebulae.as_slice());
	}

	#[wasm_bindgen_test]
	async fn resize_listener_detaches_on_unmount() {
		let host = host();
		let mounted = leptos::mount::mount_to(host.clone(), || view! { <SpaceBackground /> });
		tick().await;
		tick().await;

		let canvas: HtmlCanvasElement = host
			.query_selector("canvas")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into().ok())
			.expect("mounted canvas");
		let (w, h) = viewport_size().expect("viewport");
		assert_eq!((canvas.width(), canvas.height()), (w as u32, h as u32));

		canvas.set_width(1);
		dispatch("resize");
		assert_eq!(canvas.width(), w as u32);

		drop(mounted);
		canvas.set_width(1);
		dispatch("resize");
		assert_eq!(canvas.width(), 1);
		host.remove();
	}
}

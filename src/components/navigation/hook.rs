//! Browser wiring for the scroll-spy tracker.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::tracker::{ScrollSpy, SectionBounds};

/// Reactive outputs of [`use_scroll_spy`].
#[derive(Clone, Copy)]
pub struct ScrollSpyHandle {
	/// Id of the section currently highlighted in navigation.
	pub active: ReadSignal<String>,
	/// Whether the page is scrolled far enough to offer scroll-to-top.
	pub show_scroll_top: ReadSignal<bool>,
}

/// Current layout of a section element, or `None` if it is not rendered.
pub fn section_bounds(document: &Document, id: &str) -> Option<SectionBounds> {
	let element: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;
	Some(SectionBounds::new(
		element.offset_top() as f64,
		element.offset_height() as f64,
	))
}

/// Track the active section from window scroll events.
///
/// Evaluates once after mount and then on every scroll. The listener is
/// removed when the calling scope is cleaned up.
pub fn use_scroll_spy(spy: ScrollSpy) -> ScrollSpyHandle {
	let (active, set_active) = signal(spy.active().to_string());
	let (show_scroll_top, set_show_scroll_top) = signal(false);
	track_scroll(spy, set_active, set_show_scroll_top);

	ScrollSpyHandle {
		active,
		show_scroll_top,
	}
}

/// Drive `active` and `show_scroll_top` from the window scroll position for
/// as long as the current owner lives. Each signal is written only when its
/// value changes.
fn track_scroll(spy: ScrollSpy, active: WriteSignal<String>, show_scroll_top: WriteSignal<bool>) {
	let spy = Rc::new(RefCell::new(spy));

	let on_scroll = Rc::new(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		let scroll_y = window.scroll_y().unwrap_or(0.0);
		let document = window.document();

		let mut spy = spy.borrow_mut();
		if let Some(id) = spy.evaluate(scroll_y, |id| section_bounds(document.as_ref()?, id)) {
			debug!("portfolio: active section -> {}", id);
			active.set(id.to_string());
		}

		let show = spy.config().shows_scroll_top(scroll_y);
		show_scroll_top.maybe_update(|shown| {
			let flipped = *shown != show;
			*shown = show;
			flipped
		});
	});

	let initial = on_scroll.clone();
	Effect::new(move |_| initial());
	let handle = window_event_listener(ev::scroll, move |_| on_scroll());
	on_cleanup(move || handle.remove());
}

/// Smoothly scroll a section into view. Missing sections are ignored.
pub fn scroll_to_section(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

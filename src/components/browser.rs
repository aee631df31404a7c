//! DOM fixtures shared by the in-browser tests.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlElement};

fn document() -> Document {
	web_sys::window()
		.and_then(|w| w.document())
		.expect("browser document")
}

/// Resolves on the next animation frame.
pub async fn next_frame() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		let _ = web_sys::window()
			.expect("browser window")
			.request_animation_frame(&resolve);
	});
	let _ = JsFuture::from(promise).await;
}

/// Fire a bare event of the given type on the window.
pub fn dispatch(kind: &str) {
	let event = Event::new(kind).expect("event");
	web_sys::window()
		.expect("browser window")
		.dispatch_event(&event)
		.expect("dispatch");
}

/// An empty element appended to the body.
pub fn host() -> HtmlElement {
	let document = document();
	let element: HtmlElement = document
		.create_element("div")
		.expect("div")
		.dyn_into()
		.expect("html element");
	document
		.body()
		.expect("body")
		.append_child(&element)
		.expect("append");
	element
}

/// An absolutely positioned block with the given id and vertical extent.
pub fn place_block(id: &str, top: f64, height: f64) -> HtmlElement {
	let element = host();
	element.set_id(id);
	element
		.set_attribute(
			"style",
			&format!("position: absolute; left: 0; top: {top}px; width: 100px; height: {height}px;"),
		)
		.expect("style");
	element
}

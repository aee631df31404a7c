//! One-shot reveal-on-scroll wrapper.
//!
//! Content starts hidden (via the `reveal` class) and gains `revealed` the
//! first time it scrolls into the viewport. After that the observer is
//! disconnected, so scrolling back up never hides it again.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Shrinks the viewport on every side, so content must be this far inside
/// before it reveals.
const ROOT_MARGIN: &str = "-100px";

/// A live observer together with the callback it invokes.
struct Observer {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observer {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

fn observe_once(element: &Element, on_visible: impl Fn() + 'static) -> Option<Observer> {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			let visible = entries.iter().any(|entry| {
				entry
					.dyn_into::<IntersectionObserverEntry>()
					.is_ok_and(|e| e.is_intersecting())
			});
			if visible {
				on_visible();
				observer.disconnect();
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_root_margin(ROOT_MARGIN);
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	observer.observe(element);

	Some(Observer {
		observer,
		_callback: callback,
	})
}

/// Fades its children in the first time they enter the viewport.
///
/// Without `IntersectionObserver` support the children are shown immediately.
#[component]
pub fn Reveal(
	children: Children,
	/// Extra classes for the wrapper.
	#[prop(optional, into)]
	class: String,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let (revealed, set_revealed) = signal(false);
	let observer = StoredValue::new_local(None::<Observer>);

	Effect::new(move |_| {
		let Some(element) = node_ref.get() else {
			return;
		};
		if revealed.get_untracked() || observer.with_value(Option::is_some) {
			return;
		}
		match observe_once(&element, move || set_revealed.set(true)) {
			Some(obs) => observer.set_value(Some(obs)),
			None => set_revealed.set(true),
		}
	});

	on_cleanup(move || {
		let _ = observer.try_update_value(|obs| obs.take());
	});

	view! {
		<div node_ref=node_ref class=format!("reveal {class}") class:revealed=move || revealed.get()>
			{children()}
		</div>
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use wasm_bindgen_test::*;

	use super::*;
	use crate::components::browser::{next_frame, place_block};

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	async fn reveals_once_in_view() {
		let host = place_block("reveal-host", 150.0, 200.0);
		let mounted = leptos::mount::mount_to(host.clone(), || {
			view! {
				<Reveal class="card">
					<p>"visible"</p>
				</Reveal>
			}
		});
		let wrapper = host.first_element_child().expect("reveal wrapper");
		assert!(wrapper.class_name().contains("reveal card"));

		for _ in 0..20 {
			if wrapper.class_name().contains("revealed") {
				break;
			}
			next_frame().await;
		}
		assert!(wrapper.class_name().contains("revealed"));

		drop(mounted);
		host.remove();
	}
}

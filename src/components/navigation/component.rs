//! Navigation bar and scroll-to-top button.

use leptos::prelude::*;

use super::hook::{scroll_to_section, scroll_to_top};
use super::tracker::SECTION_IDS;

/// Navigation label for a section id: the id with its first letter
/// capitalised.
pub fn nav_label(id: &str) -> String {
	let mut chars = id.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Fixed top navigation. The entry for `active` is highlighted.
#[component]
pub fn NavBar(
	/// Brand text on the left of the bar.
	#[prop(into)]
	name: String,
	/// Id of the highlighted section.
	active: ReadSignal<String>,
) -> impl IntoView {
	let entries = SECTION_IDS
		.iter()
		.copied()
		.filter(|id| *id != "hero")
		.map(|id| {
			let class = move || {
				if active.get() == id {
					"nav-link active"
				} else {
					"nav-link"
				}
			};
			view! {
				<button class=class on:click=move |_| scroll_to_section(id)>
					{nav_label(id)}
				</button>
			}
		})
		.collect_view();

	view! {
		<nav class="navbar">
			<div class="navbar-inner">
				<button class="navbar-brand" on:click=move |_| scroll_to_top()>
					{name}
				</button>
				<div class="navbar-links">{entries}</div>
			</div>
		</nav>
	}
}

/// Floating button shown once the page is scrolled down.
#[component]
pub fn ScrollTopButton(
	/// Whether the button is rendered.
	visible: ReadSignal<bool>,
) -> impl IntoView {
	view! {
		<Show when=move || visible.get()>
			<button
				class="scroll-top"
				aria-label="Scroll to top"
				on:click=move |_| scroll_to_top()
			>
				"↑"
			</button>
		</Show>
	}
}

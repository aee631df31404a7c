//! portfolio: single-page personal portfolio rendered client-side.
//!
//! This crate provides the WASM front end: scroll-spy navigation, reveal-on-
//! scroll sections and an animated starfield background drawn on a canvas.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Enables the browser entropy source for `rand`.
use getrandom as _;

pub mod components;
pub mod content;

pub use components::navigation::{ScrollSpy, ScrollSpyConfig, SectionBounds};
pub use components::space_background::{SpaceBackground, Starfield, Theme};
pub use content::{PortfolioContent, load_content};

use components::navigation::{NavBar, ScrollTopButton, use_scroll_spy};
use components::sections::Sections;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Main application component.
/// Loads page content and renders navigation, sections and the background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_content();
	let theme = Theme::by_name(&content.background);
	let title = format!("{} - Software Engineer", content.name);
	let description = format!("{}'s portfolio - {}", content.name, content.headline);
	let name = content.name.clone();
	let spy = use_scroll_spy(ScrollSpy::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=description />

		<div class="page">
			<SpaceBackground theme=theme />
			<NavBar name=name active=spy.active />
			<Sections content=content />
			<ScrollTopButton visible=spy.show_scroll_top />
		</div>
	}
}

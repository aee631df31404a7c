//! Scroll-spy navigation.
//!
//! [`ScrollSpy`] maps the window scroll offset to the section currently in
//! view; [`use_scroll_spy`] feeds it from scroll events and exposes the result
//! as signals for [`NavBar`] and [`ScrollTopButton`].

mod component;
mod hook;
pub mod tracker;

pub use component::{NavBar, ScrollTopButton, nav_label};
pub use hook::{ScrollSpyHandle, scroll_to_section, scroll_to_top, section_bounds, use_scroll_spy};
pub use tracker::{DEFAULT_SECTION, SECTION_IDS, ScrollSpy, ScrollSpyConfig, SectionBounds};

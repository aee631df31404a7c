//! Scroll position to active section mapping.
//!
//! The tracker knows the page's section ids in document order. Layout is not
//! stored: every evaluation asks a lookup closure for the current bounds of
//! each section, so the caller can read live layout or supply fixed values.

/// Section ids in document order.
pub const SECTION_IDS: [&str; 8] = [
	"hero",
	"about",
	"experience",
	"education",
	"skills",
	"achievements",
	"projects",
	"contact",
];

/// Active section before any evaluation when no sections are known.
pub const DEFAULT_SECTION: &str = "hero";

/// Vertical extent of a rendered section, in px from the document top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	/// Offset of the section's top edge.
	pub top: f64,
	/// Rendered height; zero-height sections never match.
	pub height: f64,
}

impl SectionBounds {
	/// Bounds starting at `top` and spanning `height` px.
	pub fn new(top: f64, height: f64) -> Self {
		Self { top, height }
	}

	/// Half-open containment: `[top, top + height)`.
	pub fn contains(&self, offset: f64) -> bool {
		offset >= self.top && offset < self.top + self.height
	}
}

/// Tuning for scroll evaluation.
#[derive(Clone, Debug)]
pub struct ScrollSpyConfig {
	/// Added to the scroll offset before matching, so a section activates
	/// slightly before its top reaches the viewport edge.
	pub lookahead: f64,
	/// Scroll offset past which the scroll-to-top button is shown.
	pub scroll_top_threshold: f64,
}

impl Default for ScrollSpyConfig {
	fn default() -> Self {
		Self {
			lookahead: 100.0,
			scroll_top_threshold: 500.0,
		}
	}
}

impl ScrollSpyConfig {
	/// Whether the scroll-to-top button is shown at `scroll_y`.
	pub fn shows_scroll_top(&self, scroll_y: f64) -> bool {
		scroll_y > self.scroll_top_threshold
	}
}

/// Tracks which section is currently in view.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
	sections: Vec<String>,
	active: String,
	config: ScrollSpyConfig,
}

impl ScrollSpy {
	/// The first section starts out active.
	pub fn new<I, S>(sections: I, config: ScrollSpyConfig) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
		let active = sections
			.first()
			.cloned()
			.unwrap_or_else(|| DEFAULT_SECTION.to_string());
		Self {
			sections,
			active,
			config,
		}
	}

	/// Id of the section currently highlighted.
	pub fn active(&self) -> &str {
		&self.active
	}

	/// Tracked section ids in document order.
	pub fn sections(&self) -> &[String] {
		&self.sections
	}

	/// Evaluation tuning.
	pub fn config(&self) -> &ScrollSpyConfig {
		&self.config
	}

	/// First section, in document order, containing the biased offset.
	/// Sections the lookup cannot find are skipped.
	pub fn locate<F>(&self, scroll_y: f64, mut lookup: F) -> Option<&str>
	where
		F: FnMut(&str) -> Option<SectionBounds>,
	{
		let offset = scroll_y + self.config.lookahead;
		self.sections
			.iter()
			.find(|id| lookup(id.as_str()).is_some_and(|bounds| bounds.contains(offset)))
			.map(String::as_str)
	}

	/// Re-evaluate the active section. Returns the new id only when it
	/// changed; with no match the previous section stays active.
	pub fn evaluate<F>(&mut self, scroll_y: f64, lookup: F) -> Option<&str>
	where
		F: FnMut(&str) -> Option<SectionBounds>,
	{
		let found = self.locate(scroll_y, lookup)?.to_string();
		if found == self.active {
			return None;
		}
		self.active = found;
		Some(&self.active)
	}
}

impl Default for ScrollSpy {
	fn default() -> Self {
		Self::new(SECTION_IDS, ScrollSpyConfig::default())
	}
}

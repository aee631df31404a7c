// Host-side tests for the scroll-spy tracker. Layout is supplied by closures
// standing in for the rendered page.

use portfolio::components::navigation::{SECTION_IDS, ScrollSpy, ScrollSpyConfig, SectionBounds};

/// Every section stacked without gaps, 700px tall, hero first.
fn stacked(id: &str) -> Option<SectionBounds> {
	let index = SECTION_IDS.iter().position(|s| *s == id)?;
	Some(SectionBounds::new(index as f64 * 700.0, 700.0))
}

#[test]
fn scroll_at_top_selects_hero() {
	let mut spy = ScrollSpy::default();
	let layout = |id: &str| match id {
		"hero" => Some(SectionBounds::new(0.0, 900.0)),
		"about" => Some(SectionBounds::new(900.0, 600.0)),
		_ => None,
	};
	assert_eq!(spy.locate(0.0, layout), Some("hero"));
	assert_eq!(spy.evaluate(0.0, layout), None);
	assert_eq!(spy.active(), "hero");
}

#[test]
fn biased_offset_reaches_about() {
	let mut spy = ScrollSpy::default();
	let layout = |id: &str| match id {
		"hero" => Some(SectionBounds::new(0.0, 900.0)),
		"about" => Some(SectionBounds::new(900.0, 600.0)),
		_ => None,
	};
	assert_eq!(spy.evaluate(850.0, layout), Some("about"));
	assert_eq!(spy.active(), "about");
}

#[test]
fn every_offset_inside_a_section_selects_it() {
	let mut spy = ScrollSpy::default();
	for (index, id) in SECTION_IDS.iter().enumerate() {
		let top = index as f64 * 700.0;
		for inside in [top, top + 1.0, top + 350.0, top + 699.0] {
			spy.evaluate(inside - 100.0, stacked);
			assert_eq!(spy.active(), *id, "offset {inside}");
		}
	}
}

#[test]
fn gap_keeps_previous_section() {
	let mut spy = ScrollSpy::default();
	let layout = |id: &str| match id {
		"hero" => Some(SectionBounds::new(0.0, 800.0)),
		"about" => Some(SectionBounds::new(1000.0, 500.0)),
		"experience" => Some(SectionBounds::new(1500.0, 500.0)),
		_ => None,
	};
	assert_eq!(spy.evaluate(1100.0, layout), Some("about"));
	// Biased offset 900 falls between hero and about.
	assert_eq!(spy.evaluate(800.0, layout), None);
	assert_eq!(spy.active(), "about");
	// Below the last section.
	assert_eq!(spy.evaluate(5000.0, layout), None);
	assert_eq!(spy.active(), "about");
}

#[test]
fn missing_sections_are_skipped() {
	let mut spy = ScrollSpy::default();
	let layout = |id: &str| match id {
		"hero" => Some(SectionBounds::new(0.0, 600.0)),
		"skills" => Some(SectionBounds::new(600.0, 600.0)),
		_ => None,
	};
	assert_eq!(spy.evaluate(700.0, layout), Some("skills"));
}

#[test]
fn first_match_wins_on_overlap() {
	let mut spy = ScrollSpy::default();
	let layout = |id: &str| match id {
		"about" => Some(SectionBounds::new(0.0, 2000.0)),
		"experience" => Some(SectionBounds::new(500.0, 500.0)),
		_ => None,
	};
	assert_eq!(spy.evaluate(600.0, layout), Some("about"));
}

#[test]
fn lookahead_is_configurable() {
	let config = ScrollSpyConfig {
		lookahead: 0.0,
		..ScrollSpyConfig::default()
	};
	let mut spy = ScrollSpy::new(SECTION_IDS, config);
	let layout = |id: &str| match id {
		"hero" => Some(SectionBounds::new(0.0, 900.0)),
		"about" => Some(SectionBounds::new(900.0, 600.0)),
		_ => None,
	};
	assert_eq!(spy.evaluate(850.0, layout), None);
	assert_eq!(spy.active(), "hero");
}

#[test]
fn scroll_top_button_threshold() {
	let config = ScrollSpyConfig::default();
	assert!(!config.shows_scroll_top(0.0));
	assert!(!config.shows_scroll_top(500.0));
	assert!(config.shows_scroll_top(500.5));
}

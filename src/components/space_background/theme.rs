//! Visual theming for the space background.
//!
//! Provides the color type, starfield sampling ranges and nebula layout used by
//! the simulation and renderer.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits functional notation so gradient stops can fade to alpha 0.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Placement of a single nebula blob, relative to the initial viewport.
#[derive(Clone, Debug)]
pub struct NebulaSpec {
	/// Horizontal centre as a fraction of width.
	pub x: f64,
	/// Vertical centre as a fraction of height.
	pub y: f64,
	/// Radius as a fraction of width.
	pub radius: f64,
	/// Color at the centre. The edge is the same color at alpha 0.
	pub color: Color,
}

/// Starfield sampling configuration.
///
/// Each random property is drawn as `min + unit * span` with `unit` uniform in
/// `[0, 1)`, so every range is half-open.
#[derive(Clone, Debug)]
pub struct StarfieldStyle {
	/// Surface area (px²) per star.
	pub area_per_star: f64,
	/// Upper bound of the star radius.
	pub radius_max: f64,
	/// Lowest star opacity.
	pub opacity_min: f64,
	/// Width of the opacity range.
	pub opacity_span: f64,
	/// Slowest fall speed, px per frame.
	pub speed_min: f64,
	/// Width of the speed range.
	pub speed_span: f64,
	/// Star fill color; alpha comes from each star's opacity.
	pub color: Color,
}

impl Default for StarfieldStyle {
	fn default() -> Self {
		Self {
			area_per_star: 4000.0,
			radius_max: 1.5,
			opacity_min: 0.2,
			opacity_span: 0.8,
			speed_min: 0.01,
			speed_span: 0.05,
			color: Color::rgb(255, 255, 255),
		}
	}
}

/// Complete visual theme for the background canvas.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name, as accepted by [`Theme::by_name`].
	pub name: &'static str,
	/// Star sampling and color.
	pub stars: StarfieldStyle,
	/// Nebula blobs, drawn in order.
	pub nebulae: Vec<NebulaSpec>,
	/// CSS opacity of the whole canvas.
	pub canvas_opacity: f64,
}

impl Theme {
	/// Muted midnight blues and indigo (default)
	pub fn deep_space() -> Self {
		Self {
			name: "deep_space",
			stars: StarfieldStyle::default(),
			nebulae: vec![
				NebulaSpec {
					x: 0.2,
					y: 0.3,
					radius: 0.4,
					color: Color::rgba(25, 25, 112, 0.1), // Midnight blue
				},
				NebulaSpec {
					x: 0.8,
					y: 0.7,
					radius: 0.3,
					color: Color::rgba(75, 0, 130, 0.05), // Indigo
				},
				NebulaSpec {
					x: 0.5,
					y: 0.2,
					radius: 0.2,
					color: Color::rgba(0, 0, 50, 0.05), // Navy
				},
			],
			canvas_opacity: 0.6,
		}
	}

	/// Alternate neon skin. Same layout and motion, brighter colors.
	pub fn neon() -> Self {
		Self {
			name: "neon",
			stars: StarfieldStyle {
				color: Color::rgb(190, 240, 255),
				..StarfieldStyle::default()
			},
			nebulae: vec![
				NebulaSpec {
					x: 0.2,
					y: 0.3,
					radius: 0.4,
					color: Color::rgba(0, 200, 255, 0.12), // Cyan
				},
				NebulaSpec {
					x: 0.8,
					y: 0.7,
					radius: 0.3,
					color: Color::rgba(255, 0, 170, 0.08), // Magenta
				},
				NebulaSpec {
					x: 0.5,
					y: 0.2,
					radius: 0.2,
					color: Color::rgba(120, 0, 255, 0.08), // Violet
				},
			],
			canvas_opacity: 0.8,
		}
	}

	/// Look up a preset by name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"neon" => Self::neon(),
			_ => Self::deep_space(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::deep_space()
	}
}

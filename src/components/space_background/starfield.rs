//! Starfield simulation: falling stars over static nebula blobs.
//!
//! Stars are regenerated whenever the surface changes size. Nebulae are laid
//! out once from the size the field was created with and keep that layout for
//! the lifetime of the field.

use rand::Rng;

use super::theme::{Color, StarfieldStyle, Theme};

/// A single falling star.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in `[0, width)`.
	pub x: f64,
	/// Vertical position in `[0, height)`.
	pub y: f64,
	/// Circle radius in px.
	pub radius: f64,
	/// Fill alpha.
	pub opacity: f64,
	/// Vertical distance travelled per frame.
	pub speed: f64,
}

/// A static radial-gradient blob.
#[derive(Clone, Debug, PartialEq)]
pub struct Nebula {
	/// Centre x in px.
	pub x: f64,
	/// Centre y in px.
	pub y: f64,
	/// Gradient radius in px.
	pub radius: f64,
	/// Color at the centre.
	pub inner: Color,
	/// Color at the rim, fully transparent.
	pub outer: Color,
}

/// Number of stars for a surface: one per `area_per_star` px², rounded down.
pub fn particle_count(width: f64, height: f64, area_per_star: f64) -> usize {
	if width <= 0.0 || height <= 0.0 || area_per_star <= 0.0 {
		return 0;
	}
	(width * height / area_per_star).floor() as usize
}

/// Owns the star set and nebula layout for one drawing surface.
///
/// The random source is injected so tests can seed it.
pub struct Starfield<R: Rng> {
	particles: Vec<Particle>,
	nebulae: Vec<Nebula>,
	style: StarfieldStyle,
	width: f64,
	height: f64,
	rng: R,
}

impl<R: Rng> Starfield<R> {
	/// Lay out the nebulae for `width` x `height` and sample a full set of
	/// stars from `rng`.
	pub fn new(width: f64, height: f64, theme: &Theme, rng: R) -> Self {
		let nebulae = theme
			.nebulae
			.iter()
			.map(|spec| Nebula {
				x: width * spec.x,
				y: height * spec.y,
				radius: width * spec.radius,
				inner: spec.color,
				outer: spec.color.with_alpha(0.0),
			})
			.collect();

		let mut field = Self {
			particles: Vec::new(),
			nebulae,
			style: theme.stars.clone(),
			width,
			height,
			rng,
		};
		field.populate();
		field
	}

	fn populate(&mut self) {
		let count = particle_count(self.width, self.height, self.style.area_per_star);
		let style = &self.style;
		let rng = &mut self.rng;

		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			self.particles.push(Particle {
				x: rng.r#gen::<f64>() * self.width,
				y: rng.r#gen::<f64>() * self.height,
				radius: rng.r#gen::<f64>() * style.radius_max,
				opacity: style.opacity_min + rng.r#gen::<f64>() * style.opacity_span,
				speed: style.speed_min + rng.r#gen::<f64>() * style.speed_span,
			});
		}
	}

	/// Adopt new surface dimensions. Stars are regenerated, nebulae are kept.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.populate();
	}

	/// Advance every star by one frame, wrapping to the top on exit.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.y += p.speed;
			if p.y >= self.height {
				p.y = 0.0;
				p.x = self.rng.r#gen::<f64>() * self.width;
			}
		}
	}

	/// Stars in drawing order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Nebulae in drawing order.
	pub fn nebulae(&self) -> &[Nebula] {
		&self.nebulae
	}

	/// Current surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height.
	pub fn height(&self) -> f64 {
		self.height
	}
}

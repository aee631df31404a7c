// Host-side tests for the starfield simulation with a seeded random source.

use portfolio::components::space_background::{Starfield, Theme, particle_count};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded(width: f64, height: f64, seed: u64) -> Starfield<StdRng> {
	Starfield::new(width, height, &Theme::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn viewport_800_by_600_has_120_stars() {
	assert_eq!(seeded(800.0, 600.0, 1).particles().len(), 120);
}

#[test]
fn count_matches_area_for_many_sizes() {
	for (w, h) in [(1.0, 1.0), (320.0, 568.0), (1366.0, 768.0), (2560.0, 1440.0), (99.0, 4001.0)] {
		let expected = (w * h / 4000.0_f64).floor() as usize;
		assert_eq!(particle_count(w, h, 4000.0), expected);
		assert_eq!(seeded(w, h, 3).particles().len(), expected);
	}
}

#[test]
fn stars_stay_on_surface_over_many_frames() {
	let mut field = seeded(300.0, 40.0, 9);
	for _ in 0..5000 {
		field.step();
		for p in field.particles() {
			assert!(p.y >= 0.0 && p.y < 40.0, "y = {}", p.y);
			assert!(p.x >= 0.0 && p.x < 300.0, "x = {}", p.x);
		}
	}
}

#[test]
fn star_leaving_the_bottom_wraps_to_top() {
	let mut field = seeded(500.0, 20.0, 5);
	let mut wrapped = false;
	for _ in 0..3000 {
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.y, p.speed)).collect();
		field.step();
		for (p, (y, speed)) in field.particles().iter().zip(before) {
			if y + speed >= 20.0 {
				assert_eq!(p.y, 0.0);
				assert!((0.0..500.0).contains(&p.x));
				wrapped = true;
			}
		}
	}
	assert!(wrapped);
}

#[test]
fn resize_regenerates_stars_and_keeps_nebulae() {
	let mut field = seeded(800.0, 600.0, 11);
	let nebulae = field.nebulae().to_vec();

	field.resize(1600.0, 900.0);
	assert_eq!(field.particles().len(), 360);
	assert_eq!((field.width(), field.height()), (1600.0, 900.0));
	assert_eq!(field.nebulae(), nebulae.as_slice());
	assert_eq!(field.nebulae()[0].radius, 320.0);
	assert!(field.particles().iter().any(|p| p.x >= 800.0 || p.y >= 600.0));

	field.resize(40.0, 40.0);
	assert!(field.particles().is_empty());
	assert_eq!(field.nebulae(), nebulae.as_slice());
}

#[test]
fn alternate_skin_changes_colors_not_motion() {
	let deep = Starfield::new(800.0, 600.0, &Theme::deep_space(), StdRng::seed_from_u64(2));
	let neon = Starfield::new(800.0, 600.0, &Theme::neon(), StdRng::seed_from_u64(2));
	assert_eq!(deep.particles(), neon.particles());
	for (a, b) in deep.nebulae().iter().zip(neon.nebulae()) {
		assert_eq!((a.x, a.y, a.radius), (b.x, b.y, b.radius));
		assert_ne!(a.inner, b.inner);
	}
}

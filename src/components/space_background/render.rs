//! Canvas rendering for the space background.
//!
//! Each frame clears the surface, paints the nebulae as radial gradients and
//! then the stars on top.

use std::f64::consts::PI;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::starfield::{Nebula, Starfield};
use super::theme::Theme;

/// Paints one frame of the starfield.
pub fn draw<R: Rng>(field: &Starfield<R>, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for nebula in field.nebulae() {
		draw_nebula(ctx, nebula);
	}

	let color = &theme.stars.color;
	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			color.r, color.g, color.b, p.opacity
		));
		ctx.fill();
	}
}

fn draw_nebula(ctx: &CanvasRenderingContext2d, nebula: &Nebula) {
	let Ok(gradient) =
		ctx.create_radial_gradient(nebula.x, nebula.y, 0.0, nebula.x, nebula.y, nebula.radius)
	else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &nebula.inner.to_css());
	let _ = gradient.add_color_stop(1.0, &nebula.outer.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(nebula.x, nebula.y, nebula.radius, 0.0, PI * 2.0);
	ctx.fill();
}

//! Canvas rendering for the starfield.
//!
//! Every frame is drawn from scratch in three passes:
//! 1. Connection lines (so dots sit on top of them)
//! 2. Particles, with an optional trail ellipse
//! 3. Shooting stars: gradient tail, then a bright head

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::theme::{Color, FallStyle};

/// Trail ellipse size and opacity relative to its particle.
const TRAIL_WIDTH: f64 = 0.5;
const TRAIL_LENGTH: f64 = 1.5;
const TRAIL_ALPHA: f64 = 0.4;

const CONNECTION_LINE_WIDTH: f64 = 0.6;

/// Renders the complete field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	let color = field.config().color;
	draw_connections(field, ctx, color);
	draw_particles(field, ctx, color);
	draw_shooting_stars(field, ctx, color);
}

fn rgba(color: Color, alpha: f64) -> String {
	color.with_alpha(color.a * alpha.clamp(0.0, 1.0)).to_css()
}

/// Horizontal and vertical radii of the trail behind a dot of `radius`.
fn trail_radii(radius: f64) -> (f64, f64) {
	(radius * TRAIL_WIDTH, radius * TRAIL_LENGTH)
}

fn draw_connections(field: &ParticleField, ctx: &CanvasRenderingContext2d, color: Color) {
	let lines = field.connections();
	if lines.is_empty() {
		return;
	}

	ctx.set_line_width(CONNECTION_LINE_WIDTH);
	for line in lines {
		let (a, b) = (&field.particles[line.a], &field.particles[line.b]);
		ctx.set_stroke_style_str(&rgba(color, line.opacity));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, color: Color) {
	let trail = field.config().fall == FallStyle::Trail;

	for p in &field.particles {
		let alpha = p.draw_alpha();
		ctx.set_fill_style_str(&rgba(color, alpha));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();

		if trail {
			let (width, length) = trail_radii(p.radius);
			ctx.set_fill_style_str(&rgba(color, alpha * TRAIL_ALPHA));
			ctx.begin_path();
			let _ = ctx.ellipse(
				p.x,
				p.y - length,
				width,
				length,
				0.0,
				0.0,
				PI * 2.0,
			);
			ctx.fill();
		}
	}
}

fn draw_shooting_stars(field: &ParticleField, ctx: &CanvasRenderingContext2d, color: Color) {
	let style = &field.config().shooting;

	for star in &field.shooting_stars {
		let (tail_x, tail_y) = star.tail();

		let gradient = ctx.create_linear_gradient(star.x, star.y, tail_x, tail_y);
		let _ = gradient.add_color_stop(0.0, &rgba(color, star.alpha));
		let _ = gradient.add_color_stop(1.0, &rgba(color, 0.0));

		ctx.begin_path();
		ctx.move_to(star.x, star.y);
		ctx.line_to(tail_x, tail_y);
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(style.line_width);
		ctx.stroke();

		ctx.begin_path();
		let _ = ctx.arc(star.x, star.y, style.head_radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&rgba(color, star.alpha));
		ctx.fill();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rgba_clamps_alpha() {
		let white = Color::rgb(255, 255, 255);
		assert_eq!(rgba(white, 1.7), "#ffffff");
		assert_eq!(rgba(white, -0.2), "rgba(255, 255, 255, 0)");
		assert_eq!(rgba(Color::rgba(10, 20, 30, 0.5), 0.5), "rgba(10, 20, 30, 0.25)");
	}

	#[test]
	fn trail_is_smaller_than_its_dot() {
		for radius in [0.5, 1.0, 2.5] {
			let (width, length) = trail_radii(radius);
			assert!(width < radius);
			assert!(width * length < radius * radius);
		}
	}
}

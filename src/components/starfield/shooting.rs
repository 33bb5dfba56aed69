//! Transient shooting stars streaking across the field.

use rand::Rng;

use super::theme::{ShootingStyle, unit};

/// A fast, fading streak. The head sits at `(x, y)`; the tail trails
/// `length` pixels behind along `angle`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
	/// Head position in pixels.
	pub x: f64,
	/// Head position in pixels.
	pub y: f64,
	/// Direction of travel in radians.
	pub angle: f64,
	/// Tail length in pixels.
	pub length: f64,
	/// Pixels per frame.
	pub speed: f64,
	/// Fades from `1.0` to zero.
	pub alpha: f64,
}

impl ShootingStar {
	/// A new star in the upper-left region of the surface.
	pub fn spawn<R: Rng>(style: &ShootingStyle, width: f64, height: f64, rng: &mut R) -> Self {
		Self {
			x: unit(rng) * width * style.origin_x,
			y: unit(rng) * height * style.origin_y,
			length: style.length.sample(rng),
			speed: style.speed.sample(rng),
			alpha: 1.0,
			angle: style.angle + (unit(rng) - 0.5) * style.jitter,
		}
	}

	/// Move one frame along the travel direction and fade.
	pub fn advance(&mut self, fade: f64) {
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed;
		self.alpha -= fade;
	}

	/// End of the tail, opposite the direction of travel.
	pub fn tail(&self) -> (f64, f64) {
		(
			self.x - self.angle.cos() * self.length,
			self.y - self.angle.sin() * self.length,
		)
	}

	/// Whether the star is still visible and inside the surface plus `margin`.
	pub fn is_alive(&self, width: f64, height: f64, margin: f64) -> bool {
		self.alpha > 0.0
			&& self.x >= -margin
			&& self.x <= width + margin
			&& self.y >= -margin
			&& self.y <= height + margin
	}
}

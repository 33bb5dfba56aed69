//! Background particle simulation.
//!
//! A [`ParticleField`] owns a fixed set of particles plus the transient
//! shooting stars, and advances all of them one animation frame at a time.
//! Nothing here touches the DOM, so the whole simulation runs natively in
//! tests.

use std::f64::consts::TAU;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::shooting::ShootingStar;
use super::theme::{FallStyle, FieldConfig, unit};

/// Line opacity for two particles at zero distance.
pub const CONNECTION_OPACITY: f64 = 0.15;

/// Alpha oscillation state for a single particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twinkle {
	/// Alpha change per frame.
	pub speed: f64,
	/// `1.0` while brightening, `-1.0` while dimming.
	pub direction: f64,
}

/// A single background dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Position in pixels.
	pub x: f64,
	/// Position in pixels.
	pub y: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	/// Velocity in pixels per frame.
	pub vy: f64,
	/// Dot radius in pixels.
	pub radius: f64,
	/// Resting alpha, and the twinkle ceiling.
	pub base_alpha: f64,
	/// Current alpha.
	pub alpha: f64,
	/// `None` for steady dots.
	pub twinkle: Option<Twinkle>,
}

impl Particle {
	/// Alpha as it should be drawn.
	pub fn draw_alpha(&self) -> f64 {
		self.alpha.clamp(0.0, 1.0)
	}
}

/// A line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	/// Indices into [`ParticleField::particles`].
	pub a: usize,
	/// Index of the other end.
	pub b: usize,
	/// Line alpha, fading with distance.
	pub opacity: f64,
}

/// Opacity of the line joining two particles `distance` apart, if any.
pub fn connection_opacity(distance: f64, max_distance: f64) -> Option<f64> {
	if max_distance <= 0.0 || distance >= max_distance {
		return None;
	}
	Some((1.0 - distance / max_distance) * CONNECTION_OPACITY)
}

/// Fixed-size animated particle field sized to a drawing surface.
pub struct ParticleField {
	/// Background dots, fixed in number.
	pub particles: Vec<Particle>,
	/// Shooting stars still on screen.
	pub shooting_stars: Vec<ShootingStar>,
	config: FieldConfig,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl ParticleField {
	/// Scatter `config.count` particles over a `width` x `height` surface.
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let particles = (0..config.count)
			.map(|_| Self::spawn_particle(&config, width, height, &mut rng))
			.collect();

		Self {
			particles,
			shooting_stars: Vec::new(),
			config,
			width,
			height,
			rng,
		}
	}

	fn spawn_particle(config: &FieldConfig, width: f64, height: f64, rng: &mut SmallRng) -> Particle {
		let x = unit(rng) * width;
		let y = unit(rng) * height;
		let radius = config.radius.sample(rng);
		let base_alpha = config.base_alpha.sample(rng);
		let speed = config.speed.sample(rng);

		let (vx, vy) = match config.fall {
			FallStyle::Wrap => {
				let angle = unit(rng) * TAU;
				(angle.cos() * speed, angle.sin() * speed)
			}
			FallStyle::ResetToTop | FallStyle::Trail => (0.0, speed),
		};

		// Twinkling stars fade in from dark.
		let twinkle = config.twinkle.map(|t| Twinkle {
			speed: t.speed.sample(rng),
			direction: 1.0,
		});
		let alpha = if twinkle.is_some() { 0.0 } else { base_alpha };

		Particle {
			x,
			y,
			vx,
			vy,
			radius,
			base_alpha,
			alpha,
			twinkle,
		}
	}

	/// Settings the field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle and shooting star by one frame.
	pub fn update(&mut self) {
		let (width, height) = (self.width, self.height);
		let margin = self.config.edge_margin;

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			match self.config.fall {
				FallStyle::Wrap => {
					p.x = wrap(p.x, width, margin);
					p.y = wrap(p.y, height, margin);
				}
				FallStyle::ResetToTop | FallStyle::Trail => {
					if p.y > height + margin {
						p.y = -margin;
						p.x = unit(&mut self.rng) * width;
					}
				}
			}

			if let (Some(tw), Some(cfg)) = (p.twinkle.as_mut(), self.config.twinkle) {
				p.alpha += tw.speed * tw.direction;
				if p.alpha >= p.base_alpha + cfg.rise {
					tw.direction = -1.0;
				}
				if p.alpha <= p.base_alpha - cfg.dip {
					tw.direction = 1.0;
				}
				p.alpha = p.alpha.clamp(cfg.floor, 1.0);
			}
		}

		let exit_margin = self.config.shooting.exit_margin;
		for star in &mut self.shooting_stars {
			star.advance(self.config.shooting.fade);
		}
		self.shooting_stars
			.retain(|star| star.is_alive(width, height, exit_margin));
	}

	/// Launch one shooting star from the upper-left region of the surface.
	pub fn spawn_shooting_star(&mut self) {
		let star = ShootingStar::spawn(&self.config.shooting, self.width, self.height, &mut self.rng);
		self.shooting_stars.push(star);
	}

	/// Every unordered pair of particles close enough to be joined by a line.
	pub fn connections(&self) -> Vec<Connection> {
		let max_distance = self.config.connection_distance;
		if max_distance <= 0.0 {
			return Vec::new();
		}

		let mut lines = Vec::new();
		for (a, pa) in self.particles.iter().enumerate() {
			for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if let Some(opacity) = connection_opacity(distance, max_distance) {
					lines.push(Connection { a, b, opacity });
				}
			}
		}
		lines
	}

	/// Resize the surface bounds.
	///
	/// Existing positions are kept as-is; particles outside the new bounds
	/// drift back in through the normal wrap/reset rules.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn wrap(value: f64, length: f64, margin: f64) -> f64 {
	if value < -margin {
		length + margin
	} else if value > length + margin {
		-margin
	} else {
		value
	}
}

#[cfg(test)]
mod tests {
	use super::super::theme::{FieldConfig, Span, TwinkleConfig};
	use super::*;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn assert_in_bounds(field: &ParticleField) {
		let m = field.config().edge_margin;
		for p in &field.particles {
			assert!(p.x >= -m && p.x <= W + m, "x {} out of bounds", p.x);
			assert!(p.y >= -m && p.y <= H + m, "y {} out of bounds", p.y);
			assert!((0.0..=1.0).contains(&p.alpha), "alpha {} out of range", p.alpha);
		}
	}

	#[test]
	fn init_creates_exact_count_within_bounds() {
		for count in [0, 1, 60, 160] {
			let config = FieldConfig {
				count,
				..FieldConfig::twinkle_fall()
			};
			let field = ParticleField::new(config, W, H, 42);
			assert_eq!(field.particles.len(), count);
			for p in &field.particles {
				assert!(p.x >= 0.0 && p.x < W);
				assert!(p.y >= 0.0 && p.y < H);
				assert!((0.0..=1.0).contains(&p.alpha));
			}
		}
	}

	#[test]
	fn init_samples_configured_ranges() {
		let config = FieldConfig::twinkle_fall();
		let field = ParticleField::new(config.clone(), W, H, 1);
		for p in &field.particles {
			assert!(config.radius.contains(p.radius));
			assert!(config.base_alpha.contains(p.base_alpha));
			assert!(config.speed.contains(p.vy));
			assert_eq!(p.vx, 0.0);
			assert_eq!(p.alpha, 0.0);
		}
	}

	#[test]
	fn every_preset_stays_in_bounds() {
		for config in [
			FieldConfig::twinkle_fall(),
			FieldConfig::falling_snow(),
			FieldConfig::constellation(),
		] {
			let mut field = ParticleField::new(config, W, H, 99);
			for _ in 0..2000 {
				field.update();
				assert_in_bounds(&field);
			}
			assert_eq!(field.particles.len(), field.config().count);
		}
	}

	#[test]
	fn twinkle_alpha_oscillates_within_limits() {
		let config = FieldConfig {
			count: 1,
			base_alpha: Span::fixed(0.5),
			twinkle: Some(TwinkleConfig {
				speed: Span::fixed(0.05),
				rise: 0.3,
				dip: 0.2,
				floor: 0.05,
			}),
			speed: Span::fixed(0.0),
			..FieldConfig::twinkle_fall()
		};
		let mut field = ParticleField::new(config, W, H, 3);
		let mut seen_dimming = false;
		for _ in 0..200 {
			field.update();
			let p = &field.particles[0];
			assert!(p.alpha >= 0.05 && p.alpha <= 1.0);
			assert!(p.alpha <= 0.5 + 0.3 + 0.05 + 1e-9);
			if p.twinkle.map(|t| t.direction) == Some(-1.0) {
				seen_dimming = true;
			}
		}
		assert!(seen_dimming);
	}

	#[test]
	fn falling_particle_resets_to_top() {
		let mut field = ParticleField::new(FieldConfig::falling_snow(), W, H, 5);
		field.particles[0].y = H + 4.0;
		field.particles[0].vy = 1.0;
		field.update();
		assert_eq!(field.particles[0].y, -4.0);
		assert!(field.particles[0].x >= 0.0 && field.particles[0].x < W);
	}

	#[test]
	fn wrapping_particle_reenters_opposite_edge() {
		let mut field = ParticleField::new(FieldConfig::constellation(), W, H, 5);
		let p = &mut field.particles[0];
		p.x = W - 0.1;
		p.y = 10.0;
		p.vx = 0.5;
		p.vy = 0.0;
		field.update();
		assert_eq!(field.particles[0].x, 0.0);

		let p = &mut field.particles[0];
		p.y = 0.1;
		p.vy = -0.5;
		field.update();
		assert_eq!(field.particles[0].y, H);
	}

	#[test]
	fn connections_follow_distance_threshold() {
		let config = FieldConfig {
			count: 3,
			..FieldConfig::constellation()
		};
		let mut field = ParticleField::new(config, W, H, 8);
		field.particles[0].x = 100.0;
		field.particles[0].y = 100.0;
		field.particles[1].x = 170.0;
		field.particles[1].y = 100.0;
		field.particles[2].x = 400.0;
		field.particles[2].y = 400.0;

		let lines = field.connections();
		assert_eq!(lines.len(), 1);
		assert_eq!((lines[0].a, lines[0].b), (0, 1));
		assert!((lines[0].opacity - 0.5 * CONNECTION_OPACITY).abs() < 1e-12);
	}

	#[test]
	fn connection_opacity_edges() {
		assert_eq!(connection_opacity(140.0, 140.0), None);
		assert_eq!(connection_opacity(10.0, 0.0), None);
		assert!((connection_opacity(0.0, 140.0).unwrap() - 0.15).abs() < 1e-12);
		let o = connection_opacity(35.0, 140.0).unwrap();
		assert!((o - 0.75 * 0.15).abs() < 1e-12);
	}

	#[test]
	fn connections_disabled_without_distance() {
		let field = ParticleField::new(FieldConfig::twinkle_fall(), W, H, 2);
		assert!(field.connections().is_empty());
	}

	#[test]
	fn resize_keeps_positions() {
		let mut field = ParticleField::new(FieldConfig::constellation(), W, H, 11);
		let before: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.x, p.y)).collect();
		field.resize(400.0, 300.0);
		let after: Vec<(f64, f64)> = field.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
		assert_eq!((field.width(), field.height()), (400.0, 300.0));
	}

	#[test]
	fn shooting_stars_expire() {
		let mut field = ParticleField::new(FieldConfig::twinkle_fall(), W, H, 13);
		field.spawn_shooting_star();
		field.spawn_shooting_star();
		assert_eq!(field.shooting_stars.len(), 2);

		// alpha 1.0 fading 0.008 per frame is gone within 125 frames
		for _ in 0..126 {
			field.update();
			for star in &field.shooting_stars {
				assert!(star.alpha > 0.0);
				assert!(star.x <= W + 100.0 && star.y <= H + 100.0);
			}
		}
		assert!(field.shooting_stars.is_empty());
	}
}

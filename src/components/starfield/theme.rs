//! Visual configuration for the starfield.
//!
//! Provides colours, value ranges and the named presets the page variants
//! are built from.

use std::f64::consts::PI;

use rand::Rng;
use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`, opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
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

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A value range starting at `min`, `span` wide.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	/// Lower bound.
	pub min: f64,
	/// Width of the range.
	pub span: f64,
}

impl Span {
	/// Range `min..min + span`.
	pub const fn new(min: f64, span: f64) -> Self {
		Self { min, span }
	}

	/// Fixed value, never varies.
	pub const fn fixed(value: f64) -> Self {
		Self::new(value, 0.0)
	}

	/// Upper bound.
	pub fn max(&self) -> f64 {
		self.min + self.span
	}

	/// Uniform sample in `[min, max)`.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
		self.min + unit(rng) * self.span
	}

	/// Whether `value` lies in `[min, max]`.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max()
	}
}

/// Uniform sample in `[0, 1)`.
pub fn unit<R: Rng>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// What happens to a particle once it drifts off the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallStyle {
	/// Drift in a random direction and wrap to the opposite edge.
	Wrap,
	/// Fall straight down and restart at the top at a random x.
	#[default]
	ResetToTop,
	/// Like `ResetToTop`, with a faint elongated trail drawn above each dot.
	Trail,
}

/// Alpha oscillation around a particle's base alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwinkleConfig {
	/// Alpha change per frame.
	pub speed: Span,
	/// Turn back down once alpha reaches `base + rise`.
	pub rise: f64,
	/// Turn back up once alpha reaches `base - dip`.
	pub dip: f64,
	/// Lowest alpha ever drawn.
	pub floor: f64,
}

/// Shooting star spawn and fade parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStyle {
	/// Spawn x as a fraction of surface width: `[0, origin_x)`.
	pub origin_x: f64,
	/// Spawn y as a fraction of surface height: `[0, origin_y)`.
	pub origin_y: f64,
	/// Tail length in pixels.
	pub length: Span,
	/// Pixels per frame.
	pub speed: Span,
	/// Travel direction in radians.
	pub angle: f64,
	/// Total angle jitter, applied as `(u - 0.5) * jitter`.
	pub jitter: f64,
	/// Alpha lost per frame.
	pub fade: f64,
	/// Distance past the surface edge before a star is dropped.
	pub exit_margin: f64,
	/// Tail stroke width.
	pub line_width: f64,
	/// Radius of the bright head.
	pub head_radius: f64,
}

impl Default for ShootingStyle {
	fn default() -> Self {
		Self {
			origin_x: 0.8,
			origin_y: 0.4,
			length: Span::new(40.0, 60.0),
			speed: Span::new(4.0, 6.0),
			angle: PI / 4.0,
			jitter: 0.3,
			fade: 0.008,
			exit_margin: 100.0,
			line_width: 1.5,
			head_radius: 1.5,
		}
	}
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Number of particles.
	pub count: usize,
	/// Dot radius in pixels.
	pub radius: Span,
	/// Pixels per frame.
	pub speed: Span,
	/// Resting alpha.
	pub base_alpha: Span,
	/// `None` keeps alpha steady.
	pub twinkle: Option<TwinkleConfig>,
	/// Edge behaviour and trail.
	pub fall: FallStyle,
	/// How far off-surface a particle may travel before wrapping or resetting.
	pub edge_margin: f64,
	/// Pairs closer than this are joined by a line. `0` disables.
	pub connection_distance: f64,
	/// Milliseconds between shooting stars. `0` disables.
	pub shooting_interval_ms: u32,
	/// How shooting stars look and move.
	pub shooting: ShootingStyle,
	/// Dot, line and streak color.
	pub color: Color,
}

/// Named starfield looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
	/// Twinkling stars sinking slowly, with shooting stars.
	#[default]
	TwinkleFall,
	/// Falling dots with faint trails.
	FallingSnow,
	/// Drifting dots joined by lines.
	Constellation,
}

impl Preset {
	/// Field settings for this look.
	pub fn config(self) -> FieldConfig {
		match self {
			Preset::TwinkleFall => FieldConfig::twinkle_fall(),
			Preset::FallingSnow => FieldConfig::falling_snow(),
			Preset::Constellation => FieldConfig::constellation(),
		}
	}
}

impl FieldConfig {
	/// Slowly sinking, twinkling stars with periodic shooting stars (default)
	pub fn twinkle_fall() -> Self {
		Self {
			count: 160,
			radius: Span::new(0.3, 1.4),
			speed: Span::new(0.02, 0.15),
			base_alpha: Span::new(0.2, 0.6),
			twinkle: Some(TwinkleConfig {
				speed: Span::new(0.005, 0.02),
				rise: 0.3,
				dip: 0.2,
				floor: 0.05,
			}),
			fall: FallStyle::ResetToTop,
			edge_margin: 4.0,
			connection_distance: 0.0,
			shooting_interval_ms: 3000,
			shooting: ShootingStyle::default(),
			color: Color::rgb(255, 255, 255),
		}
	}

	/// Fast falling flakes with comet-like trails
	pub fn falling_snow() -> Self {
		Self {
			count: 100,
			radius: Span::new(0.5, 2.0),
			speed: Span::new(1.0, 3.0),
			base_alpha: Span::new(0.2, 0.6),
			twinkle: None,
			fall: FallStyle::Trail,
			edge_margin: 4.0,
			connection_distance: 0.0,
			shooting_interval_ms: 0,
			shooting: ShootingStyle::default(),
			color: Color::rgb(255, 255, 255),
		}
	}

	/// Drifting dots joined by faint lines when close
	pub fn constellation() -> Self {
		Self {
			count: 80,
			radius: Span::new(0.5, 2.0),
			speed: Span::new(0.1, 0.4),
			base_alpha: Span::new(0.2, 0.6),
			twinkle: None,
			fall: FallStyle::Wrap,
			edge_margin: 0.0,
			connection_distance: 140.0,
			shooting_interval_ms: 0,
			shooting: ShootingStyle::default(),
			color: Color::rgb(255, 255, 255),
		}
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::twinkle_fall()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn span_samples_stay_in_range() {
		let mut rng = SmallRng::seed_from_u64(7);
		let span = Span::new(0.3, 1.4);
		for _ in 0..1000 {
			let v = span.sample(&mut rng);
			assert!(span.contains(v), "{v} outside {span:?}");
		}
		assert_eq!(Span::fixed(2.0).sample(&mut rng), 2.0);
	}

	#[test]
	fn presets_match_their_looks() {
		let twinkle = Preset::TwinkleFall.config();
		assert_eq!(twinkle.count, 160);
		assert_eq!(twinkle.fall, FallStyle::ResetToTop);
		assert_eq!(twinkle.shooting_interval_ms, 3000);
		assert!(twinkle.twinkle.is_some());

		let snow = Preset::FallingSnow.config();
		assert_eq!(snow.fall, FallStyle::Trail);
		assert_eq!(snow.speed, Span::new(1.0, 3.0));

		let constellation = Preset::Constellation.config();
		assert_eq!(constellation.fall, FallStyle::Wrap);
		assert_eq!(constellation.connection_distance, 140.0);
		assert_eq!(constellation.edge_margin, 0.0);
	}

	#[test]
	fn color_css() {
		assert_eq!(Color::rgb(255, 255, 255).to_css(), "#ffffff");
		assert_eq!(
			Color::rgb(255, 255, 255).with_alpha(0.5).to_css(),
			"rgba(255, 255, 255, 0.5)"
		);
	}

	#[test]
	fn preset_names_are_kebab_case() {
		let preset: Preset = serde_json::from_str("\"falling-snow\"").unwrap();
		assert_eq!(preset, Preset::FallingSnow);
	}
}

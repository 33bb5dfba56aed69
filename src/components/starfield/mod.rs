//! Animated star background.
//!
//! Two renderings share this module:
//! - A canvas [`ParticleField`] with twinkling, falling or drifting dots,
//!   optional constellation lines and periodic shooting stars
//! - A DOM variant that mounts CSS-animated `<div class="star">` nodes
//!
//! The canvas is preferred when the page provides one; otherwise the star
//! container is filled. With neither present nothing is started.

mod component;
mod particles;
mod render;
mod shooting;
mod star_nodes;
/// Colors, ranges and presets.
pub mod theme;

use serde::Deserialize;
use web_sys::Document;

pub use component::attach_canvas;
pub use particles::{Connection, Particle, ParticleField};
pub use shooting::ShootingStar;
pub use star_nodes::{StarNode, StarNodes, attach_container};
pub use theme::{Color, FallStyle, FieldConfig, Preset};

/// Page-level starfield settings.
///
/// A preset picks the overall look; the optional fields override it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Id of the canvas to draw on.
	pub canvas_id: String,
	/// Id of the container for DOM star nodes, used when no canvas exists.
	pub container_id: String,
	/// Base look.
	pub preset: Preset,
	/// Particle count.
	pub count: Option<usize>,
	/// Connection line distance in pixels, `0` disables.
	pub connection_distance: Option<f64>,
	/// Shooting star interval in milliseconds, `0` disables.
	pub shooting_interval_ms: Option<u32>,
	/// Particle and line color.
	pub color: Option<Color>,
	/// Number of DOM star nodes.
	pub node_count: usize,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			canvas_id: "starfield".into(),
			container_id: "stars".into(),
			preset: Preset::default(),
			count: None,
			connection_distance: None,
			shooting_interval_ms: None,
			color: None,
			node_count: 60,
		}
	}
}

impl StarfieldConfig {
	/// Resolve the preset and overrides into a field configuration.
	pub fn field_config(&self) -> FieldConfig {
		let mut config = self.preset.config();
		if let Some(count) = self.count {
			config.count = count;
		}
		if let Some(distance) = self.connection_distance {
			config.connection_distance = distance.max(0.0);
		}
		if let Some(interval) = self.shooting_interval_ms {
			config.shooting_interval_ms = interval;
		}
		if let Some(color) = self.color {
			config.color = color;
		}
		config
	}
}

/// Start whichever star background the page has room for.
pub fn attach(document: &Document, config: &StarfieldConfig) -> Option<()> {
	attach_canvas(document, &config.canvas_id, config.field_config())
		.or_else(|| attach_container(document, &config.container_id, config.node_count))
}

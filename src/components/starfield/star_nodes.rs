//! DOM-node star field.
//!
//! Instead of drawing on a canvas, this variant renders one `<div class="star">`
//! per star into a container and leaves the motion to CSS keyframes. Each star
//! carries its own size, timing, drift and brightness as CSS custom properties.

use leptos::prelude::*;
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::component::entropy_seed;
use super::theme::{Span, unit};

const SIZE_PX: Span = Span::new(0.5, 2.0);
const LEFT_PERCENT: Span = Span::new(0.0, 100.0);
const FALL_SECONDS: Span = Span::new(6.0, 12.0);
const DELAY_SECONDS: Span = Span::new(0.0, 15.0);
const DRIFT_PX: f64 = 40.0;
const BRIGHTNESS: Span = Span::new(0.1, 0.35);

/// Appearance and timing of one CSS-animated star.
#[derive(Clone, Debug, PartialEq)]
pub struct StarNode {
	/// Horizontal position, percent of the container.
	pub left: f64,
	/// Diameter in pixels.
	pub size: f64,
	/// Seconds per fall.
	pub fall_duration: f64,
	/// Seconds before the first fall.
	pub delay: f64,
	/// Sideways drift in pixels.
	pub drift: f64,
	/// Peak opacity.
	pub brightness: f64,
}

impl StarNode {
	/// Sample every property from its range.
	pub fn random<R: Rng>(rng: &mut R) -> Self {
		Self {
			size: SIZE_PX.sample(rng),
			left: LEFT_PERCENT.sample(rng),
			fall_duration: FALL_SECONDS.sample(rng),
			delay: DELAY_SECONDS.sample(rng),
			drift: (unit(rng) - 0.5) * DRIFT_PX,
			brightness: BRIGHTNESS.sample(rng),
		}
	}

	/// Inline style consumed by the page's `.star` keyframes.
	pub fn style(&self) -> String {
		format!(
			"left: {:.2}%; --size: {:.2}px; --fall-duration: {:.2}s; --delay: {:.2}s; --drift: {:.2}px; --brightness: {:.2}",
			self.left, self.size, self.fall_duration, self.delay, self.drift, self.brightness
		)
	}
}

/// Generate `count` stars from a fixed seed.
pub fn generate(count: usize, seed: u64) -> Vec<StarNode> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count).map(|_| StarNode::random(&mut rng)).collect()
}

/// Renders a list of CSS-animated stars.
#[component]
pub fn StarNodes(stars: Vec<StarNode>) -> impl IntoView {
	stars
		.into_iter()
		.map(|star| view! { <div class="star" style=star.style()></div> })
		.collect_view()
}

/// Mount `count` stars into `<div id=container_id>`.
///
/// Returns `None` when the container is missing.
pub fn attach_container(document: &Document, container_id: &str, count: usize) -> Option<()> {
	let container: HtmlElement = document.get_element_by_id(container_id)?.dyn_into().ok()?;
	let stars = generate(count, entropy_seed());

	leptos::mount::mount_to(container, move || view! { <StarNodes stars=stars /> }).forget();
	info!("portfolio-fx: mounted {count} star nodes into #{container_id}");
	Some(())
}

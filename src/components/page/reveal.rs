//! One-shot reveal-on-scroll.

use log::warn;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::query_all;

/// Which elements reveal and how eagerly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// Elements to reveal.
	pub selector: String,
	/// Class added the first time an element becomes visible.
	pub class: String,
	/// Fraction of the element that must be visible.
	pub threshold: f64,
	/// Observer root margin, CSS syntax.
	pub root_margin: String,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".reveal".into(),
			class: "visible".into(),
			threshold: 0.1,
			root_margin: "0px".into(),
		}
	}
}

/// How a page's reveal elements get their class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPlan {
	/// Watch each element and reveal it on first intersection.
	Observe,
	/// No observer available: reveal everything now.
	ShowAll,
}

/// Pick the plan for `item_count` elements; `None` when there is nothing to
/// reveal.
pub fn reveal_plan(item_count: usize, observer_supported: bool) -> Option<RevealPlan> {
	match (item_count, observer_supported) {
		(0, _) => None,
		(_, true) => Some(RevealPlan::Observe),
		(_, false) => Some(RevealPlan::ShowAll),
	}
}

/// Whether an observed element gets the class now. Once revealed it stays
/// revealed and is no longer watched.
pub fn should_reveal(is_intersecting: bool, already_revealed: bool) -> bool {
	is_intersecting && !already_revealed
}

fn observer_supported() -> bool {
	web_sys::window()
		.map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
		.unwrap_or(false)
}

fn reveal_all(items: &[Element], class: &str) {
	for el in items {
		let _ = el.class_list().add_1(class);
	}
}

/// Add the reveal class to each element the first time it scrolls into view.
///
/// Without `IntersectionObserver` every element is revealed immediately.
pub fn bind_scroll_reveal(document: &Document, config: &RevealConfig) -> Option<()> {
	let items = query_all(document, &config.selector);
	if reveal_plan(items.len(), observer_supported())? == RevealPlan::ShowAll {
		reveal_all(&items, &config.class);
		return Some(());
	}

	let class = config.class.clone();
	let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				let target = entry.target();
				let revealed = target.class_list().contains(&class);
				if should_reveal(entry.is_intersecting(), revealed) {
					let _ = target.class_list().add_1(&class);
				}
				if entry.is_intersecting() || revealed {
					observer.unobserve(&target);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold.clamp(0.0, 1.0)));
	options.set_root_margin(&config.root_margin);

	let observer = match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
		Ok(observer) => observer,
		Err(e) => {
			warn!("portfolio-fx: reveal observer unavailable, showing all: {:?}", e);
			reveal_all(&items, &config.class);
			return Some(());
		}
	};
	on_entries.forget();

	for el in &items {
		observer.observe(el);
	}
	Some(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nothing_to_reveal_is_inactive() {
		assert_eq!(reveal_plan(0, true), None);
		assert_eq!(reveal_plan(0, false), None);
	}

	#[test]
	fn missing_observer_shows_everything() {
		assert_eq!(reveal_plan(3, false), Some(RevealPlan::ShowAll));
		assert_eq!(reveal_plan(3, true), Some(RevealPlan::Observe));
	}

	#[test]
	fn reveals_once_on_first_intersection() {
		// Scroll in, out and back in again.
		let mut revealed = false;
		let mut reveals = 0;
		for intersecting in [false, true, false, true] {
			if should_reveal(intersecting, revealed) {
				revealed = true;
				reveals += 1;
			}
		}
		assert!(revealed);
		assert_eq!(reveals, 1);
		assert!(!should_reveal(false, false));
		assert!(!should_reveal(true, true));
	}

	#[test]
	fn config_defaults_and_overrides() {
		let config = RevealConfig::default();
		assert_eq!(config.selector, ".reveal");
		assert_eq!(config.threshold, 0.1);

		let config: RevealConfig = serde_json::from_str(
			r#"{ "selector": "[data-reveal]", "class": "revealed", "threshold": 0.15, "root_margin": "0px 0px -40px 0px" }"#,
		)
		.unwrap();
		assert_eq!(config.class, "revealed");
		assert_eq!(config.root_margin, "0px 0px -40px 0px");
	}
}

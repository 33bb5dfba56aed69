//! Client-side card filtering: project category buttons and blog search.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::dom::{listen, query_all, set_class, set_shown};

/// Filter value that matches every card.
pub const SHOW_ALL: &str = "all";

/// Delay before a re-shown card animates back in.
const FADE_IN_DELAY_MS: i32 = 30;

/// Selectors and attribute names for the project filter bar.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectFilterConfig {
	/// Filter buttons.
	pub button_selector: String,
	/// Cards being filtered.
	pub card_selector: String,
	/// Button attribute holding its filter value.
	pub filter_attr: String,
	/// Card attribute holding its categories.
	pub category_attr: String,
	/// Class marking the selected button.
	pub active_class: String,
}

impl Default for ProjectFilterConfig {
	fn default() -> Self {
		Self {
			button_selector: ".filter-btn".into(),
			card_selector: ".project-card[data-category]".into(),
			filter_attr: "data-filter".into(),
			category_attr: "data-category".into(),
			active_class: "active".into(),
		}
	}
}

/// Blog search input and the cards it filters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogSearchConfig {
	/// Id of the search input.
	pub input_id: String,
	/// Cards being searched.
	pub card_selector: String,
	/// Card attribute searched against.
	pub title_attr: String,
}

impl Default for BlogSearchConfig {
	fn default() -> Self {
		Self {
			input_id: "blogSearch".into(),
			card_selector: ".blog-card[data-title]".into(),
			title_attr: "data-title".into(),
		}
	}
}

/// Whether a card in `category` is shown under `filter`.
///
/// Categories may list several values, so this is a substring match.
pub fn matches_filter(filter: &str, category: &str) -> bool {
	filter == SHOW_ALL || category.contains(filter)
}

/// Which of `count` buttons end up active after button `clicked` is pressed.
pub fn active_states(count: usize, clicked: usize) -> Vec<bool> {
	(0..count).map(|i| i == clicked).collect()
}

/// Trimmed, lowercased search query.
pub fn normalize_query(raw: &str) -> String {
	raw.trim().to_lowercase()
}

/// Whether a card titled `title` matches an already normalized `query`.
pub fn matches_query(query: &str, title: &str) -> bool {
	query.is_empty() || title.to_lowercase().contains(query)
}

fn set_style(el: &Element, opacity: &str, transform: &str) {
	if let Some(el) = el.dyn_ref::<HtmlElement>() {
		let style = el.style();
		let _ = style.set_property("opacity", opacity);
		let _ = style.set_property("transform", transform);
	}
}

/// Start a card hidden and slide it in shortly after.
fn fade_in(card: &Element) {
	set_style(card, "0", "translateY(10px)");
	let Some(window) = web_sys::window() else {
		return;
	};
	let card = card.clone();
	let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
		set_style(&card, "1", "translateY(0)");
	});
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), FADE_IN_DELAY_MS);
}

/// Clicking a filter button activates it and shows only matching cards.
pub fn bind_project_filters(document: &Document, config: &ProjectFilterConfig) -> Option<()> {
	let buttons = query_all(document, &config.button_selector);
	let cards = query_all(document, &config.card_selector);
	if buttons.is_empty() || cards.is_empty() {
		return None;
	}

	for (index, button) in buttons.iter().enumerate() {
		let (button_c, all_buttons, cards) = (button.clone(), buttons.clone(), cards.clone());
		let config = config.clone();
		listen(button, "click", move || {
			let states = active_states(all_buttons.len(), index);
			for (b, active) in all_buttons.iter().zip(states) {
				set_class(b, &config.active_class, active);
			}

			let filter = button_c.get_attribute(&config.filter_attr).unwrap_or_default();
			for card in &cards {
				let category = card.get_attribute(&config.category_attr).unwrap_or_default();
				let shown = matches_filter(&filter, &category);
				set_shown(card, shown);
				if shown {
					fade_in(card);
				}
			}
		});
	}
	Some(())
}

/// Filter blog cards by title as the search input changes.
pub fn bind_blog_search(document: &Document, config: &BlogSearchConfig) -> Option<()> {
	let input: HtmlInputElement = document.get_element_by_id(&config.input_id)?.dyn_into().ok()?;
	let cards = query_all(document, &config.card_selector);
	if cards.is_empty() {
		return None;
	}

	let (input_c, title_attr) = (input.clone(), config.title_attr.clone());
	listen(&input, "input", move || {
		let query = normalize_query(&input_c.value());
		for card in &cards {
			let title = card.get_attribute(&title_attr).unwrap_or_default();
			set_shown(card, matches_query(&query, &title));
		}
	});
	Some(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_shows_every_card() {
		for category in ["web", "data viz", "", "ml"] {
			assert!(matches_filter(SHOW_ALL, category));
		}
	}

	#[test]
	fn filter_is_substring_match() {
		assert!(matches_filter("web", "web"));
		assert!(matches_filter("web", "data web"));
		assert!(matches_filter("web", "webapp"));
		assert!(!matches_filter("web", "data"));
		assert!(!matches_filter("web", ""));
	}

	#[test]
	fn only_clicked_button_is_active() {
		let states = active_states(4, 2);
		assert_eq!(states, vec![false, false, true, false]);
		assert_eq!(states.iter().filter(|&&a| a).count(), 1);

		assert_eq!(active_states(1, 0), vec![true]);
		assert!(active_states(0, 0).is_empty());
	}

	#[test]
	fn empty_query_shows_all() {
		let query = normalize_query("   ");
		assert!(matches_query(&query, "Anything"));
		assert!(matches_query(&query, ""));
	}

	#[test]
	fn query_is_case_insensitive_and_trimmed() {
		let query = normalize_query("  DaTa ");
		assert_eq!(query, "data");
		assert!(matches_query(&query, "Big Data Pipelines"));
		assert!(matches_query(&query, "database tuning"));
		assert!(!matches_query(&query, "Rust ownership"));
	}
}

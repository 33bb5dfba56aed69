//! Navbar scroll state and active-section highlighting.

use log::debug;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::dom::{listen_passive, query_all, scroll_y, set_class};

/// Navbar behaviour settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
	/// Id of the navbar element.
	pub navbar_id: String,
	/// Class toggled on the navbar once the page scrolls.
	pub scrolled_class: String,
	/// Scroll offset in pixels past which the navbar counts as scrolled.
	pub threshold: f64,
	/// Sections tracked for highlighting; each needs an `id`.
	pub section_selector: String,
	/// Nav links pointing at `#<section id>`.
	pub link_selector: String,
	/// Class marking the current section's link.
	pub active_class: String,
	/// How far ahead of a section's top it already counts as current.
	pub section_lead: f64,
}

impl Default for NavbarConfig {
	fn default() -> Self {
		Self {
			navbar_id: "nav".into(),
			scrolled_class: "scrolled".into(),
			threshold: 50.0,
			section_selector: "section[id]".into(),
			link_selector: ".nav-menu a[href^=\"#\"]".into(),
			active_class: "active".into(),
			section_lead: 120.0,
		}
	}
}

/// Whether the page has scrolled past `threshold`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
	scroll_y > threshold
}

/// Index of the section the reader is in: the last one whose top, less
/// `lead`, has been scrolled past.
pub fn current_section(tops: &[f64], scroll_y: f64, lead: f64) -> Option<usize> {
	tops.iter().rposition(|&top| scroll_y >= top - lead)
}

/// Whether the navbar follows scrolling. One that starts out scrolled is a
/// sub-page's fixed style and keeps it.
pub fn tracks_scroll(starts_scrolled: bool) -> bool {
	!starts_scrolled
}

/// Toggle the scrolled class on the navbar as the page scrolls.
///
/// A navbar that already carries the class at start-up (sub-pages) is left
/// alone.
pub fn bind_navbar(document: &Document, config: &NavbarConfig) -> Option<()> {
	let window = web_sys::window()?;
	let nav = document.get_element_by_id(&config.navbar_id)?;
	if !tracks_scroll(nav.class_list().contains(&config.scrolled_class)) {
		debug!("portfolio-fx: navbar starts scrolled, leaving it alone");
		return Some(());
	}

	let (class, threshold) = (config.scrolled_class.clone(), config.threshold);
	let update = move || set_class(&nav, &class, is_scrolled(scroll_y(), threshold));
	update();
	listen_passive(&window, "scroll", update);
	Some(())
}

fn section_top(section: &Element) -> f64 {
	section
		.dyn_ref::<HtmlElement>()
		.map(|el| el.offset_top() as f64)
		.unwrap_or(0.0)
}

/// Mark the nav link for the current section active on scroll.
pub fn bind_section_highlight(document: &Document, config: &NavbarConfig) -> Option<()> {
	let window = web_sys::window()?;
	let sections = query_all(document, &config.section_selector);
	let links = query_all(document, &config.link_selector);
	if sections.is_empty() || links.is_empty() {
		return None;
	}

	let (active, lead) = (config.active_class.clone(), config.section_lead);
	listen_passive(&window, "scroll", move || {
		// Offsets shift as content loads, so read them on every scroll.
		let tops: Vec<f64> = sections.iter().map(section_top).collect();
		let current = current_section(&tops, scroll_y(), lead)
			.and_then(|i| sections[i].get_attribute("id"))
			.map(|id| format!("#{id}"));

		for link in &links {
			let is_current = current.is_some() && link.get_attribute("href") == current;
			set_class(link, &active, is_current);
		}
	});
	Some(())
}

//! portfolio-fx: decorations for a static portfolio site.
//!
//! This crate provides a WASM client that animates a starfield background and
//! wires up the page's small interactive touches: navbar scroll state, active
//! section highlighting, the mobile menu, a typing hero, reveal-on-scroll and
//! client-side card filtering.

use log::{Level, debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod components;
pub mod config;

pub use components::starfield::{FieldConfig, ParticleField, Preset, StarfieldConfig};
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

fn activate(name: &str, result: Option<()>) {
	match result {
		Some(()) => debug!("portfolio-fx: {name} active"),
		None => debug!("portfolio-fx: {name} not on this page"),
	}
}

/// Load the configuration and start every decoration the page supports.
pub fn decorate(document: &Document) {
	use components::page;
	use components::starfield;

	let config = load_site_config(document);

	activate("starfield", starfield::attach(document, &config.starfield));
	activate("navbar", page::bind_navbar(document, &config.navbar));
	activate("section highlight", page::bind_section_highlight(document, &config.navbar));
	activate("mobile menu", page::bind_mobile_menu(document, &config.menu));
	activate("typing effect", page::bind_typing(document, &config.typing));
	activate("scroll reveal", page::bind_scroll_reveal(document, &config.reveal));
	activate("project filters", page::bind_project_filters(document, &config.project_filters));
	activate("blog search", page::bind_blog_search(document, &config.blog_search));
}

/// Decorate the current page once its markup has been parsed.
pub fn decorate_page() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("portfolio-fx: no document, nothing to decorate");
		return;
	};

	if document.ready_state() != "loading" {
		decorate(&document);
		return;
	}

	let doc = document.clone();
	let on_ready = Closure::once_into_js(move || decorate(&doc));
	if let Err(e) =
		document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
	{
		warn!("portfolio-fx: failed to wait for DOMContentLoaded: {:?}", e);
	}
}

//! Small DOM helpers shared by the page behaviours.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, NodeList};

fn elements(list: NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	match document.query_selector_all(selector) {
		Ok(list) => elements(list),
		Err(e) => {
			warn!("portfolio-fx: bad selector {selector:?}: {:?}", e);
			Vec::new()
		}
	}
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
	root.query_selector_all(selector)
		.map(elements)
		.unwrap_or_default()
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
	F: FnMut() + 'static,
{
	let cb = Closure::<dyn FnMut()>::new(handler);
	if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
		warn!("portfolio-fx: failed to listen for {event}: {:?}", e);
	}
	cb.forget();
}

/// Like [`listen`], but marks the listener passive (used for scroll).
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F)
where
	F: FnMut() + 'static,
{
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	let cb = Closure::<dyn FnMut()>::new(handler);
	if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		cb.as_ref().unchecked_ref(),
		&options,
	) {
		warn!("portfolio-fx: failed to listen for {event}: {:?}", e);
	}
	cb.forget();
}

/// Add or remove `class` depending on `on`.
pub fn set_class(el: &Element, class: &str, on: bool) {
	let _ = el.class_list().toggle_with_force(class, on);
}

/// Show or hide an element through its inline `display`.
pub fn set_shown(el: &Element, shown: bool) {
	if let Some(el) = el.dyn_ref::<HtmlElement>() {
		let _ = el
			.style()
			.set_property("display", if shown { "" } else { "none" });
	}
}

/// Current vertical scroll offset, `0` when unavailable.
pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

//! Mobile menu open/close toggle.

use serde::Deserialize;
use web_sys::{Document, Element};

use super::dom::{listen, query_all_in, set_class};

/// Ids of the menu toggle button and the menu it opens.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
	/// Id of the hamburger button.
	pub toggle_id: String,
	/// Id of the collapsible menu.
	pub menu_id: String,
	/// Class carried by both elements while the menu is open.
	pub open_class: String,
}

impl Default for MenuConfig {
	fn default() -> Self {
		Self {
			toggle_id: "navToggle".into(),
			menu_id: "navMenu".into(),
			open_class: "open".into(),
		}
	}
}

/// Something the reader did to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
	/// Clicked the toggle button.
	Toggle,
	/// Followed a link inside the menu.
	LinkClick,
}

/// Whether the menu is open after `event`, given whether it was open before.
pub fn next_open(open: bool, event: MenuEvent) -> bool {
	match event {
		MenuEvent::Toggle => !open,
		MenuEvent::LinkClick => false,
	}
}

/// Apply `event`, driving both elements from the toggle's state so they
/// can't drift apart.
fn apply(toggle: &Element, menu: &Element, class: &str, event: MenuEvent) {
	let open = next_open(toggle.class_list().contains(class), event);
	set_class(toggle, class, open);
	set_class(menu, class, open);
}

/// Toggle button flips the menu open; any link inside closes it.
pub fn bind_mobile_menu(document: &Document, config: &MenuConfig) -> Option<()> {
	let toggle = document.get_element_by_id(&config.toggle_id)?;
	let menu = document.get_element_by_id(&config.menu_id)?;

	let (toggle_c, menu_c, class) = (toggle.clone(), menu.clone(), config.open_class.clone());
	listen(&toggle, "click", move || apply(&toggle_c, &menu_c, &class, MenuEvent::Toggle));

	for link in query_all_in(&menu, "a") {
		let (toggle_c, menu_c, class) = (toggle.clone(), menu.clone(), config.open_class.clone());
		listen(&link, "click", move || apply(&toggle_c, &menu_c, &class, MenuEvent::LinkClick));
	}
	Some(())
}

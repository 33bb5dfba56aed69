//! Site-wide configuration.
//!
//! Pages may embed a JSON block to tune the decorations:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "starfield": { "preset": "constellation" }, "navbar": { "threshold": 60 } }
//! </script>
//! ```
//!
//! Every section and field is optional; anything left out keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use crate::components::page::{
	BlogSearchConfig, MenuConfig, NavbarConfig, ProjectFilterConfig, RevealConfig, TypingConfig,
};
use crate::components::starfield::StarfieldConfig;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Configuration for every decoration on the page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Background animation.
	pub starfield: StarfieldConfig,
	/// Navbar scroll state and section highlight.
	pub navbar: NavbarConfig,
	/// Mobile menu.
	pub menu: MenuConfig,
	/// Hero typing effect.
	pub typing: TypingConfig,
	/// Reveal-on-scroll.
	pub reveal: RevealConfig,
	/// Project category buttons.
	pub project_filters: ProjectFilterConfig,
	/// Blog title search.
	pub blog_search: BlogSearchConfig,
}

impl SiteConfig {
	/// Parse a configuration block; missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Load the page configuration, falling back to defaults when the element is
/// absent or its contents don't parse.
pub fn load_site_config(document: &Document) -> SiteConfig {
	let Some(json_text) = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-fx: loaded site config");
			config
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse site config, using defaults: {}", e);
			SiteConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::Preset;

	#[test]
	fn empty_object_is_default() {
		assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
	}

	#[test]
	fn partial_sections_keep_defaults() {
		let config = SiteConfig::from_json(
			r#"{
				"starfield": { "preset": "falling-snow", "count": 120 },
				"navbar": { "navbar_id": "navbar", "threshold": 60 },
				"typing": { "roles": ["Go", "Rust"] }
			}"#,
		)
		.unwrap();

		assert_eq!(config.starfield.preset, Preset::FallingSnow);
		assert_eq!(config.starfield.field_config().count, 120);
		assert_eq!(config.navbar.navbar_id, "navbar");
		assert_eq!(config.navbar.scrolled_class, "scrolled");
		assert_eq!(config.typing.roles, vec!["Go".to_string(), "Rust".to_string()]);
		assert_eq!(config.typing.timing.full_pause_ms, 2000);
		assert_eq!(config.menu, MenuConfig::default());
		assert_eq!(config.blog_search.input_id, "blogSearch");
	}

	#[test]
	fn invalid_json_is_an_error() {
		assert!(SiteConfig::from_json("{ starfield: }").is_err());
		assert!(SiteConfig::from_json(r#"{ "starfield": { "preset": "nebula" } }"#).is_err());
	}
}

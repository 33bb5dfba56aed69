//! Page behaviours layered on the static markup.
//!
//! Each `bind_*` function looks up the elements it needs and wires its event
//! handlers. A missing element means the behaviour does not apply to this
//! page, reported as `None`.

mod dom;
/// Project filters and blog search.
pub mod filters;
/// Mobile menu.
pub mod menu;
/// Navbar state and section highlight.
pub mod nav;
/// Reveal-on-scroll.
pub mod reveal;
/// Hero typing effect.
pub mod typing;

pub use filters::{BlogSearchConfig, ProjectFilterConfig, bind_blog_search, bind_project_filters};
pub use menu::{MenuConfig, bind_mobile_menu};
pub use nav::{NavbarConfig, bind_navbar, bind_section_highlight};
pub use reveal::{RevealConfig, bind_scroll_reveal};
pub use typing::{Typewriter, TypingConfig, bind_typing};

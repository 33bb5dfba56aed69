//! Page decorations, grouped by concern.

pub mod page;
pub mod starfield;

//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use portfolio_fx::{decorate_page, init_logging};

fn main() {
	init_logging();
	decorate_page();
}

//! Binds a [`ParticleField`] to a canvas element already on the page.
//!
//! The canvas is sized to the viewport and kept in sync with window resizes.
//! An animation loop runs via `requestAnimationFrame`, updating and redrawing
//! the field each frame, while shooting stars are launched from a separate
//! wall-clock interval.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render;
use super::theme::FieldConfig;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Seed for the particle RNG, drawn from the browser.
pub(super) fn entropy_seed() -> u64 {
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	((js_sys::Date::now() as u64) << 20) ^ noise
}

/// Start the animated field on `<canvas id=canvas_id>`.
///
/// Returns `None` without side effects when the canvas or its 2D context is
/// unavailable.
pub fn attach_canvas(document: &Document, canvas_id: &str, config: FieldConfig) -> Option<()> {
	let window = web_sys::window()?;
	let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let interval_ms = config.shooting_interval_ms;
	let count = config.count;
	let field = Rc::new(RefCell::new(ParticleField::new(config, w, h, entropy_seed())));
	info!("portfolio-fx: starfield started with {count} particles ({w}x{h})");

	let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		field_resize.borrow_mut().resize(nw, nh);
	});
	if let Err(e) = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
		warn!("portfolio-fx: failed to watch resize: {:?}", e);
	}
	on_resize.forget();

	if interval_ms > 0 {
		let field_spawn = field.clone();
		let spawn = Closure::<dyn FnMut()>::new(move || {
			field_spawn.borrow_mut().spawn_shooting_star();
		});
		if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
			spawn.as_ref().unchecked_ref(),
			interval_ms.min(i32::MAX as u32) as i32,
		) {
			warn!("portfolio-fx: failed to schedule shooting stars: {:?}", e);
		}
		spawn.forget();
	}

	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		{
			let mut field = field.borrow_mut();
			field.update();
			render::render(&field, &ctx);
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}

	Some(())
}

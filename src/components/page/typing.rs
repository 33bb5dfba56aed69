//! Hero typing effect.
//!
//! Types each role one character at a time, holds the full word, deletes it
//! again, then moves on to the next role, forever. [`Typewriter`] is the pure
//! state machine; [`bind_typing`] drives it with `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Delays between typing steps, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingTiming {
	/// Per character typed.
	pub type_ms: u32,
	/// Per character deleted.
	pub delete_ms: u32,
	/// Hold after a word is fully typed.
	pub full_pause_ms: u32,
	/// Hold after a word is fully deleted.
	pub empty_pause_ms: u32,
}

impl Default for TypingTiming {
	fn default() -> Self {
		Self {
			type_ms: 80,
			delete_ms: 40,
			full_pause_ms: 2000,
			empty_pause_ms: 400,
		}
	}
}

/// Where to type and what.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	/// Id of the element whose text is typed.
	pub target_id: String,
	/// Words cycled through, in order.
	pub roles: Vec<String>,
	/// Step delays, given inline next to the other fields.
	#[serde(flatten)]
	pub timing: TypingTiming,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			target_id: "typed".into(),
			roles: [
				"Data Analyst",
				"Dashboard Builder",
				"SQL Enthusiast",
				"MSc Data Science Student",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			timing: TypingTiming::default(),
		}
	}
}

/// What to display after a tick, and how long until the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
	/// Visible prefix of the current role.
	pub text: String,
	/// Wait before the next tick.
	pub delay_ms: u32,
}

/// Typing state: which role, how many characters shown, and direction.
#[derive(Clone, Debug)]
pub struct Typewriter {
	roles: Vec<String>,
	timing: TypingTiming,
	role: usize,
	chars: usize,
	deleting: bool,
}

impl Typewriter {
	/// `None` when there is nothing to type.
	pub fn new(roles: Vec<String>, timing: TypingTiming) -> Option<Self> {
		if roles.is_empty() {
			return None;
		}
		Some(Self {
			roles,
			timing,
			role: 0,
			chars: 0,
			deleting: false,
		})
	}

	/// Index of the role being typed.
	pub fn role(&self) -> usize {
		self.role
	}

	/// Advance one step.
	pub fn tick(&mut self) -> TypingFrame {
		let word = &self.roles[self.role];
		let len = word.chars().count();

		let mut delay_ms = if self.deleting {
			self.chars = self.chars.saturating_sub(1);
			self.timing.delete_ms
		} else {
			self.chars = (self.chars + 1).min(len);
			self.timing.type_ms
		};
		let text: String = word.chars().take(self.chars).collect();

		if !self.deleting && self.chars == len {
			delay_ms = self.timing.full_pause_ms;
			self.deleting = true;
		} else if self.deleting && self.chars == 0 {
			delay_ms = self.timing.empty_pause_ms;
			self.deleting = false;
			self.role = (self.role + 1) % self.roles.len();
		}

		TypingFrame { text, delay_ms }
	}
}

/// Run the typing effect in `<… id=target_id>`.
pub fn bind_typing(document: &Document, config: &TypingConfig) -> Option<()> {
	let window = web_sys::window()?;
	let target = document.get_element_by_id(&config.target_id)?;
	let mut writer = Typewriter::new(config.roles.clone(), config.timing)?;

	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let tick_inner = tick.clone();
	*tick.borrow_mut() = Some(Closure::new(move || {
		let frame = writer.tick();
		target.set_text_content(Some(&frame.text));
		if let (Some(win), Some(cb)) = (web_sys::window(), tick_inner.borrow().as_ref()) {
			let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				frame.delay_ms.min(i32::MAX as u32) as i32,
			);
		}
	}));
	if let Some(ref cb) = *tick.borrow() {
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 0);
	}
	Some(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn writer(roles: &[&str]) -> Typewriter {
		Typewriter::new(roles.iter().map(|r| r.to_string()).collect(), TypingTiming::default()).unwrap()
	}

	fn run(w: &mut Typewriter, n: usize) -> Vec<(String, u32)> {
		(0..n)
			.map(|_| {
				let f = w.tick();
				(f.text, f.delay_ms)
			})
			.collect()
	}

	#[test]
	fn types_pauses_deletes_and_advances() {
		let mut w = writer(&["Go", "Rust"]);
		let frames = run(&mut w, 8);
		let expected = [
			("G", 80),
			("Go", 2000),
			("G", 40),
			("", 400),
			("R", 80),
			("Ru", 80),
			("Rus", 80),
			("Rust", 2000),
		];
		for (got, want) in frames.iter().zip(expected) {
			assert_eq!((got.0.as_str(), got.1), want);
		}
		assert_eq!(w.role(), 1);
	}

	#[test]
	fn wraps_to_first_role() {
		let mut w = writer(&["ab", "c"]);
		// "a" "ab" "a" "" | "c" "" | back to "a"
		run(&mut w, 6);
		assert_eq!(w.role(), 0);
		assert_eq!(w.tick().text, "a");
	}

	#[test]
	fn counts_characters_not_bytes() {
		let mut w = writer(&["héllo"]);
		let frames = run(&mut w, 5);
		assert_eq!(frames[1].0, "hé");
		assert_eq!(frames[4], ("héllo".to_string(), 2000));
	}

	#[test]
	fn empty_roles_do_nothing() {
		assert!(Typewriter::new(Vec::new(), TypingTiming::default()).is_none());
	}

	#[test]
	fn empty_role_is_skipped() {
		let mut w = writer(&["", "x"]);
		assert_eq!(w.tick(), TypingFrame { text: String::new(), delay_ms: 2000 });
		assert_eq!(w.tick(), TypingFrame { text: String::new(), delay_ms: 400 });
		assert_eq!(w.tick().text, "x");
	}

	#[test]
	fn config_accepts_flat_timing() {
		let config: TypingConfig =
			serde_json::from_str(r#"{ "roles": ["A"], "type_ms": 100 }"#).unwrap();
		assert_eq!(config.roles, vec!["A".to_string()]);
		assert_eq!(config.timing.type_ms, 100);
		assert_eq!(config.timing.delete_ms, 40);
	}
}

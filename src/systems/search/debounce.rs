//! Input settle detection.
//!
//! The gate does not own a timer. It records a deadline and the host either
//! polls it from its event loop or sleeps until [`DebounceGate::next_deadline`].

use std::time::{Duration, Instant};

use crate::types::is_searchable;

/// Delay used when no configuration overrides it.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Result of feeding new input into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
	/// Text is too short; any pending search was dropped.
	Cleared,
	/// A search is scheduled for the given deadline.
	Scheduled(Instant),
}

#[derive(Debug, Clone)]
struct Pending {
	text: String,
	deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct DebounceGate {
	delay: Duration,
	min_len: usize,
	pending: Option<Pending>,
}

impl DebounceGate {
	pub fn new(delay: Duration, min_len: usize) -> Self {
		Self {
			delay,
			min_len,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	pub fn min_len(&self) -> usize {
		self.min_len
	}

	/// Restart the settle window for `text`, or drop it when too short.
	pub fn on_input_changed(&mut self, text: &str, now: Instant) -> GateDecision {
		let trimmed = text.trim();
		if !is_searchable(trimmed, self.min_len) {
			self.pending = None;
			return GateDecision::Cleared;
		}

		let deadline = now + self.delay;
		self.pending = Some(Pending {
			text: trimmed.to_string(),
			deadline,
		});
		GateDecision::Scheduled(deadline)
	}

	/// Hand out the settled text once its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		match &self.pending {
			Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.text),
			_ => None,
		}
	}

	/// Take the pending text without waiting for the deadline.
	pub fn flush(&mut self) -> Option<String> {
		self.pending.take().map(|pending| pending.text)
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

impl Default for DebounceGate {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE, 2)
	}
}

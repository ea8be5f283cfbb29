use std::time::Duration;

use crate::systems::remote::DEFAULT_RESULT_LIMIT;
use crate::systems::search::DEFAULT_DEBOUNCE;
use crate::types::SearchScope;

/// Tunables for the incremental search box.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTuning {
	/// Quiet period after the last keystroke before a search is issued.
	pub debounce: Duration,
	/// Minimum trimmed length, in characters, that reaches the network.
	pub min_query_len: usize,
	/// Rows requested per collection.
	pub result_limit: usize,
	/// Scope filter selected when the controller mounts.
	pub scope: SearchScope,
}

impl Default for SearchTuning {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			min_query_len: 2,
			result_limit: DEFAULT_RESULT_LIMIT,
			scope: SearchScope::All,
		}
	}
}

/// Thresholds of the scroll placement machine, in CSS pixels.
///
/// The defaults are empirically chosen UI constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
	/// Offsets at or below this are the `Top` state.
	pub top_threshold: f64,
	/// Movements at or below this magnitude are ignored.
	pub hysteresis: f64,
	/// Fraction of the viewport height a downward run must cover to promote
	/// the search box into the header row.
	pub promote_ratio: f64,
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			top_threshold: 10.0,
			hysteresis: 5.0,
			promote_ratio: 0.4,
		}
	}
}

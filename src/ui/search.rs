use std::time::Instant;

use tracing::debug;

use super::HeaderSearch;
use super::visibility::PanelTransition;
use crate::systems::search::GateDecision;
use crate::types::{SearchAttempt, SearchScope};

impl HeaderSearch {
	/// Keystroke in the search input.
	///
	/// Too-short text drops any pending search, clears the results and closes
	/// the panel without touching the network. Otherwise the settle window
	/// restarts.
	pub fn on_input_changed(&mut self, text: &str, now: Instant) -> Option<PanelTransition> {
		self.set_text(text);
		match self.search.schedule(text, now) {
			GateDecision::Scheduled(_) => None,
			GateDecision::Cleared => {
				self.search.reset();
				self.reset_highlight();
				self.panel_mut().on_input_cleared()
			}
		}
	}

	/// Scope toggle. With searchable text the search re-fires immediately,
	/// bypassing the debounce window.
	pub fn on_scope_changed(&mut self, scope: SearchScope, now: Instant) -> Option<SearchAttempt> {
		if !self.set_scope(scope) || !self.query_ready() {
			return None;
		}
		self.search.flush_pending();
		self.request_search(now)
	}

	/// Issue the pending search if its settle window elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<SearchAttempt> {
		self.search.poll_gate(now)?;
		self.request_search(now)
	}

	/// Merge every sub-query answer that already arrived. Returns whether the
	/// visible results changed.
	pub fn pump_results(&mut self) -> bool {
		self.search.pump()
	}

	/// Wait for the next sub-query answer and merge it.
	pub async fn settle_next(&mut self) -> bool {
		self.search.settle_next().await
	}

	/// Wait until every sub-query of the current attempt answered.
	pub async fn settle(&mut self) {
		while self.search.is_loading() {
			self.search.settle_next().await;
		}
	}

	fn request_search(&mut self, now: Instant) -> Option<SearchAttempt> {
		let query = self.query();
		if !query.is_searchable(self.tuning().min_query_len) {
			return None;
		}

		let attempt = self.search.issue_search(query, now);
		debug!(
			generation = %attempt.generation,
			text = %attempt.query.text,
			scope = %attempt.query.scope,
			"issued search"
		);
		self.reset_highlight();
		self.panel_mut().on_loading_started();
		Some(attempt)
	}
}

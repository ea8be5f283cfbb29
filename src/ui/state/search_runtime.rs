use std::time::Instant;

use crate::systems::search::{DebounceGate, GateDecision, GenerationTracker, QueryAggregator};
use crate::types::{ResultSet, SearchAttempt, SearchQuery};

/// Search plumbing owned by a single [`HeaderSearch`](super::HeaderSearch).
///
/// The tracker has exactly one writer (this runtime) and the aggregator is
/// the only writer of the result set.
pub(crate) struct SearchRuntime {
	gate: DebounceGate,
	tracker: GenerationTracker,
	aggregator: QueryAggregator,
	current: Option<SearchAttempt>,
}

impl SearchRuntime {
	pub(crate) fn new(gate: DebounceGate, aggregator: QueryAggregator) -> Self {
		Self {
			gate,
			tracker: GenerationTracker::new(),
			aggregator,
			current: None,
		}
	}

	pub(crate) fn schedule(&mut self, text: &str, now: Instant) -> GateDecision {
		self.gate.on_input_changed(text, now)
	}

	pub(crate) fn poll_gate(&mut self, now: Instant) -> Option<String> {
		self.gate.poll(now)
	}

	/// Drop the settle window; the caller fires with the current text.
	pub(crate) fn flush_pending(&mut self) -> Option<String> {
		self.gate.flush()
	}

	pub(crate) fn issue_search(&mut self, query: SearchQuery, now: Instant) -> SearchAttempt {
		let attempt = SearchAttempt {
			generation: self.tracker.next_generation(),
			query,
			issued_at: now,
		};
		self.aggregator.search(&attempt);
		self.current = Some(attempt.clone());
		attempt
	}

	/// Forget the current attempt and retire its generation so that answers
	/// still in flight are dropped on arrival.
	pub(crate) fn reset(&mut self) {
		self.gate.cancel();
		if self.current.take().is_some() {
			self.tracker.invalidate();
		}
		self.aggregator.clear();
	}

	pub(crate) fn pump(&mut self) -> bool {
		self.aggregator.pump(&self.tracker)
	}

	/// Wait for one sub-query to finish and merge it. Returns whether the
	/// visible set changed.
	pub(crate) async fn settle_next(&mut self) -> bool {
		match self.aggregator.recv_outcome().await {
			Some(outcome) => self.aggregator.apply(outcome, &self.tracker).changed(),
			None => false,
		}
	}

	pub(crate) fn results(&self) -> Option<&ResultSet> {
		self.aggregator.results()
	}

	pub(crate) fn current(&self) -> Option<&SearchAttempt> {
		self.current.as_ref()
	}

	pub(crate) fn next_deadline(&self) -> Option<Instant> {
		self.gate.next_deadline()
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.results().is_some_and(|results| results.loading)
	}

	pub(crate) fn has_pending_input(&self) -> bool {
		self.gate.is_pending()
	}
}

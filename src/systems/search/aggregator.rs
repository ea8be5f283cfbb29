use std::sync::Arc;

use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tracing::{debug, trace, warn};

use super::commands::{MergeOutcome, SubQueryOutcome};
use super::generation::GenerationTracker;
use super::worker::dispatch;
use crate::systems::remote::CollectionSource;
use crate::types::{CollectionHits, ResultSet, SearchAttempt};

/// Fans a search attempt out to its collections and merges the answers.
///
/// The aggregator is the only writer of the [`ResultSet`]. Every merge is
/// gated on the tracker, so a late answer for an older attempt can never
/// replace rows produced by a newer one.
pub struct QueryAggregator {
	source: Arc<dyn CollectionSource>,
	runtime: Handle,
	limit: usize,
	tx: UnboundedSender<SubQueryOutcome>,
	rx: UnboundedReceiver<SubQueryOutcome>,
	results: Option<ResultSet>,
}

impl QueryAggregator {
	/// Create an aggregator bound to the tokio runtime of the caller.
	pub fn new(source: Arc<dyn CollectionSource>, limit: usize) -> Result<Self, TryCurrentError> {
		Ok(Self::with_runtime(source, limit, Handle::try_current()?))
	}

	pub fn with_runtime(source: Arc<dyn CollectionSource>, limit: usize, runtime: Handle) -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		Self {
			source,
			runtime,
			limit,
			tx,
			rx,
			results: None,
		}
	}

	/// Replace the visible set with a loading set for `attempt` and issue its
	/// sub-queries. Loading is visible before any request completes.
	pub fn search(&mut self, attempt: &SearchAttempt) {
		self.results = Some(ResultSet::loading(attempt.generation, attempt.query.scope));
		dispatch(&self.runtime, &self.source, attempt, self.limit, &self.tx);
	}

	/// Merge one outcome if it belongs to the current generation.
	pub fn apply(&mut self, outcome: SubQueryOutcome, tracker: &GenerationTracker) -> MergeOutcome {
		let SubQueryOutcome {
			generation,
			collection,
			result,
		} = outcome;

		let Some(results) = self
			.results
			.as_mut()
			.filter(|results| tracker.is_current(generation) && results.generation == generation)
		else {
			trace!(%generation, %collection, "dropping stale sub-query outcome");
			return MergeOutcome::Stale;
		};

		let (hits, merge) = match result {
			Ok(hits) if hits.collection() == collection => {
				let rows = hits.len();
				(hits, MergeOutcome::Merged { collection, rows })
			}
			Ok(hits) => {
				warn!(
					%generation,
					%collection,
					answered = %hits.collection(),
					"collection answered with rows of another collection"
				);
				(CollectionHits::empty(collection), MergeOutcome::Failed { collection })
			}
			Err(err) => {
				warn!(%generation, %collection, error = %err, "sub-query failed; showing no rows");
				(CollectionHits::empty(collection), MergeOutcome::Failed { collection })
			}
		};

		if !results.settle(hits) {
			return MergeOutcome::Ignored;
		}
		if !results.loading {
			debug!(%generation, total = results.total(), "search settled");
		}
		merge
	}

	/// Merge every outcome that is already waiting. Returns whether the
	/// visible set changed.
	pub fn pump(&mut self, tracker: &GenerationTracker) -> bool {
		let mut changed = false;
		loop {
			match self.rx.try_recv() {
				Ok(outcome) => changed |= self.apply(outcome, tracker).changed(),
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	/// Wait for the next outcome of any generation.
	pub async fn recv_outcome(&mut self) -> Option<SubQueryOutcome> {
		self.rx.recv().await
	}

	/// Drop the visible set. In-flight answers stay harmless because the
	/// caller retires their generation.
	pub fn clear(&mut self) {
		self.results = None;
	}

	pub fn results(&self) -> Option<&ResultSet> {
		self.results.as_ref()
	}

	pub fn limit(&self) -> usize {
		self.limit
	}
}

#[cfg(test)]
mod tests {
	use std::time::Instant;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::systems::remote::RemoteError;
	use crate::systems::search::test_support::{ScriptedSource, item, seller};
	use crate::types::{Collection, Generation, SearchQuery, SearchScope};

	fn attempt(tracker: &mut GenerationTracker, text: &str, scope: SearchScope) -> SearchAttempt {
		SearchAttempt {
			generation: tracker.next_generation(),
			query: SearchQuery::new(text, scope),
			issued_at: Instant::now(),
		}
	}

	async fn apply_next(
		aggregator: &mut QueryAggregator,
		tracker: &GenerationTracker,
	) -> MergeOutcome {
		let outcome = aggregator.recv_outcome().await.expect("outcome");
		aggregator.apply(outcome, tracker)
	}

	#[tokio::test]
	async fn loading_is_marked_before_any_answer() {
		let source = ScriptedSource::new();
		let _gate = source.gate(Collection::Items, "desk");
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		aggregator.search(&attempt(&mut tracker, "desk", SearchScope::Items));

		let results = aggregator.results().unwrap();
		assert!(results.loading);
		assert_eq!(results.items, None);
		assert_eq!(results.sellers, None);
	}

	#[tokio::test]
	async fn scope_selects_collections() {
		let source = ScriptedSource::new();
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 5).unwrap();

		aggregator.search(&attempt(&mut tracker, "lamp", SearchScope::Sellers));
		assert!(matches!(
			apply_next(&mut aggregator, &tracker).await,
			MergeOutcome::Merged { collection: Collection::Sellers, .. }
		));

		assert_eq!(source.calls(), vec![(Collection::Sellers, "lamp".to_string(), 5)]);
		let results = aggregator.results().unwrap();
		assert_eq!(results.items, None);
		assert_eq!(results.sellers, Some(Vec::new()));
		assert!(!results.loading);
	}

	#[tokio::test]
	async fn partial_results_render_in_arrival_order() {
		let source = ScriptedSource::new();
		let items = source.gate(Collection::Items, "phone");
		let sellers = source.gate(Collection::Sellers, "phone");
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		aggregator.search(&attempt(&mut tracker, "phone", SearchScope::All));

		sellers.release(Ok(seller_hits(&["s1"])));
		apply_next(&mut aggregator, &tracker).await;
		let results = aggregator.results().unwrap();
		assert_eq!(results.seller_count(), 1);
		assert_eq!(results.items, None);
		assert!(results.loading);

		items.release(Ok(item_hits(&["i1", "i2"])));
		apply_next(&mut aggregator, &tracker).await;
		let results = aggregator.results().unwrap();
		assert_eq!(results.item_count(), 2);
		assert!(!results.loading);
	}

	#[tokio::test]
	async fn late_answer_for_older_generation_is_dropped() {
		let source = ScriptedSource::new();
		let old = source.gate(Collection::Items, "pho");
		let new = source.gate(Collection::Items, "phon");
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		aggregator.search(&attempt(&mut tracker, "pho", SearchScope::Items));
		aggregator.search(&attempt(&mut tracker, "phon", SearchScope::Items));

		new.release(Ok(item_hits(&["phon-1"])));
		assert!(apply_next(&mut aggregator, &tracker).await.changed());

		old.release(Ok(item_hits(&["pho-1", "pho-2"])));
		assert_eq!(apply_next(&mut aggregator, &tracker).await, MergeOutcome::Stale);

		let results = aggregator.results().unwrap();
		assert_eq!(results.generation, Generation(2));
		assert_eq!(results.items, Some(vec![item("phon-1")]));
	}

	#[tokio::test]
	async fn failed_collection_does_not_blank_the_other() {
		let source = ScriptedSource::new();
		let items = source.gate(Collection::Items, "chair");
		let sellers = source.gate(Collection::Sellers, "chair");
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		aggregator.search(&attempt(&mut tracker, "chair", SearchScope::All));

		sellers.release(Ok(seller_hits(&["s1"])));
		apply_next(&mut aggregator, &tracker).await;
		items.release(Err(RemoteError::Rejected {
			collection: Collection::Items,
			message: None,
		}));
		assert_eq!(
			apply_next(&mut aggregator, &tracker).await,
			MergeOutcome::Failed {
				collection: Collection::Items
			}
		);

		let results = aggregator.results().unwrap();
		assert_eq!(results.items, Some(Vec::new()));
		assert_eq!(results.sellers, Some(vec![seller("s1")]));
		assert!(!results.loading);
	}

	#[tokio::test]
	async fn mismatched_collection_is_treated_as_failure() {
		let source = ScriptedSource::new();
		let items = source.gate(Collection::Items, "sofa");
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		aggregator.search(&attempt(&mut tracker, "sofa", SearchScope::Items));
		items.release(Ok(seller_hits(&["wrong"])));

		assert!(matches!(
			apply_next(&mut aggregator, &tracker).await,
			MergeOutcome::Failed { .. }
		));
		assert_eq!(aggregator.results().unwrap().items, Some(Vec::new()));
	}

	#[tokio::test]
	async fn pump_drains_ready_outcomes_without_blocking() {
		let source = ScriptedSource::new();
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		assert!(!aggregator.pump(&tracker));
		aggregator.search(&attempt(&mut tracker, "rug", SearchScope::All));

		// Let the spawned tasks run to completion.
		for _ in 0..8 {
			tokio::task::yield_now().await;
		}
		assert!(aggregator.pump(&tracker));
		assert!(!aggregator.results().unwrap().loading);
	}

	#[tokio::test]
	async fn invalidated_generation_answers_are_ignored_after_clear() {
		let source = ScriptedSource::new();
		let items = source.gate(Collection::Items, "bed");
		let mut tracker = GenerationTracker::new();
		let mut aggregator = QueryAggregator::new(source.clone(), 8).unwrap();

		aggregator.search(&attempt(&mut tracker, "bed", SearchScope::Items));
		tracker.invalidate();
		aggregator.clear();

		items.release(Ok(item_hits(&["bed-1"])));
		assert_eq!(apply_next(&mut aggregator, &tracker).await, MergeOutcome::Stale);
		assert!(aggregator.results().is_none());
	}

	fn item_hits(ids: &[&str]) -> CollectionHits {
		CollectionHits::Items(ids.iter().map(|id| item(id)).collect())
	}

	fn seller_hits(ids: &[&str]) -> CollectionHits {
		CollectionHits::Sellers(ids.iter().map(|id| seller(id)).collect())
	}
}

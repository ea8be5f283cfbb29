use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::commands::SubQueryOutcome;
use crate::systems::remote::CollectionSource;
use crate::types::SearchAttempt;

/// Spawn one task per collection in the attempt's scope.
///
/// Tasks are fire-and-forget: they are never aborted, and a send into a
/// dropped receiver is ignored.
pub(crate) fn dispatch(
	runtime: &Handle,
	source: &Arc<dyn CollectionSource>,
	attempt: &SearchAttempt,
	limit: usize,
	outcomes: &UnboundedSender<SubQueryOutcome>,
) {
	for &collection in attempt.query.scope.collections() {
		let source = Arc::clone(source);
		let outcomes = outcomes.clone();
		let generation = attempt.generation;
		let text = attempt.query.text.clone();

		debug!(%generation, %collection, text = %text, "dispatching sub-query");
		runtime.spawn(async move {
			let result = source.fetch(collection, &text, limit).await;
			let _ = outcomes.send(SubQueryOutcome {
				generation,
				collection,
				result,
			});
		});
	}
}

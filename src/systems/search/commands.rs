use crate::systems::remote::RemoteError;
use crate::types::{Collection, CollectionHits, Generation};

/// Completion of one collection query, tagged with the generation it was
/// issued for.
#[derive(Debug)]
pub struct SubQueryOutcome {
	/// Attempt that issued the query; compared against the tracker on merge.
	pub generation: Generation,
	/// Collection that was queried.
	pub collection: Collection,
	/// Rows on success, or the transport failure.
	pub result: Result<CollectionHits, RemoteError>,
}

/// What a merge did to the visible result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
	/// The outcome belongs to a superseded generation and was dropped.
	Stale,
	/// Rows were merged into the current set.
	Merged { collection: Collection, rows: usize },
	/// The query failed and its collection now shows no rows.
	Failed { collection: Collection },
	/// The collection had already settled or is outside the scope.
	Ignored,
}

impl MergeOutcome {
	/// Whether the visible state changed.
	pub fn changed(self) -> bool {
		matches!(self, Self::Merged { .. } | Self::Failed { .. })
	}
}

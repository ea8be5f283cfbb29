use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::RemoteError;
use crate::types::{Collection, CollectionHits, ItemSummary, SellerSummary};

/// `{ success, data }` wrapper used by every collection endpoint.
///
/// Rows stay untyped until the envelope itself checks out, so one malformed
/// row cannot sink the rest of the page.
#[derive(Debug, Deserialize)]
struct Envelope {
	success: bool,
	#[serde(default)]
	data: Option<Vec<Value>>,
	#[serde(default)]
	message: Option<String>,
}

/// Decode a response body for `collection` into display rows.
pub(super) fn decode(collection: Collection, body: &[u8]) -> Result<CollectionHits, RemoteError> {
	let rows = unwrap(collection, body)?;
	Ok(match collection {
		Collection::Items => CollectionHits::Items(project::<ItemSummary>(collection, rows)),
		Collection::Sellers => CollectionHits::Sellers(project::<SellerSummary>(collection, rows)),
	})
}

fn unwrap(collection: Collection, body: &[u8]) -> Result<Vec<Value>, RemoteError> {
	let envelope: Envelope = serde_json::from_slice(body)
		.map_err(|source| RemoteError::Decode { collection, source })?;
	if !envelope.success {
		return Err(RemoteError::Rejected {
			collection,
			message: envelope.message,
		});
	}
	Ok(envelope.data.unwrap_or_default())
}

fn project<T: DeserializeOwned>(collection: Collection, rows: Vec<Value>) -> Vec<T> {
	rows.into_iter()
		.enumerate()
		.filter_map(|(index, row)| match serde_json::from_value(row) {
			Ok(row) => Some(row),
			Err(err) => {
				warn!(%collection, index, error = %err, "skipping malformed row");
				None
			}
		})
		.collect()
}

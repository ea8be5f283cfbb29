use thiserror::Error;

use crate::types::Collection;

/// Failure of a single collection request.
///
/// None of these reach the user; the aggregator degrades every variant to an
/// empty result list for the affected collection.
#[derive(Debug, Error)]
pub enum RemoteError {
	#[error("invalid base url `{url}`: {source}")]
	InvalidBaseUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),

	#[error("request to {collection} failed: {source}")]
	Transport {
		collection: Collection,
		#[source]
		source: reqwest::Error,
	},

	#[error("{collection} responded with status {status}")]
	Status {
		collection: Collection,
		status: reqwest::StatusCode,
	},

	#[error("{collection} reported an unsuccessful response{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
	Rejected {
		collection: Collection,
		message: Option<String>,
	},

	#[error("malformed {collection} payload: {source}")]
	Decode {
		collection: Collection,
		#[source]
		source: serde_json::Error,
	},
}

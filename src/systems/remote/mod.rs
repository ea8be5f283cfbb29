//! Transport for the read-only `items` and `sellers` collections.

mod client;
mod envelope;
mod error;

use std::time::Duration;

use async_trait::async_trait;

pub use client::CatalogClient;
pub use error::RemoteError;

use crate::types::{Collection, CollectionHits};

/// Default number of rows requested per collection for the dropdown.
pub const DEFAULT_RESULT_LIMIT: usize = 8;

/// Connection options for the catalog API.
#[derive(Debug, Clone)]
pub struct RemoteOptions {
	/// Base URL the collection paths are resolved against.
	pub base_url: String,
	/// Transport timeout. `None` keeps the HTTP client's default behaviour.
	pub timeout: Option<Duration>,
}

impl Default for RemoteOptions {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8080/api".to_string(),
			timeout: None,
		}
	}
}

/// A remote collection that can answer a free-text query.
#[async_trait]
pub trait CollectionSource: Send + Sync + 'static {
	async fn fetch(
		&self,
		collection: Collection,
		text: &str,
		limit: usize,
	) -> Result<CollectionHits, RemoteError>;
}

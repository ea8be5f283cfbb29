use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::envelope::decode;
use super::{CollectionSource, RemoteError, RemoteOptions};
use crate::types::{Collection, CollectionHits};

/// `reqwest` backed client for the catalog collections.
#[derive(Clone, Debug)]
pub struct CatalogClient {
	http: reqwest::Client,
	base_url: Url,
}

impl CatalogClient {
	pub fn new(options: &RemoteOptions) -> Result<Self, RemoteError> {
		let base_url = normalize_base(&options.base_url)?;
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = options.timeout {
			builder = builder.timeout(timeout);
		}
		let http = builder.build().map_err(RemoteError::Client)?;
		Ok(Self { http, base_url })
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn endpoint(&self, collection: Collection) -> Result<Url, RemoteError> {
		self.base_url
			.join(collection.path())
			.map_err(|source| RemoteError::InvalidBaseUrl {
				url: self.base_url.to_string(),
				source,
			})
	}
}

/// Parse the base URL and make sure relative joins append to its path.
fn normalize_base(raw: &str) -> Result<Url, RemoteError> {
	let trimmed = raw.trim();
	let with_slash = if trimmed.ends_with('/') {
		trimmed.to_string()
	} else {
		format!("{trimmed}/")
	};
	Url::parse(&with_slash).map_err(|source| RemoteError::InvalidBaseUrl {
		url: trimmed.to_string(),
		source,
	})
}

#[async_trait]
impl CollectionSource for CatalogClient {
	async fn fetch(
		&self,
		collection: Collection,
		text: &str,
		limit: usize,
	) -> Result<CollectionHits, RemoteError> {
		let url = self.endpoint(collection)?;
		debug!(%collection, %url, text, limit, "querying collection");

		let limit = limit.to_string();
		let response = self
			.http
			.get(url)
			.query(&[("q", text), ("limit", limit.as_str()), ("page", "1")])
			.send()
			.await
			.map_err(|source| RemoteError::Transport { collection, source })?;

		let status = response.status();
		if !status.is_success() {
			return Err(RemoteError::Status { collection, status });
		}

		let body = response
			.bytes()
			.await
			.map_err(|source| RemoteError::Transport { collection, source })?;
		decode(collection, &body)
	}
}

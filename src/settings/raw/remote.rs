use std::time::Duration;

use navsearch::RemoteOptions;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Catalog API settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RemoteSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_ms: Option<u64>,
}

impl RemoteSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
	}

	pub(super) fn resolve(self) -> RemoteOptions {
		let defaults = RemoteOptions::default();
		RemoteOptions {
			base_url: self
				.base_url
				.map(|url| url.trim().to_string())
				.unwrap_or(defaults.base_url),
			timeout: self.timeout_ms.map(Duration::from_millis),
		}
	}
}

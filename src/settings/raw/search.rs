use std::time::Duration;

use navsearch::{SearchScope, SearchTuning};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Debounce, row limit and scope settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) min_query_len: Option<usize>,
	pub(super) result_limit: Option<usize>,
	pub(super) scope: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(ms) = cli.debounce_ms {
			self.debounce_ms = Some(ms);
		}
		if let Some(limit) = cli.limit {
			self.result_limit = Some(limit);
		}
		if let Some(scope) = cli.scope() {
			self.scope = Some(scope.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SearchTuning, ConfigError> {
		let defaults = SearchTuning::default();
		let scope = match self.scope {
			Some(value) => match value.parse::<SearchScope>() {
				Ok(scope) => scope,
				Err(_) => {
					return Err(ConfigError::UnknownScope {
						value,
						origin: sources.source_for_scope(),
					});
				}
			},
			None => defaults.scope,
		};

		Ok(SearchTuning {
			debounce: self
				.debounce_ms
				.map(Duration::from_millis)
				.unwrap_or(defaults.debounce),
			min_query_len: self.min_query_len.unwrap_or(defaults.min_query_len),
			result_limit: self.result_limit.unwrap_or(defaults.result_limit),
			scope,
		})
	}
}

use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod remote;
mod scroll;
mod search;

use remote::RemoteSection;
use scroll::ScrollSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	remote: RemoteSection,
	search: SearchSection,
	scroll: ScrollSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.remote.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.remote.base_url.is_some(),
				"NAVSEARCH__REMOTE__BASE_URL",
				Some("--base-url"),
				"remote.base_url",
			),
			result_limit: detect_source(
				cli.limit.is_some(),
				self.search.result_limit.is_some(),
				"NAVSEARCH__SEARCH__RESULT_LIMIT",
				Some("--limit"),
				"search.result_limit",
			),
			timeout_ms: detect_source(
				false,
				self.remote.timeout_ms.is_some(),
				"NAVSEARCH__REMOTE__TIMEOUT_MS",
				None,
				"remote.timeout_ms",
			),
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"NAVSEARCH__SEARCH__DEBOUNCE_MS",
				Some("--debounce-ms"),
				"search.debounce_ms",
			),
			min_query_len: detect_source(
				false,
				self.search.min_query_len.is_some(),
				"NAVSEARCH__SEARCH__MIN_QUERY_LEN",
				None,
				"search.min_query_len",
			),
			scope: detect_source(
				cli.scope().is_some(),
				self.search.scope.is_some(),
				"NAVSEARCH__SEARCH__SCOPE",
				Some("--scope"),
				"search.scope",
			),
			top_threshold: detect_source(
				false,
				self.scroll.top_threshold.is_some(),
				"NAVSEARCH__SCROLL__TOP_THRESHOLD",
				None,
				"scroll.top_threshold",
			),
			hysteresis: detect_source(
				false,
				self.scroll.hysteresis.is_some(),
				"NAVSEARCH__SCROLL__HYSTERESIS",
				None,
				"scroll.hysteresis",
			),
			promote_ratio: detect_source(
				false,
				self.scroll.promote_ratio.is_some(),
				"NAVSEARCH__SCROLL__PROMOTE_RATIO",
				None,
				"scroll.promote_ratio",
			),
		};

		let remote = self.remote.resolve();
		let tuning = self.search.resolve(&sources).map_err(Error::new)?;
		let scroll = self.scroll.resolve();

		let config = ResolvedConfig {
			remote,
			tuning,
			scroll,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: Option<&'static str>,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present && let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

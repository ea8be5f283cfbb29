use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from. `None` means the default was used.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) result_limit: Option<SettingSource>,
	pub(crate) timeout_ms: Option<SettingSource>,
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) min_query_len: Option<SettingSource>,
	pub(crate) scope: Option<SettingSource>,
	pub(crate) top_threshold: Option<SettingSource>,
	pub(crate) hysteresis: Option<SettingSource>,
	pub(crate) promote_ratio: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		or_key(&self.base_url, "remote.base_url")
	}

	pub(crate) fn source_for_result_limit(&self) -> SettingSource {
		or_key(&self.result_limit, "search.result_limit")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout_ms, "remote.timeout_ms")
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		or_key(&self.debounce_ms, "search.debounce_ms")
	}

	pub(crate) fn source_for_min_query_len(&self) -> SettingSource {
		or_key(&self.min_query_len, "search.min_query_len")
	}

	pub(crate) fn source_for_scope(&self) -> SettingSource {
		or_key(&self.scope, "search.scope")
	}

	pub(crate) fn source_for_top_threshold(&self) -> SettingSource {
		or_key(&self.top_threshold, "scroll.top_threshold")
	}

	pub(crate) fn source_for_hysteresis(&self) -> SettingSource {
		or_key(&self.hysteresis, "scroll.hysteresis")
	}

	pub(crate) fn source_for_promote_ratio(&self) -> SettingSource {
		or_key(&self.promote_ratio, "scroll.promote_ratio")
	}
}

use thiserror::Error;

use super::SettingSource;

/// A setting that resolved to a value navsearch cannot run with.
///
/// Every variant names the layer the value came from so the user knows which
/// file, variable or flag to fix.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("remote.base_url from {origin} is not a usable catalog URL: {reason} (value: {value})")]
	BaseUrl {
		value: String,
		origin: SettingSource,
		reason: String,
	},
	#[error("search.scope from {origin} must be one of all, items or sellers (value: {value})")]
	UnknownScope { value: String, origin: SettingSource },
	#[error("{key} from {origin} {requirement} (value: {value})")]
	OutOfRange {
		key: &'static str,
		value: String,
		origin: SettingSource,
		requirement: &'static str,
	},
}

impl ConfigError {
	pub(crate) fn out_of_range(
		key: &'static str,
		value: impl ToString,
		origin: SettingSource,
		requirement: &'static str,
	) -> Self {
		Self::OutOfRange {
			key,
			value: value.to_string(),
			origin,
			requirement,
		}
	}

	/// Dotted configuration key of the offending setting.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::BaseUrl { .. } => "remote.base_url",
			Self::UnknownScope { .. } => "search.scope",
			Self::OutOfRange { key, .. } => key,
		}
	}

	pub(crate) fn origin(&self) -> &SettingSource {
		match self {
			Self::BaseUrl { origin, .. }
			| Self::UnknownScope { origin, .. }
			| Self::OutOfRange { origin, .. } => origin,
		}
	}
}

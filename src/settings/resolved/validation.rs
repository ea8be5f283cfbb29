use std::time::Duration;

use url::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	validate_remote(config, sources)?;
	validate_search(config, sources)?;
	validate_scroll(config, sources)
}

fn validate_remote(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	let base_url = &config.remote.base_url;
	let reason = match Url::parse(base_url) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => None,
		Ok(url) => Some(format!("unsupported scheme `{}`", url.scheme())),
		Err(err) => Some(err.to_string()),
	};
	if let Some(reason) = reason {
		return Err(ConfigError::BaseUrl {
			value: base_url.clone(),
			origin: sources.source_for_base_url(),
			reason,
		});
	}

	if config.remote.timeout == Some(Duration::ZERO) {
		return Err(ConfigError::out_of_range(
			"remote.timeout_ms",
			0,
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	Ok(())
}

fn validate_search(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.tuning.debounce.is_zero() {
		return Err(ConfigError::out_of_range(
			"search.debounce_ms",
			0,
			sources.source_for_debounce(),
			"must be greater than zero",
		));
	}

	if config.tuning.min_query_len == 0 {
		return Err(ConfigError::out_of_range(
			"search.min_query_len",
			0,
			sources.source_for_min_query_len(),
			"must be at least 1",
		));
	}

	if config.tuning.result_limit == 0 {
		return Err(ConfigError::out_of_range(
			"search.result_limit",
			0,
			sources.source_for_result_limit(),
			"must be at least 1",
		));
	}

	Ok(())
}

fn validate_scroll(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	let scroll = &config.scroll;
	if !scroll.top_threshold.is_finite() || scroll.top_threshold < 0.0 {
		return Err(ConfigError::out_of_range(
			"scroll.top_threshold",
			scroll.top_threshold,
			sources.source_for_top_threshold(),
			"must be a non-negative number of pixels",
		));
	}

	if !scroll.hysteresis.is_finite() || scroll.hysteresis < 0.0 {
		return Err(ConfigError::out_of_range(
			"scroll.hysteresis",
			scroll.hysteresis,
			sources.source_for_hysteresis(),
			"must be a non-negative number of pixels",
		));
	}

	if !(scroll.promote_ratio > 0.0 && scroll.promote_ratio <= 1.0) {
		return Err(ConfigError::out_of_range(
			"scroll.promote_ratio",
			scroll.promote_ratio,
			sources.source_for_promote_ratio(),
			"must be within (0, 1]",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	#[test]
	fn defaults_are_valid() {
		validate(&ResolvedConfig::default(), &ConfigSources::default()).unwrap();
	}

	#[test]
	fn validation_rejects_relative_base_url() {
		let mut config = ResolvedConfig::default();
		config.remote.base_url = "/api".into();
		let sources = ConfigSources {
			base_url: Some(SettingSource::Environment("NAVSEARCH__REMOTE__BASE_URL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "remote.base_url");
		let message = err.to_string();
		assert!(message.contains("value: /api"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_non_http_scheme() {
		let mut config = ResolvedConfig::default();
		config.remote.base_url = "ftp://catalog.example".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err, ConfigError::BaseUrl { ref reason, .. } if reason.contains("ftp")));
	}

	#[test]
	fn validation_rejects_zero_debounce() {
		let mut config = ResolvedConfig::default();
		config.tuning.debounce = Duration::ZERO;
		let sources = ConfigSources {
			debounce_ms: Some(SettingSource::CliFlag("--debounce-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "search.debounce_ms");
		assert!(err.to_string().contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_result_limit() {
		let mut config = ResolvedConfig::default();
		config.tuning.result_limit = 0;

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "search.result_limit");
		assert_eq!(err.origin(), &SettingSource::ConfigKey("search.result_limit"));
	}

	#[test]
	fn validation_rejects_out_of_range_promote_ratio() {
		for ratio in [0.0, 1.5, f64::NAN] {
			let mut config = ResolvedConfig::default();
			config.scroll.promote_ratio = ratio;
			let err = validate(&config, &ConfigSources::default()).unwrap_err();
			assert_eq!(err.origin(), &SettingSource::ConfigKey("scroll.promote_ratio"));
		}
	}

	#[test]
	fn validation_rejects_negative_hysteresis() {
		let mut config = ResolvedConfig::default();
		config.scroll.hysteresis = -1.0;
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "scroll.hysteresis");
	}
}

use navsearch::{RemoteOptions, ScrollConfig, SearchTuning};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub remote: RemoteOptions,
	pub tuning: SearchTuning,
	pub scroll: ScrollConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			remote: RemoteOptions::default(),
			tuning: SearchTuning::default(),
			scroll: ScrollConfig::default(),
		}
	}
}

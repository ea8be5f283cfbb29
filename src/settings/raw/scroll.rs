use navsearch::ScrollConfig;
use serde::Deserialize;

/// Scroll placement thresholds, in pixels, prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ScrollSection {
	pub(super) top_threshold: Option<f64>,
	pub(super) hysteresis: Option<f64>,
	pub(super) promote_ratio: Option<f64>,
}

impl ScrollSection {
	pub(super) fn resolve(self) -> ScrollConfig {
		let defaults = ScrollConfig::default();
		ScrollConfig {
			top_threshold: self.top_threshold.unwrap_or(defaults.top_threshold),
			hysteresis: self.hysteresis.unwrap_or(defaults.hysteresis),
			promote_ratio: self.promote_ratio.unwrap_or(defaults.promote_ratio),
		}
	}
}

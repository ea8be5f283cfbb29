use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use navsearch::app_dirs;

pub(crate) const ENV_PREFIX: &str = "NAVSEARCH";
pub(crate) const USER_CONFIG_FILE: &str = "config.toml";
/// Looked up in the working directory, later names winning.
pub(crate) const LOCAL_CONFIG_FILES: [&str; 2] = [".navsearch.toml", "navsearch.toml"];

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join(USER_CONFIG_FILE));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.extend(LOCAL_CONFIG_FILES.iter().map(|name| current_dir.join(name)));
	}

	files
}

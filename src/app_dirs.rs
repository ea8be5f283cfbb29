//! Locate the directory that holds the user's `navsearch` configuration.
//!
//! `NAVSEARCH_CONFIG_DIR` wins; otherwise the platform location from the
//! `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "marketplace";
const APPLICATION: &str = "navsearch";

pub const CONFIG_DIR_ENV: &str = "NAVSEARCH_CONFIG_DIR";

/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.map(|dirs| dirs.config_local_dir().to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine a home directory for navsearch"))
}

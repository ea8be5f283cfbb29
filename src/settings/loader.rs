use anyhow::{Context, Result};
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve the catalog, search and scroll settings.
///
/// Layers are applied lowest first: default files, `--config` files,
/// `NAVSEARCH__*` variables, then CLI flags.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layered = build_config(cli).context("failed to read navsearch configuration files")?;
	let mut raw: RawConfig = layered
		.try_deserialize()
		.context("navsearch configuration must contain only [remote], [search] and [scroll] values")?;
	raw.apply_cli_overrides(cli);

	let resolved = raw.resolve(cli)?;
	debug!(
		base_url = %resolved.remote.base_url,
		scope = %resolved.tuning.scope,
		debounce_ms = resolved.tuning.debounce.as_millis() as u64,
		result_limit = resolved.tuning.result_limit,
		"configuration resolved"
	);
	Ok(resolved)
}

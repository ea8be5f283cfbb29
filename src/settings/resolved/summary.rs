use std::fmt::Write;

use navsearch::app_dirs;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Base URL: {}", config.remote.base_url);
	match config.remote.timeout {
		Some(timeout) => {
			let _ = writeln!(out, "  Request timeout: {} ms", timeout.as_millis());
		}
		None => {
			let _ = writeln!(out, "  Request timeout: (client default)");
		}
	}
	let _ = writeln!(out, "  Debounce: {} ms", config.tuning.debounce.as_millis());
	let _ = writeln!(out, "  Minimum query length: {}", config.tuning.min_query_len);
	let _ = writeln!(out, "  Result limit: {}", config.tuning.result_limit);
	let _ = writeln!(out, "  Scope: {}", config.tuning.scope);
	let _ = writeln!(out, "  Top threshold: {} px", config.scroll.top_threshold);
	let _ = writeln!(out, "  Hysteresis: {} px", config.scroll.hysteresis);
	let _ = writeln!(out, "  Promote ratio: {}", config.scroll.promote_ratio);
	let _ = writeln!(out, "  Config directory: {}", dir_or_unavailable(app_dirs::get_config_dir()));
	out
}

fn dir_or_unavailable(dir: anyhow::Result<std::path::PathBuf>) -> String {
	match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

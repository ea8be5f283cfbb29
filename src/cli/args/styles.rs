use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use navsearch::app_dirs;

use crate::settings::{ENV_PREFIX, LOCAL_CONFIG_FILES, USER_CONFIG_FILE};

/// Version banner listing where settings are read from.
pub(super) fn long_version() -> &'static str {
	Box::leak(render_long_version().into_boxed_str())
}

fn render_long_version() -> String {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("navsearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "user config: {USER_CONFIG_FILE} in the config directory");
	let _ = writeln!(details, "project config: {}", LOCAL_CONFIG_FILES.join(", "));
	let _ = writeln!(details, "environment: {ENV_PREFIX}__<SECTION>__<KEY>");
	let _ = writeln!(details, "log filter: {}", navsearch::logging::LOG_ENV);
	details
}

/// Help colours: green headings, cyan flags, yellow placeholders.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default())
}

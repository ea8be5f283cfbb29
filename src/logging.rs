//! Diagnostic output for the `navsearch` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "NAVSEARCH_LOG";

/// Install a stderr formatter. The filter comes from `NAVSEARCH_LOG` when set,
/// otherwise `warn`, or `debug` for this crate when `verbose` is true.
///
/// Calling this more than once keeps the first subscriber.
pub fn initialize(verbose: bool) {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter(verbose))
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("warn,navsearch=debug")
		} else {
			EnvFilter::new("warn")
		}
	})
}

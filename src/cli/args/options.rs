use clap::ValueEnum;
use navsearch::SearchScope;

/// Search scopes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScopeArg {
	All,
	Items,
	Sellers,
}

impl ScopeArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		SearchScope::from(self).as_str()
	}
}

impl From<ScopeArg> for SearchScope {
	fn from(value: ScopeArg) -> Self {
		match value {
			ScopeArg::All => SearchScope::All,
			ScopeArg::Items => SearchScope::Items,
			ScopeArg::Sellers => SearchScope::Sellers,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

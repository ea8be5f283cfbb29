use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Which remote collections a search should consult.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
	#[default]
	All,
	Items,
	Sellers,
}

impl SearchScope {
	/// Collections issued for this scope, in display order.
	#[must_use]
	pub fn collections(self) -> &'static [Collection] {
		match self {
			Self::All => &[Collection::Items, Collection::Sellers],
			Self::Items => &[Collection::Items],
			Self::Sellers => &[Collection::Sellers],
		}
	}

	#[must_use]
	pub fn includes(self, collection: Collection) -> bool {
		self.collections().contains(&collection)
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Items => "items",
			Self::Sellers => "sellers",
		}
	}
}

impl fmt::Display for SearchScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SearchScope {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"all" => Ok(Self::All),
			"items" => Ok(Self::Items),
			"sellers" => Ok(Self::Sellers),
			other => Err(format!("unknown search scope `{other}`")),
		}
	}
}

/// A remote collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
	Items,
	Sellers,
}

impl Collection {
	/// Path segment of the collection endpoint.
	#[must_use]
	pub fn path(self) -> &'static str {
		match self {
			Self::Items => "items",
			Self::Sellers => "sellers",
		}
	}
}

impl fmt::Display for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}

/// Trimmed free-text query paired with the scope filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchQuery {
	pub text: String,
	pub scope: SearchScope,
}

impl SearchQuery {
	pub fn new(text: impl AsRef<str>, scope: SearchScope) -> Self {
		Self {
			text: text.as_ref().trim().to_string(),
			scope,
		}
	}

	/// Whether the text is long enough to reach the network.
	#[must_use]
	pub fn is_searchable(&self, min_len: usize) -> bool {
		is_searchable(&self.text, min_len)
	}
}

/// Length check applied to trimmed input before any request is considered.
pub(crate) fn is_searchable(text: &str, min_len: usize) -> bool {
	text.trim().chars().count() >= min_len
}

/// Monotonic identifier assigned to every search attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(pub u64);

impl fmt::Display for Generation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// One issued search. Superseded by the next attempt, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAttempt {
	pub generation: Generation,
	pub query: SearchQuery,
	pub issued_at: Instant,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn query_text_is_trimmed() {
		let query = SearchQuery::new("  phone \n", SearchScope::Items);
		assert_eq!(query.text, "phone");
		assert!(query.is_searchable(2));
	}

	#[test]
	fn short_and_blank_text_is_not_searchable() {
		assert!(!is_searchable("", 2));
		assert!(!is_searchable(" a ", 2));
		assert!(!is_searchable("     ", 2));
		assert!(is_searchable("ab", 2));
	}

	#[test]
	fn length_counts_characters_not_bytes() {
		assert!(!is_searchable("é", 2));
		assert!(is_searchable("éà", 2));
	}

	#[test]
	fn scope_lists_its_collections() {
		assert_eq!(
			SearchScope::All.collections(),
			&[Collection::Items, Collection::Sellers]
		);
		assert!(SearchScope::Sellers.includes(Collection::Sellers));
		assert!(!SearchScope::Sellers.includes(Collection::Items));
	}

	#[test]
	fn scope_parses_case_insensitively() {
		assert_eq!("Sellers".parse::<SearchScope>(), Ok(SearchScope::Sellers));
		assert!("vendors".parse::<SearchScope>().is_err());
	}
}

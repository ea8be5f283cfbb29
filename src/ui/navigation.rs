//! Keyboard highlight over the dropdown rows and the link each row opens.

use serde::Serialize;
use url::form_urlencoded;

use crate::types::{ResultSet, SearchQuery};

/// A row of the results panel, items first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultRow {
	Item(usize),
	Seller(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMove {
	Up,
	Down,
}

/// Destination chosen from the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Navigation {
	Item { id: String },
	Seller { id: String },
	AllResults { query: String, scope: String },
}

impl Navigation {
	/// Site-relative link for the destination.
	pub fn href(&self) -> String {
		match self {
			Self::Item { id } => format!("/items/{}", encode_segment(id)),
			Self::Seller { id } => format!("/sellers/{}", encode_segment(id)),
			Self::AllResults { query, scope } => {
				let params = form_urlencoded::Serializer::new(String::new())
					.append_pair("q", query)
					.append_pair("scope", scope)
					.finish();
				format!("/search?{params}")
			}
		}
	}

	/// The full results page for `query`.
	pub fn all_results(query: &SearchQuery) -> Self {
		Self::AllResults {
			query: query.text.clone(),
			scope: query.scope.as_str().to_string(),
		}
	}

	pub(crate) fn for_row(results: &ResultSet, row: ResultRow) -> Option<Self> {
		match row {
			ResultRow::Item(index) => results
				.items
				.as_ref()?
				.get(index)
				.map(|item| Self::Item {
					id: item.id.clone(),
				}),
			ResultRow::Seller(index) => results
				.sellers
				.as_ref()?
				.get(index)
				.map(|seller| Self::Seller {
					id: seller.id.clone(),
				}),
		}
	}
}

fn encode_segment(segment: &str) -> String {
	form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

/// Position of the keyboard highlight. Reset whenever the rows change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
	index: Option<usize>,
}

impl Highlight {
	pub fn reset(&mut self) {
		self.index = None;
	}

	pub fn row(&self, results: &ResultSet) -> Option<ResultRow> {
		row_at(results, self.index?)
	}

	/// Move through the visible rows, wrapping at both ends. Moving up from
	/// the first row returns the highlight to the input.
	pub fn step(&mut self, direction: HighlightMove, results: &ResultSet) -> Option<ResultRow> {
		let total = results.total();
		if total == 0 {
			self.index = None;
			return None;
		}
		self.index = match (direction, self.index) {
			(HighlightMove::Down, None) => Some(0),
			(HighlightMove::Down, Some(index)) => Some((index + 1) % total),
			(HighlightMove::Up, None) => Some(total - 1),
			(HighlightMove::Up, Some(0)) => None,
			(HighlightMove::Up, Some(index)) => Some(index.min(total) - 1),
		};
		self.row(results)
	}
}

fn row_at(results: &ResultSet, index: usize) -> Option<ResultRow> {
	let items = results.item_count();
	if index < items {
		Some(ResultRow::Item(index))
	} else if index < results.total() {
		Some(ResultRow::Seller(index - items))
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::systems::search::test_support::{item, seller};
	use crate::types::{CollectionHits, Generation, SearchScope};

	fn results() -> ResultSet {
		let mut set = ResultSet::loading(Generation(1), SearchScope::All);
		set.settle(CollectionHits::Items(vec![item("i1"), item("i2")]));
		set.settle(CollectionHits::Sellers(vec![seller("s1")]));
		set
	}

	#[test]
	fn highlight_walks_items_then_sellers_and_wraps() {
		let results = results();
		let mut highlight = Highlight::default();
		assert_eq!(
			highlight.step(HighlightMove::Down, &results),
			Some(ResultRow::Item(0))
		);
		assert_eq!(
			highlight.step(HighlightMove::Down, &results),
			Some(ResultRow::Item(1))
		);
		assert_eq!(
			highlight.step(HighlightMove::Down, &results),
			Some(ResultRow::Seller(0))
		);
		assert_eq!(
			highlight.step(HighlightMove::Down, &results),
			Some(ResultRow::Item(0))
		);
		assert_eq!(highlight.step(HighlightMove::Up, &results), None);
		assert_eq!(
			highlight.step(HighlightMove::Up, &results),
			Some(ResultRow::Seller(0))
		);
	}

	#[test]
	fn highlight_on_empty_results_stays_on_input() {
		let mut set = ResultSet::loading(Generation(1), SearchScope::Items);
		set.settle(CollectionHits::Items(Vec::new()));
		let mut highlight = Highlight::default();
		assert_eq!(highlight.step(HighlightMove::Down, &set), None);
	}

	#[test]
	fn rows_resolve_to_detail_links() {
		let results = results();
		let nav = Navigation::for_row(&results, ResultRow::Seller(0)).unwrap();
		assert_eq!(nav.href(), "/sellers/s1");
		assert_eq!(Navigation::for_row(&results, ResultRow::Item(5)), None);
	}

	#[test]
	fn all_results_link_encodes_query() {
		let query = SearchQuery::new("red & blue", SearchScope::Items);
		assert_eq!(
			Navigation::all_results(&query).href(),
			"/search?q=red+%26+blue&scope=items"
		);
	}
}

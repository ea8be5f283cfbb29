use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::query::{Collection, Generation, SearchScope};

/// Display projection of a catalog item. Passed through untouched.
///
/// Only `id` is required. A display field of an unexpected type reads as
/// `None` instead of failing the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
	#[serde(alias = "_id", deserialize_with = "string_or_number")]
	pub id: String,
	#[serde(default, deserialize_with = "lenient_text")]
	pub name: Option<String>,
	#[serde(default, alias = "image", deserialize_with = "lenient_text")]
	pub thumbnail: Option<String>,
	#[serde(default, deserialize_with = "lenient_price")]
	pub price: Option<f64>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Display projection of a seller profile. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
	#[serde(alias = "_id", deserialize_with = "string_or_number")]
	pub id: String,
	#[serde(default, alias = "shopName", deserialize_with = "lenient_text")]
	pub name: Option<String>,
	#[serde(default, alias = "logo", deserialize_with = "lenient_text")]
	pub thumbnail: Option<String>,
	#[serde(default, deserialize_with = "lenient_text")]
	pub description: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Id {
		Text(String),
		Number(serde_json::Number),
	}

	Ok(match Id::deserialize(deserializer)? {
		Id::Text(text) => text,
		Id::Number(number) => number.to_string(),
	})
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::String(text) => Some(text),
		_ => None,
	})
}

/// Prices arrive as numbers or numeric strings depending on the backend.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Number(number) => number.as_f64(),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	})
}

/// Rows returned by a single collection query.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionHits {
	Items(Vec<ItemSummary>),
	Sellers(Vec<SellerSummary>),
}

impl CollectionHits {
	#[must_use]
	pub fn empty(collection: Collection) -> Self {
		match collection {
			Collection::Items => Self::Items(Vec::new()),
			Collection::Sellers => Self::Sellers(Vec::new()),
		}
	}

	#[must_use]
	pub fn collection(&self) -> Collection {
		match self {
			Self::Items(_) => Collection::Items,
			Self::Sellers(_) => Collection::Sellers,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			Self::Items(rows) => rows.len(),
			Self::Sellers(rows) => rows.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Display-ready merge of the sub-queries of one generation.
///
/// `items`/`sellers` stay `None` while that collection is outside the scope or
/// has not answered yet; `Some(vec![])` means the query ran and matched
/// nothing (or failed and was degraded to nothing).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
	pub generation: Generation,
	pub scope: SearchScope,
	pub items: Option<Vec<ItemSummary>>,
	pub sellers: Option<Vec<SellerSummary>>,
	pub loading: bool,
	#[serde(skip)]
	pending_items: bool,
	#[serde(skip)]
	pending_sellers: bool,
}

impl ResultSet {
	/// Fresh set for a newly issued attempt, marked as loading.
	pub(crate) fn loading(generation: Generation, scope: SearchScope) -> Self {
		let pending_items = scope.includes(Collection::Items);
		let pending_sellers = scope.includes(Collection::Sellers);
		Self {
			generation,
			scope,
			items: None,
			sellers: None,
			loading: pending_items || pending_sellers,
			pending_items,
			pending_sellers,
		}
	}

	/// Record the rows of one collection. Returns `false` when the collection
	/// was not awaited by this set.
	pub(crate) fn settle(&mut self, hits: CollectionHits) -> bool {
		if !self.is_pending(hits.collection()) {
			return false;
		}
		match hits {
			CollectionHits::Items(rows) => {
				self.items = Some(rows);
				self.pending_items = false;
			}
			CollectionHits::Sellers(rows) => {
				self.sellers = Some(rows);
				self.pending_sellers = false;
			}
		}
		self.loading = self.pending_items || self.pending_sellers;
		true
	}

	#[must_use]
	pub fn is_pending(&self, collection: Collection) -> bool {
		match collection {
			Collection::Items => self.pending_items,
			Collection::Sellers => self.pending_sellers,
		}
	}

	#[must_use]
	pub fn item_count(&self) -> usize {
		self.items.as_ref().map_or(0, Vec::len)
	}

	#[must_use]
	pub fn seller_count(&self) -> usize {
		self.sellers.as_ref().map_or(0, Vec::len)
	}

	#[must_use]
	pub fn total(&self) -> usize {
		self.item_count() + self.seller_count()
	}

	/// Settled and nothing matched in any collection.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		!self.loading && self.total() == 0
	}
}

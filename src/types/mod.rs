//! Types shared between the search pipeline, the remote transport and the
//! header controllers.

mod query;
mod results;

pub use query::{Collection, Generation, SearchAttempt, SearchQuery, SearchScope};
pub(crate) use query::is_searchable;
pub use results::{CollectionHits, ItemSummary, ResultSet, SellerSummary};

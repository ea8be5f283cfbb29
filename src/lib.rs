//! Navigation-header search for a marketplace front end.
//!
//! The crate models the interactive half of a header search box: debounced
//! input, concurrent per-collection sub-queries with stale-response
//! suppression, a results panel, and scroll-driven placement of the box.
//! Everything is exposed as plain state machines so embedders supply their own
//! rendering and event plumbing.

pub mod app_dirs;
pub mod logging;
pub mod systems;
pub mod types;
pub mod ui;

pub use systems::remote::{CatalogClient, CollectionSource, RemoteError, RemoteOptions};
pub use types::{
	Collection, CollectionHits, Generation, ItemSummary, ResultSet, SearchAttempt, SearchQuery,
	SearchScope, SellerSummary,
};
pub use ui::{
	Activation, HeaderSearch, Navigation, PanelState, PanelTransition, PointerTarget, ScrollConfig,
	ScrollController, ScrollMeasurement, ScrollMode, SearchTuning,
};

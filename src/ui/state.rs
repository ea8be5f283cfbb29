use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::TryCurrentError;

use super::config::SearchTuning;
use super::navigation::{Highlight, HighlightMove, Navigation, ResultRow};
use super::visibility::{PanelState, PanelTransition, PointerTarget, ResultVisibility};
use crate::systems::remote::CollectionSource;
use crate::systems::search::{DebounceGate, QueryAggregator};
use crate::types::{ResultSet, SearchAttempt, SearchQuery, SearchScope, is_searchable};

mod search_runtime;

use search_runtime::SearchRuntime;

/// Where an activated row leads, plus the panel change it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
	pub navigation: Navigation,
	/// `None` when the panel was already closed.
	pub transition: Option<PanelTransition>,
}

/// The search box of the navigation header.
///
/// One instance owns all mutable search state: create it when the header
/// mounts and drop it when it unmounts. Methods that take `now` never read
/// the clock themselves, which keeps the controller deterministic under test.
pub struct HeaderSearch {
	tuning: SearchTuning,
	text: String,
	scope: SearchScope,
	pub(super) search: SearchRuntime,
	panel: ResultVisibility,
	highlight: Highlight,
}

impl HeaderSearch {
	/// Build a controller that issues sub-queries on the caller's tokio
	/// runtime.
	pub fn new(
		source: Arc<dyn CollectionSource>,
		tuning: SearchTuning,
	) -> Result<Self, TryCurrentError> {
		let aggregator = QueryAggregator::new(source, tuning.result_limit)?;
		let gate = DebounceGate::new(tuning.debounce, tuning.min_query_len);
		Ok(Self {
			scope: tuning.scope,
			tuning,
			text: String::new(),
			search: SearchRuntime::new(gate, aggregator),
			panel: ResultVisibility::new(),
			highlight: Highlight::default(),
		})
	}

	/// Input focus. Reopens the panel when the existing text is searchable.
	pub fn on_focus(&mut self) -> Option<PanelTransition> {
		let ready = self.query_ready();
		self.panel.toggle_on_focus(ready)
	}

	/// Pointer press somewhere on the page.
	pub fn on_pointer(&mut self, target: PointerTarget) -> Option<PanelTransition> {
		let transition = self.panel.handle_outside_interaction(target);
		if transition.is_some() {
			self.highlight.reset();
		}
		transition
	}

	pub fn on_escape(&mut self) -> Option<PanelTransition> {
		self.highlight.reset();
		self.panel.handle_escape()
	}

	pub fn show(&mut self) -> Option<PanelTransition> {
		self.panel.show()
	}

	pub fn hide(&mut self) -> Option<PanelTransition> {
		self.panel.hide()
	}

	/// Move the keyboard highlight through the visible rows.
	pub fn move_highlight(&mut self, direction: HighlightMove) -> Option<ResultRow> {
		if !self.panel.is_open() {
			return None;
		}
		let results = self.search.results()?;
		self.highlight.step(direction, results)
	}

	pub fn highlighted(&self) -> Option<ResultRow> {
		self.highlight.row(self.search.results()?)
	}

	/// Follow the highlighted row, or the "all results" page when nothing is
	/// highlighted. Closes the panel.
	pub fn activate(&mut self) -> Option<Activation> {
		let row_target = self
			.search
			.results()
			.zip(self.highlighted())
			.and_then(|(results, row)| Navigation::for_row(results, row));
		let navigation = match row_target {
			Some(navigation) => navigation,
			None => {
				let query = self.query();
				if !query.is_searchable(self.tuning.min_query_len) {
					return None;
				}
				Navigation::all_results(&query)
			}
		};
		Some(self.leave_for(navigation))
	}

	/// Pointer press on a specific row.
	pub fn click_row(&mut self, row: ResultRow) -> Option<Activation> {
		let navigation = Navigation::for_row(self.search.results()?, row)?;
		Some(self.leave_for(navigation))
	}

	fn leave_for(&mut self, navigation: Navigation) -> Activation {
		self.highlight.reset();
		Activation {
			navigation,
			transition: self.panel.hide(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn scope(&self) -> SearchScope {
		self.scope
	}

	pub fn query(&self) -> SearchQuery {
		SearchQuery::new(&self.text, self.scope)
	}

	pub fn results(&self) -> Option<&ResultSet> {
		self.search.results()
	}

	pub fn current_attempt(&self) -> Option<&SearchAttempt> {
		self.search.current()
	}

	pub fn panel(&self) -> PanelState {
		self.panel.state()
	}

	pub fn tuning(&self) -> &SearchTuning {
		&self.tuning
	}

	/// Deadline at which [`HeaderSearch::poll`] will issue the pending search.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.search.next_deadline()
	}

	/// No pending keystrokes and no sub-query still loading.
	pub fn is_settled(&self) -> bool {
		!self.search.has_pending_input() && !self.search.is_loading()
	}

	pub(super) fn query_ready(&self) -> bool {
		is_searchable(&self.text, self.tuning.min_query_len)
	}

	pub(super) fn set_text(&mut self, text: &str) {
		self.text.clear();
		self.text.push_str(text);
	}

	pub(super) fn set_scope(&mut self, scope: SearchScope) -> bool {
		if self.scope == scope {
			return false;
		}
		self.scope = scope;
		true
	}

	pub(super) fn panel_mut(&mut self) -> &mut ResultVisibility {
		&mut self.panel
	}

	pub(super) fn reset_highlight(&mut self) {
		self.highlight.reset();
	}
}

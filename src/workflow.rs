use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use navsearch::{
	CatalogClient, CollectionSource, HeaderSearch, Navigation, PanelState, ResultSet,
	ScrollConfig, ScrollController, ScrollMeasurement, ScrollMode, SearchQuery,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::settings::ResolvedConfig;

/// What the header panel shows once typing stopped and every sub-query
/// answered.
#[derive(Debug, Serialize)]
pub(crate) struct SearchReport {
	pub(crate) query: SearchQuery,
	/// Searches issued while typing, including superseded ones.
	pub(crate) attempts: usize,
	pub(crate) panel: PanelState,
	pub(crate) results: Option<ResultSet>,
	/// Target of pressing enter without a highlighted row.
	pub(crate) view_all: Option<Navigation>,
}

/// One replayed animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ScrollFrame {
	pub(crate) offset: f64,
	pub(crate) mode: ScrollMode,
	pub(crate) changed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScrollReport {
	pub(crate) viewport: f64,
	pub(crate) frames: Vec<ScrollFrame>,
	pub(crate) final_mode: ScrollMode,
}

/// Coordinates a simulated typing session against the catalog API.
pub(crate) struct SearchWorkflow {
	search: HeaderSearch,
	type_interval: Duration,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig, type_interval: Duration) -> Result<Self> {
		let client = CatalogClient::new(&config.remote).context("failed to build catalog client")?;
		info!(base_url = %client.base_url(), "using catalog API");
		Self::with_source(Arc::new(client), config, type_interval)
	}

	pub(crate) fn with_source(
		source: Arc<dyn CollectionSource>,
		config: &ResolvedConfig,
		type_interval: Duration,
	) -> Result<Self> {
		let search = HeaderSearch::new(source, config.tuning.clone())
			.context("search requires a running tokio runtime")?;
		Ok(Self {
			search,
			type_interval,
		})
	}

	/// Type `text` one character at a time, wait out the debounce window and
	/// every in-flight sub-query, then report the panel.
	pub(crate) async fn run(mut self, text: &str) -> Result<SearchReport> {
		let mut attempts = 0;
		let mut typed = String::new();
		for ch in keystrokes(text, self.type_interval) {
			typed.push_str(ch);
			if self.search.poll(clock_now()).is_some() {
				attempts += 1;
			}
			self.search.on_input_changed(&typed, clock_now());
			self.search.pump_results();
			if !self.type_interval.is_zero() {
				tokio::time::sleep(self.type_interval).await;
			}
		}

		while let Some(deadline) = self.search.next_deadline() {
			tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
			if self.search.poll(clock_now()).is_some() {
				attempts += 1;
			}
		}

		self.search.settle().await;
		debug!(attempts, "search settled");

		let query = self.search.query();
		let view_all = self
			.search
			.results()
			.map(|_| Navigation::all_results(&query));
		Ok(SearchReport {
			attempts,
			panel: self.search.panel(),
			results: self.search.results().cloned(),
			view_all,
			query,
		})
	}
}

/// The tokio clock, which tests can pause and advance.
fn clock_now() -> Instant {
	tokio::time::Instant::now().into_std()
}

/// Split `text` into keystrokes. With no interval the whole text arrives as
/// one paste.
fn keystrokes(text: &str, interval: Duration) -> Vec<&str> {
	if interval.is_zero() {
		return vec![text];
	}
	text.char_indices()
		.map(|(index, ch)| &text[index..index + ch.len_utf8()])
		.collect()
}

/// Feed each offset through the placement machine as its own frame.
pub(crate) fn replay_scroll(config: ScrollConfig, viewport: f64, offsets: &[f64]) -> ScrollReport {
	let mut controller = ScrollController::new(config);
	let frames = offsets
		.iter()
		.map(|&offset| {
			controller.on_scroll(Some(ScrollMeasurement::new(offset, viewport)));
			let changed = controller.on_frame().is_some();
			ScrollFrame {
				offset,
				mode: controller.mode(),
				changed,
			}
		})
		.collect();

	ScrollReport {
		viewport,
		frames,
		final_mode: controller.mode(),
	}
}

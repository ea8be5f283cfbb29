//! Placement of the search box as the page scrolls.
//!
//! [`ScrollState::advance`] is a pure step over the latest measurement.
//! [`ScrollController`] wraps it with per-frame coalescing so the comparison
//! never runs on every raw scroll event.

use serde::Serialize;

use super::config::ScrollConfig;
use super::frame::FrameCoalescer;

/// Where the search box is anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollMode {
	/// Page is at the top; the search box sits under the logo.
	#[default]
	Top,
	/// Navigation visible, search box inline under the logo.
	InlineSearch,
	/// Search box promoted into the primary header row.
	PromotedSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
	Up,
	Down,
}

/// Vertical scroll offset and viewport height, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMeasurement {
	pub offset: f64,
	pub viewport_height: f64,
}

impl ScrollMeasurement {
	pub fn new(offset: f64, viewport_height: f64) -> Self {
		Self {
			offset,
			viewport_height,
		}
	}

	fn is_valid(&self) -> bool {
		self.offset.is_finite() && self.viewport_height.is_finite() && self.viewport_height > 0.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
	pub mode: ScrollMode,
	/// Offset of the last movement that exceeded the hysteresis margin.
	pub last_offset: f64,
	/// Offset where the current downward run started.
	pub run_start: f64,
	pub direction: Option<ScrollDirection>,
}

impl Default for ScrollState {
	fn default() -> Self {
		Self::at_top(0.0)
	}
}

impl ScrollState {
	fn at_top(offset: f64) -> Self {
		Self {
			mode: ScrollMode::Top,
			last_offset: offset,
			run_start: offset,
			direction: None,
		}
	}

	/// Compute the state after observing `measurement`.
	///
	/// A missing or nonsensical measurement falls back to `Top`.
	#[must_use]
	pub fn advance(self, measurement: Option<ScrollMeasurement>, config: &ScrollConfig) -> Self {
		let Some(measurement) = measurement.filter(ScrollMeasurement::is_valid) else {
			return Self::default();
		};
		let offset = measurement.offset.max(0.0);
		if offset <= config.top_threshold {
			return Self::at_top(offset);
		}

		if self.mode == ScrollMode::Top {
			// Leaving the top band always shows the navigation, however small the step.
			return Self {
				mode: ScrollMode::InlineSearch,
				last_offset: offset,
				run_start: self.last_offset,
				direction: Some(ScrollDirection::Down),
			};
		}

		let delta = offset - self.last_offset;
		if delta.abs() <= config.hysteresis {
			// The reference offset does not move, so slow scrolling accumulates.
			return self;
		}

		if delta < 0.0 {
			return Self {
				mode: ScrollMode::InlineSearch,
				last_offset: offset,
				run_start: offset,
				direction: Some(ScrollDirection::Up),
			};
		}

		let run_start = match self.direction {
			Some(ScrollDirection::Down) => self.run_start,
			_ => self.last_offset,
		};
		let promote_at = config.promote_ratio * measurement.viewport_height;
		let mode = match self.mode {
			ScrollMode::PromotedSearch => ScrollMode::PromotedSearch,
			ScrollMode::InlineSearch if offset - run_start >= promote_at => {
				ScrollMode::PromotedSearch
			}
			ScrollMode::InlineSearch | ScrollMode::Top => ScrollMode::InlineSearch,
		};

		Self {
			mode,
			last_offset: offset,
			run_start,
			direction: Some(ScrollDirection::Down),
		}
	}
}

/// Rate-limited owner of the [`ScrollMode`].
#[derive(Debug, Clone)]
pub struct ScrollController {
	config: ScrollConfig,
	state: ScrollState,
	frames: FrameCoalescer<Option<ScrollMeasurement>>,
}

impl ScrollController {
	pub fn new(config: ScrollConfig) -> Self {
		Self {
			config,
			state: ScrollState::default(),
			frames: FrameCoalescer::new(),
		}
	}

	/// Record a raw scroll event. `None` means the page could not be
	/// measured. Returns `true` when a frame callback must be scheduled.
	pub fn on_scroll(&mut self, measurement: Option<ScrollMeasurement>) -> bool {
		self.frames.push(measurement)
	}

	/// Evaluate the latest measurement. Returns the new mode when it changed.
	pub fn on_frame(&mut self) -> Option<ScrollMode> {
		let measurement = self.frames.take()?;
		let previous = self.state.mode;
		self.state = self.state.advance(measurement, &self.config);
		(self.state.mode != previous).then_some(self.state.mode)
	}

	pub fn mode(&self) -> ScrollMode {
		self.state.mode
	}

	pub fn state(&self) -> ScrollState {
		self.state
	}

	pub fn config(&self) -> &ScrollConfig {
		&self.config
	}
}

impl Default for ScrollController {
	fn default() -> Self {
		Self::new(ScrollConfig::default())
	}
}

//! Open/closed state of the results panel.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
	#[default]
	Closed,
	Open,
}

/// Where a pointer press landed relative to the search container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
	/// The input, the scope toggles, or the panel itself.
	Inside,
	Outside,
}

/// Signal emitted when the panel changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTransition {
	pub state: PanelState,
	/// The host must move keyboard focus back to the search input.
	pub refocus_input: bool,
}

impl PanelTransition {
	fn opened() -> Self {
		Self {
			state: PanelState::Open,
			refocus_input: false,
		}
	}

	fn closed(refocus_input: bool) -> Self {
		Self {
			state: PanelState::Closed,
			refocus_input,
		}
	}
}

/// Two-state machine for the results panel.
///
/// Every operation returns `None` when the state did not change, so callers
/// can skip re-rendering.
#[derive(Debug, Clone, Default)]
pub struct ResultVisibility {
	state: PanelState,
}

impl ResultVisibility {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> PanelState {
		self.state
	}

	pub fn is_open(&self) -> bool {
		self.state == PanelState::Open
	}

	pub fn show(&mut self) -> Option<PanelTransition> {
		if self.is_open() {
			return None;
		}
		self.state = PanelState::Open;
		Some(PanelTransition::opened())
	}

	pub fn hide(&mut self) -> Option<PanelTransition> {
		self.close(false)
	}

	/// Input gained focus. Opens only when the existing text is searchable.
	pub fn toggle_on_focus(&mut self, query_ready: bool) -> Option<PanelTransition> {
		if query_ready { self.show() } else { None }
	}

	/// Pointer press anywhere on the page. Presses outside the container
	/// close the panel and hand focus back to the input.
	pub fn handle_outside_interaction(&mut self, target: PointerTarget) -> Option<PanelTransition> {
		match target {
			PointerTarget::Inside => None,
			PointerTarget::Outside => self.close(true),
		}
	}

	pub fn handle_escape(&mut self) -> Option<PanelTransition> {
		self.hide()
	}

	/// A new result set started loading.
	pub fn on_loading_started(&mut self) -> Option<PanelTransition> {
		self.show()
	}

	pub fn on_input_cleared(&mut self) -> Option<PanelTransition> {
		self.hide()
	}

	fn close(&mut self, refocus_input: bool) -> Option<PanelTransition> {
		if !self.is_open() {
			return None;
		}
		self.state = PanelState::Closed;
		Some(PanelTransition::closed(refocus_input))
	}
}

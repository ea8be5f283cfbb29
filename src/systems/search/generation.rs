use crate::types::Generation;

/// Monotonic counter that tags every search attempt.
///
/// Responses are unordered relative to issuance, so every merge checks
/// [`GenerationTracker::is_current`] before touching shared state.
#[derive(Debug, Default)]
pub struct GenerationTracker {
	latest: u64,
}

impl GenerationTracker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn next_generation(&mut self) -> Generation {
		self.latest = self.latest.saturating_add(1);
		Generation(self.latest)
	}

	/// Retire the current generation without issuing a new attempt.
	pub fn invalidate(&mut self) {
		self.latest = self.latest.saturating_add(1);
	}

	pub fn is_current(&self, generation: Generation) -> bool {
		generation.0 == self.latest
	}

	pub fn latest(&self) -> Generation {
		Generation(self.latest)
	}
}

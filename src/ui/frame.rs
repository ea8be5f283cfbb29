/// Coalesces high-frequency events into at most one evaluation per frame.
///
/// Only the latest value survives; intermediate values are overwritten, never
/// queued.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
	latest: Option<T>,
	frame_requested: bool,
}

impl<T> FrameCoalescer<T> {
	pub fn new() -> Self {
		Self {
			latest: None,
			frame_requested: false,
		}
	}

	/// Store `value`. Returns `true` when the host must schedule a frame
	/// callback, `false` when one is already pending.
	pub fn push(&mut self, value: T) -> bool {
		self.latest = Some(value);
		!std::mem::replace(&mut self.frame_requested, true)
	}

	/// Called from the frame callback.
	pub fn take(&mut self) -> Option<T> {
		self.frame_requested = false;
		self.latest.take()
	}

	pub fn is_frame_requested(&self) -> bool {
		self.frame_requested
	}
}

impl<T> Default for FrameCoalescer<T> {
	fn default() -> Self {
		Self::new()
	}
}

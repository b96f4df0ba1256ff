//! Staged reveal sequencing for mount animations.
//!
//! Replaces ad-hoc `setTimeout` chains with one object that owns every
//! pending timeout it scheduled. Whatever has not fired yet is discarded
//! when the sequence is cancelled or dropped, so a disposed view can never
//! be mutated by a late stage.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};

/// A one-shot, forward-only chain of delayed stage callbacks.
pub struct RevealSequence {
	handles: Vec<TimeoutHandle>,
}

impl RevealSequence {
	/// Schedules every `(delay_ms, callback)` stage immediately. Stages fire
	/// independently; a stage that fails to schedule is skipped silently.
	pub fn start(stages: impl IntoIterator<Item = (u64, Box<dyn FnOnce()>)>) -> Self {
		let handles = stages
			.into_iter()
			.filter_map(|(delay_ms, cb)| {
				set_timeout_with_handle(cb, Duration::from_millis(delay_ms)).ok()
			})
			.collect();
		Self { handles }
	}

	/// Discards every stage that has not fired yet.
	pub fn cancel(&mut self) {
		for handle in self.handles.drain(..) {
			handle.clear();
		}
	}
}

impl Drop for RevealSequence {
	fn drop(&mut self) {
		self.cancel();
	}
}

//! Frame-by-frame playback state machine.
//!
//! The intro runs two independent cycles:
//!
//! - **Signature reveal:** one more point becomes visible every frame. When
//!   every point has been shown the count restarts at 1 and a
//!   [`PlaybackEvents::loop_complete`] event fires.
//! - **Beastie animation:** the shared animation step advances once every
//!   [`TICKS_PER_ANIMATION_FRAME`] frames and wraps around the table.
//!
//! With the original tables the cycles last 266 and 920 frames. They are not
//! synchronized, so each signature loop starts at a different point of the
//! beastie animation.
//!
//! # Examples
//!
//! ```
//! use avatar_types::playback::{PlaybackCycle, PlaybackState};
//!
//! let cycle = PlaybackCycle::new(266, 92);
//! let mut state = PlaybackState::new();
//! let mut loops = 0;
//!
//! for _ in 0..266 {
//!     let (next, events) = state.advance(&cycle);
//!     state = next;
//!     loops += events.loop_complete as usize;
//! }
//!
//! assert_eq!(state.revealed_count(), 1);
//! assert_eq!(loops, 1);
//! ```

use crate::layout::TICKS_PER_ANIMATION_FRAME;

/// Lengths of the two playback cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCycle {
	/// Number of signature points
	pub signature_len: usize,
	/// Number of animation steps
	pub animation_len: usize,
}

impl PlaybackCycle {
	/// Creates a new cycle description.
	pub fn new(signature_len: usize, animation_len: usize) -> Self {
		Self {
			signature_len,
			animation_len,
		}
	}
}

/// Events produced by a single [`PlaybackState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackEvents {
	/// The signature reveal wrapped back to a single point
	pub loop_complete: bool,
	/// The beastie animation moved to its next step
	pub animation_step: bool,
}

/// Playback progress.
///
/// Initial state is `(revealed_count = 1, animation_frame = 0, frame_ticks = 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackState {
	revealed_count: usize,
	animation_frame: usize,
	frame_ticks: u64,
}

impl Default for PlaybackState {
	fn default() -> Self {
		Self::new()
	}
}

impl PlaybackState {
	/// Returns the initial state.
	pub fn new() -> Self {
		Self {
			revealed_count: 1,
			animation_frame: 0,
			frame_ticks: 0,
		}
	}

	/// Number of signature points currently visible.
	pub fn revealed_count(&self) -> usize {
		self.revealed_count
	}

	/// Index into both creatures' animation tables.
	pub fn animation_frame(&self) -> usize {
		self.animation_frame
	}

	/// Frames advanced since the start of playback.
	pub fn frame_ticks(&self) -> u64 {
		self.frame_ticks
	}

	/// Advances by one rendered frame.
	///
	/// 1. One more signature point is revealed; past the end of the table the
	///    count resets to 1 and `loop_complete` is set. Animation state is
	///    left alone.
	/// 2. The tick counter increments; on every tenth tick the animation
	///    frame moves on, wrapping at `cycle.animation_len`.
	pub fn advance(self, cycle: &PlaybackCycle) -> (Self, PlaybackEvents) {
		let mut next = self;
		let mut events = PlaybackEvents::default();

		next.revealed_count += 1;
		if next.revealed_count > cycle.signature_len {
			next.revealed_count = 1;
			events.loop_complete = true;
		}

		next.frame_ticks = next.frame_ticks.wrapping_add(1);
		if next.frame_ticks % TICKS_PER_ANIMATION_FRAME == 0 {
			next.animation_frame = (next.animation_frame + 1) % cycle.animation_len.max(1);
			events.animation_step = true;
		}

		(next, events)
	}
}

//! The intro playback loop.
//!
//! Every iteration runs, strictly in this order:
//!
//! 1. draw the current [`PlaybackState`] into the surface
//! 2. hand the surface to the [`Frontend`] (which also paces the loop)
//! 3. advance the playback state
//! 4. capture the surface if a [`Recorder`] is attached
//! 5. ask the frontend whether to quit
//!
//! While recording, the first completed signature loop stops playback so
//! the recording holds exactly one cycle. The recorder is finalized once,
//! whichever way the loop ends.

use log::{info, warn};

use crate::{
	atlas::SpriteSheet,
	file::{IntroError, TitleFile},
	layout::ScreenSize,
	playback::{PlaybackCycle, PlaybackState},
	record::Recorder,
	render::{Renderer, Surface, blank_surface},
};

/// Presents frames and reports quit requests.
///
/// This is the seam to whatever owns the window (or lack of one).
pub trait Frontend {
	/// Shows a composed frame, waiting as needed to hold the frame rate.
	fn present(&mut self, surface: &Surface);

	/// Returns true once the user or environment asked playback to stop.
	fn quit_requested(&mut self) -> bool;
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
	/// A full signature cycle was recorded
	LoopComplete,
	/// The frontend asked to quit
	Quit,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
	/// Frames drawn and presented
	pub frames_rendered: u64,
	/// Frames handed to the recorder
	pub frames_captured: usize,
	/// Signature loops completed
	pub loops_completed: u64,
	/// Why the run ended
	pub stop_reason: StopReason,
}

/// Drives rendering, playback and recording.
pub struct Player<'a> {
	renderer: Renderer<'a>,
	cycle: PlaybackCycle,
	state: PlaybackState,
	surface: Surface,
	recorder: Option<Box<dyn Recorder + 'a>>,
	frames_rendered: u64,
	loops_completed: u64,
}

impl<'a> Player<'a> {
	/// Creates a player that is not recording.
	pub fn new(title: &'a TitleFile, sheet: &'a SpriteSheet, screen: ScreenSize) -> Self {
		Self {
			renderer: Renderer::new(title, sheet, screen),
			cycle: PlaybackCycle::new(title.signature().len(), title.animation_len()),
			state: PlaybackState::new(),
			surface: blank_surface(screen),
			recorder: None,
			frames_rendered: 0,
			loops_completed: 0,
		}
	}

	/// Attaches a recorder; playback will stop after one signature loop.
	pub fn with_recorder(mut self, recorder: Box<dyn Recorder + 'a>) -> Self {
		self.recorder = Some(recorder);
		self
	}

	/// Returns true if frames are being captured.
	pub fn is_recording(&self) -> bool {
		self.recorder.is_some()
	}

	/// Current playback state.
	pub fn state(&self) -> &PlaybackState {
		&self.state
	}

	/// Most recently drawn frame.
	pub fn surface(&self) -> &Surface {
		&self.surface
	}

	/// Runs until a recorded loop completes or the frontend asks to quit.
	///
	/// # Errors
	///
	/// Returns the first recorder failure. A partial recording is finished
	/// before the error is returned when possible.
	pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<RunSummary, IntroError> {
		info!(
			"Starting playback: {} signature points, {} animation steps{}",
			self.cycle.signature_len,
			self.cycle.animation_len,
			if self.is_recording() {
				", recording"
			} else {
				""
			}
		);

		let stop_reason = loop {
			if let Some(reason) = self.step(frontend)? {
				break reason;
			}
		};

		let frames_captured = self.finish_recording()?;
		info!(
			"Playback stopped ({:?}) after {} frames, {} loops",
			stop_reason, self.frames_rendered, self.loops_completed
		);

		Ok(RunSummary {
			frames_rendered: self.frames_rendered,
			frames_captured,
			loops_completed: self.loops_completed,
			stop_reason,
		})
	}

	/// Runs a single iteration and returns the stop reason if the loop
	/// should end.
	///
	/// The recorder is not finalized here; [`Player::run`] does that.
	pub fn step<F: Frontend>(
		&mut self,
		frontend: &mut F,
	) -> Result<Option<StopReason>, IntroError> {
		self.renderer.draw(&self.state, &mut self.surface);
		frontend.present(&self.surface);
		self.frames_rendered += 1;

		let (next, events) = self.state.advance(&self.cycle);
		self.state = next;
		if events.loop_complete {
			self.loops_completed += 1;
			info!("Signature loop {} complete", self.loops_completed);
		}

		let mut stop = None;
		if let Some(recorder) = self.recorder.as_mut() {
			if let Err(err) = recorder.capture(&self.surface) {
				if let Err(finish_err) = recorder.finish() {
					warn!("Could not finish partial recording: {}", finish_err);
				}
				self.recorder = None;
				return Err(err.into());
			}
			if events.loop_complete {
				stop = Some(StopReason::LoopComplete);
			}
		}

		if frontend.quit_requested() {
			return Ok(Some(StopReason::Quit));
		}
		Ok(stop)
	}

	/// Finalizes the recorder, if any, and returns the number of frames it
	/// captured.
	fn finish_recording(&mut self) -> Result<usize, IntroError> {
		match self.recorder.take() {
			Some(mut recorder) => {
				recorder.finish()?;
				Ok(recorder.frames_captured())
			}
			None => Ok(0),
		}
	}
}

impl std::fmt::Debug for Player<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Player")
			.field("cycle", &self.cycle)
			.field("state", &self.state)
			.field("recording", &self.is_recording())
			.field("frames_rendered", &self.frames_rendered)
			.finish()
	}
}

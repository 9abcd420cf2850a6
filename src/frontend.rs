//! Headless frontend: paces the loop at the target frame rate and turns
//! SIGINT/SIGTERM or a frame limit into a quit request.

use std::{
	io,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
	thread,
	time::{Duration, Instant},
};

use avatar_intro::prelude::{Frontend, Surface, TARGET_FPS};
use log::{debug, info};
use signal_hook::consts::{SIGINT, SIGTERM};

/// Sleeps so consecutive ticks are at least one frame apart.
#[derive(Debug)]
pub struct FramePacer {
	frame_time: Duration,
	next: Option<Instant>,
}

impl FramePacer {
	/// Creates a pacer for `fps` frames per second.
	pub fn new(fps: u32) -> Self {
		Self {
			frame_time: Duration::from_secs(1) / fps.max(1),
			next: None,
		}
	}

	/// Waits for the next frame slot.
	pub fn tick(&mut self) {
		let now = Instant::now();
		let target = self.next.unwrap_or(now);
		if target > now {
			thread::sleep(target - now);
		}
		// Late frames do not make later frames hurry
		self.next = Some(target.max(now) + self.frame_time);
	}
}

/// Frontend without a window.
#[derive(Debug)]
pub struct HeadlessFrontend {
	pacer: FramePacer,
	quit: Arc<AtomicBool>,
	max_frames: Option<u64>,
	presented: u64,
}

impl HeadlessFrontend {
	/// Creates the frontend and registers the quit signals.
	pub fn new(max_frames: Option<u64>) -> io::Result<Self> {
		let quit = Arc::new(AtomicBool::new(false));
		for signal in [SIGINT, SIGTERM] {
			signal_hook::flag::register(signal, Arc::clone(&quit))?;
		}
		Ok(Self::with_flag(quit, max_frames, FramePacer::new(TARGET_FPS)))
	}

	fn with_flag(quit: Arc<AtomicBool>, max_frames: Option<u64>, pacer: FramePacer) -> Self {
		Self {
			pacer,
			quit,
			max_frames,
			presented: 0,
		}
	}
}

impl Frontend for HeadlessFrontend {
	fn present(&mut self, _surface: &Surface) {
		self.pacer.tick();
		self.presented += 1;
		if self.presented % u64::from(TARGET_FPS) == 0 {
			debug!("Presented {} frames", self.presented);
		}
	}

	fn quit_requested(&mut self) -> bool {
		if self.quit.load(Ordering::Relaxed) {
			info!("Quit signal received");
			return true;
		}
		self.max_frames.is_some_and(|limit| self.presented >= limit)
	}
}

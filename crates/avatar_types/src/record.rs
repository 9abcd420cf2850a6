//! Frame capture.
//!
//! A [`Recorder`] receives every composed frame and is finalized exactly
//! once, either when the first signature loop completes or when playback is
//! stopped early. Two implementations ship with the crate:
//!
//! - [`GifRecorder`]: an animated GIF paced at [`TARGET_FPS`].
//! - [`PngSequenceRecorder`]: one numbered PNG per frame in a directory.
//!
//! # Examples
//!
//! ```no_run
//! use avatar_types::layout::ScreenSize;
//! use avatar_types::record::{GifRecorder, Recorder};
//! use avatar_types::render::blank_surface;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let screen = ScreenSize::default();
//! let mut recorder = GifRecorder::create("intro.gif", screen)?;
//! recorder.capture(&blank_surface(screen))?;
//! recorder.finish()?;
//! # Ok(())
//! # }
//! ```

use std::{
	fs, io,
	io::{BufWriter, Write},
	path::{Path, PathBuf},
	sync::{Arc, Mutex},
};

use image::{
	Delay, Frame,
	codecs::gif::{GifEncoder, Repeat},
};
use log::{debug, info, warn};

use crate::{
	file::RecorderError,
	layout::{ScreenSize, TARGET_FPS},
	render::Surface,
};

/// GIF encoder speed, 1 (best quality) to 30 (fastest).
const GIF_ENCODER_SPEED: i32 = 10;

/// Sink for composed frames.
pub trait Recorder {
	/// Appends a frame.
	///
	/// # Errors
	///
	/// Fails if the frame cannot be encoded or written, if its size differs
	/// from the recording size, or if the recording was already finished.
	fn capture(&mut self, surface: &Surface) -> Result<(), RecorderError>;

	/// Flushes and closes the recording.
	///
	/// Only the first call does any work; later calls fail with
	/// [`RecorderError::Finished`].
	fn finish(&mut self) -> Result<(), RecorderError>;

	/// Number of frames captured so far.
	fn frames_captured(&self) -> usize;
}

fn check_size(screen: ScreenSize, surface: &Surface) -> Result<(), RecorderError> {
	let actual = surface.dimensions();
	if actual != (screen.width, screen.height) {
		return Err(RecorderError::SizeMismatch {
			expected: (screen.width, screen.height),
			actual,
		});
	}
	Ok(())
}

/// Keeps the first write error so it survives the encoder being dropped.
///
/// The GIF trailer and the final buffer flush are written from `Drop`
/// impls that discard their results.
struct TrackedWriter<W> {
	inner: W,
	error: Arc<Mutex<Option<io::Error>>>,
}

impl<W: Write> TrackedWriter<W> {
	fn track<T>(&self, result: io::Result<T>) -> io::Result<T> {
		if let Err(err) = &result
			&& let Ok(mut slot) = self.error.lock()
			&& slot.is_none()
		{
			*slot = Some(io::Error::new(err.kind(), err.to_string()));
		}
		result
	}
}

impl<W: Write> Write for TrackedWriter<W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let result = self.inner.write(buf);
		self.track(result)
	}

	fn flush(&mut self) -> io::Result<()> {
		let result = self.inner.flush();
		self.track(result)
	}
}

/// Records frames into an animated GIF.
pub struct GifRecorder<W: Write> {
	encoder: Option<GifEncoder<BufWriter<TrackedWriter<W>>>>,
	write_error: Arc<Mutex<Option<io::Error>>>,
	screen: ScreenSize,
	frames: usize,
}

impl GifRecorder<fs::File> {
	/// Creates a GIF file at `path`, replacing any existing file.
	pub fn create(path: impl AsRef<Path>, screen: ScreenSize) -> Result<Self, RecorderError> {
		let file = fs::File::create(path.as_ref())?;
		info!("Recording to {}", path.as_ref().display());
		Self::new(file, screen)
	}
}

impl<W: Write> GifRecorder<W> {
	/// Starts a looping GIF on `writer`. Output is buffered internally.
	pub fn new(writer: W, screen: ScreenSize) -> Result<Self, RecorderError> {
		let write_error = Arc::new(Mutex::new(None));
		let tracked = TrackedWriter {
			inner: writer,
			error: Arc::clone(&write_error),
		};
		let mut encoder = GifEncoder::new_with_speed(BufWriter::new(tracked), GIF_ENCODER_SPEED);
		encoder.set_repeat(Repeat::Infinite)?;
		Ok(Self {
			encoder: Some(encoder),
			write_error,
			screen,
			frames: 0,
		})
	}

	fn frame_delay() -> Delay {
		Delay::from_numer_denom_ms(1000, TARGET_FPS)
	}
}

impl<W: Write> Recorder for GifRecorder<W> {
	fn capture(&mut self, surface: &Surface) -> Result<(), RecorderError> {
		let Some(encoder) = self.encoder.as_mut() else {
			return Err(RecorderError::Finished {
				frames: self.frames,
			});
		};
		check_size(self.screen, surface)?;

		encoder.encode_frame(Frame::from_parts(surface.clone(), 0, 0, Self::frame_delay()))?;
		self.frames += 1;
		Ok(())
	}

	fn finish(&mut self) -> Result<(), RecorderError> {
		let Some(encoder) = self.encoder.take() else {
			return Err(RecorderError::Finished {
				frames: self.frames,
			});
		};

		// Writes the trailer, then flushes the buffer into the tracked writer
		drop(encoder);
		let failure = match self.write_error.lock() {
			Ok(mut slot) => slot.take(),
			Err(poisoned) => poisoned.into_inner().take(),
		};
		if let Some(err) = failure {
			warn!("GIF recording could not be finalized: {}", err);
			return Err(RecorderError::IOError(err));
		}
		info!("GIF recording finished with {} frames", self.frames);
		Ok(())
	}

	fn frames_captured(&self) -> usize {
		self.frames
	}
}

impl<W: Write> std::fmt::Debug for GifRecorder<W> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GifRecorder")
			.field("screen", &self.screen)
			.field("frames", &self.frames)
			.field("finished", &self.encoder.is_none())
			.finish()
	}
}

/// Records frames as `frame_00000.png`, `frame_00001.png`, ... in a directory.
#[derive(Debug)]
pub struct PngSequenceRecorder {
	dir: PathBuf,
	screen: ScreenSize,
	frames: usize,
	finished: bool,
}

impl PngSequenceRecorder {
	/// Creates `dir` (and parents) if needed and records into it.
	pub fn create(dir: impl AsRef<Path>, screen: ScreenSize) -> Result<Self, RecorderError> {
		let dir = dir.as_ref().to_path_buf();
		fs::create_dir_all(&dir)?;
		info!("Recording PNG frames to {}", dir.display());
		Ok(Self {
			dir,
			screen,
			frames: 0,
			finished: false,
		})
	}

	/// Path of frame `index`.
	pub fn frame_path(&self, index: usize) -> PathBuf {
		self.dir.join(format!("frame_{index:05}.png"))
	}
}

impl Recorder for PngSequenceRecorder {
	fn capture(&mut self, surface: &Surface) -> Result<(), RecorderError> {
		if self.finished {
			return Err(RecorderError::Finished {
				frames: self.frames,
			});
		}
		check_size(self.screen, surface)?;

		let path = self.frame_path(self.frames);
		surface.save(&path)?;
		debug!("Captured {}", path.display());
		self.frames += 1;
		Ok(())
	}

	fn finish(&mut self) -> Result<(), RecorderError> {
		if self.finished {
			return Err(RecorderError::Finished {
				frames: self.frames,
			});
		}
		self.finished = true;
		info!("PNG recording finished with {} frames in {}", self.frames, self.dir.display());
		Ok(())
	}

	fn frames_captured(&self) -> usize {
		self.frames
	}
}

//! Error types for asset loading, sprite sheets and recording.

use thiserror::Error;

use super::title::Creature;

/// Errors that can occur when loading the `TITLE.EXE` blob
#[derive(Debug, Error)]
pub enum AssetLoadError {
	/// Not enough data to decode
	#[error("Insufficient data: expected at least {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Animation entry that does not name a tile
	#[error(
		"Invalid {creature} tile index {value} at animation entry {index} (tile count: {tile_count})"
	)]
	InvalidTileIndex {
		/// Creature whose table holds the entry
		creature: Creature,
		/// Position in the animation table
		index: usize,
		/// Raw value read from the blob
		value: u8,
		/// Number of tiles available
		tile_count: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when loading the sprite sheet
#[derive(Debug, Error)]
pub enum ImageLoadError {
	/// Image could not be opened or decoded
	#[error(transparent)]
	Decode(#[from] image::ImageError),

	/// A computed tile falls outside the image
	#[error(
		"{creature} tile {frame} at ({x}, {y}) size {width}x{height} exceeds image bounds {image_width}x{image_height}"
	)]
	TileOutOfBounds {
		/// Creature the tile belongs to
		creature: Creature,
		/// Frame index of the tile
		frame: usize,
		/// Tile X
		x: u32,
		/// Tile Y
		y: u32,
		/// Tile width
		width: u32,
		/// Tile height
		height: u32,
		/// Image width
		image_width: u32,
		/// Image height
		image_height: u32,
	},
}

/// Errors that can occur while capturing frames
#[derive(Debug, Error)]
pub enum RecorderError {
	/// Frame encoding failed
	#[error(transparent)]
	Encode(#[from] image::ImageError),

	/// Captured surface does not match the recording size
	#[error("Frame size mismatch: recording is {expected:?}, got {actual:?}")]
	SizeMismatch {
		/// Size the recording was started with
		expected: (u32, u32),
		/// Size of the offending surface
		actual: (u32, u32),
	},

	/// Recording was already finalized
	#[error("Recording already finished after {frames} frames")]
	Finished {
		/// Frames captured before finalizing
		frames: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Unified error type for a playback run
#[derive(Debug, Error)]
pub enum IntroError {
	/// Asset error
	#[error(transparent)]
	Asset(#[from] AssetLoadError),

	/// Sprite sheet error
	#[error(transparent)]
	Image(#[from] ImageLoadError),

	/// Recording error
	#[error(transparent)]
	Recorder(#[from] RecorderError),
}

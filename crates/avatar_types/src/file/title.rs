//! `TITLE.EXE` asset support.
//!
//! The intro program keeps its animation scripts inside the executable image
//! at fixed offsets. Two tables are extracted:
//!
//! - **Animation table (0x7380, 184 bytes):** 92 interleaved pairs. The even
//!   byte of each pair is the daemon's tile index, the odd byte the dragon's.
//! - **Signature table (0x746E, 532 bytes):** 266 interleaved `(x, y)` pairs.
//!   DOS screen buffers grow up from the bottom, so `y` is stored flipped and
//!   decodes to `screen_height - raw`.
//!
//! ```text
//! 0x7380: d0 g0 d1 g1 d2 g2 ...  (d = daemon tile, g = dragon tile)
//! 0x746E: x0 y0 x1 y1 x2 y2 ...
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use avatar_types::file::title::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let title = File::open("Ultima4/TITLE.EXE")?;
//! println!("{} animation steps", title.animation_len());
//! println!("{} signature points", title.signature().len());
//! # Ok(())
//! # }
//! ```

use std::{
	fmt::{Display, Formatter},
	io::Read,
	path::Path,
};

use log::debug;
use serde::Serialize;

use super::error::AssetLoadError;
use crate::layout::AssetLayout;

/// One of the two beasties animated in the top corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Creature {
	/// Top-left creature
	Daemon,
	/// Top-right creature
	Dragon,
}

impl Creature {
	/// Both creatures, in drawing order.
	pub const ALL: [Creature; 2] = [Creature::Daemon, Creature::Dragon];
}

impl Display for Creature {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Daemon => write!(f, "daemon"),
			Self::Dragon => write!(f, "dragon"),
		}
	}
}

/// Screen coordinate of one signature pixel, already flipped to top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignaturePoint {
	/// X coordinate
	pub x: i32,
	/// Y coordinate (top-down)
	pub y: i32,
}

impl SignaturePoint {
	/// Creates a new point.
	pub fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl Display for SignaturePoint {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Ordered tile indices for one creature.
///
/// Every entry is a valid tile index; that is checked when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnimationTable {
	frames: Vec<u8>,
}

impl AnimationTable {
	/// Returns the number of animation steps.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns true if the table has no steps.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns the tile index shown at animation step `index`.
	pub fn tile(&self, index: usize) -> Option<usize> {
		self.frames.get(index).map(|&tile| tile as usize)
	}

	/// Returns the raw tile indices.
	pub fn as_slice(&self) -> &[u8] {
		&self.frames
	}
}

/// Ordered points of the hand-signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignatureTable {
	points: Vec<SignaturePoint>,
}

impl SignatureTable {
	/// Returns the number of points.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Returns true if there are no points.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Returns the point at `index`.
	pub fn get(&self, index: usize) -> Option<SignaturePoint> {
		self.points.get(index).copied()
	}

	/// Returns the first `count` points, clamped to the table length.
	pub fn revealed(&self, count: usize) -> &[SignaturePoint] {
		&self.points[..count.min(self.points.len())]
	}

	/// Returns all points.
	pub fn points(&self) -> &[SignaturePoint] {
		&self.points
	}
}

/// Decoded `TITLE.EXE` tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
	/// Daemon tile indices
	daemon: AnimationTable,
	/// Dragon tile indices
	dragon: AnimationTable,
	/// Signature points
	signature: SignatureTable,
}

impl File {
	/// Opens and decodes `TITLE.EXE` using the default layout.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read, is too short, or holds an
	/// animation entry that is not a valid tile index.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetLoadError> {
		Self::open_with_layout(path, &AssetLayout::default())
	}

	/// Opens and decodes `TITLE.EXE` using a custom layout.
	pub fn open_with_layout(
		path: impl AsRef<Path>,
		layout: &AssetLayout,
	) -> Result<Self, AssetLoadError> {
		let data = std::fs::read(path)?;
		Self::from_bytes_with_layout(&data, layout)
	}

	/// Loads the tables from any reader using the default layout.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, AssetLoadError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Decodes the tables from a byte slice using the default layout.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AssetLoadError> {
		Self::from_bytes_with_layout(data, &AssetLayout::default())
	}

	/// Decodes the tables from a byte slice.
	///
	/// # Arguments
	///
	/// * `data` - The complete asset blob
	/// * `layout` - Offsets and sizes of the tables
	///
	/// # Errors
	///
	/// Fails with [`AssetLoadError::InsufficientData`] when `data` is shorter
	/// than [`AssetLayout::required_len`] and with
	/// [`AssetLoadError::InvalidTileIndex`] when an animation entry is not
	/// below `layout.tile_count`. Nothing is returned on failure.
	///
	/// # Examples
	///
	/// ```
	/// use avatar_types::file::title::{File, SignaturePoint};
	///
	/// let mut data = vec![0u8; 0x7600];
	/// data[0x746e..0x7472].copy_from_slice(&[10, 0, 20, 240]);
	///
	/// let title = File::from_bytes(&data).unwrap();
	/// assert_eq!(title.signature().get(0), Some(SignaturePoint::new(10, 240)));
	/// assert_eq!(title.signature().get(1), Some(SignaturePoint::new(20, 0)));
	/// ```
	pub fn from_bytes_with_layout(
		data: &[u8],
		layout: &AssetLayout,
	) -> Result<Self, AssetLoadError> {
		let expected = layout.required_len();
		if data.len() < expected {
			return Err(AssetLoadError::InsufficientData {
				expected,
				actual: data.len(),
			});
		}

		let (daemon, dragon) = decode_animation(data, layout)?;
		let signature = decode_signature(data, layout);

		debug!(
			"Decoded title asset: {} animation steps, {} signature points",
			daemon.len(),
			signature.len()
		);

		Ok(Self {
			daemon,
			dragon,
			signature,
		})
	}

	/// Returns the daemon's animation table.
	pub fn daemon(&self) -> &AnimationTable {
		&self.daemon
	}

	/// Returns the dragon's animation table.
	pub fn dragon(&self) -> &AnimationTable {
		&self.dragon
	}

	/// Returns the animation table for `creature`.
	pub fn animation(&self, creature: Creature) -> &AnimationTable {
		match creature {
			Creature::Daemon => &self.daemon,
			Creature::Dragon => &self.dragon,
		}
	}

	/// Returns the number of animation steps shared by both creatures.
	pub fn animation_len(&self) -> usize {
		self.daemon.len()
	}

	/// Returns the signature points.
	pub fn signature(&self) -> &SignatureTable {
		&self.signature
	}
}

impl TryFrom<&[u8]> for File {
	type Error = AssetLoadError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl TryFrom<&Vec<u8>> for File {
	type Error = AssetLoadError;

	fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

fn decode_animation(
	data: &[u8],
	layout: &AssetLayout,
) -> Result<(AnimationTable, AnimationTable), AssetLoadError> {
	let bytes = &data[layout.animation_offset..layout.animation_end()];
	let mut daemon = Vec::with_capacity(layout.animation_len);
	let mut dragon = Vec::with_capacity(layout.animation_len);

	for (index, pair) in bytes.chunks_exact(2).enumerate() {
		for (creature, value) in Creature::ALL.into_iter().zip(pair.iter().copied()) {
			if value as usize >= layout.tile_count {
				return Err(AssetLoadError::InvalidTileIndex {
					creature,
					index,
					value,
					tile_count: layout.tile_count,
				});
			}
		}
		daemon.push(pair[0]);
		dragon.push(pair[1]);
	}

	Ok((
		AnimationTable {
			frames: daemon,
		},
		AnimationTable {
			frames: dragon,
		},
	))
}

fn decode_signature(data: &[u8], layout: &AssetLayout) -> SignatureTable {
	let height = layout.screen_height as i32;
	let points = data[layout.signature_offset..layout.signature_end()]
		.chunks_exact(2)
		.map(|pair| SignaturePoint::new(pair[0] as i32, height - pair[1] as i32))
		.collect();

	SignatureTable {
		points,
	}
}

//! Sprite sheet tiling for the beastie animations.
//!
//! The sheet stores the daemon frames in a block starting at `x = 0` and the
//! dragon frames in a block starting at `x = 176`. Frames are packed
//! column-major: each block is filled top to bottom in rows of 32 pixels, and
//! a new column starts when the next row would overflow the image height.
//!
//! ```text
//!  x=0      56      112     176    224    272
//!  +-------+-------+-------+------+------+------+ y=0
//!  | d0    | d6    | d12   | g0   | g6   | g12  |
//!  | d1    | d7    | d13   | g1   | g7   | g13  |
//!  | ...   | ...   | ...   | ...  | ...  | ...  |
//!  | d5    | d11   | d17   | g5   | g11  | g17  |
//!  +-------+-------+-------+------+------+------+ y=192
//! ```

use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::{
	file::{Creature, ImageLoadError},
	layout::AtlasLayout,
};

/// A rectangle inside the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
	/// Left edge
	pub x: u32,
	/// Top edge
	pub y: u32,
	/// Width
	pub width: u32,
	/// Height
	pub height: u32,
}

impl TileRect {
	/// Creates a new rectangle.
	pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Returns true when the rectangle lies entirely within `width` x `height`.
	pub fn fits_within(&self, width: u32, height: u32) -> bool {
		self.x.checked_add(self.width).is_some_and(|right| right <= width)
			&& self.y.checked_add(self.height).is_some_and(|bottom| bottom <= height)
	}
}

/// Frame tiles for both creatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAtlas {
	daemon: Vec<TileRect>,
	dragon: Vec<TileRect>,
}

impl SpriteAtlas {
	/// Computes the tiles for an image of the given height.
	///
	/// No bounds checking happens here; see [`SpriteAtlas::for_image`].
	///
	/// # Examples
	///
	/// ```
	/// use avatar_types::atlas::{SpriteAtlas, TileRect};
	/// use avatar_types::file::Creature;
	/// use avatar_types::layout::AtlasLayout;
	///
	/// let atlas = SpriteAtlas::tile(192, &AtlasLayout::default());
	/// assert_eq!(atlas.get(Creature::Daemon, 6), Some(TileRect::new(56, 0, 56, 32)));
	/// assert_eq!(atlas.get(Creature::Dragon, 0), Some(TileRect::new(176, 0, 48, 32)));
	/// ```
	pub fn tile(image_height: u32, layout: &AtlasLayout) -> Self {
		let mut daemon = Vec::with_capacity(layout.frame_count);
		let mut dragon = Vec::with_capacity(layout.frame_count);
		let mut daemon_x = layout.daemon_origin_x;
		let mut dragon_x = layout.dragon_origin_x;
		let mut y = 0;

		for _ in 0..layout.frame_count {
			daemon.push(TileRect::new(daemon_x, y, layout.daemon_width, layout.tile_height));
			dragon.push(TileRect::new(dragon_x, y, layout.dragon_width, layout.tile_height));

			y += layout.tile_height;
			if y + layout.tile_height > image_height {
				daemon_x += layout.daemon_width;
				dragon_x += layout.dragon_width;
				y = 0;
			}
		}

		Self {
			daemon,
			dragon,
		}
	}

	/// Computes the tiles for an image and checks that all of them fit.
	///
	/// # Errors
	///
	/// Returns [`ImageLoadError::TileOutOfBounds`] for the first tile that
	/// extends past the image.
	pub fn for_image(
		width: u32,
		height: u32,
		layout: &AtlasLayout,
	) -> Result<Self, ImageLoadError> {
		let atlas = Self::tile(height, layout);

		for creature in Creature::ALL {
			for (frame, rect) in atlas.tiles(creature).iter().enumerate() {
				if !rect.fits_within(width, height) {
					return Err(ImageLoadError::TileOutOfBounds {
						creature,
						frame,
						x: rect.x,
						y: rect.y,
						width: rect.width,
						height: rect.height,
						image_width: width,
						image_height: height,
					});
				}
			}
		}

		Ok(atlas)
	}

	/// Returns the tiles of `creature`.
	pub fn tiles(&self, creature: Creature) -> &[TileRect] {
		match creature {
			Creature::Daemon => &self.daemon,
			Creature::Dragon => &self.dragon,
		}
	}

	/// Returns tile `frame` of `creature`.
	pub fn get(&self, creature: Creature, frame: usize) -> Option<TileRect> {
		self.tiles(creature).get(frame).copied()
	}

	/// Returns the number of frames per creature.
	pub fn frame_count(&self) -> usize {
		self.daemon.len()
	}
}

/// The decoded sprite image together with its atlas.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
	image: RgbaImage,
	atlas: SpriteAtlas,
}

impl SpriteSheet {
	/// Loads a sprite sheet from disk using the default layout.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageLoadError> {
		Self::open_with_layout(path, &AtlasLayout::default())
	}

	/// Loads a sprite sheet from disk.
	///
	/// # Errors
	///
	/// Returns an error if the image cannot be decoded or is too small for
	/// the tiles described by `layout`.
	pub fn open_with_layout(
		path: impl AsRef<Path>,
		layout: &AtlasLayout,
	) -> Result<Self, ImageLoadError> {
		let image = image::open(path.as_ref())?.to_rgba8();
		debug!(
			"Loaded sprite sheet {} ({}x{})",
			path.as_ref().display(),
			image.width(),
			image.height()
		);
		Self::from_image(image, layout)
	}

	/// Wraps an already decoded image.
	pub fn from_image(image: RgbaImage, layout: &AtlasLayout) -> Result<Self, ImageLoadError> {
		let atlas = SpriteAtlas::for_image(image.width(), image.height(), layout)?;
		Ok(Self {
			image,
			atlas,
		})
	}

	/// Returns the sprite image.
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Returns the atlas.
	pub fn atlas(&self) -> &SpriteAtlas {
		&self.atlas
	}
}

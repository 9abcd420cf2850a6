//! Format description for the title sequence assets.
//!
//! Every offset, size and dimension the decoder, atlas and renderer depend on
//! lives in these structs instead of global constants, so tests can swap in
//! a smaller synthetic layout without touching the real one.
//!
//! # Examples
//!
//! ```
//! use avatar_types::layout::IntroLayout;
//!
//! let layout = IntroLayout::default();
//! assert_eq!(layout.asset.animation_offset, 0x7380);
//! assert_eq!(layout.asset.signature_offset, 0x746e);
//! assert_eq!(layout.screen.width, 320);
//! ```

/// Frame rate the intro is paced and recorded at.
pub const TARGET_FPS: u32 = 30;

/// Number of rendered frames per animation step.
pub const TICKS_PER_ANIMATION_FRAME: u64 = 10;

/// Window caption used by frontends.
pub const SCREEN_TITLE: &str = "Not Ultima IV";

/// Byte layout of the `TITLE.EXE` blob.
///
/// ```text
/// Offset  Size  Field
/// ------  ----  ------------------------------------------------
/// 0x7380  184   92 interleaved (daemon, dragon) tile index pairs
/// 0x746E  532   266 interleaved (x, y) signature coordinates
/// ```
///
/// The Y coordinate is stored bottom-up and gets flipped against
/// `screen_height` while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLayout {
	/// Minimum accepted length of the blob
	pub min_len: usize,
	/// Offset of the interleaved animation table
	pub animation_offset: usize,
	/// Number of (daemon, dragon) pairs
	pub animation_len: usize,
	/// Offset of the interleaved signature table
	pub signature_offset: usize,
	/// Number of (x, y) points
	pub signature_len: usize,
	/// Height used to flip signature Y coordinates
	pub screen_height: u32,
	/// Number of tiles each animation entry may index
	pub tile_count: usize,
}

impl Default for AssetLayout {
	fn default() -> Self {
		Self {
			min_len: 0x7600,
			animation_offset: 0x7380,
			animation_len: 92,
			signature_offset: 0x746e,
			signature_len: 266,
			screen_height: 240,
			tile_count: 18,
		}
	}
}

impl AssetLayout {
	/// End (exclusive) of the animation table.
	pub fn animation_end(&self) -> usize {
		self.animation_offset + self.animation_len * 2
	}

	/// End (exclusive) of the signature table.
	pub fn signature_end(&self) -> usize {
		self.signature_offset + self.signature_len * 2
	}

	/// Number of bytes a blob needs before it can be decoded.
	pub fn required_len(&self) -> usize {
		self.min_len.max(self.animation_end()).max(self.signature_end())
	}
}

/// Placement of the daemon and dragon frames inside the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
	/// X of the first daemon column
	pub daemon_origin_x: u32,
	/// X of the first dragon column
	pub dragon_origin_x: u32,
	/// Width of a daemon tile
	pub daemon_width: u32,
	/// Width of a dragon tile
	pub dragon_width: u32,
	/// Height shared by both tile kinds
	pub tile_height: u32,
	/// Frames per creature
	pub frame_count: usize,
}

impl Default for AtlasLayout {
	fn default() -> Self {
		Self {
			daemon_origin_x: 0,
			dragon_origin_x: 176,
			daemon_width: 56,
			dragon_width: 48,
			tile_height: 32,
			frame_count: 18,
		}
	}
}

/// Dimensions of the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl Default for ScreenSize {
	fn default() -> Self {
		Self {
			width: 320,
			height: 240,
		}
	}
}

/// Complete description of the intro: asset bytes, sprite sheet and screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntroLayout {
	/// `TITLE.EXE` layout
	pub asset: AssetLayout,
	/// Sprite sheet layout
	pub atlas: AtlasLayout,
	/// Output surface
	pub screen: ScreenSize,
}

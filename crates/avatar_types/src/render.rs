//! Frame composition.
//!
//! Each frame is redrawn from scratch: clear to black, plot the revealed
//! signature pixels in white, then blit the daemon tile at the top-left
//! corner and the dragon tile at the top-right corner.

use image::{Pixel, Rgba, RgbaImage};

use crate::{
	atlas::{SpriteSheet, TileRect},
	file::{Creature, TitleFile},
	layout::ScreenSize,
	playback::PlaybackState,
};

/// Pixel surface frames are drawn into.
pub type Surface = RgbaImage;

/// Background color.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Signature color.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Creates a black surface of the given size.
pub fn blank_surface(screen: ScreenSize) -> Surface {
	RgbaImage::from_pixel(screen.width, screen.height, BLACK)
}

/// Draws playback frames from the decoded title tables and sprite sheet.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
	title: &'a TitleFile,
	sheet: &'a SpriteSheet,
	screen: ScreenSize,
}

impl<'a> Renderer<'a> {
	/// Creates a renderer for a surface of size `screen`.
	pub fn new(title: &'a TitleFile, sheet: &'a SpriteSheet, screen: ScreenSize) -> Self {
		Self {
			title,
			sheet,
			screen,
		}
	}

	/// Returns the decoded title tables.
	pub fn title(&self) -> &'a TitleFile {
		self.title
	}

	/// Returns the surface size this renderer targets.
	pub fn screen(&self) -> ScreenSize {
		self.screen
	}

	/// Top-left position where `creature` is drawn.
	pub fn anchor(&self, creature: Creature) -> (u32, u32) {
		match creature {
			Creature::Daemon => (0, 0),
			Creature::Dragon => {
				let width = self.sheet.atlas().get(creature, 0).map_or(0, |tile| tile.width);
				(self.screen.width.saturating_sub(width), 0)
			}
		}
	}

	/// Sprite tile shown for `creature` in `state`.
	pub fn tile_for(&self, creature: Creature, state: &PlaybackState) -> Option<TileRect> {
		let frame = self.title.animation(creature).tile(state.animation_frame())?;
		self.sheet.atlas().get(creature, frame)
	}

	/// Redraws `surface` for `state`.
	///
	/// Signature points outside the surface are skipped, as are sprite
	/// pixels that would land past its edges.
	pub fn draw(&self, state: &PlaybackState, surface: &mut Surface) {
		for pixel in surface.pixels_mut() {
			*pixel = BLACK;
		}

		let (width, height) = surface.dimensions();
		for point in self.title.signature().revealed(state.revealed_count()) {
			if (0..width as i32).contains(&point.x) && (0..height as i32).contains(&point.y) {
				surface.put_pixel(point.x as u32, point.y as u32, WHITE);
			}
		}

		for creature in Creature::ALL {
			if let Some(tile) = self.tile_for(creature, state) {
				blit(self.sheet.image(), tile, surface, self.anchor(creature));
			}
		}
	}
}

/// Alpha-blends `tile` of `source` onto `target` with its top-left at `at`.
fn blit(source: &RgbaImage, tile: TileRect, target: &mut Surface, at: (u32, u32)) {
	let (target_width, target_height) = target.dimensions();
	let cols = tile.width.min(target_width.saturating_sub(at.0));
	let rows = tile.height.min(target_height.saturating_sub(at.1));

	for dy in 0..rows {
		for dx in 0..cols {
			let src = *source.get_pixel(tile.x + dx, tile.y + dy);
			let dst = target.get_pixel_mut(at.0 + dx, at.1 + dy);
			match src[3] {
				0 => {}
				255 => *dst = src,
				_ => dst.blend(&src),
			}
		}
	}
}

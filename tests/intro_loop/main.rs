//! End-to-end tests for `avatar-intro`: decode a synthetic `TITLE.EXE`,
//! tile a synthetic sprite sheet and drive the player loop.

use avatar_intro::prelude::*;
use image::{Rgba, RgbaImage};

mod recording;
mod scenario;

/// Builds a blob in the default layout with the given signature bytes at the
/// signature offset and a repeating 0..18 animation for both creatures.
pub(crate) fn synthetic_title_bytes(signature: &[u8]) -> Vec<u8> {
	let layout = AssetLayout::default();
	let mut data = vec![0u8; layout.min_len];
	for i in 0..layout.animation_len {
		data[layout.animation_offset + i * 2] = (i % 18) as u8;
		data[layout.animation_offset + i * 2 + 1] = ((i + 9) % 18) as u8;
	}
	data[layout.signature_offset..layout.signature_offset + signature.len()]
		.copy_from_slice(signature);
	data
}

/// A 320x192 sheet with every tile filled with a distinct opaque color.
pub(crate) fn synthetic_sheet() -> SpriteSheet {
	let layout = AtlasLayout::default();
	let atlas = SpriteAtlas::tile(192, &layout);
	let mut image = RgbaImage::new(320, 192);
	for creature in Creature::ALL {
		for (frame, rect) in atlas.tiles(creature).iter().enumerate() {
			let shade = 40 + frame as u8 * 10;
			let color = match creature {
				Creature::Daemon => Rgba([shade, 0, 0, 255]),
				Creature::Dragon => Rgba([0, 0, shade, 255]),
			};
			for y in rect.y..rect.y + rect.height {
				for x in rect.x..rect.x + rect.width {
					image.put_pixel(x, y, color);
				}
			}
		}
	}
	SpriteSheet::from_image(image, &layout).expect("synthetic sheet fits the atlas")
}

/// Frontend that never waits and quits after an optional frame count.
#[derive(Debug, Default)]
pub(crate) struct InstantFrontend {
	pub presented: u64,
	pub quit_after: Option<u64>,
	pub last_white_pixels: usize,
}

impl Frontend for InstantFrontend {
	fn present(&mut self, surface: &Surface) {
		self.presented += 1;
		self.last_white_pixels = surface.pixels().filter(|p| **p == WHITE).count();
	}

	fn quit_requested(&mut self) -> bool {
		self.quit_after.is_some_and(|limit| self.presented >= limit)
	}
}

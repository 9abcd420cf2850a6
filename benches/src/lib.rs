//! Benchmark helper utilities for avatar-intro
//!
//! This module provides utilities for generating synthetic test data for the
//! title asset decoder and the frame renderer, so benchmarks run without the
//! original game files.

use avatar_types::{
	atlas::{SpriteAtlas, SpriteSheet},
	file::Creature,
	layout::{AssetLayout, AtlasLayout},
};
use image::{Rgba, RgbaImage};

/// Generates a `TITLE.EXE`-shaped blob in the default layout
///
/// The animation tables cycle through every tile and the signature traces a
/// diagonal sweep, so every decoded point lands on screen.
pub fn generate_test_title_data() -> Vec<u8> {
	let layout = AssetLayout::default();
	let mut data = vec![0u8; layout.required_len()];

	for i in 0..layout.animation_len {
		let offset = layout.animation_offset + i * 2;
		data[offset] = (i % layout.tile_count) as u8;
		data[offset + 1] = ((i * 5) % layout.tile_count) as u8;
	}

	for i in 0..layout.signature_len {
		let offset = layout.signature_offset + i * 2;
		data[offset] = (30 + i % 200) as u8;
		// Raw Y is bottom-up; keep it within 1..=240 so the flip stays on screen
		data[offset + 1] = (40 + (i * 3) % 180) as u8;
	}

	data
}

/// Generates a sprite sheet of the given height with opaque, distinct tiles
pub fn generate_test_sheet(height: u32) -> SpriteSheet {
	let layout = AtlasLayout::default();
	let atlas = SpriteAtlas::tile(height, &layout);
	let mut image = RgbaImage::new(320, height);

	for creature in Creature::ALL {
		for (frame, rect) in atlas.tiles(creature).iter().enumerate() {
			let color = match creature {
				Creature::Daemon => Rgba([200, frame as u8 * 12, 0, 255]),
				Creature::Dragon => Rgba([0, frame as u8 * 12, 200, 255]),
			};
			for y in rect.y..rect.y + rect.height {
				for x in rect.x..rect.x + rect.width {
					image.put_pixel(x, y, color);
				}
			}
		}
	}

	SpriteSheet::from_image(image, &layout).expect("generated sheet matches the default atlas")
}

/// Sheet heights worth benchmarking
pub mod sizes {
	/// Original sheet: 6 rows per column
	pub const ORIGINAL: u32 = 192;
	/// Tall sheet: all 18 frames in a single column
	pub const SINGLE_COLUMN: u32 = 576;
}

#[cfg(test)]
mod tests {
	use super::*;
	use avatar_types::file::TitleFile;

	#[test]
	fn test_generate_test_title_data() {
		let data = generate_test_title_data();
		assert_eq!(data.len(), 0x7600);

		let title = TitleFile::from_bytes(&data).unwrap();
		assert_eq!(title.animation_len(), 92);
		let on_screen = |p: &avatar_types::file::SignaturePoint| {
			(0..320).contains(&p.x) && (0..240).contains(&p.y)
		};
		assert!(title.signature().points().iter().all(on_screen));
	}

	#[test]
	fn test_generate_test_sheet() {
		for height in [sizes::ORIGINAL, sizes::SINGLE_COLUMN] {
			let sheet = generate_test_sheet(height);
			assert_eq!(sheet.image().height(), height);
			assert_eq!(sheet.atlas().frame_count(), 18);
		}
	}
}

use avatar_intro::prelude::*;

use crate::{InstantFrontend, synthetic_sheet, synthetic_title_bytes};

#[test_log::test]
fn test_signature_bytes_decode_to_flipped_points() {
	let data = synthetic_title_bytes(&[10, 0, 20, 240]);
	let title = TitleFile::from_bytes(&data).unwrap();

	assert_eq!(title.signature().len(), 266);
	assert_eq!(title.signature().get(0), Some(SignaturePoint::new(10, 240)));
	assert_eq!(title.signature().get(1), Some(SignaturePoint::new(20, 0)));
	assert_eq!(title.daemon().len(), title.dragon().len());
	assert!(
		Creature::ALL
			.iter()
			.all(|&c| title.animation(c).as_slice().iter().all(|&v| (v as usize) < 18))
	);
}

#[test_log::test]
fn test_signature_reveals_one_pixel_per_frame() {
	// A horizontal line of distinct pixels in the middle of the screen
	let signature: Vec<u8> =
		(0..266u32).flat_map(|i| [(i % 200) as u8 + 60, 120 - (i / 200) as u8]).collect();
	let data = synthetic_title_bytes(&signature);
	let title = TitleFile::from_bytes(&data).unwrap();
	let sheet = synthetic_sheet();

	let mut player = Player::new(&title, &sheet, ScreenSize::default());
	let mut frontend = InstantFrontend::default();
	for frame in 1..=5 {
		player.step(&mut frontend).unwrap();
		assert_eq!(frontend.last_white_pixels, frame);
	}
}

#[test_log::test]
fn test_free_running_loop_wraps_signature() {
	let data = synthetic_title_bytes(&[]);
	let title = TitleFile::from_bytes(&data).unwrap();
	let sheet = synthetic_sheet();

	let mut player = Player::new(&title, &sheet, ScreenSize::default());
	let mut frontend = InstantFrontend {
		quit_after: Some(920),
		..InstantFrontend::default()
	};
	let summary = player.run(&mut frontend).unwrap();

	assert_eq!(summary.stop_reason, StopReason::Quit);
	assert_eq!(summary.frames_rendered, 920);
	assert_eq!(summary.loops_completed, 3);
	assert_eq!(summary.frames_captured, 0);
	assert_eq!(player.state().animation_frame(), 0);
	assert_eq!(player.state().revealed_count(), 920 - 3 * 266 + 1);
}

#[test_log::test]
fn test_missing_assets_fail_before_rendering() {
	let dir = tempfile::tempdir().unwrap();

	let asset = TitleFile::open(dir.path().join("TITLE.EXE")).unwrap_err();
	assert!(matches!(asset, AssetLoadError::IOError(_)));

	std::fs::write(dir.path().join("SHORT.EXE"), [0u8; 0x100]).unwrap();
	let short = TitleFile::open(dir.path().join("SHORT.EXE")).unwrap_err();
	assert!(matches!(short, AssetLoadError::InsufficientData { .. }));

	let sheet = SpriteSheet::open(dir.path().join("sheet.png")).unwrap_err();
	assert!(matches!(sheet, ImageLoadError::Decode(_)));

	image::RgbaImage::new(64, 64).save(dir.path().join("small.png")).unwrap();
	let small = SpriteSheet::open(dir.path().join("small.png")).unwrap_err();
	assert!(matches!(small, ImageLoadError::TileOutOfBounds { .. }));
}

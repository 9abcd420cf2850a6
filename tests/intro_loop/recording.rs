use avatar_intro::prelude::*;

use crate::{InstantFrontend, synthetic_sheet, synthetic_title_bytes};

/// Layout whose signature holds only `points` entries.
fn short_signature_layout(points: usize) -> AssetLayout {
	AssetLayout {
		signature_len: points,
		..AssetLayout::default()
	}
}

#[test_log::test]
fn test_recording_captures_exactly_one_loop() {
	let data = synthetic_title_bytes(&[]);
	let sheet = synthetic_sheet();
	let dir = tempfile::tempdir().unwrap();

	for points in [1, 2, 13, 40] {
		let layout = short_signature_layout(points);
		let title = TitleFile::from_bytes_with_layout(&data, &layout).unwrap();
		let out = dir.path().join(format!("frames_{points}"));
		let recorder = PngSequenceRecorder::create(&out, ScreenSize::default()).unwrap();

		let mut player =
			Player::new(&title, &sheet, ScreenSize::default()).with_recorder(Box::new(recorder));
		let mut frontend = InstantFrontend::default();
		let summary = player.run(&mut frontend).unwrap();

		assert_eq!(summary.stop_reason, StopReason::LoopComplete);
		assert_eq!(summary.frames_rendered, points as u64);
		assert_eq!(summary.frames_captured, points);
		assert_eq!(summary.loops_completed, 1);
		assert_eq!(frontend.presented, points as u64);

		let files = std::fs::read_dir(&out).unwrap().count();
		assert_eq!(files, points);
	}
}

#[test_log::test]
fn test_recording_full_signature_cycle() {
	let data = synthetic_title_bytes(&[]);
	let title = TitleFile::from_bytes(&data).unwrap();
	let sheet = synthetic_sheet();
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("frames");

	let recorder = PngSequenceRecorder::create(&out, ScreenSize::default()).unwrap();
	let mut player =
		Player::new(&title, &sheet, ScreenSize::default()).with_recorder(Box::new(recorder));
	let summary = player.run(&mut InstantFrontend::default()).unwrap();

	assert_eq!(summary.frames_captured, 266);
	assert!(out.join("frame_00265.png").exists());
	assert!(!out.join("frame_00266.png").exists());
}

#[test_log::test]
fn test_gif_recording_stops_on_quit() {
	let data = synthetic_title_bytes(&[]);
	let title = TitleFile::from_bytes(&data).unwrap();
	let sheet = synthetic_sheet();
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("intro.gif");

	let recorder = GifRecorder::create(&path, ScreenSize::default()).unwrap();
	let mut player =
		Player::new(&title, &sheet, ScreenSize::default()).with_recorder(Box::new(recorder));
	let mut frontend = InstantFrontend {
		quit_after: Some(4),
		..InstantFrontend::default()
	};
	let summary = player.run(&mut frontend).unwrap();

	assert_eq!(summary.stop_reason, StopReason::Quit);
	assert_eq!(summary.frames_captured, 4);
	assert!(!player.is_recording());

	let decoded = image::open(&path).unwrap();
	assert_eq!((decoded.width(), decoded.height()), (320, 240));
}

//! Benchmark suite for the intro hot paths
//!
//! Measures asset decoding, atlas tiling, playback advancing and frame
//! composition.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use avatar_benches::{generate_test_sheet, generate_test_title_data, sizes};
use avatar_types::{
	atlas::SpriteAtlas,
	file::TitleFile,
	layout::{AtlasLayout, ScreenSize},
	playback::{PlaybackCycle, PlaybackState},
	render::{Renderer, blank_surface},
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark decoding the title tables
fn bench_title_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("title_decode");
	let data = generate_test_title_data();

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("from_bytes", |b| {
		b.iter(|| {
			let result = TitleFile::from_bytes(black_box(&data));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark atlas tiling for different sheet heights
fn bench_atlas_tiling(c: &mut Criterion) {
	let mut group = c.benchmark_group("atlas_tiling");
	let layout = AtlasLayout::default();

	for height in [sizes::ORIGINAL, sizes::SINGLE_COLUMN] {
		group.bench_with_input(BenchmarkId::new("for_image", height), &height, |b, &height| {
			b.iter(|| black_box(SpriteAtlas::for_image(320, black_box(height), &layout)));
		});
	}

	group.finish();
}

/// Benchmark a full signature cycle of playback transitions
fn bench_playback_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback");
	let cycle = PlaybackCycle::new(266, 92);

	group.throughput(Throughput::Elements(920));
	group.bench_function("advance_920", |b| {
		b.iter(|| {
			let mut state = PlaybackState::new();
			for _ in 0..920 {
				state = state.advance(black_box(&cycle)).0;
			}
			black_box(state)
		});
	});

	group.finish();
}

/// Benchmark composing frames at several points of the signature reveal
fn bench_render_frame(c: &mut Criterion) {
	let mut group = c.benchmark_group("render_frame");
	let data = generate_test_title_data();
	let title = TitleFile::from_bytes(&data).expect("generated title data decodes");
	let sheet = generate_test_sheet(sizes::ORIGINAL);
	let screen = ScreenSize::default();
	let renderer = Renderer::new(&title, &sheet, screen);
	let cycle = PlaybackCycle::new(title.signature().len(), title.animation_len());

	for revealed in [1usize, 133, 266] {
		let mut state = PlaybackState::new();
		for _ in 1..revealed {
			state = state.advance(&cycle).0;
		}

		group.throughput(Throughput::Elements(u64::from(screen.width * screen.height)));
		group.bench_with_input(BenchmarkId::new("draw", revealed), &state, |b, state| {
			let mut surface = blank_surface(screen);
			b.iter(|| {
				renderer.draw(black_box(state), &mut surface);
				black_box(surface.get_pixel(0, 0));
			});
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_title_decode,
	bench_atlas_tiling,
	bench_playback_advance,
	bench_render_frame,
);

criterion_main!(benches);

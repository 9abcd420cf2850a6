//! `avatar-intro` command line.
//!
//! Provides two subcommands:
//! - `play`: run the title sequence, optionally recording one signature loop.
//! - `inspect`: decode `TITLE.EXE` and print its animation and signature tables.

mod frontend;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use avatar_intro::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::{
	frontend::HeadlessFrontend,
	settings::{Overrides, Settings},
};

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Play(args) => run_play(args),
		Command::Inspect(args) => run_inspect(args),
	}
}

#[derive(Parser)]
#[command(name = "avatar-intro")]
#[command(author = "avatar-intro project")]
#[command(version)]
#[command(about = "Replay the Ultima IV title signature animation", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Play the intro, optionally recording one signature loop
	Play(PlayArgs),
	/// Print the tables decoded from TITLE.EXE
	Inspect(InspectArgs),
}

#[derive(Args)]
struct PlayArgs {
	/// Settings file (defaults to ./avatar-intro.toml when present)
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Path to TITLE.EXE
	#[arg(short, long, value_name = "FILE")]
	asset: Option<PathBuf>,

	/// Path to the beastie sprite sheet
	#[arg(short, long, value_name = "FILE")]
	sprites: Option<PathBuf>,

	/// Record one full signature loop, then stop
	#[arg(short, long, overrides_with = "no_record")]
	record: bool,

	/// Play without recording, even if the settings enable it
	#[arg(long, overrides_with = "record")]
	no_record: bool,

	/// Recording target: a .gif file or a directory for PNG frames
	#[arg(short, long, value_name = "PATH")]
	output: Option<PathBuf>,

	/// Stop after this many frames
	#[arg(long, value_name = "COUNT")]
	max_frames: Option<u64>,

	/// Save the last rendered frame as an image on exit
	#[arg(long, value_name = "FILE")]
	snapshot: Option<PathBuf>,
}

impl PlayArgs {
	fn overrides(&self) -> Overrides {
		let record = match (self.record, self.no_record) {
			(true, _) => Some(true),
			(_, true) => Some(false),
			_ => None,
		};
		Overrides {
			asset: self.asset.clone(),
			sprites: self.sprites.clone(),
			record,
			output: self.output.clone(),
			max_frames: self.max_frames,
		}
	}
}

#[derive(Args)]
struct InspectArgs {
	/// Settings file (defaults to ./avatar-intro.toml when present)
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Path to TITLE.EXE
	#[arg(short, long, value_name = "FILE")]
	asset: Option<PathBuf>,

	/// Print the tables as JSON
	#[arg(long, default_value_t = false)]
	json: bool,
}

fn run_play(args: PlayArgs) -> Result<()> {
	let settings = Settings::load(args.config.as_deref(), &args.overrides())
		.context("Failed to load settings")?;
	let layout = IntroLayout::default();

	let title = TitleFile::open_with_layout(&settings.asset, &layout.asset)
		.with_context(|| format!("Failed to load {}", settings.asset.display()))?;
	let sheet = SpriteSheet::open_with_layout(&settings.sprites, &layout.atlas)
		.with_context(|| format!("Failed to load {}", settings.sprites.display()))?;

	let mut player = Player::new(&title, &sheet, layout.screen);
	if settings.record {
		let recorder: Box<dyn Recorder> = if settings.records_gif() {
			Box::new(GifRecorder::create(&settings.output, layout.screen)?)
		} else {
			Box::new(PngSequenceRecorder::create(&settings.output, layout.screen)?)
		};
		player = player.with_recorder(recorder);
	}

	info!("{}", SCREEN_TITLE);
	let mut frontend =
		HeadlessFrontend::new(settings.max_frames).context("Failed to register quit signals")?;
	let summary = player.run(&mut frontend).context("Playback failed")?;

	info!(
		"Rendered {} frames ({} captured, {} signature loops)",
		summary.frames_rendered, summary.frames_captured, summary.loops_completed
	);

	if let Some(path) = args.snapshot {
		player
			.surface()
			.save(&path)
			.with_context(|| format!("Failed to save snapshot {}", path.display()))?;
		info!("Saved snapshot to {}", path.display());
	}

	Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let overrides = Overrides {
		asset: args.asset,
		..Overrides::default()
	};
	let settings =
		Settings::load(args.config.as_deref(), &overrides).context("Failed to load settings")?;
	let asset = settings.asset;

	let title = TitleFile::open(&asset)
		.with_context(|| format!("Failed to load {}", asset.display()))?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&title)?);
		return Ok(());
	}

	println!("File: {}", asset.display());
	println!("Animation steps: {}", title.animation_len());
	for creature in Creature::ALL {
		let tiles: Vec<String> =
			title.animation(creature).as_slice().iter().map(u8::to_string).collect();
		println!("  {:<6}: {}", creature.to_string(), tiles.join(" "));
	}

	let signature = title.signature();
	println!("Signature points: {}", signature.len());
	for (index, chunk) in signature.points().chunks(8).enumerate() {
		let points: Vec<String> = chunk.iter().map(ToString::to_string).collect();
		println!("  {:>3}: {}", index * 8, points.join(" "));
	}

	Ok(())
}

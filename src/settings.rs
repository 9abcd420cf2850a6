//! Layered runtime settings.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `avatar-intro.toml` in the working directory, or the file given with `--config`
//! 3. `AVATAR_INTRO_*` environment variables
//! 4. command line flags

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default location of the title executable
pub const DEFAULT_ASSET: &str = "Ultima4/TITLE.EXE";

/// Default location of the sprite sheet
pub const DEFAULT_SPRITES: &str = "Ultima4_LZW_Animate.png";

/// Default recording output
pub const DEFAULT_OUTPUT: &str = "avatar-intro.gif";

/// Settings file looked up in the working directory
const DEFAULT_CONFIG_NAME: &str = "avatar-intro";

/// Environment variable prefix
const ENV_PREFIX: &str = "AVATAR_INTRO";

/// Resolved settings for a playback run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
	/// Path to `TITLE.EXE`
	pub asset: PathBuf,
	/// Path to the sprite sheet image
	pub sprites: PathBuf,
	/// Capture frames while playing
	pub record: bool,
	/// Recording target: a `.gif` file, anything else is a PNG frame directory
	pub output: PathBuf,
	/// Stop after this many frames
	pub max_frames: Option<u64>,
}

/// Values given on the command line; `None` leaves lower layers in charge.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	/// `--asset`
	pub asset: Option<PathBuf>,
	/// `--sprites`
	pub sprites: Option<PathBuf>,
	/// `--record` / `--no-record`
	pub record: Option<bool>,
	/// `--output`
	pub output: Option<PathBuf>,
	/// `--max-frames`
	pub max_frames: Option<u64>,
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
	path.as_ref().map(|p| p.to_string_lossy().into_owned())
}

impl Settings {
	/// Resolves settings from every layer.
	///
	/// # Errors
	///
	/// Fails if an explicitly named config file is missing or any layer holds
	/// a value of the wrong type.
	pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
		let builder = Config::builder()
			.set_default("asset", DEFAULT_ASSET)?
			.set_default("sprites", DEFAULT_SPRITES)?
			.set_default("record", false)?
			.set_default("output", DEFAULT_OUTPUT)?;

		let builder = match config_file {
			Some(path) => builder.add_source(File::from(path).required(true)),
			None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
		};

		builder
			.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
			.set_override_option("asset", path_value(&overrides.asset))?
			.set_override_option("sprites", path_value(&overrides.sprites))?
			.set_override_option("record", overrides.record)?
			.set_override_option("output", path_value(&overrides.output))?
			.set_override_option("max_frames", overrides.max_frames)?
			.build()?
			.try_deserialize()
	}

	/// Returns true if recordings should be written as a GIF.
	pub fn records_gif(&self) -> bool {
		self.output.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
	}
}

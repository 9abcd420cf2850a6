//! Prelude module for `avatar_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use avatar_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let layout = IntroLayout::default();
//! let state = PlaybackState::new();
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Tables
	AnimationTable,
	// Errors
	AssetLoadError,
	Creature,
	ImageLoadError,
	IntroError,
	RecorderError,
	SignaturePoint,
	SignatureTable,
	TitleFile,
};

// Layout types
#[doc(inline)]
pub use crate::layout::{
	AssetLayout, AtlasLayout, IntroLayout, SCREEN_TITLE, ScreenSize, TARGET_FPS,
	TICKS_PER_ANIMATION_FRAME,
};

// Sprite sheet types
#[doc(inline)]
pub use crate::atlas::{SpriteAtlas, SpriteSheet, TileRect};

// Playback types
#[doc(inline)]
pub use crate::playback::{PlaybackCycle, PlaybackEvents, PlaybackState};

// Rendering and recording
#[doc(inline)]
pub use crate::render::{BLACK, Renderer, Surface, WHITE, blank_surface};

#[doc(inline)]
pub use crate::record::{GifRecorder, PngSequenceRecorder, Recorder};

#[doc(inline)]
pub use crate::player::{Frontend, Player, RunSummary, StopReason};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;

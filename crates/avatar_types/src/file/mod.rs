//! File type support for `avatar-intro` project.

mod error;

pub mod title;

// Re-export error types
pub use error::{AssetLoadError, ImageLoadError, IntroError, RecorderError};

// Re-export main file types
pub use title::{
	AnimationTable, Creature, File as TitleFile, SignaturePoint, SignatureTable,
};

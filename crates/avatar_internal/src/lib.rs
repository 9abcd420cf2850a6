//! This module is separated into its own crate so the `avatar-intro` binary and library
//! share one facade, and should not be used directly.

/// `use avatar_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export avatar_types for convenience
pub use avatar_types;

// Re-export commonly used types at crate root
pub use avatar_types::file::{AssetLoadError, ImageLoadError, IntroError, RecorderError, TitleFile};

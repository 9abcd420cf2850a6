//! Prelude module for `avatar_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use avatar_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let layout = IntroLayout::default();
//! let cycle = PlaybackCycle::new(layout.asset.signature_len, layout.asset.animation_len);
//! let (state, events) = PlaybackState::new().advance(&cycle);
//! assert_eq!(state.revealed_count(), 2);
//! assert!(!events.loop_complete);
//! ```

// Re-export everything from avatar_types::prelude
#[doc(inline)]
pub use avatar_types::prelude::*;

// Re-export the entire avatar_types module for advanced usage
#[doc(inline)]
pub use avatar_types;

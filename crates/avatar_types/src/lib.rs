//! This crate provides the asset formats and playback core for the `avatar-intro` project.
//!
//! # Modules
//!
//! - **`file`**: `TITLE.EXE` decoding (beastie animation tables and the signature)
//! - **`layout`**: Offsets and dimensions of the assets and the screen
//! - **`atlas`**: Sprite sheet tiling for the daemon and dragon frames
//! - **`playback`**: The per-frame state machine
//! - **`render`**: Frame composition
//! - **`record`**: GIF and PNG-sequence frame capture
//! - **`player`**: The draw, present, advance, capture loop
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use avatar_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = IntroLayout::default();
//! let title = TitleFile::open("Ultima4/TITLE.EXE")?;
//! let sheet = SpriteSheet::open("Ultima4_LZW_Animate.png")?;
//!
//! let renderer = Renderer::new(&title, &sheet, layout.screen);
//! let mut surface = blank_surface(layout.screen);
//! renderer.draw(&PlaybackState::new(), &mut surface);
//! # Ok(())
//! # }
//! ```

pub mod atlas;
pub mod file;
pub mod layout;
pub mod playback;
pub mod player;
pub mod record;
pub mod render;

/// `use avatar_types::prelude::*;` to import commonly used items.
pub mod prelude;

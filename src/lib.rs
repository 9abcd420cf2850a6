#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `avatar-intro` re-creates the signature animation from the Ultima IV title sequence.
//!
//! The signature is revealed one pixel per frame while the daemon and dragon
//! in the top corners cycle through their animations, all driven by tables
//! read straight out of the original `TITLE.EXE`.
//!
pub use avatar_internal::*;

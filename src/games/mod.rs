//! Ready-made game presets.
//!
//! The engine is content-agnostic; these modules supply concrete content
//! palettes so a presentation layer can start a game in one call.

pub mod emoji;

//! Judging module
//!
//! Turns a cut score into the text and color shown to the player.

pub mod display;
mod scorer;

pub use display::*;
pub use scorer::*;

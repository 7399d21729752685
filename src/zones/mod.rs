//! Card locations outside players' hands.
//!
//! `Piles` holds the shared draw pile and discard pile and handles the
//! recycling rule that keeps the draw pile from running dry.

pub mod piles;

pub use piles::{Draw, Piles};

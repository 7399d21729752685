//! Game implementations built on the engine primitives.

pub mod crazy_eights;

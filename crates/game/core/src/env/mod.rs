//! Geometry provider consumed by the board.
mod map;

pub use map::{MapDimensions, MapOracle, StaticMap};

//! Tile surfaces: the tileset seam and its SDL2 implementation.

pub mod tileset;

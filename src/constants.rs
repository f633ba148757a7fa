//! This module contains all the constants used by the engine and the demo client.

use glam::UVec2;

use crate::map::layer::TileId;

/// The edge length of a square tile, in pixels.
pub const TILE_SIZE: u32 = 32;

/// The reserved tile id meaning "no tile here".
///
/// Cells holding this value are skipped during drawing and are never handed
/// to the tile resolver. As a consequence the first tile of the first
/// tileset cannot be referenced from layer data; tileset authors leave it
/// blank.
pub const EMPTY_TILE: TileId = 0;

/// The size of the demo window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(640, 480);

/// The viewport of the demo window, in tiles. One extra row and column are
/// drawn so that sub-tile scrolling never exposes the window background.
pub const VIEWPORT_TILES: UVec2 = UVec2::new(WINDOW_SIZE.x / TILE_SIZE + 1, WINDOW_SIZE.y / TILE_SIZE + 1);

/// How many pixels the demo viewport moves per frame while an arrow key is held.
pub const SCROLL_SPEED: i32 = 4;

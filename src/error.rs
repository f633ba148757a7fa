//! Centralized error types for the map engine.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

use crate::map::layer::TileId;

/// Main error type for the client.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while loading or drawing a map.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Map loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Tileset error: {0}")]
    Tileset(#[from] TilesetError),

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to map queries: layer grids, action layers and tile resolution.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("tile coordinate ({x}, {y}) outside {width}x{height} layer")]
    CoordinateOutOfRange { x: i32, y: i32, width: u32, height: u32 },

    #[error("linear tile index {index} outside layer of {len} tiles")]
    LinearIndexOutOfRange { index: usize, len: usize },

    #[error("layer {index} holds {got} tiles, expected {expected}")]
    TileCountMismatch { index: i32, got: usize, expected: usize },

    #[error("layer index {index} out of range ({count} layers)")]
    LayerOutOfRange { index: usize, count: usize },

    #[error("tile id {id} outside the loaded range of {total} tiles")]
    TileIdOutOfRange { id: TileId, total: usize },

    #[error("tilesets not loaded")]
    TilesetsNotLoaded,

    #[error("layer {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    LayerSizeMismatch {
        index: i32,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("layers after the last collision layer form an action layer without a collision boundary")]
    MissingCollisionLayer,

    #[error("action layer {action_layer} contains {count} object layers")]
    TooManyObjectLayers { action_layer: usize, count: usize },
}

/// Error type for map file loading.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed map file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown layer type: {0}")]
    UnknownLayerType(String),

    #[error("invalid map: {0}")]
    Invalid(#[from] MapError),
}

/// Errors related to tileset loading and lookups.
#[derive(thiserror::Error, Debug)]
pub enum TilesetError {
    #[error("failed to load tileset image: {0}")]
    LoadFailed(String),

    #[error("tileset image is {width}x{height}, not divisible into {tile_size}x{tile_size} tiles")]
    InvalidDimensions { width: u32, height: u32, tile_size: u32 },

    #[error("local tile index {index} outside tileset of {count} tiles")]
    TileOutOfRange { index: usize, count: usize },
}

/// Errors raised while compositing a frame.
#[derive(thiserror::Error, Debug)]
pub enum DrawError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("blit failed: {0}")]
    Blit(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

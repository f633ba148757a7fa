//! Map layers: fixed-size grids of tile ids with a paint-order index and a type tag.

use strum_macros::{Display, EnumString};

use crate::error::MapError;

/// A tile id indexing into the global, cross-tileset tile space.
///
/// Tileset `i` occupies the contiguous id range starting at the cumulative
/// tile count of tilesets `0..i`. See [`crate::constants::EMPTY_TILE`] for
/// the reserved "no tile" value.
pub type TileId = u16;

/// The kind of a map layer.
///
/// Normal layers are plain terrain/decoration. Object layers are drawn
/// row-interleaved with creatures so actors can pass in front of or behind
/// their tiles. Collision layers carry walkability codes and are never drawn;
/// they terminate action layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LayerType {
    Normal,
    Object,
    Collision,
}

/// A single map layer: a `width` x `height` grid of tile ids.
///
/// Layers are populated once at load time and are immutable afterwards as
/// far as the drawing code is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayer {
    index: i32,
    kind: LayerType,
    width: u32,
    height: u32,
    tiles: Vec<TileId>,
}

impl MapLayer {
    /// Creates an empty layer of the given dimensions.
    pub fn new(index: i32, kind: LayerType, width: u32, height: u32) -> Self {
        Self {
            index,
            kind,
            width,
            height,
            tiles: vec![crate::constants::EMPTY_TILE; (width * height) as usize],
        }
    }

    /// Creates a layer from an already populated tile list.
    ///
    /// # Errors
    ///
    /// Returns an error if `tiles` does not hold exactly `width * height` entries.
    pub fn from_tiles(index: i32, kind: LayerType, width: u32, height: u32, tiles: Vec<TileId>) -> Result<Self, MapError> {
        let expected = (width * height) as usize;
        if tiles.len() != expected {
            return Err(MapError::TileCountMismatch {
                index,
                got: tiles.len(),
                expected,
            });
        }
        Ok(Self {
            index,
            kind,
            width,
            height,
            tiles,
        })
    }

    /// Returns the tile id at `(x, y)`.
    ///
    /// Tiles are stored row-major with a stride of `width`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the layer.
    pub fn get(&self, x: i32, y: i32) -> Result<TileId, MapError> {
        let i = self.linear(x, y)?;
        Ok(self.tiles[i])
    }

    /// Sets the tile id at `(x, y)`. Intended for load-time population.
    pub fn set(&mut self, x: i32, y: i32, tile: TileId) -> Result<(), MapError> {
        let i = self.linear(x, y)?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Sets the tile at a row-major linear index. Used for bulk loading.
    pub fn set_linear(&mut self, index: usize, tile: TileId) -> Result<(), MapError> {
        if index >= self.tiles.len() {
            return Err(MapError::LinearIndexOutOfRange {
                index,
                len: self.tiles.len(),
            });
        }
        self.tiles[index] = tile;
        Ok(())
    }

    /// The paint-order index. Lower indices are drawn first.
    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn kind(&self) -> LayerType {
        self.kind
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn linear(&self, x: i32, y: i32) -> Result<usize, MapError> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return Err(MapError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width as usize)
    }
}

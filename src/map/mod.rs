//! This module defines the map model: the layer stack, the action-layer
//! partition and tile-to-surface resolution.
//!
//! A map has two kinds of layers: map layers and action layers. Map layers
//! are the "physical" layers, the ones a map editor edits. Action layers are
//! "virtual" layers partitioning the map layers into vertical zones, so that
//! for example a tunnel under a bridge and the top of the bridge are both
//! walkable, each with working collision data. Every action layer contains
//! exactly one collision layer (action-layer boundaries are *defined* by
//! their collision layers) and at most one object layer; see
//! [`crate::map::collision`] for the tile codes collision layers carry.

pub mod collision;
pub mod drawer;
pub mod layer;
pub mod loader;
pub mod section;

use tracing::debug;

use crate::error::{MapError, TilesetError};
use crate::map::layer::{LayerType, MapLayer, TileId};
use crate::texture::tileset::TileSource;

/// The map: an ordered stack of [`MapLayer`]s plus the tilesets resolving
/// tile ids to drawable surfaces.
///
/// `T` is the tileset implementation; the engine ships an SDL2-backed one in
/// [`crate::texture::tileset::SurfaceTileset`].
#[derive(Debug)]
pub struct Map<T> {
    width: u32,
    height: u32,
    layers: Vec<MapLayer>,
    tileset_names: Vec<String>,
    tilesets: Option<Vec<T>>,
    total_tiles: usize,
    action_layer_count: usize,
}

impl<T: TileSource> Map<T> {
    /// Creates an empty map of the given dimensions, in tiles.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
            tileset_names: Vec::new(),
            tilesets: None,
            total_tiles: 0,
            action_layer_count: 0,
        }
    }

    /// Installs the layer stack.
    ///
    /// Layers are sorted ascending by their paint-order index; the sort is
    /// stable, so layers sharing an index keep the order they were supplied
    /// in. The action-layer count is recomputed here, once, since layers are
    /// immutable after loading.
    ///
    /// # Errors
    ///
    /// Returns an error if any layer's dimensions differ from the map's.
    pub fn load_layers(&mut self, mut layers: Vec<MapLayer>) -> Result<(), MapError> {
        for layer in &layers {
            if layer.width() != self.width || layer.height() != self.height {
                return Err(MapError::LayerSizeMismatch {
                    index: layer.index(),
                    width: layer.width(),
                    height: layer.height(),
                    expected_width: self.width,
                    expected_height: self.height,
                });
            }
        }
        layers.sort_by_key(MapLayer::index);
        self.action_layer_count = layers.iter().filter(|l| l.kind() == LayerType::Collision).count();
        debug!(
            layer_count = layers.len(),
            action_layer_count = self.action_layer_count,
            "Loaded map layers"
        );
        self.layers = layers;
        Ok(())
    }

    /// Declares the tilesets this map draws from, in load order.
    pub fn set_tileset_names(&mut self, names: Vec<String>) {
        self.tileset_names = names;
    }

    /// Loads all tilesets used by this map through the supplied loader and
    /// assigns each its range of the global tile id space.
    ///
    /// Tileset `i` covers the half-open id range starting at the cumulative
    /// tile count of tilesets `0..i`.
    pub fn load_tilesets<F>(&mut self, mut load: F) -> Result<(), TilesetError>
    where
        F: FnMut(&str) -> Result<T, TilesetError>,
    {
        let mut tilesets = Vec::with_capacity(self.tileset_names.len());
        let mut total = 0;
        for name in &self.tileset_names {
            let tileset = load(name)?;
            total += tileset.tile_count();
            tilesets.push(tileset);
        }
        debug!(tileset_count = tilesets.len(), total_tiles = total, "Loaded tilesets");
        self.total_tiles = total;
        self.tilesets = Some(tilesets);
        Ok(())
    }

    /// Returns the surface for the tile with the given id.
    ///
    /// Walks the tilesets in load order, accumulating tile counts, and
    /// returns the surface from the tileset whose range contains `tile_id`.
    ///
    /// # Errors
    ///
    /// Fails if the tilesets have not been loaded yet, or if `tile_id` is
    /// outside the global id range.
    pub fn resolve_surface(&self, tile_id: TileId) -> Result<&T::Surface, MapError> {
        let tilesets = self.tilesets.as_ref().ok_or(MapError::TilesetsNotLoaded)?;
        let id = usize::from(tile_id);
        if id >= self.total_tiles {
            return Err(MapError::TileIdOutOfRange {
                id: tile_id,
                total: self.total_tiles,
            });
        }
        let mut start = 0;
        for tileset in tilesets {
            let end = start + tileset.tile_count();
            if id < end {
                return tileset.surface(id - start).ok_or(MapError::TileIdOutOfRange {
                    id: tile_id,
                    total: self.total_tiles,
                });
            }
            start = end;
        }
        Err(MapError::TileIdOutOfRange {
            id: tile_id,
            total: self.total_tiles,
        })
    }

    /// Returns the index of the action layer that the map layer with the
    /// given index is on: the number of collision layers strictly before it
    /// in paint order.
    ///
    /// # Errors
    ///
    /// Fails if `layer_index` is outside the layer stack.
    pub fn action_layer_index_of(&self, layer_index: usize) -> Result<usize, MapError> {
        if layer_index >= self.layers.len() {
            return Err(MapError::LayerOutOfRange {
                index: layer_index,
                count: self.layers.len(),
            });
        }
        Ok(self.layers[..layer_index]
            .iter()
            .filter(|l| l.kind() == LayerType::Collision)
            .count())
    }

    /// Checks the action-layer invariants: every action layer is terminated
    /// by a collision layer and contains at most one object layer.
    ///
    /// Loaders call this after construction; hand-assembled maps should too.
    pub fn validate(&self) -> Result<(), MapError> {
        let mut action_layer = 0;
        let mut object_count = 0;
        let mut unterminated = false;
        for layer in &self.layers {
            unterminated = true;
            match layer.kind() {
                LayerType::Object => {
                    object_count += 1;
                    if object_count > 1 {
                        return Err(MapError::TooManyObjectLayers {
                            action_layer,
                            count: object_count,
                        });
                    }
                }
                LayerType::Collision => {
                    action_layer += 1;
                    object_count = 0;
                    unterminated = false;
                }
                LayerType::Normal => {}
            }
        }
        if unterminated {
            return Err(MapError::MissingCollisionLayer);
        }
        Ok(())
    }

    /// The layer stack, sorted ascending by paint-order index.
    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }

    /// The number of action layers, i.e. the number of collision layers.
    /// Computed once at load completion.
    pub fn action_layer_count(&self) -> usize {
        self.action_layer_count
    }

    /// Map width, in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height, in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The tileset names declared by the map file, in load order.
    pub fn tileset_names(&self) -> &[String] {
        &self.tileset_names
    }

    /// Total tile count across all loaded tilesets. Zero before
    /// [`Map::load_tilesets`].
    pub fn total_tiles(&self) -> usize {
        self.total_tiles
    }
}

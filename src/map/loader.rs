//! Map file loading: the serde data model and map construction from it.

use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::LoadError;
use crate::map::layer::{LayerType, MapLayer, TileId};
use crate::map::Map;
use crate::texture::tileset::TileSource;

/// The on-disk shape of a map file.
#[derive(Debug, Deserialize)]
pub struct MapData {
    /// Map width, in tiles. Shared by every layer.
    pub width: u32,
    /// Map height, in tiles.
    pub height: u32,
    /// Tileset image names, in global tile id order.
    pub tilesets: Vec<String>,
    pub layers: Vec<LayerData>,
}

/// One layer record of a map file.
#[derive(Debug, Deserialize)]
pub struct LayerData {
    /// Paint-order index.
    pub no: i32,
    /// `"normal"`, `"object"` or `"collision"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Row-major tile ids, `width * height` entries.
    pub tiles: Vec<TileId>,
}

impl<T: TileSource> Map<T> {
    /// Reads and validates a JSON map file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let data = serde_json::from_reader(reader)?;
        Self::from_data(data)
    }

    /// Builds and validates a map from parsed file data.
    ///
    /// # Errors
    ///
    /// Fails on unknown layer type strings, layers whose tile list does not
    /// match the map dimensions, and maps violating the action-layer
    /// invariants (see [`Map::validate`]).
    pub fn from_data(data: MapData) -> Result<Self, LoadError> {
        let mut layers = Vec::with_capacity(data.layers.len());
        for layer in data.layers {
            let kind: LayerType = layer
                .kind
                .parse()
                .map_err(|_| LoadError::UnknownLayerType(layer.kind.clone()))?;
            layers.push(MapLayer::from_tiles(layer.no, kind, data.width, data.height, layer.tiles)?);
        }

        let mut map = Map::new(data.width, data.height);
        map.load_layers(layers)?;
        map.set_tileset_names(data.tilesets);
        map.validate()?;
        debug!(
            width = map.width(),
            height = map.height(),
            layers = map.layers().len(),
            tilesets = map.tileset_names().len(),
            "Loaded map"
        );
        Ok(map)
    }
}

#![allow(dead_code)]

use glam::IVec2;
use opiso::error::DrawError;
use opiso::map::drawer::BlitTarget;
use opiso::map::layer::{LayerType, MapLayer, TileId};
use opiso::map::section::ScreenSection;
use opiso::map::Map;
use opiso::texture::tileset::TileSource;

/// A tile "surface" that is just its own identity: the tileset it came from
/// and its local index. Lets tests check exactly what was resolved and blitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeTile {
    pub tileset: usize,
    pub local: usize,
}

pub struct FakeTileset {
    tiles: Vec<FakeTile>,
}

impl FakeTileset {
    pub fn new(tileset: usize, count: usize) -> Self {
        Self {
            tiles: (0..count).map(|local| FakeTile { tileset, local }).collect(),
        }
    }
}

impl TileSource for FakeTileset {
    type Surface = FakeTile;

    fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn surface(&self, index: usize) -> Option<&FakeTile> {
        self.tiles.get(index)
    }
}

/// Everything a draw call did, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    Blit { tile: FakeTile, position: IVec2 },
    Objects { action_layer: usize, row: i32 },
}

/// A blit target that records instead of drawing.
#[derive(Default)]
pub struct RecordingTarget {
    pub events: Vec<DrawEvent>,
}

impl RecordingTarget {
    pub fn blits(&self) -> Vec<(FakeTile, IVec2)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrawEvent::Blit { tile, position } => Some((*tile, *position)),
                DrawEvent::Objects { .. } => None,
            })
            .collect()
    }

    pub fn object_calls(&self) -> Vec<(usize, i32)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrawEvent::Objects { action_layer, row } => Some((*action_layer, *row)),
                DrawEvent::Blit { .. } => None,
            })
            .collect()
    }
}

impl BlitTarget<FakeTile> for RecordingTarget {
    fn blit(&mut self, surface: &FakeTile, position: IVec2) -> Result<(), DrawError> {
        self.events.push(DrawEvent::Blit {
            tile: *surface,
            position,
        });
        Ok(())
    }
}

/// The standard objects callback for tests: records the invocation on the target.
pub fn record_objects(target: &mut RecordingTarget, action_layer: usize, row: ScreenSection) {
    target.events.push(DrawEvent::Objects {
        action_layer,
        row: row.tile_top,
    });
}

/// Builds a map whose layer kinds are given in paint order (index = position),
/// with every cell of layer `i` holding tile id `i + 1`, backed by one fake
/// tileset large enough for all of those ids.
pub fn stacked_map(kinds: &[LayerType], width: u32, height: u32) -> Map<FakeTileset> {
    let mut map = stacked_map_unloaded(kinds, width, height);
    let total = kinds.len() + 1;
    map.set_tileset_names(vec!["fake".to_string()]);
    map.load_tilesets(|_| Ok(FakeTileset::new(0, total))).unwrap();
    map
}

/// Like [`stacked_map`], but without any tilesets loaded.
pub fn stacked_map_unloaded(kinds: &[LayerType], width: u32, height: u32) -> Map<FakeTileset> {
    let mut layers = Vec::new();
    for (i, &kind) in kinds.iter().enumerate() {
        let tiles = vec![(i + 1) as TileId; (width * height) as usize];
        layers.push(MapLayer::from_tiles(i as i32, kind, width, height, tiles).unwrap());
    }
    let mut map = Map::new(width, height);
    map.load_layers(layers).unwrap();
    map
}

pub fn section(left: i32, top: i32, width: i32, height: i32, tile_size: i32) -> ScreenSection {
    ScreenSection {
        tile_left: left,
        tile_top: top,
        tile_width: width,
        tile_height: height,
        x_offset: 0,
        y_offset: 0,
        tile_size,
    }
}

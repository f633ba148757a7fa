//! The map compositing algorithm.
//!
//! [`MapDrawer`] walks the layer stack in paint order and turns it into a
//! flat sequence of blits, interleaving externally-owned dynamic content
//! (creatures) with object-layer tiles one row at a time.

use glam::IVec2;
use tracing::trace;

use crate::constants::EMPTY_TILE;
use crate::error::{DrawError, MapError};
use crate::map::layer::LayerType;
use crate::map::section::ScreenSection;
use crate::map::Map;
use crate::texture::tileset::TileSource;

/// A drawing destination: anything that can place a resolved tile surface
/// at an integer pixel position.
///
/// The engine ships an implementation for SDL2 window surfaces; tests use a
/// recording implementation.
pub trait BlitTarget<S> {
    fn blit(&mut self, surface: &S, position: IVec2) -> Result<(), DrawError>;
}

/// Composites a [`Map`] onto a [`BlitTarget`].
///
/// One [`MapDrawer::draw`] call fully composites one frame: layers are
/// visited in ascending index order (back to front), collision layers are
/// skipped, normal layers are drawn as the full section rectangle, and
/// object layers are drawn row by row interleaved with the caller's
/// objects callback. No state is retained between calls.
pub struct MapDrawer<'m, T> {
    map: &'m Map<T>,
}

impl<'m, T: TileSource> MapDrawer<'m, T> {
    pub fn new(map: &'m Map<T>) -> Self {
        Self { map }
    }

    /// Draws the section of the map onto `target`.
    ///
    /// `draw_objects` is invoked once per tile row per object layer, with the
    /// target, the object layer's action-layer index and the section narrowed
    /// to that single row — *before* the row's own tiles are drawn. Creatures
    /// painted there end up behind the row's object tiles, while creatures on
    /// rows below overpaint them; that is what lets actors pass behind
    /// archways and in front of their footings. The callback must not itself
    /// reenter `draw`.
    ///
    /// # Errors
    ///
    /// The section is not clipped: cells outside the map grid fail with the
    /// layer's coordinate error, and a failure mid-draw leaves the target
    /// partially painted. Callers clip the section to map bounds beforehand;
    /// frames are redrawn every tick, so no recovery is attempted here.
    pub fn draw<B, F>(&self, target: &mut B, section: ScreenSection, mut draw_objects: F) -> Result<(), DrawError>
    where
        B: BlitTarget<T::Surface>,
        F: FnMut(&mut B, usize, ScreenSection),
    {
        for (i, layer) in self.map.layers().iter().enumerate() {
            trace!(layer = i, kind = %layer.kind(), "Compositing layer");
            match layer.kind() {
                LayerType::Collision => continue,
                LayerType::Object => self.draw_object_layer(target, i, section, &mut draw_objects)?,
                LayerType::Normal => self.draw_layer_section(target, i, section)?,
            }
        }
        Ok(())
    }

    /// Draws an object layer line by line, top to bottom, each time asking
    /// the callback to draw its objects beforehand.
    fn draw_object_layer<B, F>(
        &self,
        target: &mut B,
        layer_index: usize,
        section: ScreenSection,
        draw_objects: &mut F,
    ) -> Result<(), DrawError>
    where
        B: BlitTarget<T::Surface>,
        F: FnMut(&mut B, usize, ScreenSection),
    {
        let action_layer = self.map.action_layer_index_of(layer_index)?;
        for y in section.rows() {
            let row = section.row(y);
            draw_objects(target, action_layer, row);
            self.draw_layer_section(target, layer_index, row)?;
        }
        Ok(())
    }

    /// Draws every cell of `section` from one layer, row-major. Cells holding
    /// the reserved empty id are skipped without consulting the resolver.
    fn draw_layer_section<B>(&self, target: &mut B, layer_index: usize, section: ScreenSection) -> Result<(), DrawError>
    where
        B: BlitTarget<T::Surface>,
    {
        let layers = self.map.layers();
        let layer = layers.get(layer_index).ok_or(MapError::LayerOutOfRange {
            index: layer_index,
            count: layers.len(),
        })?;
        for y in section.rows() {
            for x in section.columns() {
                let tile = layer.get(x, y)?;
                if tile == EMPTY_TILE {
                    continue;
                }
                let surface = self.map.resolve_surface(tile)?;
                target.blit(surface, section.tile_position(x, y))?;
            }
        }
        Ok(())
    }
}

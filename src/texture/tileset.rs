//! Tilesets: fixed-size tile grids cut from sheet images.

use std::path::Path;

use glam::IVec2;
use sdl2::image::LoadSurface;
use sdl2::rect::Rect;
use sdl2::surface::{Surface, SurfaceRef};
use tracing::debug;

use crate::error::{DrawError, TilesetError};
use crate::map::drawer::BlitTarget;

/// A source of drawable tile surfaces.
///
/// A map owns one of these per tileset name; tileset `i` covers the global
/// tile id range starting at the cumulative count of tilesets `0..i`. The
/// trait keeps the map model independent of the rendering backend.
pub trait TileSource {
    /// The drawable handed to [`BlitTarget::blit`].
    type Surface;

    /// How many tiles this tileset contributes to the global id space.
    fn tile_count(&self) -> usize;

    /// The surface for a tileset-local index, or `None` past the end.
    fn surface(&self, index: usize) -> Option<&Self::Surface>;
}

/// A tileset backed by SDL2 software surfaces.
///
/// Loading slices the sheet image into square tiles left-to-right,
/// top-to-bottom, so the local index of the tile at grid cell `(c, r)` is
/// `c + r * columns`.
pub struct SurfaceTileset {
    tiles: Vec<Surface<'static>>,
    tile_size: u32,
}

impl SurfaceTileset {
    /// Loads a sheet image and cuts it into `tile_size` x `tile_size` tiles.
    ///
    /// # Errors
    ///
    /// Fails if the image cannot be loaded or its dimensions are not an
    /// exact multiple of `tile_size`.
    pub fn load<P: AsRef<Path>>(path: P, tile_size: u32) -> Result<Self, TilesetError> {
        let path = path.as_ref();
        let sheet = Surface::from_file(path).map_err(TilesetError::LoadFailed)?;
        let (width, height) = (sheet.width(), sheet.height());
        if tile_size == 0 || width % tile_size != 0 || height % tile_size != 0 {
            return Err(TilesetError::InvalidDimensions {
                width,
                height,
                tile_size,
            });
        }

        let columns = width / tile_size;
        let rows = height / tile_size;
        let mut tiles = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let mut tile =
                    Surface::new(tile_size, tile_size, sheet.pixel_format_enum()).map_err(TilesetError::LoadFailed)?;
                let source = Rect::new(
                    (column * tile_size) as i32,
                    (row * tile_size) as i32,
                    tile_size,
                    tile_size,
                );
                sheet.blit(source, &mut tile, None).map_err(TilesetError::LoadFailed)?;
                tiles.push(tile);
            }
        }

        debug!(path = %path.display(), tile_count = tiles.len(), "Loaded tileset");
        Ok(Self { tiles, tile_size })
    }

    /// The pixel edge length of one tile.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
}

impl TileSource for SurfaceTileset {
    type Surface = Surface<'static>;

    fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn surface(&self, index: usize) -> Option<&Surface<'static>> {
        self.tiles.get(index)
    }
}

/// Lets the drawer paint straight onto an SDL surface, such as the window
/// surface obtained from [`sdl2::video::Window::surface`].
impl BlitTarget<Surface<'static>> for SurfaceRef {
    fn blit(&mut self, surface: &Surface<'static>, position: IVec2) -> Result<(), DrawError> {
        let dest = Rect::new(position.x, position.y, surface.width(), surface.height());
        SurfaceRef::blit(surface, None, self, dest).map_err(DrawError::Blit)?;
        Ok(())
    }
}

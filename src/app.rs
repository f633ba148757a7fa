//! The demo client: loads a map and its tilesets, opens a window and scrolls
//! around it while a handful of creatures wander through the action layers.
//!
//! Everything here is windowing glue; the engine itself lives under
//! [`crate::map`] and [`crate::texture`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use glam::IVec2;
use rand::Rng;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use tracing::{info, warn};

use crate::constants::{SCROLL_SPEED, TILE_SIZE, VIEWPORT_TILES, WINDOW_SIZE};
use crate::error::{ClientError, ClientResult};
use crate::map::drawer::MapDrawer;
use crate::map::layer::TileId;
use crate::map::section::ScreenSection;
use crate::map::Map;
use crate::texture::tileset::SurfaceTileset;

const LOOP_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// A wandering demo creature, pinned to one action layer.
struct Creature {
    tile: TileId,
    position: IVec2,
    action_layer: usize,
}

/// The demo application state.
pub struct App {
    map: Map<SurfaceTileset>,
    creatures: Vec<Creature>,
    camera: IVec2,
}

impl App {
    /// Loads the map file and every tileset it names.
    pub fn load(map_path: &Path, tiles_dir: &Path) -> ClientResult<Self> {
        let file = File::open(map_path)?;
        let mut map = Map::from_reader(BufReader::new(file))?;
        map.load_tilesets(|name| SurfaceTileset::load(tiles_dir.join(name), TILE_SIZE))?;
        info!(
            width = map.width(),
            height = map.height(),
            action_layers = map.action_layer_count(),
            "Map ready"
        );

        let creatures = Self::spawn_creatures(&map);
        Ok(Self {
            map,
            creatures,
            camera: IVec2::ZERO,
        })
    }

    fn spawn_creatures(map: &Map<SurfaceTileset>) -> Vec<Creature> {
        if map.total_tiles() == 0 || map.action_layer_count() == 0 {
            warn!("Map has no tiles or no action layers; demo runs without creatures");
            return Vec::new();
        }
        let tile = (map.total_tiles() - 1) as TileId;
        let mut rng = rand::rng();
        (0..8)
            .map(|_| Creature {
                tile,
                position: IVec2::new(
                    rng.random_range(0..map.width() as i32),
                    rng.random_range(0..map.height() as i32),
                ),
                action_layer: rng.random_range(0..map.action_layer_count()),
            })
            .collect()
    }

    /// Runs the event loop until the window is closed.
    pub fn run(mut self) -> ClientResult<()> {
        let sdl_context = sdl2::init().map_err(ClientError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(ClientError::Sdl)?;
        let window = video_subsystem
            .window("Opiso", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| ClientError::Sdl(e.to_string()))?;
        let mut event_pump = sdl_context.event_pump().map_err(ClientError::Sdl)?;

        info!("Starting demo loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);
        'running: loop {
            let start = Instant::now();

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                        ..
                    } => {
                        info!("Exit requested. Exiting...");
                        break 'running;
                    }
                    _ => {}
                }
            }

            self.scroll(&event_pump.keyboard_state());
            self.wander();

            let screen = window.surface(&event_pump).map_err(ClientError::Sdl)?;
            self.draw_frame(screen)?;

            if start.elapsed() < LOOP_TIME {
                spin_sleep::sleep(LOOP_TIME - start.elapsed());
            }
        }
        Ok(())
    }

    /// Moves the camera from the held arrow keys, clamped so the viewport
    /// never leaves the map (the drawer does not clip).
    fn scroll(&mut self, keys: &sdl2::keyboard::KeyboardState<'_>) {
        let mut delta = IVec2::ZERO;
        if keys.is_scancode_pressed(Scancode::Left) {
            delta.x -= SCROLL_SPEED;
        }
        if keys.is_scancode_pressed(Scancode::Right) {
            delta.x += SCROLL_SPEED;
        }
        if keys.is_scancode_pressed(Scancode::Up) {
            delta.y -= SCROLL_SPEED;
        }
        if keys.is_scancode_pressed(Scancode::Down) {
            delta.y += SCROLL_SPEED;
        }

        let max = IVec2::new(
            (self.map.width() * TILE_SIZE) as i32 - WINDOW_SIZE.x as i32,
            (self.map.height() * TILE_SIZE) as i32 - WINDOW_SIZE.y as i32,
        )
        .max(IVec2::ZERO);
        self.camera = (self.camera + delta).clamp(IVec2::ZERO, max);
    }

    /// Random-walks the creatures, one tile at a time, inside the map.
    fn wander(&mut self) {
        let mut rng = rand::rng();
        let bounds = IVec2::new(self.map.width() as i32 - 1, self.map.height() as i32 - 1);
        for creature in &mut self.creatures {
            if !rng.random_bool(0.05) {
                continue;
            }
            let step = match rng.random_range(0..4) {
                0 => IVec2::new(-1, 0),
                1 => IVec2::new(1, 0),
                2 => IVec2::new(0, -1),
                _ => IVec2::new(0, 1),
            };
            creature.position = (creature.position + step).clamp(IVec2::ZERO, bounds);
        }
    }

    fn draw_frame(&self, mut screen: sdl2::video::WindowSurfaceRef<'_>) -> ClientResult<()> {
        let tile = TILE_SIZE as i32;
        let section = ScreenSection {
            tile_left: self.camera.x / tile,
            tile_top: self.camera.y / tile,
            tile_width: (VIEWPORT_TILES.x as i32).min(self.map.width() as i32 - self.camera.x / tile),
            tile_height: (VIEWPORT_TILES.y as i32).min(self.map.height() as i32 - self.camera.y / tile),
            x_offset: self.camera.x % tile,
            y_offset: self.camera.y % tile,
            tile_size: tile,
        };

        screen.fill_rect(None, Color::BLACK).map_err(ClientError::Sdl)?;

        let map = &self.map;
        let creatures = &self.creatures;
        let drawer = MapDrawer::new(map);
        drawer.draw(&mut *screen, section, |target, action_layer, row| {
            for creature in creatures {
                if creature.action_layer != action_layer || creature.position.y != row.tile_top {
                    continue;
                }
                let Ok(surface) = map.resolve_surface(creature.tile) else {
                    continue;
                };
                let position = row.tile_position(creature.position.x, creature.position.y);
                let dest = Rect::new(position.x, position.y, surface.width(), surface.height());
                if let Err(e) = surface.blit(None, target, dest) {
                    warn!("Creature blit failed: {e}");
                }
            }
        })?;

        screen.update_window().map_err(ClientError::Sdl)?;
        Ok(())
    }
}

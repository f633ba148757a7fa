use opiso::error::MapError;
use opiso::map::layer::{LayerType, MapLayer, TileId};
use opiso::map::Map;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;
use common::{stacked_map_unloaded, FakeTileset};

use LayerType::{Collision, Normal, Object};

#[test]
fn test_action_layer_index_counts_collision_layers_before() {
    let map = stacked_map_unloaded(&[Normal, Object, Collision, Normal, Collision], 2, 2);
    let expected = [0, 0, 0, 1, 1];
    for (i, &want) in expected.iter().enumerate() {
        assert_eq!(map.action_layer_index_of(i).unwrap(), want, "layer {i}");
    }
    assert_eq!(map.action_layer_count(), 2);
}

#[test]
fn test_action_layer_index_is_monotone_and_steps_after_collisions() {
    let map = stacked_map_unloaded(&[Collision, Normal, Collision, Object, Collision], 1, 1);
    let mut last = map.action_layer_index_of(0).unwrap();
    assert_eq!(last, 0);
    for i in 1..map.layers().len() {
        let current = map.action_layer_index_of(i).unwrap();
        let expected_step = usize::from(map.layers()[i - 1].kind() == Collision);
        assert_eq!(current - last, expected_step, "layer {i}");
        last = current;
    }
    assert_eq!(map.action_layer_count(), 3);
}

#[test]
fn test_action_layer_index_out_of_range() {
    let map = stacked_map_unloaded(&[Normal, Collision], 1, 1);
    assert!(matches!(
        map.action_layer_index_of(2),
        Err(MapError::LayerOutOfRange { index: 2, count: 2 })
    ));
}

#[test]
fn test_resolution_partitions_the_id_space() {
    let counts = [3usize, 4, 5];
    let mut map = Map::<FakeTileset>::new(1, 1);
    map.set_tileset_names(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    let mut next = 0;
    map.load_tilesets(|_| {
        let tileset = FakeTileset::new(next, counts[next]);
        next += 1;
        Ok(tileset)
    })
    .unwrap();
    assert_eq!(map.total_tiles(), 12);

    // Every id resolves to the tileset whose cumulative half-open range
    // contains it, with the right local index.
    let mut start = 0;
    for (tileset, &count) in counts.iter().enumerate() {
        for local in 0..count {
            let tile = map.resolve_surface((start + local) as TileId).unwrap();
            assert_that(&tile.tileset).is_equal_to(tileset);
            assert_that(&tile.local).is_equal_to(local);
        }
        start += count;
    }

    // One past the end belongs to no tileset.
    assert!(matches!(
        map.resolve_surface(12),
        Err(MapError::TileIdOutOfRange { id: 12, total: 12 })
    ));
}

#[test]
fn test_resolution_requires_loaded_tilesets() {
    let map = stacked_map_unloaded(&[Normal, Collision], 1, 1);
    assert!(matches!(map.resolve_surface(1), Err(MapError::TilesetsNotLoaded)));
}

#[test]
fn test_layer_sort_is_stable_for_equal_indices() {
    let layer = |index, kind, tile| MapLayer::from_tiles(index, kind, 1, 1, vec![tile]).unwrap();
    let mut map = Map::<FakeTileset>::new(1, 1);
    map.load_layers(vec![
        layer(7, Normal, 1),
        layer(7, Object, 2),
        layer(3, Normal, 3),
        layer(7, Collision, 4),
    ])
    .unwrap();

    let tiles: Vec<TileId> = map.layers().iter().map(|l| l.get(0, 0).unwrap()).collect();
    assert_eq!(tiles, vec![3, 1, 2, 4]);
}

#[test]
fn test_validate_accepts_collision_terminated_runs() {
    stacked_map_unloaded(&[Normal, Object, Collision, Normal, Object, Collision], 1, 1)
        .validate()
        .unwrap();
    stacked_map_unloaded(&[Object, Collision, Object, Collision], 1, 1)
        .validate()
        .unwrap();
    stacked_map_unloaded(&[], 1, 1).validate().unwrap();
}

#[test]
fn test_validate_rejects_layers_after_last_collision() {
    let map = stacked_map_unloaded(&[Normal, Collision, Normal], 1, 1);
    assert!(matches!(map.validate(), Err(MapError::MissingCollisionLayer)));
}

#[test]
fn test_validate_rejects_second_object_layer_in_action_layer() {
    let map = stacked_map_unloaded(&[Object, Normal, Object, Collision], 1, 1);
    assert!(matches!(
        map.validate(),
        Err(MapError::TooManyObjectLayers {
            action_layer: 0,
            count: 2
        })
    ));
}

#[test]
fn test_load_layers_rejects_size_mismatch() {
    let mut map = Map::<FakeTileset>::new(2, 2);
    let wrong = MapLayer::new(0, Normal, 2, 3);
    assert!(matches!(
        map.load_layers(vec![wrong]),
        Err(MapError::LayerSizeMismatch { .. })
    ));
}

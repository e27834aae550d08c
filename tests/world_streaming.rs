//! End-to-end streaming scenarios: loading a window of chunks around a focus,
//! waiting for the background generator, and checking the resulting meshes.

use std::time::{Duration, Instant};

use cgmath::Point3;

use voxel_engine_core::config::WorldConfig;
use voxel_engine_core::core::pack_coordinates;
use voxel_engine_core::terrain::{chunk_column_blocks, HeightField};
use voxel_engine_core::voxels::block::BlockSide;
use voxel_engine_core::voxels::chunk::BlockLookup;
use voxel_engine_core::voxels::world::World;

const CHUNK_SIZE: i32 = 8;

fn test_world(seed: &str) -> World {
    let config = WorldConfig {
        seed: seed.to_string(),
        grid_item_size: 1,
        chunk_size: CHUNK_SIZE,
    };
    World::new(config).expect("world should build from a valid config")
}

/// Drains generation results until `expected` chunks have been populated,
/// failing the test if the worker goes quiet for too long.
fn pump_until_populated(world: &mut World, expected: usize) {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut populated = 0;
    while populated < expected {
        populated += world
            .process_generation_results()
            .expect("generated terrain should stay in coordinate range");
        assert!(
            Instant::now() < deadline,
            "worker populated only {populated} of {expected} chunks before the deadline"
        );
        std::thread::yield_now();
    }
}

#[test]
fn radius_one_window_streams_nine_populated_chunks() {
    let mut world = test_world("streaming");
    world
        .load_chunks_around(Point3::new(0.0, 0.0, 0.0), 1)
        .unwrap();
    assert_eq!(world.chunk_count(), 9);

    pump_until_populated(&mut world, 9);

    for key in world.chunk_keys().collect::<Vec<_>>() {
        let chunk = world.chunk(key).unwrap();
        assert!(chunk.block_count() > 0, "generated chunk has no blocks");
        assert!(
            !chunk.renderable().is_empty(),
            "populated chunk should carry a mesh"
        );
    }
}

#[test]
fn same_seed_worlds_generate_identical_terrain() {
    let mut first = test_world("determinism");
    let mut second = test_world("determinism");
    for world in [&mut first, &mut second] {
        world
            .load_chunks_around(Point3::new(0.0, 0.0, 0.0), 1)
            .unwrap();
        pump_until_populated(world, 9);
    }

    for key in first.chunk_keys().collect::<Vec<_>>() {
        let a = first.chunk(key).expect("chunk loaded in first world");
        let b = second.chunk(key).expect("chunk loaded in second world");
        assert_eq!(a.block_count(), b.block_count());
        assert_eq!(
            a.renderable().total_face_count(),
            b.renderable().total_face_count()
        );
    }

    // Occupancy must agree cell by cell, not just in aggregate.
    for x in -4..12 {
        for z in -4..12 {
            for y in -12..12 {
                let position = Point3::new(x, y, z);
                assert_eq!(
                    first.has_block(position).unwrap(),
                    second.has_block(position).unwrap()
                );
            }
        }
    }
}

struct FlatField;

impl HeightField for FlatField {
    fn height_at(&self, _x: i32, _z: i32) -> i32 {
        0
    }
}

#[test]
fn flat_terrain_exposes_one_top_face_per_block() {
    let mut world = test_world("flat");

    // Populate a 3x3 chunk window from a constant heightmap through the
    // editing path, bypassing the noise generator.
    let mut origins = Vec::new();
    for chunk_x in -1..=1 {
        for chunk_z in -1..=1 {
            origins.push(Point3::new(chunk_x * CHUNK_SIZE, 0, chunk_z * CHUNK_SIZE));
        }
    }
    let mut session = world.begin_edit();
    for origin in &origins {
        let blocks = chunk_column_blocks(&FlatField, *origin, CHUNK_SIZE, 1);
        world.stage_blocks(&mut session, &blocks).unwrap();
    }
    world.commit_edit(session).unwrap();

    assert_eq!(world.chunk_count(), 9);
    for origin in &origins {
        let key = pack_coordinates(*origin).unwrap();
        let chunk = world.chunk(key).unwrap();
        let mesh = chunk.renderable();
        // Every block of a flat world shows its top; equal neighbor heights
        // mean no filler walls and no exposed lateral faces between columns.
        assert_eq!(
            mesh.face_count(BlockSide::TOP),
            chunk.block_count(),
            "chunk at {origin:?}"
        );
        assert_eq!(chunk.block_count(), (CHUNK_SIZE * CHUNK_SIZE) as usize);
    }
}

#[test]
fn moving_the_window_drops_chunks_behind_the_focus() {
    let mut world = test_world("window");
    world
        .load_chunks_around(Point3::new(0.0, 0.0, 0.0), 1)
        .unwrap();
    let first_window: Vec<_> = world.chunk_keys().collect();
    assert_eq!(first_window.len(), 9);

    // Step the focus one full window to the east; no chunk from the old
    // window survives.
    let shifted_focus = Point3::new((CHUNK_SIZE * 3) as f32, 0.0, 0.0);
    world.load_chunks_around(shifted_focus, 1).unwrap();
    assert_eq!(world.chunk_count(), 9);
    for key in first_window {
        assert!(world.chunk(key).is_none());
    }
}

#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Engine Core
//!
//! The world model of a streaming voxel engine: deterministic terrain
//! generation, sparse chunked block storage, occlusion-culled mesh building,
//! and ray picking, with chunk generation offloaded to a background worker.
//! Rendering itself is out of scope; chunks hand their merged geometry to an
//! external scene collaborator through the [`voxels::scene::SceneSink`] trait.
//!
//! ## Key Modules
//!
//! * `core` - Coordinate packing and the crate-wide error type
//! * `terrain` - Seeded noise heightmap and column generation
//! * `meshing` - Vertices, face templates, and per-chunk mesh assembly
//! * `voxels` - Blocks, chunks, the world, and the generation worker
//! * `picking` - Ray to voxel/face resolution for interaction
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_engine_core::config::WorldConfig;
//! use voxel_engine_core::voxels::world::World;
//!
//! let mut world = World::new(WorldConfig::default()).unwrap();
//! world.load_chunks_around(Point3::new(0.0, 0.0, 0.0), 1).unwrap();
//! let mut populated = 0;
//! while populated < 9 {
//!     populated += world.process_generation_results().unwrap();
//!     std::thread::yield_now();
//! }
//! ```

use cgmath::{Point3, Vector3};
use log::info;

pub mod config;
pub mod core;
pub mod meshing;
pub mod picking;
pub mod terrain;
pub mod voxels;

use crate::config::WorldConfig;
use crate::core::VoxelError;
use crate::voxels::world::World;

/// Streaming radius used by the demo entry point, in chunks.
const DEMO_RADIUS: i32 = 1;

/// Builds a world from the default configuration, streams the chunks around
/// the origin, and resolves one downward pick against the generated terrain.
///
/// Exercises the full pipeline end to end and logs what it finds; a real
/// consumer would instead drive [`World`] from its own frame loop.
pub fn run() -> Result<(), VoxelError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = WorldConfig::default();
    let mut world = World::new(config)?;

    let scene = std::rc::Rc::new(std::cell::RefCell::new(
        voxels::scene::CollectingScene::new(),
    ));
    world.set_scene(Box::new(std::rc::Rc::clone(&scene)));

    world.load_chunks_around(Point3::new(0.0, 0.0, 0.0), DEMO_RADIUS)?;

    let expected = ((2 * DEMO_RADIUS + 1) * (2 * DEMO_RADIUS + 1)) as usize;
    let mut populated = 0;
    while populated < expected {
        populated += world.process_generation_results()?;
        std::thread::yield_now();
    }
    info!(
        "Streamed {} chunks around the origin ({} attached to the scene)",
        world.chunk_count(),
        scene.borrow().attached_count()
    );

    let ray_origin = Point3::new(0.5, 12.0, 0.5);
    match picking::pick(ray_origin, Vector3::new(0.0, -1.0, 0.0), &world)? {
        Some(hit) => info!(
            "Downward ray struck voxel {:?} on face {:?}; placement cell {:?}",
            hit.voxel,
            hit.side,
            hit.placement_position()
        ),
        None => info!("Downward ray found no terrain within traversal range"),
    }

    Ok(())
}

//! # Voxel World
//!
//! This module contains the voxel world model, providing the foundation for
//! representing, editing, and meshing a streaming block world.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Defines individual voxels, their atlas cells, and face geometry
//! * **Chunk**: Owns a sparse block map and the mesh rebuilt from it
//! * **World**: Coordinates chunks, batched edits, and streaming around a focus
//! * **Scene**: The sink chunks are attached to and detached from as they stream
//! * **Tasks**: Runs terrain generation for new chunks on a background worker
//!
//! ## Data Flow
//!
//! 1. World receives requests for block access or modification
//! 2. World delegates to the owning chunk (creating it if necessary)
//! 3. Committed edits trigger a full mesh rebuild for every touched chunk
//! 4. Rebuilt chunks are attached to the scene sink

pub mod block;
pub mod chunk;
pub mod scene;
pub mod tasks;
pub mod world;

pub use block::{Block, BlockSide, FaceVisibility};
pub use chunk::{BlockLookup, Chunk};
pub use scene::SceneSink;
pub use world::{EditSession, World};

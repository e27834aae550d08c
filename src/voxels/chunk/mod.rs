//! # Chunk Module
//!
//! A chunk owns a bounded column of blocks keyed by packed local coordinate
//! and the merged surface mesh derived from them. Chunks do not know about
//! each other: cross-chunk neighbor occupancy is answered through the
//! [`BlockLookup`] capability the owning world passes into every rebuild, so
//! a chunk never holds a reference back to the world.
//!
//! ## Mesh rebuilds
//!
//! Meshing is a full rebuild, never an incremental patch: the mesh is a pure
//! function of the block set plus neighbor occupancy, and any edit discards
//! the previous mesh wholesale. A rebuild performs O(blocks × 6) occupancy
//! lookups, each O(1) through the chunk-map and block-map hash chains,
//! acceptable because block counts are bounded by the chunk footprint.

use std::collections::HashMap;

use cgmath::{EuclideanSpace, Point3, Vector3};
use log::trace;

use crate::core::coordinate_codec::{pack_coordinates, PackedKey};
use crate::core::error::VoxelError;
use crate::meshing::ChunkMesh;

use super::block::block_side::{BlockSide, FaceVisibility};
use super::block::Block;

/// Read-only occupancy capability a chunk queries while rebuilding its mesh.
///
/// The world implements this over all loaded chunks, which is what lets face
/// culling see across chunk boundaries.
pub trait BlockLookup {
    /// Returns whether a block occupies the given absolute position.
    ///
    /// Absence of the containing chunk is an ordinary `false`, not an error.
    fn has_block(&self, position: Point3<i32>) -> Result<bool, VoxelError>;
}

/// A fixed-footprint column of the world: the unit of mesh rebuild and
/// streaming.
pub struct Chunk {
    /// Block coordinate of the chunk's minimum corner (y is always 0).
    pub origin: Point3<i32>,
    /// Blocks keyed by packed local position.
    blocks: HashMap<PackedKey, Block>,
    /// The current merged surface mesh.
    mesh: ChunkMesh,
}

impl Chunk {
    /// Creates an empty chunk at the given origin.
    pub fn new(origin: Point3<i32>) -> Self {
        Chunk {
            origin,
            blocks: HashMap::new(),
            mesh: ChunkMesh::new(),
        }
    }

    /// Inserts blocks at the given chunk-local positions.
    ///
    /// A position that already holds a block is replaced; last write wins.
    /// The mesh is not touched; the owning world rebuilds it once per edit
    /// batch via [`Chunk::build_mesh`].
    ///
    /// # Arguments
    /// * `local_positions` - Positions relative to the chunk origin
    pub fn insert_blocks(&mut self, local_positions: &[Point3<i32>]) -> Result<(), VoxelError> {
        for &position in local_positions {
            let key = pack_coordinates(position)?;
            self.blocks.insert(key, Block::new(position));
        }
        Ok(())
    }

    /// Returns whether a block occupies the given chunk-local position.
    pub fn has_block(&self, local_position: Point3<i32>) -> Result<bool, VoxelError> {
        Ok(self.blocks.contains_key(&pack_coordinates(local_position)?))
    }

    /// Number of blocks currently held by this chunk.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Rebuilds the merged surface mesh from scratch.
    ///
    /// For every block, each of the six axis-aligned neighbors is probed
    /// through `world`; a face is emitted iff its neighbor cell is empty. The
    /// probe uses absolute coordinates, so occlusion crosses chunk boundaries
    /// transparently.
    ///
    /// # Arguments
    /// * `world` - Occupancy over all loaded chunks
    ///
    /// # Returns
    /// The freshly built mesh; callers store it with [`Chunk::set_mesh`].
    pub fn build_mesh(&self, world: &dyn BlockLookup) -> Result<ChunkMesh, VoxelError> {
        let mut mesh = ChunkMesh::new();
        let origin_offset = Vector3::new(
            self.origin.x as f32,
            self.origin.y as f32,
            self.origin.z as f32,
        );

        for block in self.blocks.values() {
            let global = self.origin + block.local_position.to_vec();

            let mut visibility = FaceVisibility::none();
            for side in BlockSide::all() {
                visibility.set(side, !world.has_block(global + side.offset())?);
            }

            for face in block.faces(visibility) {
                mesh.push_face(&face, origin_offset);
            }
        }

        trace!(
            "rebuilt mesh for chunk at {:?}: {} blocks, {} faces",
            self.origin,
            self.blocks.len(),
            mesh.total_face_count()
        );
        Ok(mesh)
    }

    /// Replaces the stored mesh, discarding the previous one.
    pub fn set_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = mesh;
    }

    /// The opaque drawable handed off to the external renderer.
    pub fn renderable(&self) -> &ChunkMesh {
        &self.mesh
    }
}

//! # World Module
//!
//! This module provides the `World` struct which owns every chunk, routes
//! global-to-local coordinate translation, batches multi-block edits,
//! streams chunks in and out around a focus point, and drives asynchronous
//! terrain generation.
//!
//! ## Architecture
//!
//! The world uses sparse storage: only chunks inside the streamed radius are
//! kept in memory, looked up O(1) through their packed origin key. Chunks
//! never reference the world back; neighbor occupancy during meshing flows
//! through the [`BlockLookup`] capability the world implements.
//!
//! ## Batched editing
//!
//! A full mesh rebuild runs once per edited chunk per committed
//! [`EditSession`], coalescing N single-block edits into one O(blocks × 6)
//! rebuild instead of N. The session owns the pending-edit map and is
//! consumed by [`World::commit_edit`], so re-entrant batching is
//! unrepresentable rather than merely discouraged.
//!
//! ## Concurrency
//!
//! A single logical owner thread performs all world and chunk mutation and
//! all mesh reads. Terrain generation is offloaded to one background worker
//! per world; results come back as messages drained by
//! [`World::process_generation_results`] on the owner thread. A completion
//! for a chunk that was unloaded in the meantime is an expected race and is
//! silently discarded.

use std::collections::{HashMap, HashSet};

use cgmath::{EuclideanSpace, Point3, Vector3};
use log::{debug, info};

use crate::config::WorldConfig;
use crate::core::coordinate_codec::{pack_coordinates, PackedKey};
use crate::core::error::VoxelError;

use super::chunk::{BlockLookup, Chunk};
use super::scene::SceneSink;
use super::tasks::{GenerationRequest, GenerationWorker};
use crate::terrain::{HeightField, TerrainGenerator};

/// An in-progress batch of block insertions.
///
/// Created by [`World::begin_edit`], filled through [`World::stage_blocks`],
/// and consumed by [`World::commit_edit`]. Pending positions are stored
/// chunk-locally, keyed by the owning chunk's packed origin.
#[derive(Debug, Default)]
pub struct EditSession {
    pending: HashMap<PackedKey, Vec<Point3<i32>>>,
}

impl EditSession {
    /// Returns whether any blocks have been staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of chunks this session will touch on commit.
    pub fn staged_chunk_count(&self) -> usize {
        self.pending.len()
    }
}

/// The streaming voxel world.
pub struct World {
    config: WorldConfig,
    chunks: HashMap<PackedKey, Chunk>,
    scene: Option<Box<dyn SceneSink>>,
    worker: GenerationWorker,
    /// Owner-thread generator for synchronous height queries; seeded the same
    /// as the worker's so the two can never disagree.
    generator: TerrainGenerator,
    /// Count of chunks ever dispatched for generation, for streaming
    /// idempotence checks and progress logging.
    chunks_generated: usize,
}

impl World {
    /// Creates a world and spawns its generation worker.
    ///
    /// # Arguments
    /// * `config` - Sizing and seed; fixed for the world's lifetime
    ///
    /// # Returns
    /// The world, or [`VoxelError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn new(config: WorldConfig) -> Result<Self, VoxelError> {
        config.validate()?;
        info!(
            "creating world: seed={:?} chunk_size={} grid_item_size={}",
            config.seed, config.chunk_size, config.grid_item_size
        );
        Ok(World {
            worker: GenerationWorker::spawn(&config.seed),
            generator: TerrainGenerator::new(&config.seed),
            config,
            chunks: HashMap::new(),
            scene: None,
            chunks_generated: 0,
        })
    }

    /// Installs the external scene collaborator.
    pub fn set_scene(&mut self, scene: Box<dyn SceneSink>) {
        self.scene = Some(scene);
    }

    /// Edge length of a chunk's footprint in blocks.
    pub fn chunk_size(&self) -> i32 {
        self.config.chunk_size
    }

    /// Edge length of one grid cell in world units.
    pub fn grid_item_size(&self) -> i32 {
        self.config.grid_item_size
    }

    /// Number of chunks currently loaded.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of chunks ever dispatched for generation.
    pub fn generated_chunk_count(&self) -> usize {
        self.chunks_generated
    }

    /// Returns the chunk stored under the given packed origin key.
    pub fn chunk(&self, key: PackedKey) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    /// Iterates over the packed origin keys of all loaded chunks.
    pub fn chunk_keys(&self) -> impl Iterator<Item = PackedKey> + '_ {
        self.chunks.keys().copied()
    }

    /// Converts a continuous world position to its grid cell coordinate.
    pub fn world_to_grid(&self, position: Point3<f32>) -> Point3<i32> {
        let size = self.config.grid_item_size as f32;
        Point3::new(
            (position.x / size).floor() as i32,
            (position.y / size).floor() as i32,
            (position.z / size).floor() as i32,
        )
    }

    /// Returns the origin (minimum corner, y = 0) of the chunk containing the
    /// given block position.
    pub fn chunk_origin_of(&self, position: Point3<i32>) -> Point3<i32> {
        let size = self.config.chunk_size;
        Point3::new(
            position.x.div_euclid(size) * size,
            0,
            position.z.div_euclid(size) * size,
        )
    }

    /// Starts a new edit batch.
    ///
    /// The session is a same-thread coalescing scope, not a concurrency
    /// primitive; commit it with [`World::commit_edit`].
    pub fn begin_edit(&self) -> EditSession {
        EditSession::default()
    }

    /// Stages blocks into an edit session.
    ///
    /// Each position's owning chunk is resolved (registered empty if not yet
    /// loaded) and the position is recorded chunk-locally. No mesh work
    /// happens until commit.
    ///
    /// # Arguments
    /// * `session` - The session to stage into
    /// * `positions` - Absolute block positions
    pub fn stage_blocks(
        &mut self,
        session: &mut EditSession,
        positions: &[Point3<i32>],
    ) -> Result<(), VoxelError> {
        for &position in positions {
            let origin = self.chunk_origin_of(position);
            let key = pack_coordinates(origin)?;

            self.chunks.entry(key).or_insert_with(|| {
                debug!("registering chunk at {:?} for staged edit", origin);
                Chunk::new(origin)
            });

            let local = position - origin.to_vec();
            session.pending.entry(key).or_default().push(local);
        }
        Ok(())
    }

    /// Applies a staged edit batch.
    ///
    /// All staged blocks are inserted first, then each touched chunk's mesh
    /// is rebuilt exactly once, so two neighboring chunks edited in the same
    /// session see each other's new blocks and cull the shared faces on both
    /// sides. Finally every touched chunk's renderable is attached to the
    /// scene, idempotently.
    pub fn commit_edit(&mut self, session: EditSession) -> Result<(), VoxelError> {
        for (key, locals) in &session.pending {
            match self.chunks.get_mut(key) {
                Some(chunk) => chunk.insert_blocks(locals)?,
                // Unloaded between stage and commit; absence is not an error.
                None => debug!("skipping staged edit for unloaded chunk {key}"),
            }
        }

        for key in session.pending.keys() {
            let mesh = match self.chunks.get(key) {
                Some(chunk) => chunk.build_mesh(&*self)?,
                None => continue,
            };
            if let Some(chunk) = self.chunks.get_mut(key) {
                chunk.set_mesh(mesh);
            }
        }

        if let Some(scene) = self.scene.as_mut() {
            for &key in session.pending.keys() {
                if !scene.is_attached(key) {
                    scene.attach_chunk(key);
                }
            }
        }

        Ok(())
    }

    /// Inserts blocks as a single immediate batch.
    ///
    /// Equivalent to begin, stage, and commit in one call: every touched
    /// chunk still rebuilds its mesh only once.
    pub fn add_blocks(&mut self, positions: &[Point3<i32>]) -> Result<(), VoxelError> {
        let mut session = self.begin_edit();
        self.stage_blocks(&mut session, positions)?;
        self.commit_edit(session)
    }

    /// Stages a cliff wall below `(x, y, z)` if the lateral neighbor column
    /// in the given direction is lower.
    ///
    /// Synchronous counterpart of the worker's wall-filling pass, answered
    /// from the world's own generator. Deterministic and side-effect-free
    /// apart from the staged positions.
    pub fn add_side_if_needed(
        &mut self,
        session: &mut EditSession,
        position: Point3<i32>,
        offset: Vector3<i32>,
    ) -> Result<(), VoxelError> {
        let neighbor_height = self
            .generator
            .height_at(position.x + offset.x, position.z + offset.z);
        if neighbor_height < position.y {
            let fillers: Vec<Point3<i32>> = ((neighbor_height + 1)..position.y)
                .map(|h| Point3::new(position.x, h, position.z))
                .collect();
            self.stage_blocks(session, &fillers)?;
        }
        Ok(())
    }

    /// Registers an empty chunk and dispatches its terrain generation.
    ///
    /// A no-op if the chunk is already loaded. The chunk's (still empty)
    /// renderable is attached to the scene immediately; geometry arrives when
    /// the worker's completion is drained.
    pub fn generate_chunk(&mut self, chunk_origin: Point3<i32>) -> Result<(), VoxelError> {
        let key = pack_coordinates(chunk_origin)?;
        if self.chunks.contains_key(&key) {
            return Ok(());
        }

        self.chunks.insert(key, Chunk::new(chunk_origin));
        self.chunks_generated += 1;

        if let Some(scene) = self.scene.as_mut() {
            if !scene.is_attached(key) {
                scene.attach_chunk(key);
            }
        }

        debug!("dispatching generation for chunk at {:?}", chunk_origin);
        self.worker.request(GenerationRequest {
            chunk_origin,
            chunk_size: self.config.chunk_size,
            grid_item_size: self.config.grid_item_size,
        });
        Ok(())
    }

    /// Unloads a chunk, detaching its renderable and dropping its blocks.
    ///
    /// Destructive: nothing is persisted. Regenerating the same area derives
    /// identical terrain, but player-made edits are lost.
    pub fn unload_chunk(&mut self, key: PackedKey) {
        if let Some(chunk) = self.chunks.remove(&key) {
            debug!("unloading chunk at {:?}", chunk.origin);
            if let Some(scene) = self.scene.as_mut() {
                scene.detach_chunk(key);
            }
        }
    }

    /// Streams the loaded chunk set to a square window around a focus point.
    ///
    /// Enumerates every chunk origin within `radius` chunks of the focus in x
    /// and z (a (2·radius+1)² square), generating the missing ones, then
    /// unloads every loaded chunk outside the window. A full recompute on
    /// every call rather than an incremental diff; the radius is small and
    /// call frequency is caller-controlled.
    pub fn load_chunks_around(
        &mut self,
        focus: Point3<f32>,
        radius: i32,
    ) -> Result<(), VoxelError> {
        let focus_origin = self.chunk_origin_of(self.world_to_grid(focus));
        let size = self.config.chunk_size;
        let mut wanted: HashSet<PackedKey> = HashSet::new();

        for dx in -radius..=radius {
            for dz in -radius..=radius {
                let origin = Point3::new(
                    focus_origin.x + dx * size,
                    0,
                    focus_origin.z + dz * size,
                );
                wanted.insert(pack_coordinates(origin)?);
                self.generate_chunk(origin)?;
            }
        }

        let stale: Vec<PackedKey> = self
            .chunks
            .keys()
            .filter(|key| !wanted.contains(key))
            .copied()
            .collect();
        for key in stale {
            self.unload_chunk(key);
        }
        Ok(())
    }

    /// Drains completed generation responses and applies them.
    ///
    /// Each response is applied through one edit session, so the generated
    /// chunk's mesh is rebuilt exactly once for the whole column. Responses
    /// for chunks unloaded since their request are discarded silently.
    ///
    /// # Returns
    /// The number of responses applied.
    pub fn process_generation_results(&mut self) -> Result<usize, VoxelError> {
        let mut applied = 0;
        while let Some(response) = self.worker.try_recv() {
            if !self.chunks.contains_key(&response.chunk_key) {
                debug!(
                    "discarding generation result for unloaded chunk {}",
                    response.chunk_key
                );
                continue;
            }

            let mut session = self.begin_edit();
            self.stage_blocks(&mut session, &response.blocks)?;
            self.commit_edit(session)?;
            applied += 1;
        }
        Ok(applied)
    }
}

impl BlockLookup for World {
    /// Resolves the containing chunk and delegates locally. A missing chunk
    /// means no block: "not loaded yet" and "nothing here" are both ordinary
    /// negatives in a streaming world.
    fn has_block(&self, position: Point3<i32>) -> Result<bool, VoxelError> {
        let origin = self.chunk_origin_of(position);
        let key = pack_coordinates(origin)?;
        match self.chunks.get(&key) {
            Some(chunk) => chunk.has_block(position - origin.to_vec()),
            None => Ok(false),
        }
    }
}

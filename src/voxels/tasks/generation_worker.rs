//! # Generation Worker
//!
//! One background thread per world that turns chunk-generation requests into
//! block lists. The worker holds no reference to the world or its chunks: it
//! owns an independent [`TerrainGenerator`] seeded identically to the
//! world's, and computes purely from each request's inputs. Cross-thread
//! traffic is message passing only, which keeps all world and chunk mutation
//! on the owner thread without any locking.
//!
//! Requests cannot be cancelled once sent; a completion whose chunk has been
//! unloaded in the meantime is discarded by the world when it drains
//! responses.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use cgmath::Point3;
use log::{debug, error};

use crate::core::coordinate_codec::{pack_coordinates, PackedKey};
use crate::terrain::{chunk_column_blocks, TerrainGenerator};

/// A request to generate one chunk's terrain column.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest {
    /// Block coordinate of the chunk's minimum corner.
    pub chunk_origin: Point3<i32>,
    /// Edge length of the chunk footprint in blocks.
    pub chunk_size: i32,
    /// Step between generated columns.
    pub grid_item_size: i32,
}

/// The completed terrain column for one chunk.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Packed key of the chunk origin the blocks belong to.
    pub chunk_key: PackedKey,
    /// Absolute block positions of the generated column.
    pub blocks: Vec<Point3<i32>>,
}

/// Handle to the background generation thread.
///
/// Dropping the handle closes the request channel, which ends the worker
/// loop and lets the thread exit.
pub struct GenerationWorker {
    request_sender: Sender<GenerationRequest>,
    response_receiver: Receiver<GenerationResponse>,
    _worker: JoinHandle<()>,
}

impl GenerationWorker {
    /// Spawns the worker thread.
    ///
    /// # Arguments
    /// * `seed` - Terrain seed; must match the seed of any generator used for
    ///   synchronous height queries on the owner thread, or worker-built
    ///   columns and owner-side wall filling would disagree
    pub fn spawn(seed: &str) -> Self {
        let (request_sender, request_receiver) = channel::<GenerationRequest>();
        let (response_sender, response_receiver) = channel::<GenerationResponse>();

        let generator = TerrainGenerator::new(seed);
        let worker = thread::spawn(move || {
            while let Ok(request) = request_receiver.recv() {
                let chunk_key = match pack_coordinates(request.chunk_origin) {
                    Ok(key) => key,
                    Err(e) => {
                        error!("dropping generation request: {e}");
                        continue;
                    }
                };

                let blocks = chunk_column_blocks(
                    &generator,
                    request.chunk_origin,
                    request.chunk_size,
                    request.grid_item_size,
                );
                debug!(
                    "generated {} blocks for chunk at {:?}",
                    blocks.len(),
                    request.chunk_origin
                );

                if response_sender
                    .send(GenerationResponse { chunk_key, blocks })
                    .is_err()
                {
                    // Owner side is gone; nothing left to generate for.
                    break;
                }
            }
        });

        GenerationWorker {
            request_sender,
            response_receiver,
            _worker: worker,
        }
    }

    /// Queues a generation request.
    ///
    /// A dead worker is logged rather than surfaced: the affected chunk
    /// simply stays unpopulated, matching the no-timeout model.
    pub fn request(&self, request: GenerationRequest) {
        if self.request_sender.send(request).is_err() {
            error!(
                "generation worker is gone; chunk at {:?} will stay empty",
                request.chunk_origin
            );
        }
    }

    /// Returns the next completed response without blocking, if any.
    pub fn try_recv(&self) -> Option<GenerationResponse> {
        match self.response_receiver.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

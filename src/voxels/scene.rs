//! # Scene Handoff
//!
//! The rendering side of the engine is an external collaborator; the core
//! only needs to tell it which chunks currently have drawable geometry. This
//! module defines that interface boundary. Mesh data itself is read back
//! through [`Chunk::renderable`](super::chunk::Chunk::renderable) by chunk
//! key.

use std::collections::HashSet;

use crate::core::coordinate_codec::PackedKey;

/// External scene-graph collaborator.
///
/// The world attaches a chunk's renderable when the chunk first receives
/// geometry and detaches it on unload. Attach is idempotent by contract: the
/// world probes [`SceneSink::is_attached`] before every attach
/// (check-before-add), so an implementation will see each live chunk key at
/// most once.
pub trait SceneSink {
    /// Registers a chunk's renderable with the scene.
    fn attach_chunk(&mut self, key: PackedKey);

    /// Removes a chunk's renderable from the scene.
    fn detach_chunk(&mut self, key: PackedKey);

    /// Returns whether the chunk is currently part of the scene.
    fn is_attached(&self, key: PackedKey) -> bool;
}

/// Shared handles forward to the inner sink, so callers can keep a clone of
/// the scene they hand to the world. Single-threaded by design: the owner
/// thread is the only one touching scene state.
impl<S: SceneSink> SceneSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn attach_chunk(&mut self, key: PackedKey) {
        self.borrow_mut().attach_chunk(key);
    }

    fn detach_chunk(&mut self, key: PackedKey) {
        self.borrow_mut().detach_chunk(key);
    }

    fn is_attached(&self, key: PackedKey) -> bool {
        self.borrow().is_attached(key)
    }
}

/// A [`SceneSink`] that just records attached keys.
///
/// Used by the demo driver and the test suite; a real renderer would map keys
/// to GPU resources instead.
#[derive(Debug, Default)]
pub struct CollectingScene {
    attached: HashSet<PackedKey>,
    attach_calls: usize,
}

impl CollectingScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        CollectingScene::default()
    }

    /// Number of chunks currently attached.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Total number of attach calls ever made, for asserting idempotence.
    pub fn attach_calls(&self) -> usize {
        self.attach_calls
    }
}

impl SceneSink for CollectingScene {
    fn attach_chunk(&mut self, key: PackedKey) {
        self.attach_calls += 1;
        self.attached.insert(key);
    }

    fn detach_chunk(&mut self, key: PackedKey) {
        self.attached.remove(&key);
    }

    fn is_attached(&self, key: PackedKey) -> bool {
        self.attached.contains(&key)
    }
}

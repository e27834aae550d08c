//! # Voxel Tasks Module
//!
//! Background work for the voxel system. Currently this is terrain
//! generation, which runs off the owner thread on a dedicated worker.

pub mod generation_worker;

pub use generation_worker::{GenerationRequest, GenerationResponse, GenerationWorker};

//! # Core Module
//!
//! Fundamental building blocks shared by every other module in the crate:
//! the coordinate packing codec and the error taxonomy.
//!
//! ## Key Components
//! - `coordinate_codec`: packs signed 3D coordinates into single-integer
//!   hash keys (the world's hard ±2^20 capacity limit lives here)
//! - `error`: the [`VoxelError`] taxonomy

pub mod coordinate_codec;
pub mod error;

// Re-export types for easier access
pub use coordinate_codec::{pack_coordinates, PackedKey};
pub use error::VoxelError;

//! # Error Types
//!
//! Error taxonomy for the voxel core. Only genuine failures are errors:
//! a missing chunk or block is an expected steady-state condition in a
//! streaming world and is reported as an ordinary negative result
//! (`false` / `None`), never through this type. Requesting geometry for an
//! unknown block side is unrepresentable because the side set is a closed enum.

use thiserror::Error;

/// Errors surfaced by the voxel core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoxelError {
    /// A coordinate axis exceeded the 21-bit packer's representable range of
    /// `[-2^20, 2^20)`. Fatal to the calling operation; the coordinate is
    /// never wrapped or truncated.
    #[error("coordinate ({x}, {y}, {z}) is outside the representable ±2^20 world range")]
    CoordinateOutOfRange {
        /// X axis value of the offending coordinate.
        x: i32,
        /// Y axis value of the offending coordinate.
        y: i32,
        /// Z axis value of the offending coordinate.
        z: i32,
    },

    /// A world configuration value failed validation.
    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),
}

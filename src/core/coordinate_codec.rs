//! # Coordinate Codec
//!
//! This module packs signed 3D integer coordinates into a single 63-bit key
//! so that block and chunk positions can be used directly as hash-map keys.
//!
//! ## Encoding
//!
//! Each axis gets 21 bits. A coordinate is biased by `2^20` into a
//! non-negative range and the three biased values are concatenated:
//!
//! ```text
//! key = (bx << 42) | (by << 21) | bz
//! ```
//!
//! The mapping is injective over the valid range, which is all the engine
//! needs; keys are only ever compared and hashed, never unpacked.
//!
//! ## Capacity
//!
//! The usable world is bounded to roughly ±1,048,576 blocks per axis. This is
//! a hard capacity limit of the codec, not a bug; coordinates outside the
//! range fail with [`VoxelError::CoordinateOutOfRange`] rather than wrapping.

use cgmath::Point3;

use super::error::VoxelError;

/// A single-integer encoding of a 3D integer coordinate, used as the key type
/// for both chunk and block hash maps.
pub type PackedKey = u64;

/// Number of bits allocated to each axis.
const AXIS_BITS: u32 = 21;

/// Bias added to each axis to shift it into the non-negative range (`2^20`).
const AXIS_BIAS: i64 = 1 << (AXIS_BITS - 1);

/// Mask covering one biased axis value.
const AXIS_MASK: i64 = (1 << AXIS_BITS) - 1;

/// Minimum representable coordinate on any axis (inclusive).
pub const MIN_COORDINATE: i32 = -(AXIS_BIAS as i32);

/// Maximum representable coordinate on any axis (exclusive bound is `2^20`).
pub const MAX_COORDINATE: i32 = (AXIS_BIAS as i32) - 1;

/// Packs a coordinate into a [`PackedKey`].
///
/// Pure and deterministic: two coordinates produce equal keys iff they are
/// equal. There is no unpack operation.
///
/// # Arguments
/// * `position` - The coordinate to pack
///
/// # Returns
/// The packed key, or [`VoxelError::CoordinateOutOfRange`] if any axis lies
/// outside `[-2^20, 2^20)`.
pub fn pack_coordinates(position: Point3<i32>) -> Result<PackedKey, VoxelError> {
    let bx = position.x as i64 + AXIS_BIAS;
    let by = position.y as i64 + AXIS_BIAS;
    let bz = position.z as i64 + AXIS_BIAS;

    if bx < 0 || bx > AXIS_MASK || by < 0 || by > AXIS_MASK || bz < 0 || bz > AXIS_MASK {
        return Err(VoxelError::CoordinateOutOfRange {
            x: position.x,
            y: position.y,
            z: position.z,
        });
    }

    Ok(((bx as u64) << (AXIS_BITS * 2)) | ((by as u64) << AXIS_BITS) | bz as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_coordinates_pack_equally() {
        let a = pack_coordinates(Point3::new(12, -7, 300)).unwrap();
        let b = pack_coordinates(Point3::new(12, -7, 300)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_coordinates_pack_distinctly() {
        let mut keys = std::collections::HashSet::new();
        for x in -2..2 {
            for y in -2..2 {
                for z in -2..2 {
                    assert!(keys.insert(pack_coordinates(Point3::new(x, y, z)).unwrap()));
                }
            }
        }
    }

    #[test]
    fn randomized_in_range_keys_are_injective() {
        let mut seen = std::collections::HashMap::new();
        fastrand::seed(7);
        for _ in 0..10_000 {
            let p = Point3::new(
                fastrand::i32(MIN_COORDINATE..=MAX_COORDINATE),
                fastrand::i32(MIN_COORDINATE..=MAX_COORDINATE),
                fastrand::i32(MIN_COORDINATE..=MAX_COORDINATE),
            );
            let key = pack_coordinates(p).unwrap();
            if let Some(previous) = seen.insert(key, p) {
                assert_eq!(previous, p, "key collision between distinct coordinates");
            }
        }
    }

    #[test]
    fn out_of_range_axis_fails() {
        assert!(pack_coordinates(Point3::new(1 << 20, 0, 0)).is_err());
        assert!(pack_coordinates(Point3::new(0, (1 << 20) + 5, 0)).is_err());
        assert!(pack_coordinates(Point3::new(0, 0, -(1 << 20) - 1)).is_err());
    }

    #[test]
    fn range_boundaries_pack() {
        assert!(pack_coordinates(Point3::new(MIN_COORDINATE, 0, 0)).is_ok());
        assert!(pack_coordinates(Point3::new(MAX_COORDINATE, 0, 0)).is_ok());
    }
}

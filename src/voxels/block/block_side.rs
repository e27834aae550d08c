//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the fixed-size
//! visibility set used during mesh synthesis. The side set is closed and
//! known at design time, so it is represented as an enum plus an enum-indexed
//! boolean array rather than any open mapping.

use cgmath::Vector3;

/// The six faces of a voxel block.
///
/// Each variant carries a unique integer value used both as an array index
/// and as the face identifier reported by ray picking. The declaration order
/// is also the tie-breaking priority order of face identification.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

impl BlockSide {
    /// Returns all six block faces in declaration order.
    ///
    /// This is useful for iterating over every face of a block.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// Returns the outward unit normal of this face.
    ///
    /// Adding the offset to a block coordinate gives the neighbor cell on the
    /// other side of the face, which is also the placement cell for
    /// "place adjacent to clicked face" interactions.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }
}

/// Which of a block's six faces are visible, indexed by [`BlockSide`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceVisibility([bool; 6]);

impl FaceVisibility {
    /// Creates a visibility set with no visible faces.
    pub fn none() -> Self {
        FaceVisibility([false; 6])
    }

    /// Creates a visibility set with all six faces visible.
    pub fn all() -> Self {
        FaceVisibility([true; 6])
    }

    /// Marks one face visible or hidden.
    pub fn set(&mut self, side: BlockSide, visible: bool) {
        self.0[side as usize] = visible;
    }

    /// Returns whether the given face is visible.
    pub fn is_visible(self, side: BlockSide) -> bool {
        self.0[side as usize]
    }

    /// Returns the number of visible faces.
    pub fn count(self) -> usize {
        self.0.iter().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_normals() {
        for side in BlockSide::all() {
            let o = side.offset();
            assert_eq!(o.x.abs() + o.y.abs() + o.z.abs(), 1);
        }
    }

    #[test]
    fn opposite_faces_cancel() {
        let pairs = [
            (BlockSide::LEFT, BlockSide::RIGHT),
            (BlockSide::BOTTOM, BlockSide::TOP),
            (BlockSide::FRONT, BlockSide::BACK),
        ];
        for (a, b) in pairs {
            assert_eq!(a.offset() + b.offset(), Vector3::new(0, 0, 0));
        }
    }

    #[test]
    fn visibility_set_tracks_each_side() {
        let mut visibility = FaceVisibility::none();
        assert_eq!(visibility.count(), 0);
        visibility.set(BlockSide::TOP, true);
        visibility.set(BlockSide::BACK, true);
        assert!(visibility.is_visible(BlockSide::TOP));
        assert!(!visibility.is_visible(BlockSide::BOTTOM));
        assert_eq!(visibility.count(), 2);
        assert_eq!(FaceVisibility::all().count(), 6);
    }
}

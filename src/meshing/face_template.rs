//! Static cube-face templates.
//!
//! One unit-square template per block side: four corner positions on the unit
//! cube, the side's base UV layout, and a shared two-triangle index pattern.
//! Block geometry is produced by translating a template to the block position
//! and remapping its UVs into the block's atlas cell.

use crate::voxels::block::block_side::BlockSide;

/// Corner positions and base UVs for one face of the unit cube.
///
/// Corners are wound counter-clockwise as seen from outside the cube, so the
/// shared [`FACE_INDICES`] pattern yields front-facing triangles.
pub struct FaceTemplate {
    /// The four corner positions on the unit cube.
    pub positions: [[f32; 3]; 4],
    /// Base UV coordinates of the four corners, before atlas remapping.
    pub uvs: [[f32; 2]; 4],
}

/// Index pattern splitting a face quad into two triangles.
pub const FACE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Number of vertices per face quad.
pub const FACE_VERTEX_COUNT: usize = 4;

const LEFT: FaceTemplate = FaceTemplate {
    positions: [
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [0.0, 1.0, 0.0],
    ],
    uvs: [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]],
};

const RIGHT: FaceTemplate = FaceTemplate {
    positions: [
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
    ],
    uvs: [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
};

const BOTTOM: FaceTemplate = FaceTemplate {
    positions: [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
    ],
    uvs: [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
};

const TOP: FaceTemplate = FaceTemplate {
    positions: [
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ],
    uvs: [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
};

const FRONT: FaceTemplate = FaceTemplate {
    positions: [
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ],
    uvs: [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
};

const BACK: FaceTemplate = FaceTemplate {
    positions: [
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
    ],
    uvs: [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
};

/// Returns the template for the given block side.
pub fn template(side: BlockSide) -> &'static FaceTemplate {
    match side {
        BlockSide::LEFT => &LEFT,
        BlockSide::RIGHT => &RIGHT,
        BlockSide::BOTTOM => &BOTTOM,
        BlockSide::TOP => &TOP,
        BlockSide::FRONT => &FRONT,
        BlockSide::BACK => &BACK,
    }
}

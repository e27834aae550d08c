//! # Block Module
//!
//! A block is one unit cube of terrain: a chunk-local position plus the
//! texture-atlas cell its faces sample from. Blocks are immutable once
//! created (edits replace them wholesale) and produce per-face geometry on
//! demand from the static face templates.

use cgmath::{Point3, Vector3};

use crate::meshing::face_template::{self, FACE_VERTEX_COUNT};
use crate::meshing::{FaceGeometry, Vertex};

pub mod block_side;

pub use block_side::{BlockSide, FaceVisibility};

/// Edge length of one atlas tile in pixels.
pub const TILE_SIZE: u32 = 16;

/// Edge length of the whole texture atlas in pixels.
pub const ATLAS_SIZE: u32 = 32;

/// Atlas cell assigned to newly created blocks. Texture selection per block
/// type is outside the core; every block currently samples this cell.
pub const DEFAULT_ATLAS_CELL: (u32, u32) = (0, 2);

/// A single voxel block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Position relative to the owning chunk's origin.
    pub local_position: Point3<i32>,
    /// Column/row cell index into the texture atlas.
    pub atlas_cell: (u32, u32),
}

impl Block {
    /// Creates a block at the given chunk-local position with the default
    /// atlas cell.
    pub fn new(local_position: Point3<i32>) -> Self {
        Block {
            local_position,
            atlas_cell: DEFAULT_ATLAS_CELL,
        }
    }

    /// Produces geometry for each visible face of this block.
    ///
    /// Each requested side's unit-square template is translated to the
    /// block's local position and its UVs are remapped into the block's atlas
    /// cell. Callers merging across a chunk translate by the chunk origin
    /// when appending.
    ///
    /// # Arguments
    /// * `visibility` - The set of faces to emit
    ///
    /// # Returns
    /// One [`FaceGeometry`] per visible face, in [`BlockSide`]
    /// (`block_side::BlockSide`) declaration order.
    pub fn faces(&self, visibility: FaceVisibility) -> Vec<FaceGeometry> {
        let translation = Vector3::new(
            self.local_position.x as f32,
            self.local_position.y as f32,
            self.local_position.z as f32,
        );

        block_side::BlockSide::all()
            .into_iter()
            .filter(|side| visibility.is_visible(*side))
            .map(|side| {
                let template = face_template::template(side);
                let mut vertices =
                    [Vertex::new(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0); FACE_VERTEX_COUNT];
                for corner in 0..FACE_VERTEX_COUNT {
                    let [x, y, z] = template.positions[corner];
                    let (u, v) = self.remap_uv(template.uvs[corner][0], template.uvs[corner][1]);
                    vertices[corner] = Vertex::new(Point3::new(x, y, z) + translation, u, v);
                }
                FaceGeometry { side, vertices }
            })
            .collect()
    }

    /// Remaps a base template UV into this block's atlas cell.
    ///
    /// The atlas's cell rows start at the top-left while UV space starts at
    /// the bottom-left, hence the V offset flip. Changing this formula
    /// vertically mirrors every texture.
    fn remap_uv(&self, u: f32, v: f32) -> (f32, f32) {
        let tile_frac = TILE_SIZE as f32 / ATLAS_SIZE as f32;
        let (cell_x, cell_y) = self.atlas_cell;

        let u_offset = cell_x as f32 * tile_frac;
        let v_offset = 1.0 - (cell_y as f32 + 1.0) * tile_frac + tile_frac;

        (u * tile_frac + u_offset, v * tile_frac + v_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::block_side::BlockSide;
    use super::*;

    #[test]
    fn emits_only_visible_faces() {
        let block = Block::new(Point3::new(0, 0, 0));
        let mut visibility = FaceVisibility::none();
        visibility.set(BlockSide::TOP, true);
        visibility.set(BlockSide::LEFT, true);

        let faces = block.faces(visibility);
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].side, BlockSide::LEFT);
        assert_eq!(faces[1].side, BlockSide::TOP);
    }

    #[test]
    fn faces_are_translated_to_block_position() {
        let block = Block::new(Point3::new(2, 3, -1));
        let faces = block.faces(FaceVisibility::all());
        for face in faces {
            for vertex in face.vertices {
                assert!(vertex.position[0] >= 2.0 && vertex.position[0] <= 3.0);
                assert!(vertex.position[1] >= 3.0 && vertex.position[1] <= 4.0);
                assert!(vertex.position[2] >= -1.0 && vertex.position[2] <= 0.0);
            }
        }
    }

    #[test]
    fn uv_remap_applies_atlas_cell_and_v_flip() {
        // tile_frac = 0.5, cell (0, 2): u_offset = 0, v_offset = 1 - 1.5 + 0.5 = 0.
        let block = Block::new(Point3::new(0, 0, 0));
        assert_eq!(block.remap_uv(0.0, 0.0), (0.0, 0.0));
        assert_eq!(block.remap_uv(1.0, 1.0), (0.5, 0.5));

        // cell (1, 0): u_offset = 0.5, v_offset = 1 - 0.5 + 0.5 = 1.
        let shifted = Block {
            local_position: Point3::new(0, 0, 0),
            atlas_cell: (1, 0),
        };
        assert_eq!(shifted.remap_uv(0.0, 0.0), (0.5, 1.0));
        assert_eq!(shifted.remap_uv(1.0, 1.0), (1.0, 1.5));
    }
}

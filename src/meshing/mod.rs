//! # Meshing Module
//!
//! Data structures for the surface geometry a chunk rebuild produces. Face
//! geometry is collected per side so callers can reason about (and tests can
//! count) individual face directions, and merged into a single draw-ready
//! vertex/index buffer pair for the external renderer.

use cgmath::Vector3;

use crate::voxels::block::block_side::BlockSide;

pub mod face_template;
pub mod vertex;

pub use vertex::Vertex;

use face_template::{FACE_INDICES, FACE_VERTEX_COUNT};

/// Geometry of one block face: four vertices in face-template winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Which side of the block this face covers.
    pub side: BlockSide,
    /// The four corner vertices.
    pub vertices: [Vertex; FACE_VERTEX_COUNT],
}

/// Vertex and index buffers for all faces of one side direction.
#[derive(Debug)]
pub struct MeshSide {
    /// The vertex data for this mesh side.
    pub vertices: Vec<Vertex>,
    /// The index data for this mesh side.
    pub indices: Vec<u32>,
    /// Which block side this mesh represents.
    pub side: BlockSide,
}

impl MeshSide {
    /// Creates a new, empty `MeshSide` for the specified block side.
    pub fn new(side: BlockSide) -> Self {
        MeshSide {
            vertices: Vec::new(),
            indices: Vec::new(),
            side,
        }
    }

    /// Number of face quads stored on this side.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / FACE_VERTEX_COUNT
    }
}

/// The merged surface mesh of a chunk.
///
/// A pure function of the chunk's block set plus neighbor occupancy: every
/// rebuild produces a fresh `ChunkMesh` and the previous one is discarded.
/// Contains separate buffers for each of the six face directions, plus
/// [`ChunkMesh::merge`] for the combined handoff geometry.
#[derive(Debug)]
pub struct ChunkMesh {
    /// Per-direction buffers, indexed by [`BlockSide`] enum values.
    pub sides: [MeshSide; 6],
}

impl Default for ChunkMesh {
    fn default() -> Self {
        ChunkMesh::new()
    }
}

impl ChunkMesh {
    /// Creates a new, empty mesh with all six sides initialized.
    pub fn new() -> Self {
        ChunkMesh {
            sides: BlockSide::all().map(MeshSide::new),
        }
    }

    /// Appends one face, translated by the given offset.
    ///
    /// Indices are rebased onto the side's existing vertices, so faces can be
    /// appended in any order.
    ///
    /// # Arguments
    /// * `face` - The face geometry, positioned chunk-locally
    /// * `offset` - Translation applied while appending (the chunk origin)
    pub fn push_face(&mut self, face: &FaceGeometry, offset: Vector3<f32>) {
        let side = self.side_mut(face.side);
        let base = side.vertices.len() as u32;
        for vertex in face.vertices {
            side.vertices.push(Vertex::new(
                cgmath::Point3::new(
                    vertex.position[0] + offset.x,
                    vertex.position[1] + offset.y,
                    vertex.position[2] + offset.z,
                ),
                vertex.tex_coords[0],
                vertex.tex_coords[1],
            ));
        }
        side.indices.extend(FACE_INDICES.iter().map(|i| i + base));
    }

    /// Returns the buffers for one face direction.
    pub fn side(&self, side: BlockSide) -> &MeshSide {
        &self.sides[side as usize]
    }

    fn side_mut(&mut self, side: BlockSide) -> &mut MeshSide {
        &mut self.sides[side as usize]
    }

    /// Number of face quads on one side direction.
    pub fn face_count(&self, side: BlockSide) -> usize {
        self.side(side).face_count()
    }

    /// Total number of face quads in the mesh.
    pub fn total_face_count(&self) -> usize {
        BlockSide::all()
            .into_iter()
            .map(|s| self.face_count(s))
            .sum()
    }

    /// Total number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        BlockSide::all()
            .into_iter()
            .map(|s| self.side(s).vertices.len())
            .sum()
    }

    /// Returns whether the mesh holds no geometry at all.
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Merges all six sides into one draw-ready geometry.
    ///
    /// # Returns
    /// A combined `(vertices, indices)` pair with indices rebased across
    /// sides, suitable for a single draw call.
    pub fn merge(&self) -> (Vec<Vertex>, Vec<u32>) {
        let mut vertices = Vec::with_capacity(self.vertex_count());
        let mut indices = Vec::new();
        for side in BlockSide::all() {
            let mesh_side = self.side(side);
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&mesh_side.vertices);
            indices.extend(mesh_side.indices.iter().map(|i| i + base));
        }
        (vertices, indices)
    }
}

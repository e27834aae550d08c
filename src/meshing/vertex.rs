//! Vertex data structures for voxel surface geometry.
//!
//! This module defines the vertex format produced by chunk meshing. The
//! layout is GPU-friendly so the external renderer can upload the buffers
//! unchanged.

use cgmath::Point3;

/// A vertex of the merged chunk surface mesh.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 20 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in world space.
    pub position: [f32; 3],
    /// UV texture coordinates, already remapped into the block's atlas cell.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - The 3D position of the vertex in world space
    /// * `u`, `v` - Atlas texture coordinates
    pub fn new(position: Point3<f32>, u: f32, v: f32) -> Self {
        Vertex {
            position: [position.x, position.y, position.z],
            tex_coords: [u, v],
        }
    }
}

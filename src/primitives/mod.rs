//! Static mesh primitives.

/// Unit cube geometry.
pub mod cube;

pub use cube::Cube;

use crate::gpu::vertex_array::VertexElement;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Interleaved position / normal / texture-coordinate vertex.
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
}

impl MeshVertex {
    /// Byte stride of one vertex.
    pub const STRIDE: u64 = size_of::<Self>() as u64;

    /// Vertex elements, named after the shader inputs they feed.
    pub fn elements() -> Vec<VertexElement> {
        vec![
            VertexElement::new("position", wgpu::VertexFormat::Float32x3, 0),
            VertexElement::new("normal", wgpu::VertexFormat::Float32x3, 12),
            VertexElement::new("tex_coord", wgpu::VertexFormat::Float32x2, 24),
        ]
    }
}

//! Named vertex layouts resolved against a shader's inputs.

use std::ops::Range;

use crate::error::VantageError;
use crate::gpu::buffer::GpuBuffer;
use crate::gpu::program::ParsedShader;

/// One attribute inside an interleaved vertex, identified by the name of
/// the shader input it feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexElement {
    /// Shader input name.
    pub name: String,
    /// Component type and count.
    pub format: wgpu::VertexFormat,
    /// Byte offset within the vertex.
    pub offset: u64,
}

impl VertexElement {
    /// Element `name` of `format` starting `offset` bytes into the vertex.
    pub fn new(
        name: impl Into<String>,
        format: wgpu::VertexFormat,
        offset: u64,
    ) -> Self {
        Self {
            name: name.into(),
            format,
            offset,
        }
    }
}

/// Vertex buffer layout with shader locations filled in, plus draw helpers.
#[derive(Debug, Clone)]
pub struct VertexArray {
    stride: u64,
    attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexArray {
    /// Resolve each element's shader location by name.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::MissingAttribute`] for the first element the
    /// shader's vertex stage does not declare.
    pub fn new(
        shader: &ParsedShader,
        stride: u64,
        elements: &[VertexElement],
    ) -> Result<Self, VantageError> {
        let attributes = elements
            .iter()
            .map(|element| {
                let shader_location = shader
                    .attribute_location(&element.name)
                    .ok_or_else(|| VantageError::MissingAttribute(element.name.clone()))?;
                Ok(wgpu::VertexAttribute {
                    format: element.format,
                    offset: element.offset,
                    shader_location,
                })
            })
            .collect::<Result<Vec<_>, VantageError>>()?;

        Ok(Self { stride, attributes })
    }

    /// Byte stride between vertices.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Resolved attributes, in element order.
    pub fn attributes(&self) -> &[wgpu::VertexAttribute] {
        &self.attributes
    }

    /// Layout for pipeline creation.
    pub fn layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }

    /// Draw `range` from `vbo`; with an index buffer the range indexes
    /// `u16` indices instead of vertices.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        vbo: &GpuBuffer,
        ibo: Option<&GpuBuffer>,
        range: Range<u32>,
    ) {
        pass.set_vertex_buffer(0, vbo.buffer().slice(..));
        match ibo {
            Some(ibo) => {
                pass.set_index_buffer(ibo.buffer().slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(range, 0, 0..1);
            }
            None => pass.draw(range, 0..1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::MeshVertex;

    #[test]
    fn mesh_vertex_resolves_against_mesh_shader() {
        let shader = ParsedShader::parse(crate::gpu::MESH_SHADER).unwrap();
        let vao = VertexArray::new(&shader, MeshVertex::STRIDE, &MeshVertex::elements())
            .unwrap();

        assert_eq!(vao.stride(), 32);
        let locations: Vec<_> = vao.attributes().iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
        assert_eq!(vao.layout().attributes[2].offset, 24);
    }

    #[test]
    fn unknown_element_is_rejected() {
        let shader = ParsedShader::parse(crate::gpu::MESH_SHADER).unwrap();
        let elements = [VertexElement::new(
            "color",
            wgpu::VertexFormat::Float32x4,
            0,
        )];
        let err = VertexArray::new(&shader, 16, &elements).unwrap_err();
        assert!(matches!(err, VantageError::MissingAttribute(name) if name == "color"));
    }
}

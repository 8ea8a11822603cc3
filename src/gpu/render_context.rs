use std::fmt;

use crate::error::VantageError;
use crate::gpu::buffer::{BufferKind, GpuBuffer};
use crate::gpu::framebuffer::{Framebuffer, DEPTH_FORMAT};
use crate::gpu::program::ShaderProgram;
use crate::gpu::texture::{Texture, TextureOptions};
use crate::gpu::vertex_array::{VertexArray, VertexElement};

/// Opaque black.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// Color format used when none is given.
pub const DEFAULT_COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Errors that can occur during GPU context initialization.
#[derive(Debug)]
pub enum RenderContextError {
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// GPU device request failed (limits or features not met).
    DeviceRequest(wgpu::RequestDeviceError),
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdapterRequest(e) => {
                write!(f, "no compatible GPU adapter found: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
        }
    }
}

/// Triangle lists, counter-clockwise front faces, back faces culled.
pub fn default_primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: Some(wgpu::Face::Back),
        ..Default::default()
    }
}

/// Depth test `Less` with writes on. Polygons are pulled toward the viewer
/// by a `-1` constant and slope bias so coplanar lines drawn afterwards
/// stay visible.
pub fn default_depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState {
            constant: -1,
            slope_scale: -1.0,
            clamp: 0.0,
        },
    }
}

/// Owns the wgpu device and queue and creates the crate's GPU resources
/// with consistent defaults.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    format: wgpu::TextureFormat,
}

impl RenderContext {
    /// Create a context on the default adapter, without any surface.
    ///
    /// # Errors
    ///
    /// Returns `RenderContextError` if the adapter or device request fails.
    pub async fn new_headless() -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;
        log::info!("using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Primary Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        Ok(Self::from_device(device, queue, DEFAULT_COLOR_FORMAT))
    }

    /// Create a render context from an externally-owned device and queue.
    /// `format` is the color format of framebuffers and pipelines.
    #[must_use]
    pub fn from_device(
        device: wgpu::Device,
        queue: wgpu::Queue,
        format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            device,
            queue,
            format,
        }
    }

    /// Color target format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Vertex buffer holding `data`.
    pub fn create_vbo<T: bytemuck::Pod>(&self, label: &str, data: &[T]) -> GpuBuffer {
        GpuBuffer::new_with_data(&self.device, label, BufferKind::Vertex, data)
    }

    /// `u16` index buffer holding `data`.
    pub fn create_ibo(&self, label: &str, data: &[u16]) -> GpuBuffer {
        GpuBuffer::new_with_data(&self.device, label, BufferKind::Index, data)
    }

    /// Compile a WGSL program.
    ///
    /// # Errors
    ///
    /// Returns a shader parse or validation error.
    pub fn create_program(
        &self,
        label: &str,
        source: &str,
    ) -> Result<ShaderProgram, VantageError> {
        ShaderProgram::new(&self.device, label, source)
    }

    /// Resolve `elements` against `program`'s vertex inputs.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::MissingAttribute`] for unknown element names.
    pub fn create_vertex_array(
        &self,
        program: &ShaderProgram,
        stride: u64,
        elements: &[VertexElement],
    ) -> Result<VertexArray, VantageError> {
        VertexArray::new(program.parsed(), stride, elements)
    }

    /// 2D texture, optionally filled with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidTexture`] for bad sizes or data.
    pub fn create_texture(
        &self,
        size: (u32, u32),
        data: Option<&[u8]>,
        options: TextureOptions,
    ) -> Result<Texture, VantageError> {
        Texture::new(&self.device, &self.queue, size, data, options)
    }

    /// Off-screen color + depth target in the context's color format.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidTexture`] for a zero or oversized size.
    pub fn create_framebuffer(
        &self,
        size: (u32, u32),
    ) -> Result<Framebuffer, VantageError> {
        Framebuffer::with_size(&self.device, &self.queue, size, self.format)
    }

    /// Render pipeline for `program` fed by `vertex_array`, using the default
    /// primitive and depth state.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::MissingEntryPoint`] if the program lacks a
    /// vertex or fragment stage.
    pub fn create_pipeline(
        &self,
        label: &str,
        program: &ShaderProgram,
        vertex_array: &VertexArray,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> Result<wgpu::RenderPipeline, VantageError> {
        let vertex_entry = program.vertex_entry()?;
        let fragment_entry = program.fragment_entry()?;

        let layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts,
                push_constant_ranges: &[],
            });

        Ok(self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: program.module(),
                    entry_point: Some(vertex_entry),
                    buffers: &[vertex_array.layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: program.module(),
                    entry_point: Some(fragment_entry),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: default_primitive_state(),
                depth_stencil: Some(default_depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            }))
    }

    /// Create a new command encoder for recording GPU commands.
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            })
    }

    /// Finish the encoder and submit its command buffer to the GPU queue.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_defaults_follow_gl_state() {
        let primitive = default_primitive_state();
        assert_eq!(primitive.cull_mode, Some(wgpu::Face::Back));
        assert_eq!(primitive.front_face, wgpu::FrontFace::Ccw);

        let depth = default_depth_stencil_state();
        assert_eq!(depth.depth_compare, wgpu::CompareFunction::Less);
        assert_eq!(depth.bias.constant, -1);
        assert_eq!(depth.bias.slope_scale, -1.0);
        assert_eq!(depth.format, DEPTH_FORMAT);
    }

    #[test]
    fn clear_color_is_opaque_black() {
        assert_eq!(CLEAR_COLOR, wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
    }
}

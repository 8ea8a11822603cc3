//! Off-screen render target: a color texture plus a matching depth
//! attachment.

use crate::error::VantageError;
use crate::gpu::render_context::CLEAR_COLOR;
use crate::gpu::texture::{Texture, TextureOptions};

/// Depth attachment format (16-bit normalized).
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth16Unorm;

/// Color + depth render target.
pub struct Framebuffer {
    color: Texture,
    depth: wgpu::Texture,
    depth_view: wgpu::TextureView,
}

impl Framebuffer {
    /// Render target around an existing color texture, with a depth buffer
    /// of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidTexture`] if `color` cannot be a
    /// render attachment.
    pub fn new(device: &wgpu::Device, color: Texture) -> Result<Self, VantageError> {
        if !color.is_render_target() {
            return Err(VantageError::InvalidTexture(format!(
                "{:?} texture cannot back a framebuffer",
                color.format()
            )));
        }
        let (width, height) = color.size();
        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Framebuffer Depth"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());
        log::debug!("created {width}x{height} framebuffer");

        Ok(Self {
            color,
            depth,
            depth_view,
        })
    }

    /// Render target with a fresh, empty color texture. Wrap defaults to
    /// clamp-to-edge.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::InvalidTexture`] for a zero-sized or
    /// oversized target, or a format that cannot be rendered to.
    pub fn with_size(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: (u32, u32),
        format: wgpu::TextureFormat,
    ) -> Result<Self, VantageError> {
        let options = TextureOptions {
            format,
            wrap: wgpu::AddressMode::ClampToEdge,
            ..TextureOptions::default()
        };
        let color = Texture::new_render_target(device, queue, size, options)?;
        Self::new(device, color)
    }

    /// Begin a render pass that clears and draws into this target.
    pub fn begin_pass<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
    ) -> wgpu::RenderPass<'e> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Framebuffer Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color.view(),
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        })
    }

    /// The color attachment.
    pub fn texture(&self) -> &Texture {
        &self.color
    }

    /// The depth attachment.
    pub fn depth_texture(&self) -> &wgpu::Texture {
        &self.depth
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.color.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.color.height()
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.color.size()
    }
}

//! Bind group carrying the camera and display-mode uniforms (group 0 of
//! the mesh shader).

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::buffer::{BufferKind, GpuBuffer};
use crate::scene::DisplayMode;

/// Display-mode uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DisplayUniform {
    /// RGBA used by the vertex-color and shape-color modes.
    pub shape_color: [f32; 4],
    /// [`DisplayMode::as_u32`] tag.
    pub mode: u32,
    /// Padding to 16-byte alignment.
    pub _padding: [u32; 3],
}

impl DisplayUniform {
    /// Uniform for `mode`, shading flat surfaces with `shape_color`.
    pub fn new(mode: DisplayMode, shape_color: [f32; 4]) -> Self {
        Self {
            shape_color,
            mode: mode.as_u32(),
            _padding: [0; 3],
        }
    }
}

impl Default for DisplayUniform {
    fn default() -> Self {
        Self::new(DisplayMode::default(), [1.0, 1.0, 1.0, 1.0])
    }
}

/// Camera and display uniforms plus their bind group.
pub struct ViewBinding {
    camera_uniform: CameraUniform,
    display_uniform: DisplayUniform,
    camera_buffer: GpuBuffer,
    display_buffer: GpuBuffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl ViewBinding {
    /// Upload the initial uniforms for `camera`.
    pub fn new(device: &wgpu::Device, camera: &Camera) -> Self {
        let camera_uniform = CameraUniform::from(camera);
        let display_uniform = DisplayUniform::default();

        let camera_buffer = GpuBuffer::new_with_data(
            device,
            "Camera Buffer",
            BufferKind::Uniform,
            &[camera_uniform],
        );
        let display_buffer = GpuBuffer::new_with_data(
            device,
            "Display Buffer",
            BufferKind::Uniform,
            &[display_uniform],
        );

        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("View Bind Group Layout"),
            entries: &[uniform_entry(0), uniform_entry(1)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.buffer().as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: display_buffer.buffer().as_entire_binding(),
                },
            ],
            label: Some("View Bind Group"),
        });

        Self {
            camera_uniform,
            display_uniform,
            camera_buffer,
            display_buffer,
            layout,
            bind_group,
        }
    }

    /// Refresh the camera uniform from `camera`.
    pub fn update_camera(&mut self, queue: &wgpu::Queue, camera: &Camera) {
        self.camera_uniform.update(camera);
        queue.write_buffer(
            self.camera_buffer.buffer(),
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
    }

    /// Switch the shading mode.
    pub fn update_display(
        &mut self,
        queue: &wgpu::Queue,
        mode: DisplayMode,
        shape_color: [f32; 4],
    ) {
        self.display_uniform = DisplayUniform::new(mode, shape_color);
        queue.write_buffer(
            self.display_buffer.buffer(),
            0,
            bytemuck::cast_slice(&[self.display_uniform]),
        );
    }

    /// Layout for pipeline creation.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// The bind group to set at index 0.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uniform_matches_wgsl_layout() {
        assert_eq!(size_of::<DisplayUniform>(), 32);
        let uniform = DisplayUniform::new(DisplayMode::TexCoords, [0.0; 4]);
        assert_eq!(uniform.mode, 2);
        assert_eq!(DisplayUniform::default().mode, DisplayMode::Normals.as_u32());
    }
}

//! GPU resource management utilities.
//!
//! Thin wgpu wrappers: a headless device context with GL-style defaults,
//! growable buffers, textures, off-screen framebuffers, validated WGSL
//! programs and name-resolved vertex layouts.

/// Growable vertex, index and uniform buffers.
pub mod buffer;
/// Color + depth off-screen render targets.
pub mod framebuffer;
/// WGSL parsing, validation and vertex input reflection.
pub mod program;
/// wgpu device and queue ownership plus resource factories.
pub mod render_context;
/// 2D textures with filter and wrap settings.
pub mod texture;
/// Vertex layouts resolved against shader inputs by name.
pub mod vertex_array;
/// Camera and display-mode uniform bind group.
pub mod view_binding;

pub use buffer::{BufferKind, GpuBuffer};
pub use framebuffer::Framebuffer;
pub use program::{ParsedShader, ShaderProgram};
pub use render_context::{RenderContext, RenderContextError};
pub use texture::{Texture, TextureOptions};
pub use vertex_array::{VertexArray, VertexElement};
pub use view_binding::{DisplayUniform, ViewBinding};

/// WGSL source shading meshes by [`crate::scene::DisplayMode`].
pub const MESH_SHADER: &str = include_str!("../../assets/shaders/mesh.wgsl");

//! Camera system for 3D scene viewing.
//!
//! Provides a camera with always-current perspective and orthographic
//! matrices, screen-to-world ray casting, an orbit controller, and pointer
//! input handling.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Pointer-event-based orbit input handler.
pub mod input;
/// Orbit controller managing yaw, pitch, zoom, pan and anchor-plane picking.
pub mod mover;
/// Immutable 2D and 3D rays.
pub mod ray;
/// Screen-space to clip-space and world-space conversions.
pub mod utils;

pub use self::core::{
    Camera, CameraUniform, OrthographicParams, PerspectiveParams,
    ProjectionMode,
};
pub use self::mover::CameraMover;
pub use self::ray::{Ray2, Ray3};
pub use self::utils::{clipspace_pos, ray_from_screen_pos};

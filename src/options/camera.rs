use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::Camera;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Perspective near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Perspective far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Left edge of the orthographic box.
    #[schemars(skip)]
    pub ortho_left: f32,
    /// Right edge of the orthographic box.
    #[schemars(skip)]
    pub ortho_right: f32,
    /// Bottom edge of the orthographic box.
    #[schemars(skip)]
    pub ortho_bottom: f32,
    /// Top edge of the orthographic box.
    #[schemars(skip)]
    pub ortho_top: f32,
    /// Orthographic near plane.
    #[schemars(skip)]
    pub ortho_near: f32,
    /// Orthographic far plane.
    #[schemars(skip)]
    pub ortho_far: f32,
    /// Start with the orthographic projection active.
    #[schemars(title = "Orthographic")]
    pub orthographic: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            ortho_left: -1.0,
            ortho_right: 1.0,
            ortho_bottom: -1.0,
            ortho_top: 1.0,
            ortho_near: 0.0,
            ortho_far: 1.0,
            orthographic: false,
        }
    }
}

impl CameraOptions {
    /// Push both projections and the mode onto `camera`, keeping its
    /// current aspect ratio and extrinsics.
    pub fn apply(&self, camera: &mut Camera) {
        camera.perspective(
            self.fovy,
            camera.aspect_ratio(),
            self.znear,
            self.zfar,
        );
        camera.ortho(
            self.ortho_left,
            self.ortho_right,
            self.ortho_bottom,
            self.ortho_top,
            self.ortho_near,
            self.ortho_far,
        );
        camera.set_using_orthographic(self.orthographic);
    }

    /// Fresh camera configured from these options.
    #[must_use]
    pub fn build_camera(&self) -> Camera {
        let mut camera = Camera::new();
        self.apply(&mut camera);
        camera
    }
}

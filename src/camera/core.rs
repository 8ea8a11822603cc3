use glam::{Mat4, Vec3};

/// Perspective projection inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
}

impl PerspectiveParams {
    /// Vertical field of view in radians.
    pub fn fov_y_radians(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }

    /// OpenGL-convention projection (clip depth in [-1, 1]).
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_radians(),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }

    /// Diagonal matrix scaling a clip-space point to the far-plane frustum
    /// extents in view space.
    pub fn inverse_scale(&self) -> Mat4 {
        let h = self.far_plane * (self.fov_y_radians() / 2.0).tan();
        let w = self.aspect_ratio * h;
        Mat4::from_scale(Vec3::new(w, h, self.far_plane))
    }
}

/// Orthographic projection inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicParams {
    /// Left edge of the view box.
    pub left: f32,
    /// Right edge of the view box.
    pub right: f32,
    /// Bottom edge of the view box.
    pub bottom: f32,
    /// Top edge of the view box.
    pub top: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl OrthographicParams {
    /// OpenGL-convention projection (clip depth in [-1, 1]).
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    /// Diagonal matrix scaling a clip-space point to half the box extents,
    /// with far-plane depth.
    pub fn inverse_scale(&self) -> Mat4 {
        let w = self.right - self.left;
        let h = self.top - self.bottom;
        Mat4::from_scale(Vec3::new(w / 2.0, h / 2.0, self.far))
    }
}

/// Which projection the combined matrix accessors report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective frustum.
    #[default]
    Perspective,
    /// Orthographic box.
    Orthographic,
}

/// Matrices derived from one projection and the shared view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProjectionMatrices {
    screen_from_view: Mat4,
    inverse_scale: Mat4,
    screen_from_world: Mat4,
    inverse_scale_view: Mat4,
}

impl ProjectionMatrices {
    const IDENTITY: Self = Self {
        screen_from_view: Mat4::IDENTITY,
        inverse_scale: Mat4::IDENTITY,
        screen_from_world: Mat4::IDENTITY,
        inverse_scale_view: Mat4::IDENTITY,
    };

    fn set_projection(&mut self, screen_from_view: Mat4, inverse_scale: Mat4) {
        self.screen_from_view = screen_from_view;
        self.inverse_scale = inverse_scale;
    }

    fn recompose(&mut self, view_from_world: Mat4, inverse_view: Mat4) {
        self.screen_from_world = self.screen_from_view * view_from_world;
        self.inverse_scale_view = inverse_view * self.inverse_scale;
    }
}

/// Camera with an eye/look/up extrinsic and two always-current projections.
///
/// Every mutator recomputes the matrices that depend on its input before
/// returning. Both the perspective and orthographic matrix sets stay valid
/// at all times; [`ProjectionMode`] only decides which one the combined
/// accessors return.
///
/// Degenerate extrinsics (`eye == target`, or `up` parallel to the view
/// direction) are not rejected and produce non-finite matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    look: Vec3,
    up: Vec3,
    right: Vec3,
    view_from_world: Mat4,
    inverse_view: Mat4,

    perspective: PerspectiveParams,
    perspective_matrices: ProjectionMatrices,

    orthographic: OrthographicParams,
    orthographic_matrices: ProjectionMatrices,

    mode: ProjectionMode,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin looking down -Z, with a 60° perspective
    /// (aspect 1, near 0.1, far 1000) and a unit orthographic box.
    #[must_use]
    pub fn new() -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            look: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            view_from_world: Mat4::IDENTITY,
            inverse_view: Mat4::IDENTITY,
            perspective: PerspectiveParams {
                fov_y_degrees: 0.0,
                aspect_ratio: 0.0,
                near_plane: 0.0,
                far_plane: 0.0,
            },
            perspective_matrices: ProjectionMatrices::IDENTITY,
            orthographic: OrthographicParams {
                left: 0.0,
                right: 0.0,
                bottom: 0.0,
                top: 0.0,
                near: 0.0,
                far: 0.0,
            },
            orthographic_matrices: ProjectionMatrices::IDENTITY,
            mode: ProjectionMode::Perspective,
        };
        camera.look_at_y_up(Vec3::ZERO, Vec3::NEG_Z);
        camera.perspective(60.0, 1.0, 0.1, 1000.0);
        camera.ortho_unit_depth(-1.0, 1.0, -1.0, 1.0);
        camera
    }

    // -- Projection-mode accessors ----------------------------------------

    fn active(&self) -> &ProjectionMatrices {
        match self.mode {
            ProjectionMode::Perspective => &self.perspective_matrices,
            ProjectionMode::Orthographic => &self.orthographic_matrices,
        }
    }

    /// World → clip transform of the active projection.
    pub fn screen_from_world_matrix(&self) -> Mat4 {
        self.active().screen_from_world
    }

    /// View → clip transform of the active projection.
    pub fn screen_from_view_matrix(&self) -> Mat4 {
        self.active().screen_from_view
    }

    /// World → view transform.
    pub fn view_from_world_matrix(&self) -> Mat4 {
        self.view_from_world
    }

    /// Inverse of [`view_from_world_matrix`](Self::view_from_world_matrix).
    pub fn world_from_view_matrix(&self) -> Mat4 {
        self.inverse_view
    }

    /// Inverse view × inverse scale of the active projection. Maps a clip
    /// position at a known depth plane back into world space.
    pub fn inverse_scale_view_matrix(&self) -> Mat4 {
        self.active().inverse_scale_view
    }

    /// Active projection mode.
    pub fn projection_mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Switch the projection reported by the combined accessors.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    /// Select the orthographic (`true`) or perspective (`false`) projection.
    pub fn set_using_orthographic(&mut self, using_orthographic: bool) {
        self.mode = if using_orthographic {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        };
    }

    /// Whether the orthographic projection is active.
    pub fn is_orthographic(&self) -> bool {
        self.mode == ProjectionMode::Orthographic
    }

    /// Near plane distance of the active projection.
    pub fn near_plane_dist(&self) -> f32 {
        match self.mode {
            ProjectionMode::Perspective => self.perspective.near_plane,
            ProjectionMode::Orthographic => self.orthographic.near,
        }
    }

    /// Far plane distance of the active projection.
    pub fn far_plane_dist(&self) -> f32 {
        match self.mode {
            ProjectionMode::Perspective => self.perspective.far_plane,
            ProjectionMode::Orthographic => self.orthographic.far,
        }
    }

    // -- Extrinsics ---------------------------------------------------------

    /// Eye position in world space.
    pub fn eye_vec(&self) -> Vec3 {
        self.eye
    }

    /// Unit view direction.
    pub fn look_vec(&self) -> Vec3 {
        self.look
    }

    /// `look × up`, not renormalized.
    pub fn right_vec(&self) -> Vec3 {
        self.right
    }

    /// Up vector as last supplied.
    pub fn up_vec(&self) -> Vec3 {
        self.up
    }

    /// Place the camera at `eye` looking at `target`.
    ///
    /// Callers must keep `eye != target` and `up` not parallel to
    /// `target - eye`; otherwise the resulting matrices are not finite.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.up = up;
        self.look = (target - eye).normalize();
        self.right = self.look.cross(up);

        self.view_from_world = Mat4::look_at_rh(eye, target, up);
        self.inverse_view = self.view_from_world.inverse();

        self.perspective_matrices
            .recompose(self.view_from_world, self.inverse_view);
        self.orthographic_matrices
            .recompose(self.view_from_world, self.inverse_view);
    }

    /// [`look_at`](Self::look_at) with world +Y as up.
    pub fn look_at_y_up(&mut self, eye: Vec3, target: Vec3) {
        self.look_at(eye, target, Vec3::Y);
    }

    /// Move the eye, keeping the view direction.
    pub fn set_eye_vec(&mut self, eye: Vec3) {
        self.look_at(eye, eye + self.look, self.up);
    }

    /// Point the camera along `look` from the current eye.
    pub fn set_look_vec(&mut self, look: Vec3) {
        self.look_at(self.eye, self.eye + look, self.up);
    }

    /// Change the up vector, keeping eye and view direction.
    pub fn set_up_vec(&mut self, up: Vec3) {
        self.look_at(self.eye, self.eye + self.look, up);
    }

    // -- Perspective --------------------------------------------------------

    /// Current perspective inputs.
    pub fn perspective_params(&self) -> PerspectiveParams {
        self.perspective
    }

    /// Rebuild the perspective projection and its composites.
    pub fn perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) {
        self.set_perspective_params(PerspectiveParams {
            fov_y_degrees,
            aspect_ratio,
            near_plane,
            far_plane,
        });
    }

    /// Rebuild the perspective projection from a parameter record.
    pub fn set_perspective_params(&mut self, params: PerspectiveParams) {
        self.perspective = params;
        self.perspective_matrices
            .set_projection(params.projection(), params.inverse_scale());
        self.perspective_matrices
            .recompose(self.view_from_world, self.inverse_view);
    }

    /// Vertical field of view in degrees.
    pub fn fov_y_degrees(&self) -> f32 {
        self.perspective.fov_y_degrees
    }

    /// Perspective aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.perspective.aspect_ratio
    }

    /// Perspective near plane.
    pub fn near_plane(&self) -> f32 {
        self.perspective.near_plane
    }

    /// Perspective far plane.
    pub fn far_plane(&self) -> f32 {
        self.perspective.far_plane
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov_y_degrees(&mut self, fov_y_degrees: f32) {
        self.set_perspective_params(PerspectiveParams {
            fov_y_degrees,
            ..self.perspective
        });
    }

    /// Set the perspective aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.set_perspective_params(PerspectiveParams {
            aspect_ratio,
            ..self.perspective
        });
    }

    /// Set the perspective near plane.
    pub fn set_near_plane(&mut self, near_plane: f32) {
        self.set_perspective_params(PerspectiveParams {
            near_plane,
            ..self.perspective
        });
    }

    /// Set the perspective far plane.
    pub fn set_far_plane(&mut self, far_plane: f32) {
        self.set_perspective_params(PerspectiveParams {
            far_plane,
            ..self.perspective
        });
    }

    /// Update the perspective aspect ratio for a new viewport size. Ignores
    /// zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.set_aspect_ratio(width as f32 / height as f32);
        }
    }

    // -- Orthographic -------------------------------------------------------

    /// Current orthographic inputs.
    pub fn orthographic_params(&self) -> OrthographicParams {
        self.orthographic
    }

    /// Rebuild the orthographic projection and its composites.
    pub fn ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.set_orthographic_params(OrthographicParams {
            left,
            right,
            bottom,
            top,
            near,
            far,
        });
    }

    /// [`ortho`](Self::ortho) with `near = 0` and `far = 1`.
    pub fn ortho_unit_depth(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    ) {
        self.ortho(left, right, bottom, top, 0.0, 1.0);
    }

    /// Rebuild the orthographic projection from a parameter record.
    pub fn set_orthographic_params(&mut self, params: OrthographicParams) {
        self.orthographic = params;
        self.orthographic_matrices
            .set_projection(params.projection(), params.inverse_scale());
        self.orthographic_matrices
            .recompose(self.view_from_world, self.inverse_view);
    }

    /// Set the left edge of the orthographic box.
    pub fn set_ortho_left(&mut self, left: f32) {
        self.set_orthographic_params(OrthographicParams {
            left,
            ..self.orthographic
        });
    }

    /// Set the right edge of the orthographic box.
    pub fn set_ortho_right(&mut self, right: f32) {
        self.set_orthographic_params(OrthographicParams {
            right,
            ..self.orthographic
        });
    }

    /// Set the bottom edge of the orthographic box.
    pub fn set_ortho_bottom(&mut self, bottom: f32) {
        self.set_orthographic_params(OrthographicParams {
            bottom,
            ..self.orthographic
        });
    }

    /// Set the top edge of the orthographic box.
    pub fn set_ortho_top(&mut self, top: f32) {
        self.set_orthographic_params(OrthographicParams {
            top,
            ..self.orthographic
        });
    }

    /// Set the orthographic near plane.
    pub fn set_ortho_near(&mut self, near: f32) {
        self.set_orthographic_params(OrthographicParams {
            near,
            ..self.orthographic
        });
    }

    /// Set the orthographic far plane.
    pub fn set_ortho_far(&mut self, far: f32) {
        self.set_orthographic_params(OrthographicParams {
            far,
            ..self.orthographic
        });
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices a draw call consumes.
pub struct CameraUniform {
    /// World → clip matrix of the active projection.
    pub screen_from_world: [[f32; 4]; 4],
    /// World → view matrix.
    pub view_from_world: [[f32; 4]; 4],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Active near plane distance.
    pub near: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Active far plane distance.
    pub far: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity matrices, looking down -Z.
    pub fn new() -> Self {
        Self {
            screen_from_world: Mat4::IDENTITY.to_cols_array_2d(),
            view_from_world: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            near: 0.1,
            forward: [0.0, 0.0, -1.0],
            far: 1000.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera) {
        self.screen_from_world =
            camera.screen_from_world_matrix().to_cols_array_2d();
        self.view_from_world =
            camera.view_from_world_matrix().to_cols_array_2d();
        self.eye = camera.eye_vec().to_array();
        self.near = camera.near_plane_dist();
        self.forward = camera.look_vec().to_array();
        self.far = camera.far_plane_dist();
    }
}

impl From<&Camera> for CameraUniform {
    fn from(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera);
        uniform
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn look_vec_is_unit_direction_to_target() {
        let mut camera = Camera::new();
        let eye = Vec3::new(3.0, -2.0, 7.0);
        let target = Vec3::new(-1.0, 4.0, 0.5);
        camera.look_at_y_up(eye, target);

        let look = camera.look_vec();
        assert!((look.length() - 1.0).abs() < EPS);
        assert!(look.abs_diff_eq((target - eye).normalize(), EPS));
    }

    #[test]
    fn right_vec_is_unnormalized_cross() {
        let mut camera = Camera::new();
        let up = Vec3::new(0.0, 2.0, 0.0);
        camera.look_at(Vec3::ZERO, Vec3::NEG_Z, up);
        assert!(camera.right_vec().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn perspective_matches_reference_formula() {
        let mut camera = Camera::new();
        let (fov, aspect, near, far) = (45.0_f32, 1.5_f32, 0.5_f32, 200.0_f32);
        camera.perspective(fov, aspect, near, far);

        let f = 1.0 / (fov.to_radians() / 2.0).tan();
        let reference = Mat4::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
        );
        assert!(!camera.is_orthographic());
        assert!(camera.screen_from_view_matrix().abs_diff_eq(reference, EPS));
    }

    #[test]
    fn repeated_look_at_is_stable() {
        let mut camera = Camera::new();
        let eye = Vec3::new(1.0, 2.0, 3.0);
        camera.look_at_y_up(eye, Vec3::ZERO);
        let first = (
            camera.screen_from_world_matrix(),
            camera.inverse_scale_view_matrix(),
        );
        camera.look_at_y_up(eye, Vec3::ZERO);
        assert_eq!(camera.screen_from_world_matrix(), first.0);
        assert_eq!(camera.inverse_scale_view_matrix(), first.1);
    }

    #[test]
    fn composites_follow_projection_and_view() {
        let mut camera = Camera::new();
        camera.look_at_y_up(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera.perspective(70.0, 2.0, 1.0, 50.0);

        let expected =
            camera.screen_from_view_matrix() * camera.view_from_world_matrix();
        assert!(camera.screen_from_world_matrix().abs_diff_eq(expected, EPS));

        camera.set_using_orthographic(true);
        let expected =
            camera.screen_from_view_matrix() * camera.view_from_world_matrix();
        assert!(camera.screen_from_world_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn both_projections_stay_current_across_mode_switch() {
        let mut camera = Camera::new();
        camera.set_using_orthographic(true);
        camera.perspective(90.0, 1.0, 1.0, 10.0);
        camera.set_using_orthographic(false);

        let reference = Mat4::perspective_rh_gl(90.0_f32.to_radians(), 1.0, 1.0, 10.0);
        assert!(camera.screen_from_view_matrix().abs_diff_eq(reference, EPS));
    }

    #[test]
    fn perspective_inverse_scale_reaches_far_plane() {
        let mut camera = Camera::new();
        camera.perspective(90.0, 2.0, 0.1, 10.0);
        // Eye at origin looking down -Z: view space == world space.
        let corner = camera
            .inverse_scale_view_matrix()
            .transform_point3(Vec3::new(1.0, 1.0, -1.0));
        assert!(corner.abs_diff_eq(Vec3::new(20.0, 10.0, -10.0), 1e-3));
    }

    #[test]
    fn orthographic_inverse_scale_uses_half_extents() {
        let mut camera = Camera::new();
        camera.ortho(-4.0, 4.0, -2.0, 2.0, 0.0, 3.0);
        camera.set_using_orthographic(true);
        let p = camera
            .inverse_scale_view_matrix()
            .transform_point3(Vec3::new(1.0, -1.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(4.0, -2.0, 0.0), EPS));
    }

    #[test]
    fn plane_distances_follow_mode() {
        let mut camera = Camera::new();
        camera.ortho(-1.0, 1.0, -1.0, 1.0, 2.0, 8.0);
        assert_eq!(camera.near_plane_dist(), 0.1);
        assert_eq!(camera.far_plane_dist(), 1000.0);

        camera.set_using_orthographic(true);
        assert_eq!(camera.near_plane_dist(), 2.0);
        assert_eq!(camera.far_plane_dist(), 8.0);
    }

    #[test]
    fn single_field_setters_hold_other_inputs() {
        let mut camera = Camera::new();
        camera.set_fov_y_degrees(30.0);
        camera.set_far_plane(500.0);
        let p = camera.perspective_params();
        assert_eq!(p.fov_y_degrees, 30.0);
        assert_eq!(p.aspect_ratio, 1.0);
        assert_eq!(p.near_plane, 0.1);
        assert_eq!(p.far_plane, 500.0);

        camera.set_ortho_left(-3.0);
        camera.set_ortho_top(5.0);
        let o = camera.orthographic_params();
        assert_eq!((o.left, o.right, o.bottom, o.top), (-3.0, 1.0, -1.0, 5.0));
        assert_eq!((o.near, o.far), (0.0, 1.0));
    }

    #[test]
    fn eye_setter_keeps_direction() {
        let mut camera = Camera::new();
        camera.look_at_y_up(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera.set_eye_vec(Vec3::new(2.0, 1.0, 9.0));
        assert_eq!(camera.eye_vec(), Vec3::new(2.0, 1.0, 9.0));
        assert!(camera.look_vec().abs_diff_eq(Vec3::NEG_Z, EPS));

        camera.set_look_vec(Vec3::new(3.0, 0.0, 0.0));
        assert!(camera.look_vec().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn up_setter_keeps_eye_and_direction() {
        let mut camera = Camera::new();
        let eye = Vec3::new(0.0, 0.0, 5.0);
        camera.look_at_y_up(eye, Vec3::ZERO);
        camera.set_up_vec(Vec3::X);

        assert_eq!(camera.up_vec(), Vec3::X);
        assert_eq!(camera.eye_vec(), eye);
        assert!(camera.look_vec().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right_vec().abs_diff_eq(Vec3::NEG_Y, EPS));
        let expected = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::X);
        assert!(camera.view_from_world_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn returned_vectors_are_copies() {
        let camera = Camera::new();
        let mut eye = camera.eye_vec();
        eye.x = 42.0;
        assert_eq!(camera.eye_vec(), Vec3::ZERO);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut camera = Camera::new();
        camera.resize(800, 0);
        assert_eq!(camera.aspect_ratio(), 1.0);
        camera.resize(800, 400);
        assert_eq!(camera.aspect_ratio(), 2.0);
    }

    #[test]
    fn uniform_mirrors_active_projection() {
        let mut camera = Camera::new();
        camera.set_using_orthographic(true);
        let uniform = CameraUniform::from(&camera);
        assert_eq!(uniform.near, 0.0);
        assert_eq!(uniform.far, 1.0);
        assert_eq!(
            uniform.screen_from_world,
            camera.screen_from_world_matrix().to_cols_array_2d()
        );
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }
}

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};

use crate::camera::core::Camera;
use crate::camera::ray::Ray3;

/// Pitch stays strictly short of the poles so `look × up` never vanishes.
pub const PITCH_LIMIT: f32 = FRAC_PI_2 / 1.01;

/// Distance from the anchor a fresh mover starts at.
pub const DEFAULT_OFFSET: f32 = 5.0;

/// Orbit/pan/zoom controller owning a [`Camera`].
///
/// The eye and look target are re-derived from yaw, pitch, offset and
/// anchor on every change, never accumulated incrementally.
#[derive(Debug, Clone)]
pub struct CameraMover {
    camera: Camera,
    yaw_radians: f32,
    pitch_radians: f32,
    offset_from_anchor: f32,
    anchor_point: Vec3,
}

impl Default for CameraMover {
    fn default() -> Self {
        Self::new(Camera::new())
    }
}

impl CameraMover {
    /// Take ownership of `camera` and place it at `(0, 0, 5)` looking at
    /// the origin.
    pub fn new(mut camera: Camera) -> Self {
        let anchor_point = Vec3::ZERO;
        camera.look_at_y_up(Vec3::new(0.0, 0.0, DEFAULT_OFFSET), anchor_point);

        Self {
            camera,
            yaw_radians: 0.0,
            pitch_radians: 0.0,
            offset_from_anchor: DEFAULT_OFFSET,
            anchor_point,
        }
    }

    /// The controlled camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access for projection changes. Extrinsics set through this
    /// handle are overwritten by the next orbit operation.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Release the camera.
    pub fn into_camera(self) -> Camera {
        self.camera
    }

    /// Accumulated yaw, in (-2π, 2π).
    pub fn yaw_radians(&self) -> f32 {
        self.yaw_radians
    }

    /// Accumulated pitch, within ±[`PITCH_LIMIT`].
    pub fn pitch_radians(&self) -> f32 {
        self.pitch_radians
    }

    /// Distance between eye and anchor.
    pub fn offset_from_anchor(&self) -> f32 {
        self.offset_from_anchor
    }

    /// World-space orbit center.
    pub fn anchor_point(&self) -> Vec3 {
        self.anchor_point
    }

    /// Translate the anchor (and with it the camera).
    pub fn pan(&mut self, translation: Vec3) {
        self.anchor_point += translation;
        self.update_camera();
    }

    /// Rotate about the anchor's vertical axis.
    pub fn yaw(&mut self, degrees: f32) {
        self.yaw_radians = (self.yaw_radians + degrees.to_radians()) % TAU;
        self.update_camera();
    }

    /// Tilt up or down, stopping short of straight up/down.
    pub fn pitch(&mut self, degrees: f32) {
        self.pitch_radians = (self.pitch_radians + degrees.to_radians())
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_camera();
    }

    /// Move toward the anchor by `distance` (negative moves away). The
    /// offset bottoms out at zero, with the eye on the anchor.
    pub fn zoom(&mut self, distance: f32) {
        self.offset_from_anchor = (self.offset_from_anchor - distance).max(0.0);
        self.update_camera();
    }

    /// Set the eye-anchor distance directly, floored at zero.
    pub fn set_offset_from_anchor(&mut self, offset: f32) {
        self.offset_from_anchor = offset.max(0.0);
        self.update_camera();
    }

    fn update_camera(&mut self) {
        let rotation = Quat::from_rotation_y(self.yaw_radians)
            * Quat::from_rotation_x(self.pitch_radians);

        let eye = rotation * Vec3::new(0.0, 0.0, self.offset_from_anchor);
        let target = rotation * Vec3::NEG_Z;

        self.camera
            .look_at_y_up(eye + self.anchor_point, target + self.anchor_point);
    }

    /// Intersect `ray` with the plane through the anchor facing the camera.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the hit
    /// lies behind the ray origin.
    pub fn intersect_plane_at_anchor(&self, ray: &Ray3) -> Option<Vec3> {
        let normal = -self.camera.look_vec();

        let denom = ray.direction().dot(normal);
        let t = (self.anchor_point - ray.origin()).dot(normal) / denom;

        (t >= 0.0 && t.is_finite()).then(|| ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn starts_five_units_out_looking_at_origin() {
        let mover = CameraMover::default();
        let camera = mover.camera();
        assert_eq!(camera.eye_vec(), Vec3::new(0.0, 0.0, 5.0));
        assert!(camera.look_vec().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert_eq!(mover.offset_from_anchor(), 5.0);
        assert_eq!(mover.anchor_point(), Vec3::ZERO);
    }

    #[test]
    fn recompute_at_rest_matches_initial_pose() {
        let mut mover = CameraMover::default();
        let before = mover.camera().screen_from_world_matrix();
        mover.pan(Vec3::ZERO);
        assert!(mover.camera().eye_vec().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPS));
        assert!(mover.camera().screen_from_world_matrix().abs_diff_eq(before, EPS));
    }

    #[test]
    fn pitch_never_leaves_limit() {
        let mut mover = CameraMover::default();
        for _ in 0..50 {
            mover.pitch(90.0);
            assert!(mover.pitch_radians() <= PITCH_LIMIT);
        }
        for _ in 0..50 {
            mover.pitch(-90.0);
            assert!(mover.pitch_radians() >= -PITCH_LIMIT);
        }
        assert!(mover.camera().look_vec().is_finite());
    }

    #[test]
    fn zoom_floors_at_zero() {
        let mut mover = CameraMover::default();
        mover.zoom(1000.0);
        assert_eq!(mover.offset_from_anchor(), 0.0);
        assert!(mover.camera().eye_vec().abs_diff_eq(Vec3::ZERO, EPS));
        assert!(mover.camera().look_vec().abs_diff_eq(Vec3::NEG_Z, EPS));

        mover.zoom(-3.0);
        assert_eq!(mover.offset_from_anchor(), 3.0);
    }

    #[test]
    fn yaw_wraps_by_remainder() {
        let mut mover = CameraMover::default();
        mover.yaw(270.0);
        mover.yaw(180.0);
        assert!((mover.yaw_radians() - 90.0_f32.to_radians()).abs() < EPS);

        mover.yaw(-540.0);
        assert!(mover.yaw_radians() > -TAU && mover.yaw_radians() < 0.0);
    }

    #[test]
    fn yaw_orbits_around_anchor() {
        let mut mover = CameraMover::default();
        mover.pan(Vec3::new(1.0, 0.0, 0.0));
        mover.yaw(90.0);
        // Rotating +Z by 90° about Y lands on +X.
        let eye = mover.camera().eye_vec();
        assert!(eye.abs_diff_eq(Vec3::new(6.0, 0.0, 0.0), EPS));
        assert!(mover.camera().look_vec().abs_diff_eq(Vec3::NEG_X, EPS));
    }

    #[test]
    fn pitch_raises_eye_above_anchor() {
        let mut mover = CameraMover::default();
        mover.pitch(-30.0);
        let eye = mover.camera().eye_vec();
        assert!(eye.y > 0.0);
        assert!((eye.length() - 5.0).abs() < EPS);
    }

    #[test]
    fn pitch_tilts_before_yaw_turns() {
        let mut mover = CameraMover::default();
        mover.yaw(90.0);
        mover.pitch(-30.0);
        let (sin, cos) = 30.0_f32.to_radians().sin_cos();
        let eye = mover.camera().eye_vec();
        assert!(eye.abs_diff_eq(Vec3::new(5.0 * cos, 5.0 * sin, 0.0), EPS));
        assert!(mover
            .camera()
            .look_vec()
            .abs_diff_eq(Vec3::new(-cos, -sin, 0.0), EPS));
    }

    #[test]
    fn ray_down_view_axis_hits_anchor() {
        let mover = CameraMover::default();
        let ray = Ray3::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = mover.intersect_plane_at_anchor(&ray);
        assert!(hit.is_some_and(|p| p.abs_diff_eq(Vec3::ZERO, EPS)));
    }

    #[test]
    fn parallel_ray_misses() {
        let mover = CameraMover::default();
        let ray = Ray3::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert_eq!(mover.intersect_plane_at_anchor(&ray), None);
    }

    #[test]
    fn plane_behind_ray_misses() {
        let mover = CameraMover::default();
        let ray = Ray3::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert_eq!(mover.intersect_plane_at_anchor(&ray), None);
    }

    #[test]
    fn offset_setter_clamps() {
        let mut mover = CameraMover::default();
        mover.set_offset_from_anchor(-2.0);
        assert_eq!(mover.offset_from_anchor(), 0.0);
        mover.set_offset_from_anchor(12.0);
        assert!(mover
            .camera()
            .eye_vec()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 12.0), EPS));
    }
}

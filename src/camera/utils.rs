//! Screen-space → clip-space → world-space conversions.

use glam::{Vec2, Vec3};

use super::core::Camera;
use super::ray::Ray3;

/// Map pixel coordinates (origin top-left, Y down) to normalized device
/// coordinates (origin center, Y up, range [-1, 1]).
#[inline]
pub fn clipspace_pos(
    screen_x: f32,
    screen_y: f32,
    view_width: f32,
    view_height: f32,
) -> Vec2 {
    Vec2::new(
        2.0 * (screen_x / view_width) - 1.0,
        1.0 - 2.0 * (screen_y / view_height),
    )
}

/// World-space ray through a pixel of a `view_width` × `view_height`
/// viewport.
///
/// The camera's active projection decides the ray shape:
///
/// - orthographic: origin on the near plane under the pixel, direction is
///   the camera look vector;
/// - perspective: origin at the eye, normalized direction toward the
///   pixel's point on the far plane.
pub fn ray_from_screen_pos(
    camera: &Camera,
    screen_x: f32,
    screen_y: f32,
    view_width: f32,
    view_height: f32,
) -> Ray3 {
    let clip = clipspace_pos(screen_x, screen_y, view_width, view_height);

    if camera.is_orthographic() {
        let clip_near = Vec3::new(clip.x, clip.y, 0.0);
        let world_near = camera
            .inverse_scale_view_matrix()
            .transform_point3(clip_near);

        // The inverse scale lands on the eye plane; step out to the near
        // plane along the view direction.
        let direction = camera.look_vec();
        let origin = world_near + direction * camera.near_plane_dist();
        return Ray3::new(origin, direction);
    }

    let clip_far = Vec3::new(clip.x, clip.y, -1.0);
    let world_far = camera
        .inverse_scale_view_matrix()
        .transform_point3(clip_far);

    let origin = camera.eye_vec();
    let direction = (world_far - origin).normalize();
    Ray3::new(origin, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn clipspace_corners_and_center() {
        let (w, h) = (640.0, 480.0);
        assert_eq!(clipspace_pos(0.0, 0.0, w, h), Vec2::new(-1.0, 1.0));
        assert_eq!(clipspace_pos(w, h, w, h), Vec2::new(1.0, -1.0));
        assert_eq!(clipspace_pos(w / 2.0, h / 2.0, w, h), Vec2::ZERO);
    }

    #[test]
    fn perspective_center_ray_follows_look() {
        let mut camera = Camera::new();
        camera.look_at_y_up(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

        let ray = ray_from_screen_pos(&camera, 50.0, 50.0, 100.0, 100.0);
        assert!(ray.origin().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPS));
        assert!(ray.direction().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn perspective_corner_ray_hits_frustum_edge() {
        let mut camera = Camera::new();
        camera.perspective(90.0, 1.0, 0.1, 100.0);

        let ray = ray_from_screen_pos(&camera, 0.0, 0.0, 200.0, 200.0);
        let expected = Vec3::new(-1.0, 1.0, -1.0).normalize();
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!(ray.direction().abs_diff_eq(expected, EPS));
        assert!((ray.direction().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn orthographic_rays_are_parallel() {
        let mut camera = Camera::new();
        camera.look_at_y_up(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera.set_using_orthographic(true);

        let center = ray_from_screen_pos(&camera, 50.0, 50.0, 100.0, 100.0);
        let corner = ray_from_screen_pos(&camera, 0.0, 0.0, 100.0, 100.0);

        assert!(center.origin().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPS));
        assert!(corner.origin().abs_diff_eq(Vec3::new(-1.0, 1.0, 5.0), EPS));
        assert_eq!(center.direction(), camera.look_vec());
        assert_eq!(corner.direction(), camera.look_vec());
    }

    #[test]
    fn orthographic_origin_steps_to_near_plane() {
        let mut camera = Camera::new();
        camera.look_at_y_up(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera.ortho(-2.0, 2.0, -2.0, 2.0, 1.5, 10.0);
        camera.set_using_orthographic(true);

        let ray = ray_from_screen_pos(&camera, 100.0, 0.0, 100.0, 100.0);
        assert!(ray.origin().abs_diff_eq(Vec3::new(2.0, 2.0, 3.5), EPS));
    }
}

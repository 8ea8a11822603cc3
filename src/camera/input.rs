use glam::{Vec2, Vec3};

use crate::camera::mover::CameraMover;
use crate::camera::utils::ray_from_screen_pos;
use crate::input::{InputEvent, MouseButton};
use crate::options::OrbitOptions;

/// Turns pointer events into orbit, pan and zoom operations on a
/// [`CameraMover`].
///
/// - left drag: yaw/pitch
/// - shift + left drag, or right drag: pan along the anchor plane
/// - scroll: zoom
#[derive(Debug, Clone)]
pub struct OrbitInput {
    last_cursor: Vec2,
    viewport: Vec2,
    left_pressed: bool,
    right_pressed: bool,
    shift_pressed: bool,
    rotate_speed: f32,
    zoom_speed: f32,
}

impl OrbitInput {
    /// Handler for a `width` × `height` pixel viewport with default speeds.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_options(&OrbitOptions::default(), width, height)
    }

    /// Handler using the speeds from `options`.
    pub fn with_options(options: &OrbitOptions, width: f32, height: f32) -> Self {
        Self {
            last_cursor: Vec2::ZERO,
            viewport: Vec2::new(width, height),
            left_pressed: false,
            right_pressed: false,
            shift_pressed: false,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    /// Track a new viewport size. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }

    /// Last cursor position seen.
    pub fn cursor(&self) -> Vec2 {
        self.last_cursor
    }

    /// Point on the anchor plane under the pixel `(x, y)`, if the ray
    /// through it reaches the plane.
    pub fn pick(&self, mover: &CameraMover, x: f32, y: f32) -> Option<Vec3> {
        let ray =
            ray_from_screen_pos(mover.camera(), x, y, self.viewport.x, self.viewport.y);
        mover.intersect_plane_at_anchor(&ray)
    }

    /// Returns true if the event was consumed by the camera.
    pub fn handle_event(
        &mut self,
        mover: &mut CameraMover,
        event: InputEvent,
    ) -> bool {
        match event {
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => {
                    self.left_pressed = pressed;
                    true
                }
                MouseButton::Right => {
                    self.right_pressed = pressed;
                    true
                }
            },
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                true
            }
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(x, y);
                let previous = self.last_cursor;
                self.last_cursor = current;

                if self.is_panning() {
                    self.pan(mover, previous, current);
                } else if self.left_pressed {
                    let delta = current - previous;
                    mover.yaw(-delta.x * self.rotate_speed);
                    mover.pitch(-delta.y * self.rotate_speed);
                }
                true
            }
            InputEvent::Scroll { delta } => {
                mover.zoom(delta * self.zoom_speed);
                true
            }
        }
    }

    fn is_panning(&self) -> bool {
        self.right_pressed || (self.left_pressed && self.shift_pressed)
    }

    // Move the anchor so the plane point grabbed at `from` ends up under
    // `to`.
    fn pan(&self, mover: &mut CameraMover, from: Vec2, to: Vec2) {
        let grabbed = self.pick(mover, from.x, from.y);
        let target = self.pick(mover, to.x, to.y);
        if let (Some(grabbed), Some(target)) = (grabbed, target) {
            log::debug!("pan by {:?}", grabbed - target);
            mover.pan(grabbed - target);
        }
    }
}

//! Update and render observer lists.
//!
//! A [`Scene`] is not a scene graph: it only fans `on_update` and
//! `on_render` out to registered items in insertion order, and carries the
//! current [`DisplayMode`] for renderers to read.

use crate::camera::core::Camera;

/// Per-frame state update hook.
pub trait Updatable {
    /// Advance by `timestep` seconds.
    fn on_update(&mut self, timestep: f32);
}

/// Per-frame draw hook.
pub trait Renderable {
    /// Draw using `camera`'s matrices and the scene's display mode.
    fn on_render(&mut self, camera: &Camera, display_mode: DisplayMode);
}

/// What surface attribute renderers should visualize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// World-space position as color.
    Position,
    /// Surface normals as color.
    #[default]
    Normals,
    /// Texture coordinates as color.
    TexCoords,
    /// Per-vertex color.
    VertexColor,
    /// Flat per-shape color.
    ShapeColor,
    /// Solid white.
    White,
}

impl DisplayMode {
    /// Every mode, in cycling order.
    pub const ALL: [Self; 6] = [
        Self::Position,
        Self::Normals,
        Self::TexCoords,
        Self::VertexColor,
        Self::ShapeColor,
        Self::White,
    ];

    /// The following mode, wrapping from the last back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Integer tag for shader uniforms.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Items to update and render each frame.
#[derive(Default)]
pub struct Scene {
    to_update: Vec<Box<dyn Updatable>>,
    to_render: Vec<Box<dyn Renderable>>,
    display_mode: DisplayMode,
}

impl Scene {
    /// Empty scene showing normals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update every registered item.
    pub fn on_update(&mut self, timestep: f32) {
        for item in &mut self.to_update {
            item.on_update(timestep);
        }
    }

    /// Render every registered item.
    pub fn on_render(&mut self, camera: &Camera) {
        let mode = self.display_mode;
        for item in &mut self.to_render {
            item.on_render(camera, mode);
        }
    }

    /// Register an item for updates.
    pub fn add_item_to_update(&mut self, item: Box<dyn Updatable>) {
        self.to_update.push(item);
    }

    /// Register an item for rendering.
    pub fn add_item_to_render(&mut self, item: Box<dyn Renderable>) {
        self.to_render.push(item);
    }

    /// Current display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Change the display mode.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Updatable for Recorder {
        fn on_update(&mut self, timestep: f32) {
            self.log.borrow_mut().push(format!("{} update {timestep}", self.name));
        }
    }

    impl Renderable for Recorder {
        fn on_render(&mut self, _camera: &Camera, display_mode: DisplayMode) {
            self.log
                .borrow_mut()
                .push(format!("{} render {display_mode:?}", self.name));
        }
    }

    #[test]
    fn items_run_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new();
        for name in ["a", "b"] {
            scene.add_item_to_update(Box::new(Recorder { name, log: log.clone() }));
            scene.add_item_to_render(Box::new(Recorder { name, log: log.clone() }));
        }

        scene.on_update(0.5);
        scene.set_display_mode(DisplayMode::White);
        scene.on_render(&Camera::new());

        assert_eq!(
            *log.borrow(),
            vec![
                "a update 0.5",
                "b update 0.5",
                "a render White",
                "b render White",
            ]
        );
    }

    #[test]
    fn display_mode_cycles() {
        assert_eq!(Scene::new().display_mode(), DisplayMode::Normals);
        assert_eq!(DisplayMode::Normals.next(), DisplayMode::TexCoords);
        assert_eq!(DisplayMode::White.next(), DisplayMode::Position);
        assert_eq!(DisplayMode::ShapeColor.as_u32(), 4);
    }
}

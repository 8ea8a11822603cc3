/// Pointer and modifier changes reported by the host window.
///
/// Positions are in pixels with the origin at the top-left corner, the same
/// convention [`ray_from_screen_pos`](crate::camera::ray_from_screen_pos)
/// takes. [`OrbitInput`](crate::camera::input::OrbitInput) consumes them.
///
/// ```
/// use vantage::camera::{input::OrbitInput, mover::CameraMover};
/// use vantage::input::InputEvent;
///
/// let mut mover = CameraMover::default();
/// let mut input = OrbitInput::new(800.0, 600.0);
/// assert!(input.handle_event(&mut mover, InputEvent::Scroll { delta: 1.0 }));
/// assert_eq!(mover.offset_from_anchor(), 4.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// New cursor position.
    CursorMoved {
        /// Pixels from the left edge.
        x: f32,
        /// Pixels from the top edge.
        y: f32,
    },
    /// A button went down or up.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// Down when `true`.
        pressed: bool,
    },
    /// Wheel motion, scaled by the handler's zoom speed.
    Scroll {
        /// Wheel steps, positive toward the anchor.
        delta: f32,
    },
    /// Shift went down or up.
    ModifiersChanged {
        /// Shift is held.
        shift: bool,
    },
}

/// Buttons the orbit controls react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Rotates, or pans while shift is held.
    Left,
    /// Pans.
    Right,
}

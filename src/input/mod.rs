//! Input event types consumed by the orbit camera input handler.

/// Pointer and modifier events.
pub mod event;

pub use event::{InputEvent, MouseButton};

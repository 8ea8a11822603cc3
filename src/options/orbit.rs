use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit controller start state and pointer sensitivity.
pub struct OrbitOptions {
    /// Starting eye-anchor distance.
    #[schemars(title = "Initial Distance", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub initial_offset: f32,
    /// Degrees of yaw/pitch per dragged pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// World units of zoom per scroll step.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            initial_offset: 5.0,
            rotate_speed: 0.5,
            zoom_speed: 0.5,
        }
    }
}

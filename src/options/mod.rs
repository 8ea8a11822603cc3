//! Camera and orbit settings with TOML preset support.
//!
//! Options serialize to/from TOML so a view setup (projection, orbit
//! distance, pointer sensitivity) can be stored and reloaded.

mod camera;
mod orbit;

use std::path::Path;

pub use camera::CameraOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::mover::CameraMover;
use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit controller parameters.
    pub orbit: OrbitOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Orbit controller over a camera configured from these options.
    #[must_use]
    pub fn build_mover(&self) -> CameraMover {
        let mut mover = CameraMover::new(self.camera.build_camera());
        mover.set_offset_from_anchor(self.orbit.initial_offset);
        mover
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[orbit]
zoom_speed = 2.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.orbit.zoom_speed, 2.0);
        // Everything else should be default
        assert_eq!(opts.orbit.initial_offset, 5.0);
        assert_eq!(opts.camera.fovy, 60.0);
        assert!(!opts.camera.orthographic);
    }

    #[test]
    fn camera_options_configure_both_projections() {
        let opts = CameraOptions {
            fovy: 45.0,
            ortho_far: 20.0,
            orthographic: true,
            ..CameraOptions::default()
        };
        let camera = opts.build_camera();
        assert!(camera.is_orthographic());
        assert_eq!(camera.fov_y_degrees(), 45.0);
        assert_eq!(camera.far_plane_dist(), 20.0);
        assert_eq!(camera.far_plane(), 1000.0);
    }

    #[test]
    fn build_mover_uses_initial_offset() {
        let mut opts = Options::default();
        opts.orbit.initial_offset = 8.0;
        let mover = opts.build_mover();
        assert_eq!(mover.offset_from_anchor(), 8.0);
        assert!(mover
            .camera()
            .eye_vec()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 8.0), 1e-4));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir().join(format!(
            "vantage-options-{}",
            std::process::id()
        ));
        let path = dir.join("closeup.toml");

        let mut opts = Options::default();
        opts.camera.fovy = 35.0;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["closeup".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!(
            "vantage-options-bad-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera]\nfovy = \"wide\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("orbit"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("orthographic").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("ortho_left").is_none());
    }
}

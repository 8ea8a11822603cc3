// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera math, screen-space ray casting, and thin wgpu resource wrappers.
//!
//! Vantage keeps a 3D camera's perspective and orthographic matrices
//! current as its pose and projection parameters change, turns pixel
//! coordinates into world-space rays, and orbits a camera around an anchor
//! point with yaw, pitch, zoom and pan.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - eye basis plus both projections, always in sync
//! - [`camera::CameraMover`] - orbit controller and anchor-plane picking
//! - [`camera::ray_from_screen_pos`] - pixel to world-space [`camera::Ray3`]
//! - [`camera::input::OrbitInput`] - pointer events to mover operations
//! - [`options::Options`] - TOML-backed camera and orbit configuration
//! - [`gpu::RenderContext`] - headless wgpu device with resource factories
//!
//! # Conventions
//!
//! Right-handed world space, camera looking down its local `-Z`. Projection
//! matrices map depth to the OpenGL `[-1, 1]` range; the bundled mesh
//! shader remaps to wgpu's `[0, 1]` in the vertex stage. Angles passed to
//! the mover are in degrees and stored in radians.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod primitives;
pub mod scene;

pub use error::VantageError;

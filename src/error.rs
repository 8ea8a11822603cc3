//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the vantage crate.
///
/// Camera and ray math never fails; these cover GPU resource creation and
/// options I/O.
#[derive(Debug)]
pub enum VantageError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// WGSL source failed to parse.
    ShaderParse(String),
    /// Parsed shader module failed validation.
    ShaderValidation(String),
    /// Shader has no entry point for the requested stage.
    MissingEntryPoint(String),
    /// Vertex element name has no matching shader input location.
    MissingAttribute(String),
    /// Texture dimensions or initial data are unusable.
    InvalidTexture(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::ShaderParse(msg) => {
                write!(f, "failed to parse shader: {msg}")
            }
            Self::ShaderValidation(msg) => {
                write!(f, "shader validation failed: {msg}")
            }
            Self::MissingEntryPoint(stage) => {
                write!(f, "shader has no {stage} entry point")
            }
            Self::MissingAttribute(name) => {
                write!(f, "failed to find attribute location for: {name}")
            }
            Self::InvalidTexture(msg) => write!(f, "invalid texture: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for VantageError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

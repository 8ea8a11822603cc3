//! WGSL shader programs, parsed and validated on the CPU before they reach
//! the device.

use std::borrow::Cow;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::VantageError;

/// A parsed and validated WGSL module.
///
/// Needs no GPU, so shader sources can be checked in tests and tools.
#[derive(Debug, Clone)]
pub struct ParsedShader {
    module: naga::Module,
}

impl ParsedShader {
    /// Parse and validate WGSL `source`.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::ShaderParse`] for syntax errors and
    /// [`VantageError::ShaderValidation`] for type or binding errors.
    pub fn parse(source: &str) -> Result<Self, VantageError> {
        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| VantageError::ShaderParse(e.emit_to_string(source)))?;

        let _info = Validator::new(ValidationFlags::all(), Capabilities::all())
            .validate(&module)
            .map_err(|e| VantageError::ShaderValidation(e.into_inner().to_string()))?;

        Ok(Self { module })
    }

    /// The naga IR.
    pub fn module(&self) -> &naga::Module {
        &self.module
    }

    /// Name of the first entry point for `stage`.
    pub fn entry_point(&self, stage: naga::ShaderStage) -> Option<&str> {
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.stage == stage)
            .map(|ep| ep.name.as_str())
    }

    /// `@location` of the vertex-stage input called `name`, looking inside
    /// struct-typed arguments too.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        let entry = self
            .module
            .entry_points
            .iter()
            .find(|ep| ep.stage == naga::ShaderStage::Vertex)?;

        entry.function.arguments.iter().find_map(|arg| {
            if let Some(binding) = &arg.binding {
                return (arg.name.as_deref() == Some(name))
                    .then_some(binding)
                    .and_then(location_of);
            }
            match &self.module.types[arg.ty].inner {
                naga::TypeInner::Struct { members, .. } => {
                    members.iter().find_map(|member| {
                        if member.name.as_deref() != Some(name) {
                            return None;
                        }
                        member.binding.as_ref().and_then(location_of)
                    })
                }
                _ => None,
            }
        })
    }
}

fn location_of(binding: &naga::Binding) -> Option<u32> {
    if let naga::Binding::Location { location, .. } = binding {
        Some(*location)
    } else {
        None
    }
}

/// A validated shader and the device module built from it.
pub struct ShaderProgram {
    parsed: ParsedShader,
    module: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Parse, validate and upload a WGSL program.
    ///
    /// # Errors
    ///
    /// See [`ParsedShader::parse`].
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        source: &str,
    ) -> Result<Self, VantageError> {
        let parsed = ParsedShader::parse(source)?;
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(parsed.module.clone())),
        });
        log::debug!(
            "compiled shader '{label}' ({} entry points)",
            parsed.module.entry_points.len()
        );
        Ok(Self { parsed, module })
    }

    /// CPU-side reflection data.
    pub fn parsed(&self) -> &ParsedShader {
        &self.parsed
    }

    /// The device shader module.
    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }

    /// Vertex entry point name.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::MissingEntryPoint`] if there is none.
    pub fn vertex_entry(&self) -> Result<&str, VantageError> {
        self.parsed
            .entry_point(naga::ShaderStage::Vertex)
            .ok_or_else(|| VantageError::MissingEntryPoint("vertex".to_owned()))
    }

    /// Fragment entry point name.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::MissingEntryPoint`] if there is none.
    pub fn fragment_entry(&self) -> Result<&str, VantageError> {
        self.parsed
            .entry_point(naga::ShaderStage::Fragment)
            .ok_or_else(|| VantageError::MissingEntryPoint("fragment".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT_ARGS: &str = r"
@vertex
fn vs_main(@location(0) position: vec3<f32>, @location(3) uv: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position.xy + uv, position.z, 1.0);
}
";

    #[test]
    fn flat_arguments_resolve() {
        let shader = ParsedShader::parse(FLAT_ARGS).unwrap();
        assert_eq!(shader.attribute_location("position"), Some(0));
        assert_eq!(shader.attribute_location("uv"), Some(3));
        assert_eq!(shader.attribute_location("normal"), None);
        assert_eq!(shader.entry_point(naga::ShaderStage::Vertex), Some("vs_main"));
        assert_eq!(shader.entry_point(naga::ShaderStage::Fragment), None);
    }

    #[test]
    fn mesh_shader_inputs_resolve() {
        let shader = ParsedShader::parse(crate::gpu::MESH_SHADER).unwrap();
        assert_eq!(shader.attribute_location("position"), Some(0));
        assert_eq!(shader.attribute_location("normal"), Some(1));
        assert_eq!(shader.attribute_location("tex_coord"), Some(2));
        assert_eq!(shader.entry_point(naga::ShaderStage::Fragment), Some("fs_main"));
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = ParsedShader::parse("fn broken( {").unwrap_err();
        assert!(matches!(err, VantageError::ShaderParse(_)));
    }

    #[test]
    fn type_error_is_validation_error() {
        let source = r"
@vertex
fn vs_main() -> @builtin(position) vec4<f32> {
    return vec3<f32>(1.0, 1.0, 1.0);
}
";
        let err = ParsedShader::parse(source).unwrap_err();
        assert!(matches!(
            err,
            VantageError::ShaderParse(_) | VantageError::ShaderValidation(_)
        ));
    }
}

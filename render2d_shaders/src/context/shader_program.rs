/// ShaderProgram - the three driver objects behind one catalog entry

use crate::catalog::{ShaderKind, ShaderSourceEntry, fragment_defines, VERTEX_DEFINES};
use crate::config::ShaderConfig;
use crate::device::{ObjectHandle, ObjectParameter, ShaderDevice, ShaderStage, NO_ERROR};
use crate::error::{Error, Result};
use crate::shader_error;

const LOG_SOURCE: &str = "render2d::ShaderProgram";

/// Vertex shader, fragment shader and linked program of one kind
///
/// All handles are `ObjectHandle::NULL` until built and after release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaderProgram {
    pub vertex_shader: ObjectHandle,
    pub fragment_shader: ObjectHandle,
    pub program: ObjectHandle,
}

impl ShaderProgram {
    /// True once all three objects exist
    pub fn is_complete(&self) -> bool {
        !self.vertex_shader.is_null() && !self.fragment_shader.is_null() && !self.program.is_null()
    }

    /// Build and link `entry`
    ///
    /// Handles are stored as soon as they are created so a failure leaves
    /// every created object reachable by `release`.
    pub(crate) fn compile(
        &mut self,
        device: &mut dyn ShaderDevice,
        kind: ShaderKind,
        entry: &ShaderSourceEntry,
        texture_rectangle: bool,
        config: &ShaderConfig,
    ) -> Result<()> {
        // Start from a clean error flag
        device.get_error();

        let frag_defines = fragment_defines(texture_rectangle);
        let frag_version = entry.fragment_version.unwrap_or("");

        self.vertex_shader = device.create_shader_object(ShaderStage::Vertex);
        compile_stage(
            device,
            kind,
            ShaderStage::Vertex,
            self.vertex_shader,
            ["", VERTEX_DEFINES, entry.vertex],
            config,
        )?;

        self.fragment_shader = device.create_shader_object(ShaderStage::Fragment);
        compile_stage(
            device,
            kind,
            ShaderStage::Fragment,
            self.fragment_shader,
            [frag_version, frag_defines, entry.fragment],
            config,
        )?;

        self.program = device.create_program_object();
        device.attach_object(self.program, self.vertex_shader);
        device.attach_object(self.program, self.fragment_shader);
        device.link_program(self.program);

        if device.object_parameter(self.program, ObjectParameter::LinkStatus) == 0 {
            let log = device.info_log(self.program);
            shader_error!(LOG_SOURCE, "Failed to link program for {}:", kind.name());
            shader_error!(LOG_SOURCE, "{}", log);
            return Err(Error::LinkFailed { kind, log });
        }

        // Samplers texN read texture unit N
        device.use_program_object(self.program);
        for unit in 0..config.bound_texture_units() {
            let location = device.uniform_location(self.program, &format!("tex{}", unit));
            if location >= 0 {
                device.uniform_1i(location, unit as i32);
            }
        }
        device.use_program_object(ObjectHandle::NULL);

        match device.get_error() {
            NO_ERROR => Ok(()),
            code => {
                shader_error!(LOG_SOURCE,
                    "Driver error 0x{:04X} while building {}", code, kind.name());
                Err(Error::DeviceError { kind, code })
            }
        }
    }

    /// Delete every non-null object and reset the handles
    pub(crate) fn release(&mut self, device: &mut dyn ShaderDevice) {
        for handle in [&mut self.vertex_shader, &mut self.fragment_shader, &mut self.program] {
            if !handle.is_null() {
                device.delete_object(*handle);
                *handle = ObjectHandle::NULL;
            }
        }
    }
}

/// Submit `sources` to `shader` and compile it
fn compile_stage(
    device: &mut dyn ShaderDevice,
    kind: ShaderKind,
    stage: ShaderStage,
    shader: ObjectHandle,
    sources: [&str; 3],
    config: &ShaderConfig,
) -> Result<()> {
    device.shader_source(shader, &sources);
    device.compile_shader(shader);

    if device.object_parameter(shader, ObjectParameter::CompileStatus) != 0 {
        return Ok(());
    }

    let log = device.info_log(shader);
    shader_error!(LOG_SOURCE, "Failed to compile shader:");
    if config.log_shader_source {
        let [_, defines, source] = sources;
        shader_error!(LOG_SOURCE, "{}", defines);
        shader_error!(LOG_SOURCE, "{}", source);
    }
    shader_error!(LOG_SOURCE, "{}", log);

    Err(Error::CompileFailed { kind, stage, log })
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;

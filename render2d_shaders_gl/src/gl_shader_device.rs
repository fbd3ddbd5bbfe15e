/// GlShaderDevice - ShaderDevice over the ARB shader object entry points
///
/// All calls must happen on the thread where the GL context is current.

use std::ffi::CString;
use gl::types::{GLchar, GLenum, GLint, GLsizei};
use render2d_shaders::render2d::device::{
    ObjectHandle, ObjectParameter, ProcLoader, ShaderDevice, ShaderStage,
};
use render2d_shaders::render2d::Result;
use render2d_shaders::shader_warn;

use crate::gl_functions::GlShaderFunctions;

/// OpenGL implementation of ShaderDevice
pub struct GlShaderDevice {
    functions: GlShaderFunctions,
}

impl GlShaderDevice {
    /// Resolve the entry points through `loader`
    pub fn load(loader: &dyn ProcLoader) -> Result<Self> {
        Ok(Self::from_functions(GlShaderFunctions::load(loader)?))
    }

    pub fn from_functions(functions: GlShaderFunctions) -> Self {
        Self { functions }
    }
}

/// ARB token for a shader stage (same values as the core enums)
fn stage_token(stage: ShaderStage) -> GLenum {
    match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    }
}

fn parameter_token(parameter: ObjectParameter) -> GLenum {
    match parameter {
        ObjectParameter::CompileStatus => gl::COMPILE_STATUS,
        ObjectParameter::LinkStatus => gl::LINK_STATUS,
        ObjectParameter::InfoLogLength => gl::INFO_LOG_LENGTH,
    }
}

impl ShaderDevice for GlShaderDevice {
    fn get_error(&mut self) -> u32 {
        unsafe { (self.functions.get_error)() }
    }

    fn create_shader_object(&mut self, stage: ShaderStage) -> ObjectHandle {
        ObjectHandle(unsafe { (self.functions.create_shader_object)(stage_token(stage)) })
    }

    fn create_program_object(&mut self) -> ObjectHandle {
        ObjectHandle(unsafe { (self.functions.create_program_object)() })
    }

    fn shader_source(&mut self, shader: ObjectHandle, sources: &[&str]) {
        // Explicit lengths: the strings are not NUL terminated
        let strings: Vec<*const GLchar> = sources.iter().map(|s| s.as_ptr() as *const GLchar).collect();
        let lengths: Vec<GLint> = sources.iter().map(|s| s.len() as GLint).collect();
        unsafe {
            (self.functions.shader_source)(
                shader.raw(),
                sources.len() as GLsizei,
                strings.as_ptr(),
                lengths.as_ptr(),
            );
        }
    }

    fn compile_shader(&mut self, shader: ObjectHandle) {
        unsafe { (self.functions.compile_shader)(shader.raw()) }
    }

    fn object_parameter(&mut self, object: ObjectHandle, parameter: ObjectParameter) -> i32 {
        let mut value: GLint = 0;
        unsafe {
            (self.functions.get_object_parameteriv)(object.raw(), parameter_token(parameter), &mut value);
        }
        value
    }

    fn info_log(&mut self, object: ObjectHandle) -> String {
        let length = self.object_parameter(object, ObjectParameter::InfoLogLength);
        if length <= 0 {
            return String::new();
        }

        let mut buffer = vec![0u8; length as usize];
        let mut written: GLsizei = 0;
        unsafe {
            (self.functions.get_info_log)(
                object.raw(),
                length,
                &mut written,
                buffer.as_mut_ptr() as *mut GLchar,
            );
        }
        buffer.truncate(written.clamp(0, length) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn attach_object(&mut self, program: ObjectHandle, shader: ObjectHandle) {
        unsafe { (self.functions.attach_object)(program.raw(), shader.raw()) }
    }

    fn link_program(&mut self, program: ObjectHandle) {
        unsafe { (self.functions.link_program)(program.raw()) }
    }

    fn use_program_object(&mut self, program: ObjectHandle) {
        unsafe { (self.functions.use_program_object)(program.raw()) }
    }

    fn uniform_location(&mut self, program: ObjectHandle, name: &str) -> i32 {
        let Ok(name) = CString::new(name) else {
            shader_warn!("render2d::gl", "Uniform name {:?} contains a NUL byte", name);
            return -1;
        };
        unsafe { (self.functions.get_uniform_location)(program.raw(), name.as_ptr()) }
    }

    fn uniform_1i(&mut self, location: i32, value: i32) {
        unsafe { (self.functions.uniform_1i)(location, value) }
    }

    fn uniform_3f(&mut self, location: i32, x: f32, y: f32, z: f32) {
        unsafe { (self.functions.uniform_3f)(location, x, y, z) }
    }

    fn uniform_4f(&mut self, location: i32, x: f32, y: f32, z: f32, w: f32) {
        unsafe { (self.functions.uniform_4f)(location, x, y, z, w) }
    }

    fn delete_object(&mut self, object: ObjectHandle) {
        unsafe { (self.functions.delete_object)(object.raw()) }
    }
}

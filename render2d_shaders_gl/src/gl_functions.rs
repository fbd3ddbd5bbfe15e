/// GlShaderFunctions - resolved ARB shader object entry points

use std::ffi::c_void;
use gl::types::{GLchar, GLenum, GLfloat, GLint, GLsizei, GLuint};
use render2d_shaders::render2d::device::ProcLoader;
use render2d_shaders::render2d::{Error, Result};

pub(crate) type GetErrorFn = unsafe extern "system" fn() -> GLenum;
pub(crate) type AttachObjectFn = unsafe extern "system" fn(GLuint, GLuint);
pub(crate) type CompileShaderFn = unsafe extern "system" fn(GLuint);
pub(crate) type CreateProgramObjectFn = unsafe extern "system" fn() -> GLuint;
pub(crate) type CreateShaderObjectFn = unsafe extern "system" fn(GLenum) -> GLuint;
pub(crate) type DeleteObjectFn = unsafe extern "system" fn(GLuint);
pub(crate) type GetInfoLogFn = unsafe extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);
pub(crate) type GetObjectParameterivFn = unsafe extern "system" fn(GLuint, GLenum, *mut GLint);
pub(crate) type GetUniformLocationFn = unsafe extern "system" fn(GLuint, *const GLchar) -> GLint;
pub(crate) type LinkProgramFn = unsafe extern "system" fn(GLuint);
pub(crate) type ShaderSourceFn =
    unsafe extern "system" fn(GLuint, GLsizei, *const *const GLchar, *const GLint);
pub(crate) type Uniform1iFn = unsafe extern "system" fn(GLint, GLint);
pub(crate) type Uniform1fFn = unsafe extern "system" fn(GLint, GLfloat);
pub(crate) type Uniform3fFn = unsafe extern "system" fn(GLint, GLfloat, GLfloat, GLfloat);
pub(crate) type Uniform4fFn = unsafe extern "system" fn(GLint, GLfloat, GLfloat, GLfloat, GLfloat);
pub(crate) type UseProgramObjectFn = unsafe extern "system" fn(GLuint);

/// Entry points resolved by `GlShaderFunctions::load`, in resolution order
pub const ENTRY_POINTS: [&str; 16] = [
    "glGetError",
    "glAttachObjectARB",
    "glCompileShaderARB",
    "glCreateProgramObjectARB",
    "glCreateShaderObjectARB",
    "glDeleteObjectARB",
    "glGetInfoLogARB",
    "glGetObjectParameterivARB",
    "glGetUniformLocationARB",
    "glLinkProgramARB",
    "glShaderSourceARB",
    "glUniform1iARB",
    "glUniform1fARB",
    "glUniform3fARB",
    "glUniform4fARB",
    "glUseProgramObjectARB",
];

/// Resolve one entry point or return `Error::Unsupported` from the caller
macro_rules! resolve {
    ($loader:expr, $name:literal, $ty:ty) => {{
        let address: *const c_void = $loader.proc_address($name);
        if address.is_null() {
            return Err(Error::Unsupported(format!("missing entry point {}", $name)));
        }
        // SAFETY: the driver exports `$name` with the signature of `$ty`
        unsafe { std::mem::transmute::<*const c_void, $ty>(address) }
    }};
}

/// Typed function table
///
/// Every pointer is non-null; building the table is the last step of the
/// capability probe and creates no GPU object.
#[derive(Clone, Copy)]
pub struct GlShaderFunctions {
    pub(crate) get_error: GetErrorFn,
    pub(crate) attach_object: AttachObjectFn,
    pub(crate) compile_shader: CompileShaderFn,
    pub(crate) create_program_object: CreateProgramObjectFn,
    pub(crate) create_shader_object: CreateShaderObjectFn,
    pub(crate) delete_object: DeleteObjectFn,
    pub(crate) get_info_log: GetInfoLogFn,
    pub(crate) get_object_parameteriv: GetObjectParameterivFn,
    pub(crate) get_uniform_location: GetUniformLocationFn,
    pub(crate) link_program: LinkProgramFn,
    pub(crate) shader_source: ShaderSourceFn,
    pub(crate) uniform_1i: Uniform1iFn,
    pub(crate) uniform_3f: Uniform3fFn,
    pub(crate) uniform_4f: Uniform4fFn,
    pub(crate) use_program_object: UseProgramObjectFn,
}

impl GlShaderFunctions {
    /// Resolve all entry points through `loader`
    ///
    /// # Errors
    ///
    /// `Error::Unsupported` naming the first entry point the loader cannot
    /// resolve.
    pub fn load(loader: &dyn ProcLoader) -> Result<Self> {
        let get_error = resolve!(loader, "glGetError", GetErrorFn);
        let attach_object = resolve!(loader, "glAttachObjectARB", AttachObjectFn);
        let compile_shader = resolve!(loader, "glCompileShaderARB", CompileShaderFn);
        let create_program_object = resolve!(loader, "glCreateProgramObjectARB", CreateProgramObjectFn);
        let create_shader_object = resolve!(loader, "glCreateShaderObjectARB", CreateShaderObjectFn);
        let delete_object = resolve!(loader, "glDeleteObjectARB", DeleteObjectFn);
        let get_info_log = resolve!(loader, "glGetInfoLogARB", GetInfoLogFn);
        let get_object_parameteriv = resolve!(loader, "glGetObjectParameterivARB", GetObjectParameterivFn);
        let get_uniform_location = resolve!(loader, "glGetUniformLocationARB", GetUniformLocationFn);
        let link_program = resolve!(loader, "glLinkProgramARB", LinkProgramFn);
        let shader_source = resolve!(loader, "glShaderSourceARB", ShaderSourceFn);
        let uniform_1i = resolve!(loader, "glUniform1iARB", Uniform1iFn);
        // Required by the extension contract, never called
        let _uniform_1f = resolve!(loader, "glUniform1fARB", Uniform1fFn);
        let uniform_3f = resolve!(loader, "glUniform3fARB", Uniform3fFn);
        let uniform_4f = resolve!(loader, "glUniform4fARB", Uniform4fFn);
        let use_program_object = resolve!(loader, "glUseProgramObjectARB", UseProgramObjectFn);

        Ok(Self {
            get_error,
            attach_object,
            compile_shader,
            create_program_object,
            create_shader_object,
            delete_object,
            get_info_log,
            get_object_parameteriv,
            get_uniform_location,
            link_program,
            shader_source,
            uniform_1i,
            uniform_3f,
            uniform_4f,
            use_program_object,
        })
    }
}

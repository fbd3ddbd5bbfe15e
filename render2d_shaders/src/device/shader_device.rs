/// ShaderDevice trait - the driver calls used by the shader subsystem
///
/// The method set mirrors the ARB shader-object entry points. A backend
/// implements it on top of resolved function pointers; tests implement it
/// with a recording mock.

/// Driver error flag value meaning "no error"
pub const NO_ERROR: u32 = 0;

/// Driver object handle (shader or program object)
///
/// Zero is the null object: binding it disables programmable shading and
/// deleting it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectHandle(pub u32);

impl ObjectHandle {
    /// The null object
    pub const NULL: ObjectHandle = ObjectHandle(0);

    /// True for the null object
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Raw driver value
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

/// Queryable object parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectParameter {
    /// Non-zero once a shader object compiled successfully
    CompileStatus,
    /// Non-zero once a program object linked successfully
    LinkStatus,
    /// Length of the info log including the terminating NUL
    InfoLogLength,
}

/// Driver calls needed to build, select and release shader programs
///
/// Every call is synchronous from the caller's point of view and must be made
/// on the thread owning the GPU context.
pub trait ShaderDevice {
    /// Read and clear the driver error flag
    fn get_error(&mut self) -> u32;

    /// Create an empty shader object for `stage`
    fn create_shader_object(&mut self, stage: ShaderStage) -> ObjectHandle;

    /// Create an empty program object
    fn create_program_object(&mut self) -> ObjectHandle;

    /// Replace the source of `shader` with the concatenation of `sources`
    fn shader_source(&mut self, shader: ObjectHandle, sources: &[&str]);

    /// Compile the current source of `shader`
    fn compile_shader(&mut self, shader: ObjectHandle);

    /// Query an integer parameter of a shader or program object
    fn object_parameter(&mut self, object: ObjectHandle, parameter: ObjectParameter) -> i32;

    /// Fetch the full info log of a shader or program object
    fn info_log(&mut self, object: ObjectHandle) -> String;

    /// Attach `shader` to `program`
    fn attach_object(&mut self, program: ObjectHandle, shader: ObjectHandle);

    /// Link `program`
    fn link_program(&mut self, program: ObjectHandle);

    /// Make `program` current (`ObjectHandle::NULL` disables shading)
    fn use_program_object(&mut self, program: ObjectHandle);

    /// Location of uniform `name` in `program`, negative when absent
    fn uniform_location(&mut self, program: ObjectHandle, name: &str) -> i32;

    /// Set an int uniform of the current program
    fn uniform_1i(&mut self, location: i32, value: i32);

    /// Set a vec3 uniform of the current program
    fn uniform_3f(&mut self, location: i32, x: f32, y: f32, z: f32);

    /// Set a vec4 uniform of the current program
    fn uniform_4f(&mut self, location: i32, x: f32, y: f32, z: f32, w: f32);

    /// Delete a shader or program object
    fn delete_object(&mut self, object: ObjectHandle);
}

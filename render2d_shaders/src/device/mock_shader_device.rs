/// Mock shader device for unit tests (no GPU required)
///
/// Records every driver call behind `Arc<Mutex<_>>` so a test can keep a
/// clone of the mock after handing the device to a `ShaderContext`, and can
/// inject compile, link and error flag failures.

use std::ffi::c_void;
use std::sync::{Arc, Mutex, MutexGuard};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::device::{
    ObjectHandle, ObjectParameter, ProcLoader, ShaderDevice, ShaderStage, NO_ERROR,
};
use crate::device::capabilities::REQUIRED_EXTENSIONS;

/// Driver error raised by injected failures (GL_INVALID_OPERATION)
pub const MOCK_INVALID_OPERATION: u32 = 0x0502;

// ============================================================================
// Mock ProcLoader
// ============================================================================

extern "system" fn mock_entry_point() {}

/// Loader answering from a fixed extension set
#[derive(Debug, Default)]
pub struct MockProcLoader {
    pub extensions: FxHashSet<String>,
    pub missing_procs: FxHashSet<String>,
    pub queried_extensions: Mutex<Vec<String>>,
}

impl MockProcLoader {
    /// Loader advertising every required shader extension
    pub fn with_shader_support() -> Self {
        Self::with_extensions(&REQUIRED_EXTENSIONS)
    }

    pub fn with_extensions(names: &[&str]) -> Self {
        Self {
            extensions: names.iter().map(|name| name.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn add(mut self, name: &str) -> Self {
        self.extensions.insert(name.to_string());
        self
    }

    pub fn remove(mut self, name: &str) -> Self {
        self.extensions.remove(name);
        self
    }
}

impl ProcLoader for MockProcLoader {
    fn extension_supported(&self, name: &str) -> bool {
        self.queried_extensions.lock().unwrap().push(name.to_string());
        self.extensions.contains(name)
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        if self.missing_procs.contains(name) {
            std::ptr::null()
        } else {
            mock_entry_point as *const c_void
        }
    }
}

// ============================================================================
// Mock ShaderDevice
// ============================================================================

/// A recorded uniform upload
#[derive(Debug, Clone, PartialEq)]
pub struct UniformUpload {
    pub program: ObjectHandle,
    pub name: String,
    pub values: Vec<f32>,
}

/// Everything the mock has seen
#[derive(Debug, Default)]
pub struct MockDeviceState {
    next_handle: u32,
    /// Objects in creation order
    pub created: Vec<ObjectHandle>,
    /// Delete calls in call order (null handles included)
    pub deleted: Vec<ObjectHandle>,
    pub stages: FxHashMap<ObjectHandle, ShaderStage>,
    /// Source fragments last submitted per shader
    pub sources: FxHashMap<ObjectHandle, Vec<String>>,
    pub compiled: FxHashMap<ObjectHandle, bool>,
    pub attached: FxHashMap<ObjectHandle, Vec<ObjectHandle>>,
    pub linked: FxHashMap<ObjectHandle, bool>,
    /// Every `use_program_object` call
    pub used_programs: Vec<ObjectHandle>,
    pub current_program: ObjectHandle,
    /// Uniform locations handed out: index is the location
    pub locations: Vec<(ObjectHandle, String)>,
    pub uniform_lookups: Vec<(ObjectHandle, String)>,
    pub int_uploads: Vec<(ObjectHandle, String, i32)>,
    pub float_uploads: Vec<UniformUpload>,
    pub error_flag: u32,
    pub get_error_calls: usize,
    pub link_calls: usize,

    /// Compilation fails for shaders whose source contains this text
    pub fail_compile_containing: Option<String>,
    /// The nth (1-based) link fails
    pub fail_link_at: Option<usize>,
    /// The nth (1-based) link raises the driver error flag
    pub error_on_link_at: Option<usize>,
}

impl MockDeviceState {
    fn allocate(&mut self) -> ObjectHandle {
        self.next_handle += 1;
        let handle = ObjectHandle(self.next_handle);
        self.created.push(handle);
        handle
    }

    /// Objects created and not yet deleted
    pub fn live_objects(&self) -> Vec<ObjectHandle> {
        self.created
            .iter()
            .copied()
            .filter(|handle| !self.deleted.contains(handle))
            .collect()
    }

    /// Uploads to uniform `name`, in call order
    pub fn uploads_of(&self, name: &str) -> Vec<UniformUpload> {
        self.float_uploads
            .iter()
            .filter(|upload| upload.name == name)
            .cloned()
            .collect()
    }

    /// Full source text of `shader`
    pub fn source_text(&self, shader: ObjectHandle) -> String {
        self.sources.get(&shader).map(|parts| parts.concat()).unwrap_or_default()
    }

    /// Uniform names declared by the shaders attached to `program`
    fn declared_uniforms(&self, program: ObjectHandle) -> Vec<String> {
        let mut names = Vec::new();
        for shader in self.attached.get(&program).into_iter().flatten() {
            for line in self.source_text(*shader).lines() {
                let line = line.trim_start();
                if let Some(rest) = line.strip_prefix("uniform ") {
                    // "uniform <type> <name>; // comment"
                    if let Some(name) = rest.split_whitespace().nth(1) {
                        names.push(name.trim_end_matches(';').to_string());
                    }
                }
            }
        }
        names
    }

    fn location_name(&self, location: i32) -> Option<(ObjectHandle, String)> {
        usize::try_from(location)
            .ok()
            .and_then(|index| self.locations.get(index).cloned())
    }

    fn record_floats(&mut self, location: i32, values: Vec<f32>) {
        if let Some((program, name)) = self.location_name(location) {
            self.float_uploads.push(UniformUpload { program, name, values });
        }
    }
}

/// Mock device that tracks driver calls without GPU
#[derive(Debug, Clone, Default)]
pub struct MockShaderDevice {
    pub state: Arc<Mutex<MockDeviceState>>,
}

impl MockShaderDevice {
    /// Create a new mock device
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail compilation of every shader whose source contains `pattern`
    pub fn with_compile_failure(self, pattern: &str) -> Self {
        self.state().fail_compile_containing = Some(pattern.to_string());
        self
    }

    /// Fail the nth link (1-based)
    pub fn with_link_failure(self, nth: usize) -> Self {
        self.state().fail_link_at = Some(nth);
        self
    }

    /// Raise the driver error flag during the nth link (1-based)
    pub fn with_error_on_link(self, nth: usize) -> Self {
        self.state().error_on_link_at = Some(nth);
        self
    }

    /// Lock the recorded state
    pub fn state(&self) -> MutexGuard<'_, MockDeviceState> {
        self.state.lock().unwrap()
    }
}

impl ShaderDevice for MockShaderDevice {
    fn get_error(&mut self) -> u32 {
        let mut state = self.state();
        state.get_error_calls += 1;
        std::mem::replace(&mut state.error_flag, NO_ERROR)
    }

    fn create_shader_object(&mut self, stage: ShaderStage) -> ObjectHandle {
        let mut state = self.state();
        let handle = state.allocate();
        state.stages.insert(handle, stage);
        handle
    }

    fn create_program_object(&mut self) -> ObjectHandle {
        self.state().allocate()
    }

    fn shader_source(&mut self, shader: ObjectHandle, sources: &[&str]) {
        let parts = sources.iter().map(|part| part.to_string()).collect();
        self.state().sources.insert(shader, parts);
    }

    fn compile_shader(&mut self, shader: ObjectHandle) {
        let mut state = self.state();
        let source = state.source_text(shader);
        let ok = match &state.fail_compile_containing {
            Some(pattern) => !source.contains(pattern.as_str()),
            None => true,
        };
        state.compiled.insert(shader, ok);
    }

    fn object_parameter(&mut self, object: ObjectHandle, parameter: ObjectParameter) -> i32 {
        let state = self.state();
        match parameter {
            ObjectParameter::CompileStatus => {
                i32::from(state.compiled.get(&object).copied().unwrap_or(false))
            }
            ObjectParameter::LinkStatus => {
                i32::from(state.linked.get(&object).copied().unwrap_or(false))
            }
            ObjectParameter::InfoLogLength => 0,
        }
    }

    fn info_log(&mut self, object: ObjectHandle) -> String {
        let state = self.state();
        if state.compiled.get(&object) == Some(&false) {
            format!("mock: object {} failed to compile", object.raw())
        } else if state.linked.get(&object) == Some(&false) {
            format!("mock: program {} failed to link", object.raw())
        } else {
            String::new()
        }
    }

    fn attach_object(&mut self, program: ObjectHandle, shader: ObjectHandle) {
        self.state().attached.entry(program).or_default().push(shader);
    }

    fn link_program(&mut self, program: ObjectHandle) {
        let mut state = self.state();
        state.link_calls += 1;
        let nth = state.link_calls;
        let ok = state.fail_link_at != Some(nth);
        state.linked.insert(program, ok);
        if state.error_on_link_at == Some(nth) {
            state.error_flag = MOCK_INVALID_OPERATION;
        }
    }

    fn use_program_object(&mut self, program: ObjectHandle) {
        let mut state = self.state();
        state.used_programs.push(program);
        state.current_program = program;
    }

    fn uniform_location(&mut self, program: ObjectHandle, name: &str) -> i32 {
        let mut state = self.state();
        state.uniform_lookups.push((program, name.to_string()));
        if !state.declared_uniforms(program).iter().any(|declared| declared == name) {
            return -1;
        }
        let key = (program, name.to_string());
        let index = match state.locations.iter().position(|entry| *entry == key) {
            Some(index) => index,
            None => {
                state.locations.push(key);
                state.locations.len() - 1
            }
        };
        index as i32
    }

    fn uniform_1i(&mut self, location: i32, value: i32) {
        let mut state = self.state();
        if let Some((program, name)) = state.location_name(location) {
            state.int_uploads.push((program, name, value));
        }
    }

    fn uniform_3f(&mut self, location: i32, x: f32, y: f32, z: f32) {
        self.state().record_floats(location, vec![x, y, z]);
    }

    fn uniform_4f(&mut self, location: i32, x: f32, y: f32, z: f32, w: f32) {
        self.state().record_floats(location, vec![x, y, z, w]);
    }

    fn delete_object(&mut self, object: ObjectHandle) {
        self.state().deleted.push(object);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_shader_device_tests.rs"]
mod tests;

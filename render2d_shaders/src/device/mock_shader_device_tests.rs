/// Unit tests for MockShaderDevice and MockProcLoader.

use crate::device::mock_shader_device::*;
use crate::device::{ObjectHandle, ObjectParameter, ProcLoader, ShaderDevice, ShaderStage, NO_ERROR};

// ============================================================================
// MockProcLoader Tests
// ============================================================================

#[test]
fn test_mock_loader_extensions() {
    let loader = MockProcLoader::with_shader_support().add("GL_EXT_texture_rectangle");
    assert!(loader.extension_supported("GL_ARB_shader_objects"));
    assert!(loader.extension_supported("GL_EXT_texture_rectangle"));
    assert!(!loader.extension_supported("GL_ARB_texture_non_power_of_two"));
    assert_eq!(loader.queried_extensions.lock().unwrap().len(), 3);
}

#[test]
fn test_mock_loader_missing_proc_is_null() {
    let mut loader = MockProcLoader::with_shader_support();
    loader.missing_procs.insert("glUniform4fARB".to_string());
    assert!(loader.proc_address("glUniform4fARB").is_null());
    assert!(!loader.proc_address("glUniform3fARB").is_null());
}

// ============================================================================
// MockShaderDevice Tests
// ============================================================================

#[test]
fn test_mock_device_handles_are_unique_and_non_null() {
    let mut device = MockShaderDevice::new();
    let vs = device.create_shader_object(ShaderStage::Vertex);
    let fs = device.create_shader_object(ShaderStage::Fragment);
    let program = device.create_program_object();

    assert!(!vs.is_null());
    assert_ne!(vs, fs);
    assert_ne!(fs, program);
    assert_eq!(device.state().live_objects(), vec![vs, fs, program]);
}

#[test]
fn test_mock_device_compile_failure_injection() {
    let mut device = MockShaderDevice::new().with_compile_failure("textureGrad");
    let good = device.create_shader_object(ShaderStage::Fragment);
    let bad = device.create_shader_object(ShaderStage::Fragment);

    device.shader_source(good, &["", "", "void main() {}"]);
    device.shader_source(bad, &["#version 130\n", "", "textureGrad(tex0, uv, a, b);"]);
    device.compile_shader(good);
    device.compile_shader(bad);

    assert_eq!(device.object_parameter(good, ObjectParameter::CompileStatus), 1);
    assert_eq!(device.object_parameter(bad, ObjectParameter::CompileStatus), 0);
    assert!(device.info_log(bad).contains("failed to compile"));
    assert_eq!(device.state().source_text(bad), "#version 130\ntextureGrad(tex0, uv, a, b);");
}

#[test]
fn test_mock_device_uniform_locations_follow_declarations() {
    let mut device = MockShaderDevice::new();
    let fs = device.create_shader_object(ShaderStage::Fragment);
    device.shader_source(fs, &["uniform sampler2D tex0; // Y \nuniform vec4 texel_size;\n"]);
    let program = device.create_program_object();
    device.attach_object(program, fs);

    let tex0 = device.uniform_location(program, "tex0");
    let texel = device.uniform_location(program, "texel_size");
    assert!(tex0 >= 0);
    assert!(texel >= 0);
    assert_ne!(tex0, texel);
    assert_eq!(device.uniform_location(program, "tex0"), tex0);
    assert_eq!(device.uniform_location(program, "tex1"), -1);

    device.uniform_4f(texel, 1.0, 2.0, 3.0, 4.0);
    device.uniform_1i(tex0, 0);
    let state = device.state();
    assert_eq!(state.uploads_of("texel_size")[0].values, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(state.int_uploads, vec![(program, "tex0".to_string(), 0)]);
}

#[test]
fn test_mock_device_error_on_link() {
    let mut device = MockShaderDevice::new().with_error_on_link(2);
    let p1 = device.create_program_object();
    let p2 = device.create_program_object();

    device.link_program(p1);
    assert_eq!(device.get_error(), NO_ERROR);
    device.link_program(p2);
    assert_eq!(device.get_error(), MOCK_INVALID_OPERATION);
    assert_eq!(device.get_error(), NO_ERROR);
}

#[test]
fn test_mock_device_link_failure() {
    let mut device = MockShaderDevice::new().with_link_failure(1);
    let program = device.create_program_object();
    device.link_program(program);
    assert_eq!(device.object_parameter(program, ObjectParameter::LinkStatus), 0);
    assert!(device.info_log(program).contains("failed to link"));
}

#[test]
fn test_mock_device_clone_shares_state() {
    let device = MockShaderDevice::new();
    let mut boxed: Box<dyn ShaderDevice> = Box::new(device.clone());
    boxed.use_program_object(ObjectHandle(7));
    boxed.delete_object(ObjectHandle::NULL);

    let state = device.state();
    assert_eq!(state.current_program, ObjectHandle(7));
    assert_eq!(state.deleted, vec![ObjectHandle::NULL]);
}

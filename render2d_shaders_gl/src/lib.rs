/*!
# render2d_shaders - OpenGL backend

ARB shader object implementation of the `render2d_shaders` driver seam.

The windowing layer hands over a `ProcLoader` (extension list plus
`GetProcAddress`); this crate probes it, resolves the sixteen entry points it
needs into a typed function table and builds the `ShaderContext` on top.

```no_run
use render2d_shaders::render2d::ShaderConfig;
use render2d_shaders_gl::{create_shader_context, ExtensionLoader};

# fn extensions() -> String { String::new() }
# fn get_proc_address(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
let loader = ExtensionLoader::from_extension_string(&extensions(), get_proc_address);
match create_shader_context(&loader, ShaderConfig::default()) {
    Ok(shaders) => { /* draw */ }
    Err(err) if err.is_unsupported() => { /* fall back to fixed function */ }
    Err(err) => panic!("{}", err),
}
```
*/

mod gl_functions;
mod gl_loader;
mod gl_shader_device;

pub use gl_functions::{GlShaderFunctions, ENTRY_POINTS};
pub use gl_loader::ExtensionLoader;
pub use gl_shader_device::GlShaderDevice;

use render2d_shaders::render2d::device::{Capabilities, ProcLoader};
use render2d_shaders::render2d::{Result, ShaderConfig, ShaderContext};

/// Probe the driver and compile the shader catalog
///
/// # Errors
///
/// `Error::Unsupported` when an extension or entry point is missing (no GPU
/// object was created), otherwise the first compile stage failure.
pub fn create_shader_context(loader: &dyn ProcLoader, config: ShaderConfig) -> Result<ShaderContext> {
    let capabilities = Capabilities::probe(loader)?;
    let device = GlShaderDevice::load(loader)?;
    ShaderContext::new(Box::new(device), capabilities, config)
}

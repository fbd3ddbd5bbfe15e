/*!
# render2d_shaders

Shader program management for a fixed-function-era 2D OpenGL renderer.

This crate provides the platform-agnostic part of the shader subsystem: the
driver seam, the capability probe, the fixed catalog of GLSL programs, and the
`ShaderContext` that compiles them once and selects them per draw call.
Backend crates (e.g. `render2d_shaders_gl`) implement the `ShaderDevice` trait
on top of real driver entry points.

## Architecture

- **ProcLoader**: extension query + entry point resolver supplied by the windowing layer
- **Capabilities**: result of probing the driver (texture rectangle addressing)
- **ShaderDevice**: driver calls used by the shader subsystem (ARB shader objects)
- **ShaderKind**: closed enumeration of the programs the renderer can draw with
- **ShaderContext**: owns every compiled program, selects programs, uploads parameters

Flow: probe → compile the whole catalog → select per draw → drop.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod config;
pub mod device;
pub mod catalog;
pub mod context;

#[cfg(test)]
mod test_support;

// Main render2d namespace module
pub mod render2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Global diagnostics sink
    pub use crate::diagnostics::Diagnostics;

    // Configuration
    pub use crate::config::ShaderConfig;

    // Shader context
    pub use crate::context::{ShaderContext, ShaderProgram, ShaderStats};

    // Catalog
    pub use crate::catalog::{
        ShaderKind, ShaderSourceEntry, TextureFormat, ScaleMode, catalog_kinds, catalog_entries,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Driver seam sub-module
    pub mod device {
        pub use crate::device::*;
    }

    // Parameter vector helpers
    pub mod params {
        pub use crate::context::params::*;
    }
}

// Re-export math library at crate root
pub use glam;

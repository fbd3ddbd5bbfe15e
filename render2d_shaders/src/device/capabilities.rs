/// Capability probe - decides whether programmable shading is available
///
/// Probing only queries the driver; no GPU object is created here.

use crate::device::ProcLoader;
use crate::error::{Error, Result};
use crate::shader_debug;

/// Extensions that must all be present for the shader subsystem
pub const REQUIRED_EXTENSIONS: [&str; 4] = [
    "GL_ARB_shader_objects",
    "GL_ARB_shading_language_100",
    "GL_ARB_vertex_shader",
    "GL_ARB_fragment_shader",
];

/// Non-power-of-two texture extension; when present, normal 2D textures are used
pub const NPOT_EXTENSION: &str = "GL_ARB_texture_non_power_of_two";

/// Equivalent texture rectangle extensions
pub const RECTANGLE_EXTENSIONS: [&str; 2] = [
    "GL_ARB_texture_rectangle",
    "GL_EXT_texture_rectangle",
];

/// Result of a successful probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Textures are sampled with unnormalized (texel) coordinates
    pub texture_rectangle: bool,
}

impl Capabilities {
    /// Probe the driver for shader support
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` naming the first missing required
    /// extension. This is the expected outcome on old GPUs.
    pub fn probe(loader: &dyn ProcLoader) -> Result<Self> {
        let texture_rectangle = Self::detect_texture_rectangle(loader);

        if let Some(missing) = REQUIRED_EXTENSIONS
            .iter()
            .find(|name| !loader.extension_supported(name))
        {
            return Err(Error::Unsupported(format!("missing extension {}", missing)));
        }

        shader_debug!("render2d::Capabilities",
            "Shader extensions present (texture rectangle addressing: {})", texture_rectangle);

        Ok(Self { texture_rectangle })
    }

    /// Rectangle addressing is only used when NPOT textures are unavailable
    pub fn detect_texture_rectangle(loader: &dyn ProcLoader) -> bool {
        !loader.extension_supported(NPOT_EXTENSION)
            && RECTANGLE_EXTENSIONS
                .iter()
                .any(|name| loader.extension_supported(name))
    }
}

#[cfg(test)]
#[path = "capabilities_tests.rs"]
mod tests;

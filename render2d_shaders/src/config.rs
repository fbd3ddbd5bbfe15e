/// Shader subsystem configuration

/// Highest number of sampler uniforms (`tex0`..`tex3`) declared by the catalog sources
pub const MAX_TEXTURE_UNITS: u32 = 4;

/// Shader context configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderConfig {
    /// Include the planar/semi-planar YUV programs in the catalog
    pub enable_yuv: bool,
    /// Number of `texN` sampler uniforms bound to texture units at link time
    pub texture_units: u32,
    /// Include the defines and the full source text in compile failure diagnostics
    pub log_shader_source: bool,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            enable_yuv: cfg!(feature = "yuv"),
            texture_units: MAX_TEXTURE_UNITS,
            log_shader_source: true,
        }
    }
}

impl ShaderConfig {
    /// Texture units actually bound, clamped to 1..=MAX_TEXTURE_UNITS
    pub fn bound_texture_units(&self) -> u32 {
        self.texture_units.clamp(1, MAX_TEXTURE_UNITS)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

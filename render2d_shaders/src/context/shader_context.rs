/// ShaderContext - owns every compiled program of the catalog
///
/// Built once per renderer after the GPU context exists, used from the render
/// thread for every draw call, dropped before the GPU context goes away.

use crate::catalog::{catalog_entries, ShaderKind};
use crate::config::ShaderConfig;
use crate::context::ShaderProgram;
use crate::device::{Capabilities, ObjectHandle, ShaderDevice};
use crate::error::Result;
use crate::{shader_debug, shader_info, shader_warn};

const LOG_SOURCE: &str = "render2d::ShaderContext";

/// Shader context statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaderStats {
    /// Number of linked programs
    pub programs: u32,
    /// Number of `select` calls
    pub selects: u64,
    /// Selects whose kind differs from the previous select
    pub program_switches: u64,
    /// Parameter vectors sent to the driver
    pub param_uploads: u64,
    /// Parameter vectors skipped because the same slice was already applied
    pub param_cache_hits: u64,
}

/// Compiled catalog plus the per-kind parameter identity cache
///
/// The cache holds the address of the last parameter slice applied to each
/// kind. Addresses are only compared, never dereferenced.
pub struct ShaderContext {
    device: Box<dyn ShaderDevice>,
    config: ShaderConfig,
    texture_rectangle: bool,
    programs: [ShaderProgram; ShaderKind::COUNT],
    applied_params: [*const f32; ShaderKind::COUNT],
    current: ShaderKind,
    stats: ShaderStats,
}

impl ShaderContext {
    /// Compile and link every catalog program
    ///
    /// # Errors
    ///
    /// Returns the first compile, link or driver error. Every object created
    /// before the failure is deleted before returning.
    pub fn new(
        device: Box<dyn ShaderDevice>,
        capabilities: Capabilities,
        config: ShaderConfig,
    ) -> Result<Self> {
        let mut context = Self {
            device,
            config,
            texture_rectangle: capabilities.texture_rectangle,
            programs: [ShaderProgram::default(); ShaderKind::COUNT],
            applied_params: [std::ptr::null(); ShaderKind::COUNT],
            current: ShaderKind::None,
            stats: ShaderStats::default(),
        };

        // On error `context` is dropped, which releases the partial catalog
        let entries: Vec<_> = catalog_entries(&context.config).collect();
        for (kind, entry) in entries {
            context.programs[kind.index()].compile(
                context.device.as_mut(),
                kind,
                entry,
                context.texture_rectangle,
                &context.config,
            )?;
            context.stats.programs += 1;
        }

        shader_info!(LOG_SOURCE,
            "Compiled {} shader programs (texture rectangle addressing: {})",
            context.stats.programs, context.texture_rectangle);

        Ok(context)
    }

    /// Make `kind` the active program and apply `params` if they changed
    ///
    /// `ShaderKind::None` and kinds left out of the catalog bind the null
    /// program. Parameters are uploaded only when `params` is a different
    /// slice (by address) than the one last applied to `kind`.
    pub fn select(&mut self, kind: ShaderKind, params: Option<&[f32]>) {
        self.stats.selects += 1;
        if kind != self.current {
            self.stats.program_switches += 1;
            self.current = kind;
        }

        let program = self.programs[kind.index()].program;
        self.device.use_program_object(program);

        let Some(params) = params else { return };
        if program.is_null() {
            return;
        }

        let slot = kind.index();
        if self.applied_params[slot] == params.as_ptr() {
            self.stats.param_cache_hits += 1;
            return;
        }

        let needed = kind.param_len();
        if params.len() < needed {
            shader_warn!(LOG_SOURCE,
                "Ignoring {} parameters for {} ({} required)", params.len(), kind.name(), needed);
            return;
        }

        if kind.is_pixel_art() {
            self.upload_vec4(program, "texel_size", &params[0..4]);
        } else if kind.is_yuv() {
            self.upload_vec3(program, "Yoffset", &params[0..3]);
            self.upload_vec3(program, "Rcoeff", &params[4..7]);
            self.upload_vec3(program, "Gcoeff", &params[8..11]);
            self.upload_vec3(program, "Bcoeff", &params[12..15]);
        }
        if needed > 0 {
            self.stats.param_uploads += 1;
        }

        self.applied_params[slot] = params.as_ptr();
    }

    /// Forget the last parameters applied to `kind`; the next select uploads again
    pub fn invalidate_params(&mut self, kind: ShaderKind) {
        self.applied_params[kind.index()] = std::ptr::null();
    }

    /// Forget the last parameters applied to every kind
    pub fn invalidate_all_params(&mut self) {
        self.applied_params = [std::ptr::null(); ShaderKind::COUNT];
    }

    /// Release every driver object now
    pub fn destroy(mut self) {
        self.release_all();
    }

    pub fn stats(&self) -> ShaderStats {
        self.stats
    }

    /// Objects of `kind`; all null when `kind` is not compiled
    pub fn program(&self, kind: ShaderKind) -> &ShaderProgram {
        &self.programs[kind.index()]
    }

    pub fn is_compiled(&self, kind: ShaderKind) -> bool {
        self.programs[kind.index()].is_complete()
    }

    /// True when the sources were compiled for texture rectangle sampling
    pub fn uses_texture_rectangle(&self) -> bool {
        self.texture_rectangle
    }

    pub fn config(&self) -> &ShaderConfig {
        &self.config
    }

    fn upload_vec3(&mut self, program: ObjectHandle, name: &str, values: &[f32]) {
        let location = self.device.uniform_location(program, name);
        if location >= 0 {
            self.device.uniform_3f(location, values[0], values[1], values[2]);
        }
    }

    fn upload_vec4(&mut self, program: ObjectHandle, name: &str, values: &[f32]) {
        let location = self.device.uniform_location(program, name);
        if location >= 0 {
            self.device.uniform_4f(location, values[0], values[1], values[2], values[3]);
        }
    }

    fn release_all(&mut self) {
        let live = self.programs.iter().filter(|program| !program.program.is_null()).count();
        for program in self.programs.iter_mut() {
            program.release(self.device.as_mut());
        }
        if live > 0 {
            shader_debug!(LOG_SOURCE, "Released {} shader programs", live);
        }
    }
}

impl Drop for ShaderContext {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
#[path = "shader_context_tests.rs"]
mod tests;

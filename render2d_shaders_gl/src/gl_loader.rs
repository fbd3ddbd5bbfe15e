/// ExtensionLoader - ProcLoader over an extension list and a resolver closure
///
/// Windowing layers expose the extension list and `GetProcAddress` in
/// different ways (glutin, SDL, raw WGL/GLX); this adapter covers the common
/// shape: a set of names and a function from entry point name to address.

use std::ffi::c_void;
use rustc_hash::FxHashSet;
use render2d_shaders::render2d::device::ProcLoader;

/// Extension set plus entry point resolver
pub struct ExtensionLoader<F>
where
    F: Fn(&str) -> *const c_void,
{
    extensions: FxHashSet<String>,
    resolver: F,
}

impl<F> ExtensionLoader<F>
where
    F: Fn(&str) -> *const c_void,
{
    /// Build from individual extension names
    pub fn new<I, S>(extensions: I, resolver: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            resolver,
        }
    }

    /// Build from the space separated `GL_EXTENSIONS` string
    pub fn from_extension_string(extensions: &str, resolver: F) -> Self {
        Self::new(extensions.split_whitespace(), resolver)
    }

    /// Number of advertised extensions
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }
}

impl<F> ProcLoader for ExtensionLoader<F>
where
    F: Fn(&str) -> *const c_void,
{
    fn extension_supported(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        (self.resolver)(name)
    }
}

#[cfg(test)]
#[path = "gl_loader_tests.rs"]
mod tests;

/// ProcLoader trait - driver queries available before any shader exists

use std::ffi::c_void;

/// Extension query and entry point resolver
///
/// Supplied by the windowing layer that owns the GPU context. Resolved
/// addresses must stay valid for the lifetime of that context.
pub trait ProcLoader {
    /// True if the driver advertises extension `name`
    fn extension_supported(&self, name: &str) -> bool;

    /// Address of entry point `name`, or null when the driver lacks it
    fn proc_address(&self, name: &str) -> *const c_void;
}

/// Device module - the driver seam of the shader subsystem

// Module declarations
pub mod shader_device;
pub mod proc_loader;
pub mod capabilities;

// Re-export everything from shader_device.rs
pub use shader_device::*;

// Re-export from other modules
pub use proc_loader::*;
pub use capabilities::*;

// Mock shader device for tests (no GPU required)
#[cfg(test)]
pub mod mock_shader_device;

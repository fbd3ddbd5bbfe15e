/// Catalog module - the fixed set of programs and their GLSL sources

pub mod shader_kind;
pub mod shader_source;

pub use shader_kind::*;
pub use shader_source::*;

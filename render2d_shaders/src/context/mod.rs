/// Context module - compiled programs, selection and parameter uploads

pub mod shader_program;
pub mod shader_context;
pub mod params;

pub use shader_program::*;
pub use shader_context::*;

//! Error types for the shader subsystem
//!
//! Probe failures (`Unsupported`) are an expected outcome on old GPUs and mean
//! the caller should pick another rendering backend. Compile stage failures
//! are unexpected and are always logged before they are returned.

use std::fmt;

use crate::catalog::ShaderKind;
use crate::device::ShaderStage;

/// Result type for shader subsystem operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shader subsystem errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A required extension or entry point is missing
    Unsupported(String),

    /// The driver rejected the source of one stage
    CompileFailed {
        kind: ShaderKind,
        stage: ShaderStage,
        log: String,
    },

    /// The driver failed to link a program
    LinkFailed {
        kind: ShaderKind,
        log: String,
    },

    /// The driver error flag was raised while building a program
    DeviceError {
        kind: ShaderKind,
        code: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unsupported(msg) => write!(f, "Shaders unsupported: {}", msg),
            Error::CompileFailed { kind, stage, log } => {
                write!(f, "Failed to compile {:?} shader for {}: {}", stage, kind.name(), log)
            }
            Error::LinkFailed { kind, log } => {
                write!(f, "Failed to link program for {}: {}", kind.name(), log)
            }
            Error::DeviceError { kind, code } => {
                write!(f, "Driver error 0x{:04X} while building {}", code, kind.name())
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True for the probe-stage outcome that only means "pick another backend"
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

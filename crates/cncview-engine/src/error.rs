use std::fmt;

use crate::stage::TransformMode;

/// Errors raised by the host-side helpers around the vertex stage.
///
/// The transform itself never fails; these come from strict validation,
/// mode parsing and uniform decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Strict validation found a NaN or infinite value in `field`.
    NonFinite { field: &'static str },
    /// A mode name that is neither `matrix` nor `scale`.
    UnknownMode(String),
    /// Uniform bytes whose length does not match the block of `mode`.
    UniformSize {
        mode: TransformMode,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field } => {
                write!(f, "vertex stage config: `{field}` is not finite")
            }
            ConfigError::UnknownMode(name) => {
                write!(f, "vertex stage config: unknown transform mode `{name}`")
            }
            ConfigError::UniformSize { mode, expected, actual } => write!(
                f,
                "vertex stage config: {mode} uniform needs {expected} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

use std::fmt;
use std::str::FromStr;

use glam::Mat4;

use crate::error::ConfigError;

use super::TransformConfig;

/// Scale bound for `Scale` mode when the host does not pick one.
///
/// Maps a ±100 unit toolpath onto the unit clip square.
pub const DEFAULT_SCALE: f32 = 0.01;

/// Which uniform configuration a draw call binds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TransformMode {
    #[default]
    Matrix,
    Scale,
}

impl TransformMode {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TransformMode::Matrix => "matrix",
            TransformMode::Scale => "scale",
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("matrix") {
            Ok(TransformMode::Matrix)
        } else if name.eq_ignore_ascii_case("scale") {
            Ok(TransformMode::Scale)
        } else {
            Err(ConfigError::UnknownMode(name.to_owned()))
        }
    }
}

/// Host-side stage settings.
///
/// `mode` is the explicit variant choice; `scale` is only read in `Scale` mode.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StageSettings {
    pub mode: TransformMode,
    pub scale: f32,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            mode: TransformMode::Matrix,
            scale: DEFAULT_SCALE,
        }
    }
}

impl StageSettings {
    /// Builds the uniform configuration for one draw call.
    ///
    /// `mvp` is ignored in `Scale` mode.
    pub fn config(&self, mvp: Mat4) -> TransformConfig {
        match self.mode {
            TransformMode::Matrix => TransformConfig::Matrix(mvp),
            TransformMode::Scale => TransformConfig::Scale(self.scale),
        }
    }
}

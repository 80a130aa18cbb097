//! avatar-clippy: a linter for configured avatars
//!
//! Walks an avatar's eye-look settings, playable layers and scene objects and
//! reports problems as an ordered list of diagnostics. Nothing is modified.

pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{check_avatars, load_scene, AvatarHost, Checker, SceneSnapshot};
pub use crate::error::{ClippyError, Result};
pub use crate::types::{Diagnostic, Report};

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Fraction of declared visemes a clip must drive to be reported (inclusive)
pub const VISEME_COVERAGE_THRESHOLD: f32 = 0.9;

/// Prefab override paths under this prefix replace renderer materials
pub const MATERIALS_OVERRIDE_PREFIX: &str = "m_Materials.Array";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

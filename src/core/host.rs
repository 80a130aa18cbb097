//! Host boundary: where avatars come from
//!
//! The checker only sees `AvatarHost`. `SceneSnapshot` is the JSON-backed
//! host the CLI uses.

use std::io::ErrorKind;
use std::path::Path;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::{ClippyError, Result};
use crate::types::AvatarModel;

/// Read-only source of avatar candidates
pub trait AvatarHost {
    /// Every avatar root in the scene, in scene order
    fn avatar_candidates(&self) -> Vec<&AvatarModel>;
}

impl AvatarHost for [AvatarModel] {
    fn avatar_candidates(&self) -> Vec<&AvatarModel> {
        self.iter().collect()
    }
}

impl AvatarHost for Vec<AvatarModel> {
    fn avatar_candidates(&self) -> Vec<&AvatarModel> {
        self.iter().collect()
    }
}

/// A scene exported from the editor: every avatar found in it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default)]
    pub avatars: Vec<AvatarModel>,
}

impl SceneSnapshot {
    pub fn new(avatars: Vec<AvatarModel>) -> Self {
        Self { avatars }
    }
}

impl AvatarHost for SceneSnapshot {
    fn avatar_candidates(&self) -> Vec<&AvatarModel> {
        self.avatars.iter().collect()
    }
}

/// Load a scene snapshot from a JSON file
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneSnapshot> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ClippyError::SceneNotFound {
            path: path.display().to_string(),
            source,
        },
        _ => ClippyError::Io(source),
    })?;

    let scene = parse_scene(&json).map_err(|source| ClippyError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    debug!("loaded {} avatar(s) from {}", scene.avatars.len(), path.display());
    Ok(scene)
}

/// Parse a snapshot with no nesting limit; the stack grows on demand
fn parse_scene(json: &str) -> serde_json::Result<SceneSnapshot> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let scene = SceneSnapshot::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(scene)
}

/// Save a scene snapshot as pretty JSON
pub fn save_scene(scene: &SceneSnapshot, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(scene)?;
    std::fs::write(path, json)?;
    Ok(())
}

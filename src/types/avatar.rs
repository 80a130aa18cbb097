//! Avatar descriptor model: the root aggregate one check runs over

use serde::{Deserialize, Serialize};
use crate::types::{PlayableLayer, SceneNode};

/// Euler angles in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation3 {
    pub const IDENTITY: Rotation3 = Rotation3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Rotation of each eye for one look direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EyeRotationPair {
    pub left: Rotation3,
    pub right: Rotation3,
}

impl EyeRotationPair {
    pub const fn new(left: Rotation3, right: Rotation3) -> Self {
        Self { left, right }
    }

    /// Same rotation for both eyes
    pub const fn both(rotation: Rotation3) -> Self {
        Self { left: rotation, right: rotation }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EyeLookSettings {
    pub looking_down: EyeRotationPair,
    pub looking_up: EyeRotationPair,
    pub looking_left: EyeRotationPair,
    pub looking_right: EyeRotationPair,
    /// Local rotation of the left eye bone
    #[serde(default)]
    pub left_eye_bone: Option<Rotation3>,
    #[serde(default)]
    pub right_eye_bone: Option<Rotation3>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarModel {
    #[serde(default)]
    pub eye_look_enabled: bool,
    #[serde(default)]
    pub eye_look: Option<EyeLookSettings>,
    #[serde(default)]
    pub layers_customized: bool,
    #[serde(default)]
    pub layers: Vec<PlayableLayer>,
    /// Blendshapes the descriptor maps to visemes
    #[serde(default)]
    pub viseme_blendshapes: Option<Vec<String>>,
    pub scene_root: SceneNode,
}

impl AvatarModel {
    pub fn new(scene_root: SceneNode) -> Self {
        Self {
            scene_root,
            ..Self::default()
        }
    }

    /// Display name of the avatar (its root object's name)
    pub fn name(&self) -> &str {
        &self.scene_root.name
    }

    pub fn with_eye_look(mut self, settings: EyeLookSettings) -> Self {
        self.eye_look_enabled = true;
        self.eye_look = Some(settings);
        self
    }

    pub fn with_layer(mut self, layer: PlayableLayer) -> Self {
        self.layers_customized = true;
        self.layers.push(layer);
        self
    }

    pub fn with_visemes<I, S>(mut self, blendshapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.viseme_blendshapes = Some(blendshapes.into_iter().map(Into::into).collect());
        self
    }

    pub fn visemes(&self) -> &[String] {
        self.viseme_blendshapes.as_deref().unwrap_or(&[])
    }
}

//! Diagnostic catalogue
//!
//! IDs are a stable public contract (A0000..A0012). Never renumber.

use serde::{Deserialize, Serialize};
use crate::types::{LayerIdentity, LayerType, TrackedPart};

/// Euler axis named in eye-look diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{}", name)
    }
}

/// One problem found on the avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    // =========================================================================
    // Avatar resolution
    // =========================================================================
    /// No avatar in the scene
    NoAvatarDescriptor,
    /// More than one avatar in the scene
    MultipleAvatarDescriptors { names: Vec<String> },

    // =========================================================================
    // Eye look
    // =========================================================================
    /// Exactly one direction of an eye-look pair rotates around `axis`
    SuspiciousEyeAxis {
        max_is_nonzero: bool,
        vertical: bool,
        right_eye: bool,
        axis: Axis,
    },
    EyeBoneNotPointingUp { right_eye: bool },

    // =========================================================================
    // Playable layers
    // =========================================================================
    TrackingModifiedInMultipleLayers {
        part: TrackedPart,
        layers: Vec<LayerIdentity>,
    },
    AdditiveLayer { layer: LayerIdentity },
    ZeroWeightLayer { layer: LayerIdentity },
    DuplicateLayerType { layer_type: LayerType },
    MuscleAnimationInWrongLayer { clip_name: String, layer_type: LayerType },
    StuckState { layer: LayerIdentity, state_name: String },

    // =========================================================================
    // Scene objects
    // =========================================================================
    WhiteSpecular { material_name: String },
    OverriddenMaterials { node_name: String },
    AnimatesVisemes { clip_name: String },
}

impl Diagnostic {
    /// Stable numeric ID
    pub fn id(&self) -> u16 {
        match self {
            Self::NoAvatarDescriptor => 0,
            Self::MultipleAvatarDescriptors { .. } => 1,
            Self::SuspiciousEyeAxis { .. } => 2,
            Self::EyeBoneNotPointingUp { .. } => 3,
            Self::TrackingModifiedInMultipleLayers { .. } => 4,
            Self::AdditiveLayer { .. } => 5,
            Self::ZeroWeightLayer { .. } => 6,
            Self::DuplicateLayerType { .. } => 7,
            Self::MuscleAnimationInWrongLayer { .. } => 8,
            Self::StuckState { .. } => 9,
            Self::WhiteSpecular { .. } => 10,
            Self::OverriddenMaterials { .. } => 11,
            Self::AnimatesVisemes { .. } => 12,
        }
    }

    /// Code string, e.g. `A0004`
    pub fn code(&self) -> String {
        format!("A{:04}", self.id())
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        match self {
            Self::NoAvatarDescriptor => "No avatar descriptor was found.".to_string(),
            Self::MultipleAvatarDescriptors { names } => format!(
                "Multiple avatar descriptors were found: {}",
                names.join(", ")
            ),
            Self::SuspiciousEyeAxis { max_is_nonzero, vertical, right_eye, axis } => {
                let (min_dir, max_dir) = if *vertical { ("down", "up") } else { ("left", "right") };
                let (modified, unmodified) = if *max_is_nonzero {
                    (max_dir, min_dir)
                } else {
                    (min_dir, max_dir)
                };
                format!(
                    "For the {} eye, the rotation corresponding to looking {} modifies the {} \
                     axis, but the rotation corresponding to looking {} doesn't.",
                    side(*right_eye),
                    modified,
                    axis,
                    unmodified
                )
            }
            Self::EyeBoneNotPointingUp { right_eye } => {
                format!("The {} eye bone doesn't point up.", side(*right_eye))
            }
            Self::TrackingModifiedInMultipleLayers { part, layers } => {
                let layers: Vec<String> = layers.iter().map(ToString::to_string).collect();
                format!("Tracking settings for {} are changed in: {}", part, layers.join(", "))
            }
            Self::AdditiveLayer { layer } => {
                format!("The additive {} isn't in the additive controller.", layer)
            }
            Self::ZeroWeightLayer { layer } => format!("The {} has zero weight.", layer),
            Self::DuplicateLayerType { layer_type } => format!(
                "The avatar descriptor has more than one controller of type {}",
                layer_type
            ),
            Self::MuscleAnimationInWrongLayer { clip_name, layer_type } => format!(
                "The animation clip \"{}\" animates muscles on the {} layer.",
                clip_name, layer_type
            ),
            Self::StuckState { layer, state_name } => {
                format!("The state \"{}\" in {} has no transitions.", state_name, layer)
            }
            Self::WhiteSpecular { material_name } => format!(
                "The material \"{}\" appears to have a fully white specular color. This will \
                 appear as black in some worlds.",
                material_name
            ),
            Self::OverriddenMaterials { node_name } => format!(
                "The object \"{}\" overrides materials on its SkinnedMeshRenderer. This can \
                 cause materials to appear as magenta in VRChat.",
                node_name
            ),
            Self::AnimatesVisemes { clip_name } => {
                format!("The animation clip \"{}\" animates most visemes.", clip_name)
            }
        }
    }
}

fn side(right: bool) -> &'static str {
    if right {
        "right"
    } else {
        "left"
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A{:04}: {}", self.id(), self.message())
    }
}

//! Data model for avatar-clippy

mod avatar;
mod clip;
mod diagnostic;
mod layer;
mod report;
mod scene;

pub use avatar::{AvatarModel, EyeLookSettings, EyeRotationPair, Rotation3};
pub use clip::{AnimationClip, CurveBinding, BLENDSHAPE_PREFIX};
pub use diagnostic::{Axis, Diagnostic};
pub use layer::{
    AnimationLayer, AnimatorController, Behavior, BlendMode, LayerIdentity, LayerType, Motion,
    PlayableLayer, StateMachineNode, StateNode, TrackedPart, TrackingControl, TrackingMode,
    Transition, TRACKED_PARTS,
};
pub use report::{DiagnosticRecord, Report, NO_ISSUES_MESSAGE};
pub use scene::{Color, Material, SceneNode, ShaderProperty, ShaderPropertyKind};

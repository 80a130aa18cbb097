//! Playable layers, animator controllers and their state machines

use serde::{Deserialize, Serialize};
use crate::types::AnimationClip;

/// Descriptor slot type for a playable layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayerType {
    Base,
    Additive,
    Gesture,
    Action,
    FX,
    Sitting,
    TPose,
    IKPose,
}

impl LayerType {
    /// Layer types that are allowed to drive humanoid muscles
    pub fn drives_muscles(&self) -> bool {
        matches!(self, LayerType::Base | LayerType::Action | LayerType::Gesture)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayerType::Base => "Base",
            LayerType::Additive => "Additive",
            LayerType::Gesture => "Gesture",
            LayerType::Action => "Action",
            LayerType::FX => "FX",
            LayerType::Sitting => "Sitting",
            LayerType::TPose => "TPose",
            LayerType::IKPose => "IKPose",
        }
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identifies one animation layer across every controller on the avatar.
///
/// Two controllers may both contain a layer called "Hands"; the slot type
/// keeps them apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerIdentity {
    pub layer_type: LayerType,
    pub layer_name: String,
}

impl LayerIdentity {
    pub fn new(layer_type: LayerType, layer_name: impl Into<String>) -> Self {
        Self {
            layer_type,
            layer_name: layer_name.into(),
        }
    }
}

impl std::fmt::Display for LayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer {} of the {} controller", self.layer_name, self.layer_type)
    }
}

/// One slot of the avatar descriptor's layer list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayableLayer {
    pub layer_type: LayerType,
    #[serde(default)]
    pub controller: Option<AnimatorController>,
}

impl PlayableLayer {
    pub fn new(layer_type: LayerType, controller: Option<AnimatorController>) -> Self {
        Self { layer_type, controller }
    }
}

/// An animator controller: ordered animation layers plus the clip table
/// their motions reference by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimatorController {
    pub name: String,
    #[serde(default)]
    pub layers: Vec<AnimationLayer>,
    #[serde(default)]
    pub clips: Vec<AnimationClip>,
}

impl AnimatorController {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_layer(mut self, layer: AnimationLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_clip(mut self, clip: AnimationClip) -> Self {
        self.clips.push(clip);
        self
    }

    /// Clip table entry at `index`
    pub fn clip(&self, index: usize) -> Option<&AnimationClip> {
        self.clips.get(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
}

/// A single layer inside an animator controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationLayer {
    pub name: String,
    #[serde(default)]
    pub blend_mode: BlendMode,
    #[serde(default = "default_layer_weight")]
    pub default_weight: f32,
    #[serde(default)]
    pub state_machine: StateMachineNode,
}

fn default_layer_weight() -> f32 {
    1.0
}

impl AnimationLayer {
    pub fn new(name: impl Into<String>, state_machine: StateMachineNode) -> Self {
        Self {
            name: name.into(),
            blend_mode: BlendMode::Normal,
            default_weight: default_layer_weight(),
            state_machine,
        }
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_weight(mut self, default_weight: f32) -> Self {
        self.default_weight = default_weight;
        self
    }
}

/// State machine; may nest sub-state-machines to any depth
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateMachineNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub child_machines: Vec<StateMachineNode>,
    #[serde(default)]
    pub states: Vec<StateNode>,
}

impl StateMachineNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: StateNode) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_child(mut self, child: StateMachineNode) -> Self {
        self.child_machines.push(child);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transition {
    #[serde(default)]
    pub destination: Option<String>,
}

impl Transition {
    pub fn to(destination: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateNode {
    pub name: String,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub behaviors: Vec<Behavior>,
    #[serde(default)]
    pub motion: Option<Motion>,
}

impl StateNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn outgoing_transition_count(&self) -> usize {
        self.transitions.len()
    }
}

/// What a state plays: a single clip, or a blend tree mixing more motions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Motion {
    /// Index into the owning controller's clip table
    Clip { clip: usize },
    BlendTree {
        #[serde(default)]
        children: Vec<Motion>,
    },
}

impl Motion {
    pub fn clip(index: usize) -> Self {
        Motion::Clip { clip: index }
    }

    pub fn blend_tree(children: Vec<Motion>) -> Self {
        Motion::BlendTree { children }
    }

    /// Clip table indexes of every leaf, depth-first, children in order.
    /// Repeats are kept.
    pub fn clip_indexes(&self) -> Vec<usize> {
        let mut indexes = Vec::new();
        let mut stack = vec![self];
        while let Some(motion) = stack.pop() {
            match motion {
                Motion::Clip { clip } => indexes.push(*clip),
                Motion::BlendTree { children } => stack.extend(children.iter().rev()),
            }
        }
        indexes
    }
}

/// State machine behaviour attached to a state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Behavior {
    TrackingControl(TrackingControl),
    /// Any behaviour the linter has no rules for
    Other { kind: String },
}

/// Tracked body parts, in ownership table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackedPart {
    Head,
    LeftHand,
    RightHand,
    Hip,
    LeftFoot,
    RightFoot,
    LeftFingers,
    RightFingers,
    Eyes,
    Mouth,
}

/// Every tracked part, indexed by `TrackedPart::index`
pub const TRACKED_PARTS: [TrackedPart; 10] = [
    TrackedPart::Head,
    TrackedPart::LeftHand,
    TrackedPart::RightHand,
    TrackedPart::Hip,
    TrackedPart::LeftFoot,
    TrackedPart::RightFoot,
    TrackedPart::LeftFingers,
    TrackedPart::RightFingers,
    TrackedPart::Eyes,
    TrackedPart::Mouth,
];

impl TrackedPart {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrackedPart::Head => "Head",
            TrackedPart::LeftHand => "LeftHand",
            TrackedPart::RightHand => "RightHand",
            TrackedPart::Hip => "Hip",
            TrackedPart::LeftFoot => "LeftFoot",
            TrackedPart::RightFoot => "RightFoot",
            TrackedPart::LeftFingers => "LeftFingers",
            TrackedPart::RightFingers => "RightFingers",
            TrackedPart::Eyes => "Eyes",
            TrackedPart::Mouth => "Mouth",
        }
    }
}

impl std::fmt::Display for TrackedPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackingMode {
    #[default]
    NoChange,
    Tracking,
    Animation,
}

/// Per-part tracking directive; parts left out of a snapshot mean `NoChange`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingControl {
    pub head: TrackingMode,
    pub left_hand: TrackingMode,
    pub right_hand: TrackingMode,
    pub hip: TrackingMode,
    pub left_foot: TrackingMode,
    pub right_foot: TrackingMode,
    pub left_fingers: TrackingMode,
    pub right_fingers: TrackingMode,
    pub eyes: TrackingMode,
    pub mouth: TrackingMode,
}

impl TrackingControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self, part: TrackedPart) -> TrackingMode {
        match part {
            TrackedPart::Head => self.head,
            TrackedPart::LeftHand => self.left_hand,
            TrackedPart::RightHand => self.right_hand,
            TrackedPart::Hip => self.hip,
            TrackedPart::LeftFoot => self.left_foot,
            TrackedPart::RightFoot => self.right_foot,
            TrackedPart::LeftFingers => self.left_fingers,
            TrackedPart::RightFingers => self.right_fingers,
            TrackedPart::Eyes => self.eyes,
            TrackedPart::Mouth => self.mouth,
        }
    }

    pub fn set(mut self, part: TrackedPart, mode: TrackingMode) -> Self {
        let slot = match part {
            TrackedPart::Head => &mut self.head,
            TrackedPart::LeftHand => &mut self.left_hand,
            TrackedPart::RightHand => &mut self.right_hand,
            TrackedPart::Hip => &mut self.hip,
            TrackedPart::LeftFoot => &mut self.left_foot,
            TrackedPart::RightFoot => &mut self.right_foot,
            TrackedPart::LeftFingers => &mut self.left_fingers,
            TrackedPart::RightFingers => &mut self.right_fingers,
            TrackedPart::Eyes => &mut self.eyes,
            TrackedPart::Mouth => &mut self.mouth,
        };
        *slot = mode;
        self
    }

    /// Parts this directive actually changes
    pub fn changed_parts(&self) -> impl Iterator<Item = TrackedPart> + '_ {
        TRACKED_PARTS
            .iter()
            .copied()
            .filter(move |part| self.mode(*part) != TrackingMode::NoChange)
    }
}

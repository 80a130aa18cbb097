//! Integration tests for the checker
//!
//! Tests the full path: host → avatar resolution → rule passes → diagnostics

use pretty_assertions::assert_eq;

use avatar_clippy::core::{check_avatars, Checker, SceneSnapshot};
use avatar_clippy::types::{
    AnimationClip, AnimationLayer, AnimatorController, AvatarModel, Axis, Behavior, BlendMode,
    Color, Diagnostic, EyeLookSettings, EyeRotationPair, LayerIdentity, LayerType, Material,
    Motion, PlayableLayer, Rotation3, SceneNode, ShaderProperty, StateMachineNode, StateNode,
    TrackedPart, TrackingControl, TrackingMode, Transition,
};

fn looping(name: &str) -> StateNode {
    StateNode::new(name).with_transition(Transition::to(name))
}

fn single_layer(controller: &str, layer: &str, machine: StateMachineNode) -> AnimatorController {
    AnimatorController::new(controller).with_layer(AnimationLayer::new(layer, machine))
}

fn tracking_state(name: &str, part: TrackedPart, mode: TrackingMode) -> StateNode {
    looping(name).with_behavior(Behavior::TrackingControl(TrackingControl::new().set(part, mode)))
}

fn symmetric_eyes() -> EyeLookSettings {
    EyeLookSettings {
        looking_down: EyeRotationPair::both(Rotation3::new(12.0, 0.0, 0.0)),
        looking_up: EyeRotationPair::both(Rotation3::new(-10.0, 0.0, 0.0)),
        looking_left: EyeRotationPair::both(Rotation3::new(0.0, -15.0, 0.0)),
        looking_right: EyeRotationPair::both(Rotation3::new(0.0, 15.0, 0.0)),
        left_eye_bone: Some(Rotation3::IDENTITY),
        right_eye_bone: Some(Rotation3::IDENTITY),
    }
}

fn scene(avatars: Vec<AvatarModel>) -> SceneSnapshot {
    SceneSnapshot::new(avatars)
}

// =============================================================================
// AVATAR RESOLUTION
// =============================================================================

#[test]
fn test_zero_candidates() {
    assert_eq!(check_avatars(&scene(vec![])), vec![Diagnostic::NoAvatarDescriptor]);
}

#[test]
fn test_two_candidates_short_circuit() {
    // Both avatars have problems, none of which may be reported.
    let broken = |name: &str| {
        AvatarModel::new(SceneNode::new(name).with_override("m_Materials.Array.size"))
    };
    let diagnostics = check_avatars(&scene(vec![broken("A"), broken("B")]));
    assert_eq!(
        diagnostics,
        vec![Diagnostic::MultipleAvatarDescriptors {
            names: vec!["A".to_string(), "B".to_string()],
        }]
    );
    assert_eq!(diagnostics[0].to_string(), "A0001: Multiple avatar descriptors were found: A, B");
}

// =============================================================================
// EYE LOOK
// =============================================================================

#[test]
fn test_symmetric_eye_look_is_clean() {
    let avatar = AvatarModel::new(SceneNode::new("Avatar")).with_eye_look(symmetric_eyes());
    assert!(check_avatars(&scene(vec![avatar])).is_empty());
}

#[test]
fn test_vertical_left_eye_asymmetry() {
    let mut eyes = symmetric_eyes();
    eyes.looking_down.left = Rotation3::new(0.0, 0.0, 0.0);
    eyes.looking_up.left = Rotation3::new(5.0, 0.0, 0.0);
    let avatar = AvatarModel::new(SceneNode::new("Avatar")).with_eye_look(eyes);

    assert_eq!(
        check_avatars(&scene(vec![avatar])),
        vec![Diagnostic::SuspiciousEyeAxis {
            max_is_nonzero: true,
            vertical: true,
            right_eye: false,
            axis: Axis::X,
        }]
    );
}

#[test]
fn test_eye_look_disabled_skips_checks() {
    let mut eyes = symmetric_eyes();
    eyes.left_eye_bone = Some(Rotation3::new(90.0, 0.0, 0.0));
    let mut avatar = AvatarModel::new(SceneNode::new("Avatar")).with_eye_look(eyes);
    avatar.eye_look_enabled = false;

    assert!(check_avatars(&scene(vec![avatar])).is_empty());
}

// =============================================================================
// PLAYABLE LAYERS
// =============================================================================

#[test]
fn test_duplicate_layer_type_per_repeat() {
    let idle = || single_layer("Gesture", "Hands", StateMachineNode::new("Root").with_state(looping("Idle")));
    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_layer(PlayableLayer::new(LayerType::Gesture, Some(idle())))
        .with_layer(PlayableLayer::new(LayerType::FX, None))
        .with_layer(PlayableLayer::new(LayerType::Gesture, Some(idle())))
        .with_layer(PlayableLayer::new(LayerType::Gesture, Some(idle())));

    let diagnostics = check_avatars(&scene(vec![avatar]));
    let duplicates = diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::DuplicateLayerType { .. }))
        .count();
    assert_eq!(duplicates, 2);
}

#[test]
fn test_tracking_conflict_across_layers() {
    let gesture = single_layer(
        "Gesture",
        "Left Hand",
        StateMachineNode::new("Root")
            .with_state(tracking_state("Fist", TrackedPart::LeftHand, TrackingMode::Tracking)),
    );
    let fx = single_layer(
        "FX",
        "Props",
        StateMachineNode::new("Root")
            .with_state(tracking_state("Hold", TrackedPart::LeftHand, TrackingMode::Animation))
            .with_state(tracking_state("Blink", TrackedPart::Eyes, TrackingMode::Animation)),
    );
    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_layer(PlayableLayer::new(LayerType::Gesture, Some(gesture)))
        .with_layer(PlayableLayer::new(LayerType::FX, Some(fx)));

    assert_eq!(
        check_avatars(&scene(vec![avatar])),
        vec![Diagnostic::TrackingModifiedInMultipleLayers {
            part: TrackedPart::LeftHand,
            layers: vec![
                LayerIdentity::new(LayerType::Gesture, "Left Hand"),
                LayerIdentity::new(LayerType::FX, "Props"),
            ],
        }]
    );
}

#[test]
fn test_same_layer_name_in_two_slots_is_a_conflict() {
    let machine = || {
        StateMachineNode::new("Root")
            .with_state(tracking_state("Look", TrackedPart::Head, TrackingMode::Animation))
    };
    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_layer(PlayableLayer::new(LayerType::Action, Some(single_layer("Action", "Base Layer", machine()))))
        .with_layer(PlayableLayer::new(LayerType::FX, Some(single_layer("FX", "Base Layer", machine()))));

    let diagnostics = check_avatars(&scene(vec![avatar]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].id(), 4);
}

#[test]
fn test_single_owner_is_not_a_conflict() {
    let machine = StateMachineNode::new("Root")
        .with_state(tracking_state("A", TrackedPart::Hip, TrackingMode::Animation))
        .with_state(tracking_state("B", TrackedPart::Hip, TrackingMode::Tracking));
    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_layer(PlayableLayer::new(LayerType::Action, Some(single_layer("Action", "Sit", machine))));

    assert!(check_avatars(&scene(vec![avatar])).is_empty());
}

#[test]
fn test_layer_rules_in_traversal_order() {
    let controller = AnimatorController::new("FX")
        .with_layer(AnimationLayer::new(
            "Base",
            StateMachineNode::new("Root").with_state(looping("Idle").with_motion(Motion::clip(0))),
        ))
        .with_layer(
            AnimationLayer::new(
                "Glow",
                StateMachineNode::new("Root")
                    .with_child(StateMachineNode::new("Deep").with_state(StateNode::new("Stuck")))
                    .with_state(looping("Off")),
            )
            .with_blend_mode(BlendMode::Additive)
            .with_weight(0.0),
        )
        .with_clip(AnimationClip::new("Wave").with_binding("", "Left Arm Down-Up"));

    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_layer(PlayableLayer::new(LayerType::FX, Some(controller)));

    let glow = LayerIdentity::new(LayerType::FX, "Glow");
    assert_eq!(
        check_avatars(&scene(vec![avatar])),
        vec![
            Diagnostic::AdditiveLayer { layer: glow.clone() },
            Diagnostic::ZeroWeightLayer { layer: glow.clone() },
            Diagnostic::StuckState { layer: glow, state_name: "Stuck".into() },
            Diagnostic::MuscleAnimationInWrongLayer {
                clip_name: "Wave".into(),
                layer_type: LayerType::FX,
            },
        ]
    );
}

#[test]
fn test_viseme_clip_in_fx() {
    let visemes: Vec<String> = (0..10).map(|i| format!("v_{}", i)).collect();
    let clip = (0..9).fold(AnimationClip::new("Talk"), |clip, i| {
        clip.with_blendshape("Body", &format!("v_{}", i))
    });
    let controller = single_layer(
        "FX",
        "Mouth",
        StateMachineNode::new("Root").with_state(looping("Talking").with_motion(Motion::clip(0))),
    )
    .with_clip(clip);
    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_visemes(visemes)
        .with_layer(PlayableLayer::new(LayerType::FX, Some(controller)));

    assert_eq!(
        check_avatars(&scene(vec![avatar])),
        vec![Diagnostic::AnimatesVisemes { clip_name: "Talk".into() }]
    );
}

#[test]
fn test_blend_tree_clips_reach_the_analyzer() {
    let visemes: Vec<String> = vec!["v_aa".into(), "v_oh".into()];
    let controller = single_layer(
        "FX",
        "Face",
        StateMachineNode::new("Root").with_state(looping("Blend").with_motion(Motion::blend_tree(vec![
            Motion::clip(0),
            Motion::clip(1),
        ]))),
    )
    .with_clip(AnimationClip::new("Smile").with_blendshape("Body", "v_aa").with_blendshape("Body", "v_oh"))
    .with_clip(AnimationClip::new("Jaw").with_binding("", "Jaw Close"));
    let avatar = AvatarModel::new(SceneNode::new("Avatar"))
        .with_visemes(visemes)
        .with_layer(PlayableLayer::new(LayerType::FX, Some(controller)));

    assert_eq!(
        check_avatars(&scene(vec![avatar])),
        vec![
            Diagnostic::AnimatesVisemes { clip_name: "Smile".into() },
            Diagnostic::MuscleAnimationInWrongLayer {
                clip_name: "Jaw".into(),
                layer_type: LayerType::FX,
            },
        ]
    );
}

// =============================================================================
// SCENE OBJECTS
// =============================================================================

#[test]
fn test_scene_runs_after_layers() {
    let controller = single_layer("FX", "Toggles", StateMachineNode::new("Root").with_state(StateNode::new("Off")));
    let root = SceneNode::new("Avatar").with_child(
        SceneNode::new("Body")
            .with_override("m_Materials.Array.data[0]")
            .with_material(
                Material::new("Skin")
                    .with_property(ShaderProperty::color("_SpecColor", Color::new(1.0, 1.0, 1.0, 0.2))),
            ),
    );
    let avatar = AvatarModel::new(root).with_layer(PlayableLayer::new(LayerType::FX, Some(controller)));

    assert_eq!(
        check_avatars(&scene(vec![avatar])),
        vec![
            Diagnostic::StuckState {
                layer: LayerIdentity::new(LayerType::FX, "Toggles"),
                state_name: "Off".into(),
            },
            Diagnostic::OverriddenMaterials { node_name: "Body".into() },
            Diagnostic::WhiteSpecular { material_name: "Skin".into() },
        ]
    );
}

// =============================================================================
// IDEMPOTENCE
// =============================================================================

#[test]
fn test_check_twice_is_identical() {
    let mut eyes = symmetric_eyes();
    eyes.right_eye_bone = Some(Rotation3::new(0.0, 4.0, 0.0));
    let machine = StateMachineNode::new("Root")
        .with_state(tracking_state("A", TrackedPart::Mouth, TrackingMode::Animation))
        .with_state(StateNode::new("B"));
    let avatar = AvatarModel::new(SceneNode::new("Avatar").with_override("m_Materials.Array.size"))
        .with_eye_look(eyes)
        .with_layer(PlayableLayer::new(LayerType::FX, Some(single_layer("FX", "One", machine.clone()))))
        .with_layer(PlayableLayer::new(LayerType::Gesture, Some(single_layer("Gesture", "Two", machine))));
    let host = scene(vec![avatar]);

    let mut checker = Checker::new();
    let first = checker.check(&host).to_vec();
    let second = checker.check(&host).to_vec();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

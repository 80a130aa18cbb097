//! Clip analyzer: scans one clip's property bindings for muscle curves in the
//! wrong layer and for clips that drive most of the avatar's visemes.

use std::collections::HashSet;
use log::trace;
use crate::VISEME_COVERAGE_THRESHOLD;
use crate::types::{AnimationClip, Diagnostic, LayerType};

/// Humanoid muscle property names as they appear in clip bindings
pub const MUSCLE_NAMES: &[&str] = &[
    "Chest Front-Back",
    "Chest Left-Right",
    "Chest Twist Left-Right",
    "Head Nod Down-Up",
    "Head Tilt Left-Right",
    "Head Turn Left-Right",
    "Jaw Close",
    "Jaw Left-Right",
    "Left Arm Down-Up",
    "Left Arm Front-Back",
    "Left Arm Twist In-Out",
    "Left Eye Down-Up",
    "Left Eye In-Out",
    "Left Foot Up-Down",
    "Left Forearm Stretch",
    "Left Forearm Twist In-Out",
    "Left Hand Down-Up",
    "Left Hand In-Out",
    "Left Lower Leg Stretch",
    "Left Lower Leg Twist In-Out",
    "Left Shoulder Down-Up",
    "Left Shoulder Front-Back",
    "Left Toes Up-Down",
    "Left Upper Leg Front-Back",
    "Left Upper Leg In-Out",
    "Left Upper Leg Twist In-Out",
    "Neck Nod Down-Up",
    "Neck Tilt Left-Right",
    "Neck Turn Left-Right",
    "Right Arm Down-Up",
    "Right Arm Front-Back",
    "Right Arm Twist In-Out",
    "Right Eye Down-Up",
    "Right Eye In-Out",
    "Right Foot Twist In-Out",
    "Right Hand Down-Up",
    "Right Hand In-Out",
    "Right Lower Leg Stretch",
    "Right Lower Leg Twist In-Out",
    "Right Shoulder Down-Up",
    "Right Shoulder Front-Back",
    "Right Toes Up-Down",
    "Right Upper Leg Front-Back",
    "Right Upper Leg In-Out",
    "Right Upper Leg Twist In-Out",
    "Spine Front-Back",
    "Spine Left-Right",
    "Spine Twist Left-Right",
    "UpperChest Front-Back",
    "UpperChest Left-Right",
    "UpperChest Twist Left-Right",
];

pub fn is_muscle(property_name: &str) -> bool {
    MUSCLE_NAMES.contains(&property_name)
}

/// Analyze one clip played by a layer of type `layer_type`.
///
/// Muscle misplacement wins over viseme coverage: the first muscle binding
/// ends the scan.
pub fn analyze_clip(
    clip: &AnimationClip,
    layer_type: LayerType,
    visemes: &[String],
) -> Option<Diagnostic> {
    let all_visemes: HashSet<&str> = visemes.iter().map(String::as_str).collect();
    let mut used_visemes: HashSet<&str> = HashSet::new();

    for binding in &clip.bindings {
        if !layer_type.drives_muscles() && is_muscle(&binding.property_name) {
            trace!("clip {} animates muscle {}", clip.name, binding.property_name);
            return Some(Diagnostic::MuscleAnimationInWrongLayer {
                clip_name: clip.name.clone(),
                layer_type,
            });
        }

        if let Some(blendshape) = binding.blendshape() {
            if let Some(viseme) = all_visemes.get(blendshape) {
                used_visemes.insert(*viseme);
            }
        }
    }

    let ratio = viseme_coverage(used_visemes.len(), all_visemes.len())?;
    trace!("clip {} viseme coverage {:.3}", clip.name, ratio);
    if ratio >= VISEME_COVERAGE_THRESHOLD {
        return Some(Diagnostic::AnimatesVisemes {
            clip_name: clip.name.clone(),
        });
    }
    None
}

/// Fraction of declared visemes used, undefined when none are declared
fn viseme_coverage(used: usize, declared: usize) -> Option<f32> {
    if declared == 0 {
        return None;
    }
    Some(used as f32 / declared as f32)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn visemes(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("vrc.v_{}", i)).collect()
    }

    fn clip_using(name: &str, count: usize) -> AnimationClip {
        (0..count).fold(AnimationClip::new(name), |clip, i| {
            clip.with_blendshape("Body", &format!("vrc.v_{}", i))
        })
    }

    #[test]
    fn test_muscle_catalogue_has_no_duplicates() {
        let unique: HashSet<_> = MUSCLE_NAMES.iter().collect();
        assert_eq!(unique.len(), MUSCLE_NAMES.len());
    }

    #[test]
    fn test_muscle_in_fx_layer() {
        let clip = AnimationClip::new("Dance").with_binding("", "Spine Front-Back");
        let result = analyze_clip(&clip, LayerType::FX, &[]);
        assert_eq!(
            result,
            Some(Diagnostic::MuscleAnimationInWrongLayer {
                clip_name: "Dance".into(),
                layer_type: LayerType::FX,
            })
        );
    }

    #[test]
    fn test_muscle_in_gesture_layer_is_fine() {
        let clip = AnimationClip::new("Fist").with_binding("", "Left Hand In-Out");
        assert_eq!(analyze_clip(&clip, LayerType::Gesture, &[]), None);
    }

    #[test]
    fn test_muscle_short_circuits_viseme_rule() {
        let clip = clip_using("Talk", 10).with_binding("", "Jaw Close");
        let result = analyze_clip(&clip, LayerType::Additive, &visemes(10));
        assert!(matches!(result, Some(Diagnostic::MuscleAnimationInWrongLayer { .. })));
    }

    #[test]
    fn test_viseme_coverage_boundary() {
        let declared = visemes(100);

        let at_threshold = clip_using("Talk90", 90);
        assert_eq!(
            analyze_clip(&at_threshold, LayerType::FX, &declared),
            Some(Diagnostic::AnimatesVisemes { clip_name: "Talk90".into() })
        );

        let below = clip_using("Talk89", 89);
        assert_eq!(analyze_clip(&below, LayerType::FX, &declared), None);
    }

    #[test]
    fn test_nine_of_ten_visemes() {
        let clip = clip_using("Talk", 9);
        assert!(analyze_clip(&clip, LayerType::FX, &visemes(10)).is_some());
    }

    #[test]
    fn test_repeated_bindings_count_once() {
        let clip = (0..20).fold(AnimationClip::new("Spam"), |clip, _| {
            clip.with_blendshape("Body", "vrc.v_0")
        });
        assert_eq!(analyze_clip(&clip, LayerType::FX, &visemes(2)), None);
    }

    #[test]
    fn test_no_visemes_declared() {
        let clip = clip_using("Talk", 3);
        assert_eq!(analyze_clip(&clip, LayerType::FX, &[]), None);
    }

    #[test]
    fn test_non_viseme_blendshapes_ignored() {
        let clip = AnimationClip::new("Smile")
            .with_blendshape("Body", "smile")
            .with_blendshape("Body", "blink");
        assert_eq!(analyze_clip(&clip, LayerType::FX, &visemes(1)), None);
    }
}

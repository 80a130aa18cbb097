//! Eye-look checks: axis symmetry between opposite look directions and
//! eye bone rest orientation.

use log::debug;
use crate::types::{Axis, Diagnostic, EyeLookSettings, EyeRotationPair, Rotation3};

/// Run every eye-look rule, appending diagnostics in rule order
pub fn check_eye_look(settings: &EyeLookSettings, out: &mut Vec<Diagnostic>) {
    debug!("checking eye look");

    check_direction_pair(&settings.looking_down, &settings.looking_up, true, out);
    check_direction_pair(&settings.looking_left, &settings.looking_right, false, out);

    check_eye_bone(settings.left_eye_bone.as_ref(), false, out);
    check_eye_bone(settings.right_eye_bone.as_ref(), true, out);
}

fn check_direction_pair(
    min: &EyeRotationPair,
    max: &EyeRotationPair,
    vertical: bool,
    out: &mut Vec<Diagnostic>,
) {
    check_eye(&min.left, &max.left, vertical, false, out);
    check_eye(&min.right, &max.right, vertical, true, out);
}

fn check_eye(
    min: &Rotation3,
    max: &Rotation3,
    vertical: bool,
    right_eye: bool,
    out: &mut Vec<Diagnostic>,
) {
    for (axis, min_angle, max_angle) in [
        (Axis::X, min.x, max.x),
        (Axis::Y, min.y, max.y),
        (Axis::Z, min.z, max.z),
    ] {
        if let Some(max_is_nonzero) = asymmetric_zero(min_angle, max_angle) {
            out.push(Diagnostic::SuspiciousEyeAxis {
                max_is_nonzero,
                vertical,
                right_eye,
                axis,
            });
        }
    }
}

/// `Some(true)` when only `max` is non-zero, `Some(false)` when only `min`
/// is, `None` when both or neither are.
fn asymmetric_zero(min: f32, max: f32) -> Option<bool> {
    match (min == 0.0, max == 0.0) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        _ => None,
    }
}

fn check_eye_bone(bone: Option<&Rotation3>, right_eye: bool, out: &mut Vec<Diagnostic>) {
    if let Some(rotation) = bone {
        if !rotation.is_identity() {
            out.push(Diagnostic::EyeBoneNotPointingUp { right_eye });
        }
    }
}

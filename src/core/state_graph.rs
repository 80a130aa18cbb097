//! State graph walker: per-layer rules and recursive descent through nested
//! state machines.
//!
//! Rules per controller:
//! - additive layer outside the Additive slot
//! - zero default weight on a non-first layer that has states
//! - states with no outgoing transitions
//! - tracking control directives (recorded into the ownership table)
//! - every distinct clip the states play, directly or through blend trees,
//!   goes through the clip analyzer once

use std::collections::HashSet;
use log::{debug, trace, warn};
use crate::core::clip_analyzer::analyze_clip;
use crate::core::ownership::OwnershipTable;
use crate::types::{
    AnimationLayer, AnimatorController, Behavior, BlendMode, Diagnostic, LayerIdentity,
    LayerType, Motion, StateMachineNode, StateNode,
};

/// Walks the layers of one controller plugged into one descriptor slot
pub struct StateGraphWalker<'a> {
    layer_type: LayerType,
    visemes: &'a [String],
    ownership: &'a mut OwnershipTable,
    out: &'a mut Vec<Diagnostic>,
}

impl<'a> StateGraphWalker<'a> {
    pub fn new(
        layer_type: LayerType,
        visemes: &'a [String],
        ownership: &'a mut OwnershipTable,
        out: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            layer_type,
            visemes,
            ownership,
            out,
        }
    }

    /// Check every layer of `controller`, then every clip its states play
    pub fn walk_controller(&mut self, controller: &AnimatorController) {
        debug!(
            "walking controller {} ({} layers) in the {} slot",
            controller.name,
            controller.layers.len(),
            self.layer_type
        );

        let mut reachable = ReachableClips::default();
        for (index, layer) in controller.layers.iter().enumerate() {
            self.walk_layer(layer, index == 0, &mut reachable);
        }

        for clip_index in reachable.order {
            match controller.clip(clip_index) {
                Some(clip) => {
                    if let Some(diagnostic) = analyze_clip(clip, self.layer_type, self.visemes) {
                        self.out.push(diagnostic);
                    }
                }
                None => warn!(
                    "controller {} plays clip #{} but its clip table has {} entries",
                    controller.name,
                    clip_index,
                    controller.clips.len()
                ),
            }
        }
    }

    fn walk_layer(&mut self, layer: &AnimationLayer, is_first: bool, reachable: &mut ReachableClips) {
        let layer_id = LayerIdentity::new(self.layer_type, layer.name.as_str());

        if layer.blend_mode == BlendMode::Additive && self.layer_type != LayerType::Additive {
            self.out.push(Diagnostic::AdditiveLayer { layer: layer_id.clone() });
        }

        // Only the root machine's own states count, as Unity reports them.
        if !is_first && !layer.state_machine.states.is_empty() && layer.default_weight == 0.0 {
            self.out.push(Diagnostic::ZeroWeightLayer { layer: layer_id.clone() });
        }

        self.walk_state_machine(&layer.state_machine, &layer_id, reachable);
    }

    fn walk_state_machine(
        &mut self,
        machine: &StateMachineNode,
        layer_id: &LayerIdentity,
        reachable: &mut ReachableClips,
    ) {
        trace!("entering state machine {:?} of {}", machine.name, layer_id);

        for child in &machine.child_machines {
            self.walk_state_machine(child, layer_id, reachable);
        }

        for state in &machine.states {
            self.check_state(state, layer_id);
            if let Some(motion) = &state.motion {
                reachable.add(motion);
            }
        }
    }

    fn check_state(&mut self, state: &StateNode, layer_id: &LayerIdentity) {
        if state.outgoing_transition_count() == 0 {
            self.out.push(Diagnostic::StuckState {
                layer: layer_id.clone(),
                state_name: state.name.clone(),
            });
        }

        for behavior in &state.behaviors {
            if let Behavior::TrackingControl(control) = behavior {
                for part in control.changed_parts() {
                    self.ownership.record(part, layer_id);
                }
            }
        }
    }
}

/// Distinct clip table indexes in first-seen order
#[derive(Default)]
struct ReachableClips {
    seen: HashSet<usize>,
    order: Vec<usize>,
}

impl ReachableClips {
    fn add(&mut self, motion: &Motion) {
        for index in motion.clip_indexes() {
            if self.seen.insert(index) {
                self.order.push(index);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

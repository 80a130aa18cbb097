//! Checker: resolves the avatar and runs every rule over it
//!
//! Order of a run:
//! 1. avatar resolution (zero or several candidates end the run)
//! 2. eye look, when enabled
//! 3. playable layers, when customized, then tracking ownership conflicts
//! 4. scene objects under the avatar root

use std::collections::HashSet;
use log::{debug, info};
use crate::core::eye_look::check_eye_look;
use crate::core::host::AvatarHost;
use crate::core::ownership::OwnershipTable;
use crate::core::scene_graph::walk_scene;
use crate::core::state_graph::StateGraphWalker;
use crate::types::{AvatarModel, Diagnostic};

/// Runs the rulebook and keeps the diagnostics of the latest run
#[derive(Debug, Default)]
pub struct Checker {
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    /// Create new checker
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full check, replacing the previous run's diagnostics
    pub fn check<H: AvatarHost + ?Sized>(&mut self, host: &H) -> &[Diagnostic] {
        self.diagnostics.clear();

        if let Some(avatar) = self.resolve_avatar(host) {
            self.check_avatar(avatar);
        }

        info!("check finished with {} diagnostic(s)", self.diagnostics.len());
        &self.diagnostics
    }

    /// Diagnostics of the latest run
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn resolve_avatar<'h, H: AvatarHost + ?Sized>(&mut self, host: &'h H) -> Option<&'h AvatarModel> {
        let mut candidates = host.avatar_candidates();
        match candidates.len() {
            0 => {
                self.diagnostics.push(Diagnostic::NoAvatarDescriptor);
                None
            }
            1 => candidates.pop(),
            _ => {
                let names = candidates.iter().map(|avatar| avatar.name().to_string()).collect();
                self.diagnostics.push(Diagnostic::MultipleAvatarDescriptors { names });
                None
            }
        }
    }

    fn check_avatar(&mut self, avatar: &AvatarModel) {
        debug!("checking avatar {}", avatar.name());

        if avatar.eye_look_enabled {
            match &avatar.eye_look {
                Some(settings) => check_eye_look(settings, &mut self.diagnostics),
                None => debug!("eye look enabled without settings, skipping"),
            }
        }

        if avatar.layers_customized {
            self.check_layers(avatar);
        }

        walk_scene(&avatar.scene_root, &mut self.diagnostics);
    }

    fn check_layers(&mut self, avatar: &AvatarModel) {
        let mut ownership = OwnershipTable::new();
        let mut seen_types = HashSet::new();

        for slot in &avatar.layers {
            if !seen_types.insert(slot.layer_type) {
                self.diagnostics.push(Diagnostic::DuplicateLayerType {
                    layer_type: slot.layer_type,
                });
            }

            let Some(controller) = &slot.controller else {
                debug!("{} slot has no controller", slot.layer_type);
                continue;
            };
            StateGraphWalker::new(
                slot.layer_type,
                avatar.visemes(),
                &mut ownership,
                &mut self.diagnostics,
            )
            .walk_controller(controller);
        }

        self.diagnostics.extend(ownership.into_conflicts());
    }
}

/// One-shot check of whatever `host` holds
pub fn check_avatars<H: AvatarHost + ?Sized>(host: &H) -> Vec<Diagnostic> {
    let mut checker = Checker::new();
    checker.check(host);
    checker.diagnostics
}

// =============================================================================
// TESTS
// =============================================================================

//! Tracking ownership: which layers change the tracking of each body part

use crate::types::{Diagnostic, LayerIdentity, TrackedPart, TRACKED_PARTS};

/// Per-part set of layers that change its tracking.
///
/// Sets keep first-insertion order so reports are stable across runs.
#[derive(Debug, Clone, Default)]
pub struct OwnershipTable {
    owners: [Vec<LayerIdentity>; TRACKED_PARTS.len()],
}

impl OwnershipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `layer` changes `part`; repeated records are no-ops
    pub fn record(&mut self, part: TrackedPart, layer: &LayerIdentity) {
        let owners = &mut self.owners[part.index()];
        if !owners.contains(layer) {
            owners.push(layer.clone());
        }
    }

    pub fn owners(&self, part: TrackedPart) -> &[LayerIdentity] {
        &self.owners[part.index()]
    }

    /// Drain into one diagnostic per part owned by more than one layer
    pub fn into_conflicts(self) -> Vec<Diagnostic> {
        TRACKED_PARTS
            .iter()
            .zip(self.owners)
            .filter(|(_, layers)| layers.len() > 1)
            .map(|(part, layers)| Diagnostic::TrackingModifiedInMultipleLayers {
                part: *part,
                layers,
            })
            .collect()
    }
}

//! Animation clips and their property bindings

use serde::{Deserialize, Serialize};

/// Prefix Unity uses for blendshape weight properties
pub const BLENDSHAPE_PREFIX: &str = "blendShape.";

/// Association between a clip and one animatable property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveBinding {
    /// Transform path of the animated object, relative to the avatar root
    #[serde(default)]
    pub path: String,
    pub property_name: String,
}

impl CurveBinding {
    pub fn new(path: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            property_name: property_name.into(),
        }
    }

    /// Blendshape name if this binding drives a blendshape weight
    pub fn blendshape(&self) -> Option<&str> {
        self.property_name.strip_prefix(BLENDSHAPE_PREFIX)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    #[serde(default)]
    pub bindings: Vec<CurveBinding>,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    pub fn with_binding(mut self, path: impl Into<String>, property_name: impl Into<String>) -> Self {
        self.bindings.push(CurveBinding::new(path, property_name));
        self
    }

    pub fn with_blendshape(self, path: impl Into<String>, blendshape: &str) -> Self {
        self.with_binding(path, format!("{}{}", BLENDSHAPE_PREFIX, blendshape))
    }
}

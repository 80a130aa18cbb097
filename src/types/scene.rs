//! Scene node tree and renderer materials

use serde::{Deserialize, Serialize};

/// A node of the avatar's object hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    /// Property paths overridden relative to the prefab this node comes from
    #[serde(default)]
    pub property_overrides: Vec<String>,
    /// Materials of the node's renderer, empty when it has none
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_override(mut self, property_path: impl Into<String>) -> Self {
        self.property_overrides.push(property_path.into());
        self
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    #[serde(default)]
    pub shader_properties: Vec<ShaderProperty>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader_properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: ShaderProperty) -> Self {
        self.shader_properties.push(property);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShaderPropertyKind {
    Color,
    Vector,
    Float,
    Range,
    Texture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderProperty {
    pub name: String,
    pub kind: ShaderPropertyKind,
    /// Current value, present for color properties
    #[serde(default)]
    pub color: Option<Color>,
}

impl ShaderProperty {
    pub fn color(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            kind: ShaderPropertyKind::Color,
            color: Some(color),
        }
    }

    pub fn other(name: impl Into<String>, kind: ShaderPropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Red, green and blue exactly 1.0, alpha ignored
    pub fn is_white(&self) -> bool {
        self.r == 1.0 && self.g == 1.0 && self.b == 1.0
    }
}

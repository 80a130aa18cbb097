//! Scene graph walker: visits every node under the avatar root with an
//! explicit stack and checks material overrides and specular colors.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use crate::MATERIALS_OVERRIDE_PREFIX;
use crate::types::{Diagnostic, Material, SceneNode, ShaderPropertyKind};

lazy_static! {
    // Name sniffing only: `_SpecColor`, `_Specular`, `specTint`...
    static ref RE_SPECULAR: Regex = Regex::new(r"(?i)^_?spec").unwrap();
}

/// Walk the subtree rooted at `root`, appending diagnostics in visit order.
///
/// Children are pushed in declaration order and popped last-first.
pub fn walk_scene(root: &SceneNode, out: &mut Vec<Diagnostic>) {
    debug!("walking {} scene nodes under {}", root.node_count(), root.name);

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        check_node(node, out);
        stack.extend(node.children.iter());
    }
}

fn check_node(node: &SceneNode, out: &mut Vec<Diagnostic>) {
    trace!("checking node {}", node.name);

    if overrides_materials(node) {
        out.push(Diagnostic::OverriddenMaterials {
            node_name: node.name.clone(),
        });
    }

    for material in &node.materials {
        check_material(material, out);
    }
}

fn overrides_materials(node: &SceneNode) -> bool {
    node.property_overrides
        .iter()
        .any(|path| path.starts_with(MATERIALS_OVERRIDE_PREFIX))
}

/// Whether a shader property name looks like a specular input
pub fn is_specular_name(name: &str) -> bool {
    RE_SPECULAR.is_match(name)
}

fn check_material(material: &Material, out: &mut Vec<Diagnostic>) {
    for property in &material.shader_properties {
        if property.kind != ShaderPropertyKind::Color || !is_specular_name(&property.name) {
            continue;
        }
        if property.color.map_or(false, |color| color.is_white()) {
            out.push(Diagnostic::WhiteSpecular {
                material_name: material.name.clone(),
            });
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

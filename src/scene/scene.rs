use rustc_hash::FxHashMap;
use slotmap::{SecondaryMap, SlotMap};

use crate::scene::NodeHandle;
use crate::scene::blend_shapes::{BlendShapeSource, BlendShapeTarget, MorphBinding, WeightPaths};
use crate::scene::bounds::BoundingBox;
use crate::scene::node::SceneNode;
use crate::vrm::{BlendShapeKey, BlendShapeRootKey};

/// Scene graph of a loaded asset.
///
/// Pure data: node hierarchy, morph weights and bounds. It is built once per
/// loaded document and answers the blend-shape panel's queries.
///
/// Names are indexed case-insensitively when a node is inserted; the first
/// node carrying a name wins. A node is reachable both by its own name and by
/// its mesh's name.
#[derive(Debug, Default)]
pub struct VrmScene {
    nodes: SlotMap<NodeHandle, SceneNode>,
    root_nodes: Vec<NodeHandle>,
    names: FxHashMap<String, NodeHandle>,
    weight_paths: SecondaryMap<NodeHandle, WeightPaths>,
}

impl VrmScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Adds a node at the top level of the scene.
    pub fn add_node(&mut self, node: SceneNode) -> NodeHandle {
        let handle = self.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as the last child of `parent`.
    ///
    /// Falls back to a root node if `parent` is not in the scene.
    pub fn add_to_parent(&mut self, mut node: SceneNode, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::warn!("Parent {parent:?} is not in the scene, adding node at root level");
            return self.add_node(node);
        }
        node.parent = Some(parent);
        let handle = self.insert(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        handle
    }

    fn insert(&mut self, node: SceneNode) -> NodeHandle {
        let keys: Vec<String> = [node.name(), node.mesh_name()]
            .into_iter()
            .flatten()
            .map(str::to_ascii_lowercase)
            .collect();
        let handle = self.nodes.insert(node);
        for key in keys {
            self.names.entry(key).or_insert(handle);
        }
        handle
    }

    /// Recomputes which blend-shape names each node exposes.
    ///
    /// A node exposes every named morph target found in its subtree, its own
    /// mesh first. Must be called after the hierarchy or the morph target
    /// names change.
    pub fn update_weight_paths(&mut self) {
        self.weight_paths.clear();
        let roots = self.root_nodes.clone();
        for root in roots {
            self.collect_weight_paths(root);
        }
    }

    fn collect_weight_paths(&mut self, handle: NodeHandle) -> WeightPaths {
        let mut paths = WeightPaths::new();
        let Some(node) = self.nodes.get(handle) else {
            return paths;
        };

        for (target, name) in node.morph_targets.names.iter().enumerate() {
            if let Some(name) = name {
                paths
                    .entry(name.clone())
                    .or_default()
                    .push(MorphBinding { node: handle, target });
            }
        }

        let children = node.children.clone();
        for child in children {
            for (name, child_path) in self.collect_weight_paths(child) {
                let path = paths.entry(name).or_default();
                for binding in child_path.bindings() {
                    path.push(*binding);
                }
            }
        }

        if !paths.is_empty() {
            self.weight_paths.insert(handle, paths.clone());
        }
        paths
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneNode> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &SceneNode)> {
        self.nodes.iter()
    }

    /// Looks a node up by node or mesh name, ignoring ASCII case.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.names.get(&name.to_ascii_lowercase()).copied()
    }

    /// World-space bounds of `handle` and everything below it.
    #[must_use]
    pub fn bounding_box_of(&self, handle: NodeHandle) -> Option<BoundingBox> {
        let node = self.get_node(handle)?;
        let mut combined = node.world_bounds();

        for &child in node.children() {
            if let Some(child_bbox) = self.bounding_box_of(child) {
                combined = Some(match combined {
                    Some(existing) => existing.union(&child_bbox),
                    None => child_bbox,
                });
            }
        }

        combined
    }

    /// World-space bounds of the whole scene, `None` when no node has a mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.root_nodes
            .iter()
            .filter_map(|&root| self.bounding_box_of(root))
            .reduce(|a, b| a.union(&b))
    }

    // ========================================================================
    // Morph weights
    // ========================================================================

    /// Writes one morph weight. Returns `false` if the slot does not exist.
    pub fn set_morph_weight(&mut self, binding: MorphBinding, value: f32) -> bool {
        let Some(slot) = self
            .nodes
            .get_mut(binding.node)
            .and_then(|n| n.morph_targets.weights.get_mut(binding.target))
        else {
            return false;
        };
        *slot = value;
        true
    }

    /// Resets every morph weight in the scene to zero.
    pub fn reset_morph_weights(&mut self) {
        for (_, node) in &mut self.nodes {
            node.morph_targets.weights.fill(0.0);
        }
    }
}

impl BlendShapeSource for VrmScene {
    type Node = NodeHandle;

    fn node_for_root(&self, key: BlendShapeRootKey) -> Option<NodeHandle> {
        self.find_node_by_name(key.name())
    }

    fn weight_paths(&self, node: NodeHandle) -> Option<&WeightPaths> {
        self.weight_paths.get(node)
    }
}

impl BlendShapeTarget for VrmScene {
    fn set_blend_shape(&mut self, value: f32, key: BlendShapeKey, root: BlendShapeRootKey) {
        let Some(path) = self
            .node_for_root(root)
            .and_then(|node| self.weight_paths.get(node))
            .and_then(|paths| paths.get(key.name()))
            .cloned()
        else {
            log::debug!("No weight path for {root}/{key}, ignoring");
            return;
        };

        for binding in path.bindings() {
            self.set_morph_weight(*binding, value);
        }
        log::trace!("Set {root}/{key} = {value} via {path}");
    }
}

use glam::Mat4;

use crate::scene::NodeHandle;
use crate::scene::bounds::BoundingBox;

/// Morph target data attached to a mesh node.
///
/// `names` and `weights` are parallel: `weights[i]` drives the target called
/// `names[i]`. Targets without a declared name still own a weight slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphTargets {
    pub names: Vec<Option<String>>,
    pub weights: Vec<f32>,
}

impl MorphTargets {
    /// Creates `count` targets with zero weights and no names.
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        Self {
            names: vec![None; count],
            weights: vec![0.0; count],
        }
    }

    /// Creates named targets with zero weights.
    #[must_use]
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<Option<String>> = names.into_iter().map(|n| Some(n.into())).collect();
        let weights = vec![0.0; names.len()];
        Self { names, weights }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// A scene node.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: List of child node handles
///
/// # Mesh data
///
/// Only what the viewer core needs is kept: morph target names and weights,
/// and the local-space bounds of the mesh (used for camera framing).
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub(crate) name: Option<String>,
    pub(crate) mesh_name: Option<String>,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Local → world transform, resolved at load time.
    pub world_matrix: Mat4,

    pub morph_targets: MorphTargets,
    pub local_bounds: Option<BoundingBox>,
}

impl SceneNode {
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            mesh_name: None,
            parent: None,
            children: Vec::new(),
            world_matrix: Mat4::IDENTITY,
            morph_targets: MorphTargets::default(),
            local_bounds: None,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    /// Attaches a mesh name. Only meaningful before the node is added to a
    /// scene, which indexes names on insertion.
    #[must_use]
    pub fn with_mesh_name(mut self, mesh_name: impl Into<String>) -> Self {
        self.mesh_name = Some(mesh_name.into());
        self
    }

    #[must_use]
    pub fn with_morph_targets(mut self, morph_targets: MorphTargets) -> Self {
        self.morph_targets = morph_targets;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn mesh_name(&self) -> Option<&str> {
        self.mesh_name.as_deref()
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Current morph weights of the attached mesh (empty when there is none).
    #[inline]
    #[must_use]
    pub fn morph_weights(&self) -> &[f32] {
        &self.morph_targets.weights
    }

    /// World-space bounds of this node's own mesh.
    #[must_use]
    pub fn world_bounds(&self) -> Option<BoundingBox> {
        self.local_bounds.map(|b| b.transform(&self.world_matrix))
    }
}

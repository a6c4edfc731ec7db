//! Blend-shape interfaces between the panel and the scene.
//!
//! The panel never touches scene nodes directly. It discovers channels through
//! [`BlendShapeSource`] and writes weights through [`BlendShapeTarget`], so any
//! scene representation that implements both can back the panel.

use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use crate::scene::NodeHandle;
use crate::vrm::{BlendShapeKey, BlendShapeRootKey};

/// One morph weight slot: target `target` of the mesh on node `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MorphBinding {
    pub node: NodeHandle,
    pub target: usize,
}

/// Opaque route from a blend-shape name to the weights it drives.
///
/// A name usually maps to a single morph target, but several meshes under the
/// same root may declare it (face and eyelashes both carrying `eyeBlink`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeightPath {
    bindings: SmallVec<[MorphBinding; 2]>,
}

impl WeightPath {
    #[must_use]
    pub fn single(node: NodeHandle, target: usize) -> Self {
        let mut bindings = SmallVec::new();
        bindings.push(MorphBinding { node, target });
        Self { bindings }
    }

    pub fn push(&mut self, binding: MorphBinding) {
        if !self.bindings.contains(&binding) {
            self.bindings.push(binding);
        }
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &[MorphBinding] {
        &self.bindings
    }
}

impl fmt::Display for WeightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}/weights[{}]", binding.node, binding.target)?;
        }
        Ok(())
    }
}

/// Blend-shape name → weight path, ordered by name.
pub type WeightPaths = BTreeMap<String, WeightPath>;

/// Read side of the scene: where blend-shape channels live.
pub trait BlendShapeSource {
    type Node: Copy;

    /// The node designated by `key`, if the asset defines one.
    fn node_for_root(&self, key: BlendShapeRootKey) -> Option<Self::Node>;

    /// Channels exposed by `node`; `None` when the node carries no
    /// blend-shape metadata.
    fn weight_paths(&self, node: Self::Node) -> Option<&WeightPaths>;
}

/// Write side of the scene: applies a weight to a named channel.
pub trait BlendShapeTarget {
    fn set_blend_shape(&mut self, value: f32, key: BlendShapeKey, root: BlendShapeRootKey);
}

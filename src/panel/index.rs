use std::collections::BTreeMap;

use crate::scene::{BlendShapeSource, WeightPaths};
use crate::vrm::BlendShapeRootKey;

/// Blend-shape channels available in a loaded asset, grouped by root.
///
/// Only roots that resolve to a node exposing weight paths are present.
/// Iteration follows [`BlendShapeRootKey`] declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlendShapeIndex {
    groups: BTreeMap<BlendShapeRootKey, WeightPaths>,
}

impl BlendShapeIndex {
    /// Queries `source` for every known root key.
    ///
    /// Roots the asset does not define, and nodes without blend-shape
    /// metadata, are skipped: assets commonly lack some of the known roots.
    pub fn build<S>(source: &S) -> Self
    where
        S: BlendShapeSource + ?Sized,
    {
        let mut groups = BTreeMap::new();

        for &key in BlendShapeRootKey::ALL {
            let Some(node) = source.node_for_root(key) else {
                log::debug!("Asset has no '{key}' node");
                continue;
            };
            let Some(paths) = source.weight_paths(node) else {
                log::debug!("Node for '{key}' exposes no blend shapes");
                continue;
            };
            groups.insert(key, paths.clone());
        }

        Self { groups }
    }

    /// Builds an index directly from already-resolved groups.
    #[must_use]
    pub fn from_groups(groups: BTreeMap<BlendShapeRootKey, WeightPaths>) -> Self {
        Self { groups }
    }

    #[must_use]
    pub fn get(&self, key: BlendShapeRootKey) -> Option<&WeightPaths> {
        self.groups.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlendShapeRootKey, &WeightPaths)> {
        self.groups.iter().map(|(k, v)| (*k, v))
    }

    /// Number of roots present.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of blend-shape channels across all roots.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }
}

//! VRM extension metadata.
//!
//! Reads the parts of the `VRMC_vrm` (1.0) and `VRM` (0.x) root extensions the
//! viewer cares about: the humanoid bone map, the model title and the VRM
//! generation. Everything else in the extensions is ignored.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::vrm::humanoid::HumanoidBone;

/// Which VRM generation an asset declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VrmVersion {
    /// Plain glTF, no VRM extension present.
    #[default]
    None,
    /// `extensions.VRM`
    V0,
    /// `extensions.VRMC_vrm`
    V1,
}

/// Metadata extracted from the VRM root extension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VrmMeta {
    pub version: VrmVersion,
    pub title: Option<String>,
    /// Humanoid bone → glTF node index.
    pub humanoid: BTreeMap<HumanoidBone, usize>,
}

impl VrmMeta {
    /// Extracts metadata from the root glTF JSON object.
    ///
    /// When both extensions are present the 1.0 data wins. Bone names outside
    /// [`HumanoidBone`] are skipped.
    #[must_use]
    pub fn from_root_json(root: &Value) -> Self {
        let extensions = root.get("extensions");

        if let Some(vrmc) = extensions.and_then(|e| e.get("VRMC_vrm")) {
            return Self {
                version: VrmVersion::V1,
                title: string_at(vrmc, &["meta", "name"]),
                humanoid: parse_bones_v1(vrmc),
            };
        }

        if let Some(vrm) = extensions.and_then(|e| e.get("VRM")) {
            return Self {
                version: VrmVersion::V0,
                title: string_at(vrm, &["meta", "title"]),
                humanoid: parse_bones_v0(vrm),
            };
        }

        Self::default()
    }

    /// Node index bound to `bone`, if the rig defines it.
    #[inline]
    #[must_use]
    pub fn bone_node(&self, bone: HumanoidBone) -> Option<usize> {
        self.humanoid.get(&bone).copied()
    }
}

/// VRM 1.0: `humanoid.humanBones` is an object keyed by bone name.
fn parse_bones_v1(vrmc: &Value) -> BTreeMap<HumanoidBone, usize> {
    let mut map = BTreeMap::new();
    let Some(bones) = vrmc
        .get("humanoid")
        .and_then(|h| h.get("humanBones"))
        .and_then(Value::as_object)
    else {
        return map;
    };

    for (name, data) in bones {
        let Some(node) = data.get("node").and_then(Value::as_u64) else {
            continue;
        };
        match HumanoidBone::from_vrm_name(name) {
            Some(bone) => {
                map.insert(bone, node as usize);
            }
            None => log::debug!("Skipping unrecognised humanoid bone '{name}'"),
        }
    }
    map
}

/// VRM 0.x: `humanoid.humanBones` is an array of `{ bone, node }`.
fn parse_bones_v0(vrm: &Value) -> BTreeMap<HumanoidBone, usize> {
    let mut map = BTreeMap::new();
    let Some(bones) = vrm
        .get("humanoid")
        .and_then(|h| h.get("humanBones"))
        .and_then(Value::as_array)
    else {
        return map;
    };

    for entry in bones {
        let (Some(name), Some(node)) = (
            entry.get("bone").and_then(Value::as_str),
            entry.get("node").and_then(Value::as_u64),
        ) else {
            continue;
        };
        match HumanoidBone::from_vrm_name(name) {
            Some(bone) => {
                map.insert(bone, node as usize);
            }
            None => log::debug!("Skipping unrecognised humanoid bone '{name}'"),
        }
    }
    map
}

fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.get(*key)?;
    }
    current
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

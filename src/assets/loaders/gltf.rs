use std::borrow::Cow;
use std::fs;
use std::path::Path;

use glam::{Mat4, Vec3};
use serde_json::Value;

use crate::assets::LoadedAsset;
use crate::errors::{Result, ViewerError};
use crate::scene::{BoundingBox, MorphTargets, NodeHandle, SceneNode, VrmScene};
use crate::vrm::VrmMeta;

/// Loads `.gltf`, `.glb` and `.vrm` documents into a [`VrmScene`].
///
/// Only the document structure is read: node hierarchy, transforms, morph
/// target names and default weights, accessor bounds. Vertex buffers are never
/// touched, so external `.bin` files and images need not be present.
pub struct GltfLoader;

impl GltfLoader {
    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<LoadedAsset> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ViewerError::AssetNotFound(path.display().to_string()));
        }

        let bytes = fs::read(path)?;
        let label = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self::load_from_slice(&bytes, label)
    }

    /// Parses an in-memory document. `label` names it in logs and in the
    /// resulting [`LoadedAsset`].
    pub fn load_from_slice(bytes: &[u8], label: impl Into<String>) -> Result<LoadedAsset> {
        let label = label.into();
        let gltf = gltf::Gltf::from_slice(bytes)?;

        // The gltf crate drops unknown root extensions, so VRM metadata is read
        // from the raw JSON chunk.
        let root_json: Value = serde_json::from_slice(&json_chunk(bytes)?)?;
        let meta = VrmMeta::from_root_json(&root_json);

        let scene = build_scene(&gltf.document);
        let animations = gltf
            .document
            .animations()
            .map(|anim| {
                anim.name()
                    .map_or_else(|| format!("animation{}", anim.index()), str::to_string)
            })
            .collect::<Vec<_>>();

        log::info!(
            "Loaded '{}': {} nodes, {} animations, VRM {:?}",
            label,
            scene.node_count(),
            animations.len(),
            meta.version
        );

        Ok(LoadedAsset {
            label,
            scene,
            meta,
            animations,
        })
    }
}

fn json_chunk(bytes: &[u8]) -> Result<Cow<'_, [u8]>> {
    if bytes.starts_with(b"glTF") {
        let glb = gltf::Glb::from_slice(bytes)?;
        Ok(glb.json)
    } else {
        Ok(Cow::Borrowed(bytes))
    }
}

// ============================================================================
// Scene construction
// ============================================================================

fn build_scene(document: &gltf::Document) -> VrmScene {
    let node_count = document.nodes().count();
    let mut has_parent = vec![false; node_count];
    for node in document.nodes() {
        for child in node.children() {
            has_parent[child.index()] = true;
        }
    }

    let mut scene = VrmScene::new();
    let mut handles: Vec<Option<NodeHandle>> = vec![None; node_count];

    for node in document.nodes().filter(|n| !has_parent[n.index()]) {
        add_subtree(&mut scene, &mut handles, &node, None, Mat4::IDENTITY);
    }

    scene.update_weight_paths();
    scene
}

fn add_subtree(
    scene: &mut VrmScene,
    handles: &mut [Option<NodeHandle>],
    node: &gltf::Node<'_>,
    parent: Option<NodeHandle>,
    parent_world: Mat4,
) {
    if handles[node.index()].is_some() {
        log::warn!("Node {} is referenced more than once, skipping", node.index());
        return;
    }

    let world = parent_world * Mat4::from_cols_array_2d(&node.transform().matrix());

    let mut scene_node = SceneNode::new(node.name().map(str::to_string));
    scene_node.world_matrix = world;

    if let Some(mesh) = node.mesh() {
        if let Some(mesh_name) = mesh.name() {
            scene_node = scene_node.with_mesh_name(mesh_name);
        }
        scene_node.morph_targets = read_morph_targets(&mesh);
        scene_node.local_bounds = mesh_bounds(&mesh);
    }

    let handle = match parent {
        Some(p) => scene.add_to_parent(scene_node, p),
        None => scene.add_node(scene_node),
    };
    handles[node.index()] = Some(handle);

    for child in node.children() {
        add_subtree(scene, handles, &child, Some(handle), world);
    }
}

fn read_morph_targets(mesh: &gltf::Mesh<'_>) -> MorphTargets {
    let count = mesh
        .primitives()
        .map(|p| p.morph_targets().count())
        .max()
        .unwrap_or(0);
    if count == 0 {
        return MorphTargets::default();
    }

    let names = target_names(mesh);
    if names.is_empty() {
        log::debug!(
            "Mesh {} has {} morph targets but no targetNames",
            mesh.name().unwrap_or("<unnamed>"),
            count
        );
    }
    let defaults = mesh.weights().unwrap_or(&[]);

    MorphTargets {
        names: (0..count).map(|i| names.get(i).cloned()).collect(),
        weights: (0..count)
            .map(|i| defaults.get(i).copied().unwrap_or(0.0))
            .collect(),
    }
}

/// Morph target names from `mesh.extras.targetNames`, falling back to the
/// first primitive's extras.
fn target_names(mesh: &gltf::Mesh<'_>) -> Vec<String> {
    let names = names_from_extras(mesh.extras());
    let names = if names.is_empty() {
        mesh.primitives()
            .next()
            .map(|p| names_from_extras(p.extras()))
            .unwrap_or_default()
    } else {
        names
    };
    strip_shared_prefix(names)
}

fn names_from_extras(extras: &gltf::json::Extras) -> Vec<String> {
    let Some(raw) = extras.as_ref() else {
        return Vec::new();
    };
    let Ok(value) = serde_json::from_str::<Value>(raw.get()) else {
        return Vec::new();
    };
    value
        .get("targetNames")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(|n| n.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Strips a `<prefix>.` shared by every name (`"Face.jawOpen"` → `"jawOpen"`).
///
/// Names are returned unchanged unless there are at least two of them, all
/// carry the same dot-terminated prefix, and none is the bare prefix.
fn strip_shared_prefix(names: Vec<String>) -> Vec<String> {
    if names.len() < 2 {
        return names;
    }
    let Some(dot) = names[0].find('.') else {
        return names;
    };
    let prefix = names[0][..=dot].to_string();
    if !names.iter().all(|n| n.len() > prefix.len() && n.starts_with(&prefix)) {
        return names;
    }
    names
        .into_iter()
        .map(|n| n[prefix.len()..].to_string())
        .collect()
}

fn mesh_bounds(mesh: &gltf::Mesh<'_>) -> Option<BoundingBox> {
    mesh.primitives()
        .filter(|p| {
            p.get(&gltf::Semantic::Positions)
                .is_some_and(|a| a.min().is_some() && a.max().is_some())
        })
        .map(|p| {
            let bounds = p.bounding_box();
            BoundingBox::new(Vec3::from(bounds.min), Vec3::from(bounds.max))
        })
        .reduce(|a, b| a.union(&b))
}

//! Asset Loading Tests
//!
//! Tests for:
//! - GltfLoader: node hierarchy, morph target names, bounds, animations
//! - VRM metadata: 1.0 and 0.x humanoid maps, titles
//! - GLB container handling
//! - Error reporting: missing files, malformed documents
//! - PendingLoad: background completion, poll/wait semantics

mod common;

use std::time::{Duration, Instant};

use glam::Vec3;
use serde_json::json;

use vrm_viewer::assets::{GltfLoader, PendingLoad};
use vrm_viewer::errors::ViewerError;
use vrm_viewer::panel::{BlendShapeIndex, RowModel};
use vrm_viewer::scene::BlendShapeSource;
use vrm_viewer::vrm::{BlendShapeRootKey, HumanoidBone, VrmVersion};

use common::{avatar_bytes, avatar_json, to_glb, vrm0_extensions, vrm1_extensions, write_temp};

const EPSILON: f32 = 1e-5;

// ============================================================================
// Scene structure
// ============================================================================

#[test]
fn loads_node_hierarchy() {
    let asset = GltfLoader::load_from_slice(&avatar_bytes(), "avatar.gltf").unwrap();
    let scene = &asset.scene;

    assert_eq!(asset.label, "avatar.gltf");
    assert_eq!(scene.node_count(), 4);
    assert_eq!(scene.root_nodes().len(), 1);

    let root = scene.get_node(scene.root_nodes()[0]).unwrap();
    assert_eq!(root.name(), Some("Root"));
    assert_eq!(root.children().len(), 3);

    let face = scene.find_node_by_name("Face").unwrap();
    assert_eq!(scene.get_node(face).unwrap().parent(), Some(scene.root_nodes()[0]));
}

#[test]
fn finds_nodes_by_node_or_mesh_name() {
    let asset = GltfLoader::load_from_slice(&avatar_bytes(), "avatar").unwrap();
    let scene = &asset.scene;

    let face = scene.find_node_by_name("face").unwrap();
    assert_eq!(scene.find_node_by_name("FaceMesh"), Some(face));
    assert_eq!(scene.get_node(face).unwrap().mesh_name(), Some("FaceMesh"));
    assert!(scene.find_node_by_name("tail").is_none());
}

#[test]
fn morph_target_names_lose_shared_prefix() {
    let asset = GltfLoader::load_from_slice(&avatar_bytes(), "avatar").unwrap();
    let face = asset.scene.find_node_by_name("Face").unwrap();
    let node = asset.scene.get_node(face).unwrap();

    let names: Vec<_> = node.morph_targets.names.iter().flatten().cloned().collect();
    assert_eq!(names, vec!["mouthSmile", "jawOpen", "eyeBlink"]);
    assert_eq!(node.morph_weights(), &[0.0, 0.0, 0.0]);
}

#[test]
fn default_weights_come_from_mesh() {
    let mut doc = avatar_json(json!({}));
    doc["meshes"][0]["weights"] = json!([0.25, 0.0, 1.0]);
    let asset = GltfLoader::load_from_slice(doc.to_string().as_bytes(), "avatar").unwrap();

    let face = asset.scene.find_node_by_name("Face").unwrap();
    assert_eq!(asset.scene.get_node(face).unwrap().morph_weights(), &[0.25, 0.0, 1.0]);
}

#[test]
fn target_names_fall_back_to_primitive_extras() {
    let mut doc = avatar_json(json!({}));
    let names = doc["meshes"][0]["extras"]["targetNames"].take();
    doc["meshes"][0]["extras"] = json!({});
    doc["meshes"][0]["primitives"][0]["extras"] = json!({ "targetNames": names });
    let asset = GltfLoader::load_from_slice(doc.to_string().as_bytes(), "avatar").unwrap();

    let face = asset.scene.find_node_by_name("Face").unwrap();
    let paths = asset.scene.weight_paths(face).unwrap();
    assert!(paths.contains_key("jawOpen"));
}

#[test]
fn unnamed_targets_keep_weight_slots() {
    let mut doc = avatar_json(json!({}));
    doc["meshes"][0]["extras"] = json!({});
    let asset = GltfLoader::load_from_slice(doc.to_string().as_bytes(), "avatar").unwrap();

    let face = asset.scene.find_node_by_name("Face").unwrap();
    assert_eq!(asset.scene.get_node(face).unwrap().morph_weights().len(), 3);
    assert!(asset.scene.weight_paths(face).is_none());
}

#[test]
fn face_targets_become_sorted_panel_rows() {
    let asset = GltfLoader::load_from_slice(&avatar_bytes(), "avatar").unwrap();
    let index = BlendShapeIndex::build(&asset.scene);

    // Body has a mesh but no morph targets, so only the face group exists.
    assert_eq!(index.len(), 1);
    assert!(index.get(BlendShapeRootKey::Face).is_some());

    let rows = RowModel::build_rows(&index);
    let names: Vec<_> = rows.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["face", "eyeBlink", "jawOpen", "mouthSmile"]);
}

#[test]
fn scene_bounds_include_node_transforms() {
    let asset = GltfLoader::load_from_slice(&avatar_bytes(), "avatar").unwrap();
    let bounds = asset.scene.bounding_box().unwrap();

    assert!(bounds.min.abs_diff_eq(Vec3::new(-0.5, 0.0, -0.5), EPSILON));
    assert!(bounds.max.abs_diff_eq(Vec3::new(0.5, 2.5, 0.5), EPSILON));
}

#[test]
fn required_material_extensions_are_accepted() {
    let mut doc = avatar_json(vrm1_extensions());
    let extensions = json!([
        "KHR_texture_transform",
        "KHR_materials_unlit",
        "KHR_materials_emissive_strength",
        "KHR_texture_basisu"
    ]);
    doc["extensionsUsed"] = extensions.clone();
    doc["extensionsRequired"] = extensions;
    let asset = GltfLoader::load_from_slice(doc.to_string().as_bytes(), "vroid.vrm").unwrap();

    let index = BlendShapeIndex::build(&asset.scene);
    assert_eq!(index.channel_count(), 3);
    assert_eq!(asset.meta.version, VrmVersion::V1);
}

#[test]
fn unknown_required_extension_is_gltf_error() {
    let mut doc = avatar_json(json!({}));
    doc["extensionsRequired"] = json!(["EXT_made_up"]);
    let err = GltfLoader::load_from_slice(doc.to_string().as_bytes(), "avatar").unwrap_err();
    assert!(matches!(err, ViewerError::Gltf(_)), "got {err:?}");
}

#[test]
fn animation_names_in_document_order() {
    let mut doc = avatar_json(json!({}));
    doc["animations"].as_array_mut().unwrap().push(json!({
        "channels": [ { "sampler": 0, "target": { "node": 2, "path": "translation" } } ],
        "samplers": [ { "input": 2, "output": 3 } ]
    }));
    let asset = GltfLoader::load_from_slice(doc.to_string().as_bytes(), "avatar").unwrap();

    assert_eq!(asset.animations, vec!["idle".to_string(), "animation1".to_string()]);
}

// ============================================================================
// VRM metadata
// ============================================================================

#[test]
fn vrm1_humanoid_and_title() {
    let asset = GltfLoader::load_from_slice(&avatar_bytes(), "avatar").unwrap();
    let meta = &asset.meta;

    assert_eq!(meta.version, VrmVersion::V1);
    assert_eq!(meta.title.as_deref(), Some("Test Avatar"));
    assert_eq!(meta.bone_node(HumanoidBone::Hips), Some(3));
    assert_eq!(meta.bone_node(HumanoidBone::Head), Some(1));
    // "tail" is not a humanoid bone.
    assert_eq!(meta.humanoid.len(), 2);
}

#[test]
fn vrm0_and_vrm1_describe_the_same_rig() {
    let v0 = avatar_json(vrm0_extensions()).to_string();
    let v1 = avatar_json(vrm1_extensions()).to_string();
    let v0 = GltfLoader::load_from_slice(v0.as_bytes(), "v0").unwrap();
    let v1 = GltfLoader::load_from_slice(v1.as_bytes(), "v1").unwrap();

    assert_eq!(v0.meta.version, VrmVersion::V0);
    assert_eq!(v0.meta.humanoid, v1.meta.humanoid);
    assert_eq!(v0.meta.title, v1.meta.title);
}

#[test]
fn plain_gltf_has_no_vrm_version() {
    let doc = avatar_json(json!({})).to_string();
    let asset = GltfLoader::load_from_slice(doc.as_bytes(), "plain").unwrap();

    assert_eq!(asset.meta.version, VrmVersion::None);
    assert!(asset.meta.humanoid.is_empty());
}

#[test]
fn glb_container_is_unwrapped() {
    let glb = to_glb(&avatar_bytes());
    let asset = GltfLoader::load_from_slice(&glb, "avatar.glb").unwrap();

    assert_eq!(asset.scene.node_count(), 4);
    assert_eq!(asset.meta.version, VrmVersion::V1);
    assert_eq!(asset.meta.bone_node(HumanoidBone::Hips), Some(3));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn missing_file_is_asset_not_found() {
    let err = GltfLoader::load("/nonexistent/dir/avatar.vrm").unwrap_err();
    assert!(matches!(err, ViewerError::AssetNotFound(_)), "got {err:?}");
}

#[test]
fn malformed_document_is_gltf_error() {
    let err = GltfLoader::load_from_slice(b"definitely not gltf", "junk").unwrap_err();
    assert!(matches!(err, ViewerError::Gltf(_)), "got {err:?}");
}

#[test]
fn load_from_file_uses_file_name_as_label() {
    let path = write_temp("label.vrm", &avatar_bytes());
    let asset = GltfLoader::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(asset.label.ends_with("label.vrm"));
    assert!(!asset.label.contains('/'));
}

// ============================================================================
// PendingLoad
// ============================================================================

#[test]
fn pending_load_wait_delivers_asset() {
    let path = write_temp("wait.vrm", &avatar_bytes());
    let pending = PendingLoad::spawn(&path).unwrap();
    let result = pending.wait();
    let _ = std::fs::remove_file(&path);

    assert_eq!(result.unwrap().scene.node_count(), 4);
}

#[test]
fn pending_load_poll_yields_result_once() {
    let path = write_temp("poll.vrm", &avatar_bytes());
    let mut pending = PendingLoad::spawn(&path).unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    let result = loop {
        if let Some(result) = pending.poll() {
            break result;
        }
        assert!(Instant::now() < deadline, "load did not finish in time");
        std::thread::sleep(Duration::from_millis(5));
    };
    let _ = std::fs::remove_file(&path);

    assert!(result.is_ok());
    assert!(pending.poll().is_none());
}

#[test]
fn pending_load_reports_missing_file() {
    let pending = PendingLoad::spawn("/nonexistent/dir/avatar.vrm").unwrap();
    assert!(matches!(pending.wait(), Err(ViewerError::AssetNotFound(_))));
}

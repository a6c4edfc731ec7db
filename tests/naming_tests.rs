//! Naming Tests
//!
//! Tests for:
//! - HumanoidBone: GLB rig names, VRM names, case handling
//! - BlendShapeRootKey / BlendShapeKey: exact lookup, declaration order
//! - FromStr / Display round trips and error reporting

use std::collections::HashSet;

use vrm_viewer::errors::ViewerError;
use vrm_viewer::vrm::{BlendShapeKey, BlendShapeRootKey, HumanoidBone};

// ============================================================================
// HumanoidBone
// ============================================================================

#[test]
fn bone_names_are_unique() {
    let names: HashSet<_> = HumanoidBone::ALL.iter().map(|b| b.name()).collect();
    assert_eq!(names.len(), HumanoidBone::ALL.len());
}

#[test]
fn glb_rig_names_resolve() {
    assert_eq!(HumanoidBone::from_name("spine1"), Some(HumanoidBone::Spine1));
    assert_eq!(HumanoidBone::from_name("leftForeArm"), Some(HumanoidBone::LeftForeArm));
    assert_eq!(HumanoidBone::from_name("leftThig"), Some(HumanoidBone::LeftThig));
    assert_eq!(HumanoidBone::from_name("rightHandPinky3"), Some(HumanoidBone::RightHandPinky3));
}

#[test]
fn vrm_names_resolve() {
    assert_eq!(HumanoidBone::from_name("hips"), Some(HumanoidBone::Hips));
    assert_eq!(HumanoidBone::from_name("upperChest"), Some(HumanoidBone::UpperChest));
    assert_eq!(
        HumanoidBone::from_name("rightLittleDistal"),
        Some(HumanoidBone::RightLittleDistal)
    );
}

#[test]
fn from_name_is_case_sensitive() {
    assert_eq!(HumanoidBone::from_name("Hips"), None);
    assert_eq!(HumanoidBone::from_name("HIPS"), None);
}

#[test]
fn from_vrm_name_accepts_upper_camel_case() {
    assert_eq!(HumanoidBone::from_vrm_name("LeftUpperArm"), Some(HumanoidBone::LeftUpperArm));
    assert_eq!(HumanoidBone::from_vrm_name("leftUpperArm"), Some(HumanoidBone::LeftUpperArm));
    assert_eq!(HumanoidBone::from_vrm_name(""), None);
    assert_eq!(HumanoidBone::from_vrm_name("Tail"), None);
}

#[test]
fn bone_parse_error_names_the_kind() {
    let err = "tail".parse::<HumanoidBone>().unwrap_err();
    assert!(matches!(
        &err,
        ViewerError::UnknownName { kind: "humanoid bone", name } if name == "tail"
    ));
    assert_eq!(err.to_string(), "Unknown humanoid bone: tail");
}

#[test]
fn bone_display_matches_name() {
    for &bone in HumanoidBone::ALL {
        assert_eq!(bone.to_string(), bone.name());
        assert_eq!(bone.name().parse::<HumanoidBone>().unwrap(), bone);
    }
}

// ============================================================================
// Blend-shape names
// ============================================================================

#[test]
fn root_keys_in_declaration_order() {
    let names: Vec<_> = BlendShapeRootKey::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, vec!["face", "body", "hair"]);
    assert!(BlendShapeRootKey::Face < BlendShapeRootKey::Hair);
}

#[test]
fn root_key_matches_node_names_ignoring_case() {
    assert!(BlendShapeRootKey::Face.matches_node_name("Face"));
    assert!(BlendShapeRootKey::Face.matches_node_name("FACE"));
    assert!(!BlendShapeRootKey::Face.matches_node_name("Face_baked"));
}

#[test]
fn root_key_lookup_is_exact() {
    assert_eq!(BlendShapeRootKey::from_name("face"), Some(BlendShapeRootKey::Face));
    assert_eq!(BlendShapeRootKey::from_name("Face"), None);
}

#[test]
fn blend_shape_names_are_unique() {
    let names: HashSet<_> = BlendShapeKey::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), BlendShapeKey::ALL.len());
}

#[test]
fn blend_shape_key_covers_presets_and_arkit() {
    for name in ["aa", "blink", "happy", "eyeBlink", "eyeBlinkLeft", "jawOpen", "mouthSmile", "tongueOut"] {
        assert!(BlendShapeKey::from_name(name).is_some(), "{name} should be known");
    }
    assert!(BlendShapeKey::from_name("unknownName").is_none());
}

#[test]
fn blend_shape_parse_error() {
    let err = "wiggle".parse::<BlendShapeKey>().unwrap_err();
    assert!(matches!(err, ViewerError::UnknownName { kind: "blend shape", .. }));
}

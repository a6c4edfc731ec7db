//! Shared fixtures for the integration tests.
//!
//! The avatar declares one buffer but never ships its bytes: the loader reads
//! only accessor `min`/`max`, never vertex data.
//!
//! ```text
//! Root (0)
//! ├── Face (1)  mesh FaceMesh, targets Face.mouthSmile / Face.jawOpen / Face.eyeBlink
//! ├── Body (2)  mesh BodyMesh, no targets
//! └── hips (3)
//! ```

#![allow(dead_code)]

use serde_json::{Value, json};

/// Avatar document with the given root `extensions` object.
pub fn avatar_json(extensions: Value) -> Value {
    json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [ { "nodes": [0] } ],
        "nodes": [
            { "name": "Root", "children": [1, 2, 3] },
            { "name": "Face", "mesh": 0, "translation": [0.0, 1.5, 0.0] },
            { "name": "Body", "mesh": 1 },
            { "name": "hips" }
        ],
        "meshes": [
            {
                "name": "FaceMesh",
                "primitives": [ {
                    "attributes": { "POSITION": 0 },
                    "targets": [ { "POSITION": 1 }, { "POSITION": 1 }, { "POSITION": 1 } ]
                } ],
                "weights": [0.0, 0.0, 0.0],
                "extras": { "targetNames": ["Face.mouthSmile", "Face.jawOpen", "Face.eyeBlink"] }
            },
            {
                "name": "BodyMesh",
                "primitives": [ { "attributes": { "POSITION": 0 } } ]
            }
        ],
        "buffers": [ { "byteLength": 256 } ],
        "bufferViews": [ { "buffer": 0, "byteLength": 256 } ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
              "min": [-0.5, 0.0, -0.5], "max": [0.5, 1.0, 0.5] },
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
              "min": [0.0, 0.0, 0.0], "max": [0.0, 0.1, 0.0] },
            { "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.0] },
            { "bufferView": 0, "componentType": 5126, "count": 2, "type": "VEC3" }
        ],
        "animations": [ {
            "name": "idle",
            "channels": [ { "sampler": 0, "target": { "node": 1, "path": "translation" } } ],
            "samplers": [ { "input": 2, "output": 3 } ]
        } ],
        "extensions": extensions
    })
}

pub fn vrm1_extensions() -> Value {
    json!({
        "VRMC_vrm": {
            "specVersion": "1.0",
            "meta": { "name": "Test Avatar" },
            "humanoid": { "humanBones": {
                "hips": { "node": 3 },
                "head": { "node": 1 },
                "tail": { "node": 0 }
            } }
        }
    })
}

pub fn vrm0_extensions() -> Value {
    json!({
        "VRM": {
            "meta": { "title": "Test Avatar" },
            "humanoid": { "humanBones": [
                { "bone": "hips", "node": 3 },
                { "bone": "Head", "node": 1 }
            ] }
        }
    })
}

/// Serialized VRM 1.0 avatar.
pub fn avatar_bytes() -> Vec<u8> {
    avatar_json(vrm1_extensions()).to_string().into_bytes()
}

/// Wraps a JSON document in a GLB container with no binary chunk.
pub fn to_glb(json: &[u8]) -> Vec<u8> {
    let mut chunk = json.to_vec();
    while chunk.len() % 4 != 0 {
        chunk.push(b' ');
    }
    let total = 12 + 8 + chunk.len();

    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&chunk);
    glb
}

/// Writes `bytes` to a per-process temp file and returns its path.
pub fn write_temp(name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("vrm_viewer_{}_{name}", std::process::id()));
    std::fs::write(&path, bytes).expect("temp file is writable");
    path
}

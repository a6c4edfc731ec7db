//! Scene graph module
//!
//! The scene side of the viewer core:
//! - [`VrmScene`]: node hierarchy, morph weights and bounds of a loaded asset
//! - [`SceneNode`]: a single node
//! - [`BlendShapeSource`] / [`BlendShapeTarget`]: the interfaces the
//!   blend-shape panel reads from and writes through

pub mod blend_shapes;
pub mod bounds;
pub mod node;
pub mod scene;

pub use blend_shapes::{BlendShapeSource, BlendShapeTarget, MorphBinding, WeightPath, WeightPaths};
pub use bounds::BoundingBox;
pub use node::{MorphTargets, SceneNode};
pub use scene::VrmScene;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}

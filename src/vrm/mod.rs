//! VRM naming and metadata
//!
//! - [`HumanoidBone`]: the humanoid skeletal joint taxonomy
//! - [`BlendShapeRootKey`] / [`BlendShapeKey`]: closed sets of blend-shape
//!   group and channel names
//! - [`VrmMeta`]: humanoid map and title read from the VRM root extension

#[macro_use]
mod macros;

pub mod blend_shape;
pub mod humanoid;
pub mod meta;

pub use blend_shape::{BlendShapeKey, BlendShapeRootKey};
pub use humanoid::HumanoidBone;
pub use meta::{VrmMeta, VrmVersion};

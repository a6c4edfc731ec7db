//! Asset loading
//!
//! - [`GltfLoader`]: synchronous parsing of a glTF/VRM document into a scene
//! - [`PendingLoad`]: the same work on a background thread, handed back to
//!   the main thread as one completed result

pub mod loaders;
pub mod pending;

pub use loaders::GltfLoader;
pub use pending::PendingLoad;

use crate::scene::VrmScene;
use crate::vrm::VrmMeta;

/// A parsed document, ready to be shown.
#[derive(Debug)]
pub struct LoadedAsset {
    /// File name, or the label given to an in-memory load.
    pub label: String,
    pub scene: VrmScene,
    pub meta: VrmMeta,
    /// Animation names in document order.
    pub animations: Vec<String>,
}

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Viewer core for glTF/VRM assets.
//!
//! Loads a document, exposes its scene graph, and drives a blend-shape panel:
//! morph targets found under the known roots become grouped slider rows, and
//! slider movements are routed back into per-node morph weights.

pub mod assets;
pub mod errors;
pub mod framing;
pub mod panel;
pub mod scene;
pub mod settings;
pub mod viewer;
pub mod vrm;

pub use assets::{GltfLoader, LoadedAsset, PendingLoad};
pub use errors::{Result, ViewerError};
pub use framing::CameraPose;
pub use panel::{BlendShapeIndex, BlendShapeRouter, PresentationRow, RowModel, SliderEvent};
pub use scene::{BlendShapeSource, BlendShapeTarget, NodeHandle, VrmScene, WeightPath, WeightPaths};
pub use settings::ViewerSettings;
pub use viewer::ViewerSession;
pub use vrm::{BlendShapeKey, BlendShapeRootKey, HumanoidBone};

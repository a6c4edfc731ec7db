//! Error Types
//!
//! This module defines the error types used throughout the viewer core.
//!
//! # Overview
//!
//! The main error type [`ViewerError`] covers the failure modes that reach the
//! caller:
//! - Asset lookup and file I/O failures
//! - glTF / VRM extension parsing errors
//! - Settings validation errors
//!
//! Missing blend-shape roots, nodes without morph targets and unrecognised
//! slider events are *not* errors: they are skipped where they occur.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ViewerError>`.
//!
//! ```rust,ignore
//! use vrm_viewer::errors::Result;
//! use vrm_viewer::assets::GltfLoader;
//!
//! fn open(path: &str) -> Result<()> {
//!     let asset = GltfLoader::load(path)?;
//!     println!("{} nodes", asset.scene.node_count());
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the viewer core.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset file does not exist.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// glTF parsing or validation error.
    #[error("glTF error: {0}")]
    Gltf(String),

    /// The background loader went away without delivering a result.
    #[error("Asset loader disconnected before completing: {0}")]
    LoaderDisconnected(String),

    // ========================================================================
    // I/O & Format Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error (VRM extensions, settings files).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Naming & Configuration Errors
    // ========================================================================
    /// A string did not match any member of a closed name set.
    #[error("Unknown {kind}: {name}")]
    UnknownName {
        /// Which enumeration was searched
        kind: &'static str,
        /// The rejected input
        name: String,
    },

    /// A settings field holds a value outside its allowed range.
    #[error("Invalid setting {field}: {message}")]
    InvalidSetting {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl From<gltf::Error> for ViewerError {
    fn from(err: gltf::Error) -> Self {
        ViewerError::Gltf(err.to_string())
    }
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;

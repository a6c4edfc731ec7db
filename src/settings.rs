//! Viewer Settings
//!
//! Configuration for the viewer core, split by the part of the UI it affects.
//! Every field has a default, so a settings file only needs to name what it
//! changes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vrm_viewer::settings::ViewerSettings;
//!
//! // Defaults: 40px group rows, 30px slider rows, 60° camera
//! let settings = ViewerSettings::default();
//!
//! // Partial JSON overrides
//! let settings = ViewerSettings::from_json_str(r#"{ "camera": { "fov_degrees": 45.0 } }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ViewerError};

// ---------------------------------------------------------------------------
// PanelSettings
// ---------------------------------------------------------------------------

/// Layout of the blend-shape panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Height of a group header row.
    pub group_row_height: f32,
    /// Height of a slider row.
    pub slider_row_height: f32,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            group_row_height: 40.0,
            slider_row_height: 30.0,
        }
    }
}

// ---------------------------------------------------------------------------
// CameraSettings
// ---------------------------------------------------------------------------

/// How "focus on scene" places the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Direction from the scene center towards the camera. Normalised on use.
    pub view_direction: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            view_direction: [1.0, 0.5, 1.0],
        }
    }
}

impl CameraSettings {
    #[inline]
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        Vec3::from_array(self.view_direction)
    }
}

// ---------------------------------------------------------------------------
// ViewerSettings
// ---------------------------------------------------------------------------

/// Top-level viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub panel: PanelSettings,
    pub camera: CameraSettings,
    /// Start the first animation of a freshly loaded asset.
    pub autoplay_first_animation: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            panel: PanelSettings::default(),
            camera: CameraSettings::default(),
            autoplay_first_animation: true,
        }
    }
}

impl ViewerSettings {
    /// Parses and validates settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Rejects values the viewer cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("panel.group_row_height", self.panel.group_row_height)?;
        ensure_positive("panel.slider_row_height", self.panel.slider_row_height)?;
        ensure_positive("camera.fov_degrees", self.camera.fov_degrees)?;
        if self.camera.fov_degrees >= 180.0 {
            return Err(ViewerError::InvalidSetting {
                field: "camera.fov_degrees",
                message: format!("must be below 180, got {}", self.camera.fov_degrees),
            });
        }
        if self.camera.view_direction().length_squared() <= f32::EPSILON {
            return Err(ViewerError::InvalidSetting {
                field: "camera.view_direction",
                message: "must not be the zero vector".to_string(),
            });
        }
        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ViewerError::InvalidSetting {
            field,
            message: format!("must be positive, got {value}"),
        })
    }
}

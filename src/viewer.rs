//! Viewer Session Module
//!
//! This module contains [`ViewerSession`], the main-thread owner of the
//! currently displayed asset and its blend-shape panel. It has no window or
//! widget code, so any frontend (desktop UI, CLI inspector, tests) can drive
//! it.
//!
//! # Lifecycle
//!
//! 1. Create with [`ViewerSession::new`]
//! 2. Start a load with [`PendingLoad::spawn`](crate::assets::PendingLoad::spawn)
//!    and hand its result to [`ViewerSession::finish_load`]
//! 3. Forward slider movements to [`ViewerSession::slider_changed`]
//!
//! # Example
//!
//! ```rust,ignore
//! use vrm_viewer::{PendingLoad, ViewerSession, ViewerSettings};
//!
//! let mut session = ViewerSession::new(ViewerSettings::default());
//! let mut pending = PendingLoad::spawn("avatar.vrm")?;
//!
//! // Main loop
//! loop {
//!     if let Some(result) = pending.poll() {
//!         if let Err(err) = session.finish_load(result) {
//!             show_error_dialog(&err);
//!         }
//!     }
//!     // ... draw session.rows() ...
//! }
//! ```

use crate::assets::LoadedAsset;
use crate::errors::Result;
use crate::framing::{CameraPose, focus_on_bounds};
use crate::panel::{BlendShapeIndex, RowModel};
use crate::settings::ViewerSettings;

/// The state behind one viewer window.
///
/// Owns the loaded asset and the panel rows exclusively. Rows are rebuilt in
/// full whenever a new asset arrives and dropped when it is replaced or the
/// panel is closed.
#[derive(Debug)]
pub struct ViewerSession {
    settings: ViewerSettings,
    asset: Option<LoadedAsset>,
    index: BlendShapeIndex,
    rows: RowModel,
    camera: Option<CameraPose>,
    panel_open: bool,
}

impl ViewerSession {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            rows: RowModel::new(settings.panel),
            settings,
            asset: None,
            index: BlendShapeIndex::default(),
            camera: None,
            panel_open: false,
        }
    }

    // ========================================================================
    // Asset lifecycle
    // ========================================================================

    /// Accepts the outcome of a load.
    ///
    /// On success the new asset replaces the current one, the blend-shape
    /// panel is rebuilt and the camera is framed on the scene. On failure the
    /// session is left exactly as it was and the error is returned for the
    /// frontend to present.
    pub fn finish_load(&mut self, result: Result<LoadedAsset>) -> Result<()> {
        match result {
            Ok(asset) => {
                self.show_asset(asset);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to load asset: {err}");
                Err(err)
            }
        }
    }

    /// Replaces the current asset and rebuilds everything derived from it.
    pub fn show_asset(&mut self, asset: LoadedAsset) {
        let index = BlendShapeIndex::build(&asset.scene);
        let mut rows = RowModel::new(self.settings.panel);
        rows.rebuild(&index);

        log::info!(
            "Showing '{}': {} blend-shape groups, {} channels",
            asset.label,
            index.len(),
            index.channel_count()
        );

        self.camera = asset
            .scene
            .bounding_box()
            .map(|bounds| focus_on_bounds(&bounds, &self.settings.camera));
        self.index = index;
        self.rows = rows;
        self.asset = Some(asset);
        self.panel_open = true;
    }

    /// Discards the panel rows. The asset stays loaded.
    pub fn close_panel(&mut self) {
        self.rows.clear();
        self.panel_open = false;
    }

    /// Rebuilds the panel from the current asset with every slider at zero,
    /// and zeroes the scene's morph weights to match.
    pub fn reopen_panel(&mut self) {
        let Some(asset) = self.asset.as_mut() else {
            return;
        };
        asset.scene.reset_morph_weights();
        self.rows.rebuild(&self.index);
        self.panel_open = true;
    }

    // ========================================================================
    // Panel events
    // ========================================================================

    /// Handles a slider movement on row `index`.
    ///
    /// Header rows, out-of-range indices and sliders whose names no longer
    /// resolve are ignored.
    pub fn slider_changed(&mut self, index: usize, value: f32) {
        let Some(event) = self.rows.set_value(index, value) else {
            return;
        };
        if let Some(asset) = self.asset.as_mut() {
            event.dispatch(&mut asset.scene);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn asset(&self) -> Option<&LoadedAsset> {
        self.asset.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &RowModel {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn blend_shape_index(&self) -> &BlendShapeIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Camera placement from the last "focus on scene".
    #[inline]
    #[must_use]
    pub fn camera(&self) -> Option<CameraPose> {
        self.camera
    }

    /// Re-frames the camera on the current scene.
    pub fn focus_on_scene(&mut self) -> Option<CameraPose> {
        let bounds = self.asset.as_ref()?.scene.bounding_box()?;
        self.camera = Some(focus_on_bounds(&bounds, &self.settings.camera));
        self.camera
    }

    /// The animation to start playing, if autoplay is enabled.
    #[must_use]
    pub fn autoplay_animation(&self) -> Option<&str> {
        if !self.settings.autoplay_first_animation {
            return None;
        }
        self.asset
            .as_ref()?
            .animations
            .first()
            .map(String::as_str)
    }
}

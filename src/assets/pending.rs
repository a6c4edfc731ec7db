use std::path::PathBuf;
use std::thread;

use flume::{Receiver, TryRecvError};

use crate::assets::LoadedAsset;
use crate::assets::loaders::GltfLoader;
use crate::errors::{Result, ViewerError};

/// A document being loaded on a background thread.
///
/// The main thread either polls it once per frame or blocks on it; in both
/// cases the result is handed over whole, never partially.
#[derive(Debug)]
pub struct PendingLoad {
    label: String,
    rx: Receiver<Result<LoadedAsset>>,
    finished: bool,
}

impl PendingLoad {
    /// Starts loading `path` on a dedicated thread.
    pub fn spawn(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let label = path.display().to_string();
        let (tx, rx) = flume::bounded(1);

        thread::Builder::new()
            .name("asset-loader".to_string())
            .spawn(move || {
                // The receiver may already be gone if the load was abandoned.
                let _ = tx.send(GltfLoader::load(&path));
            })?;

        log::debug!("Started loading '{label}'");
        Ok(Self {
            label,
            rx,
            finished: false,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Non-blocking check. Returns the result exactly once, then `None`.
    pub fn poll(&mut self) -> Option<Result<LoadedAsset>> {
        if self.finished {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err(ViewerError::LoaderDisconnected(self.label.clone()))
            }
        };
        self.finished = true;
        Some(result)
    }

    /// Blocks until the load completes.
    pub fn wait(self) -> Result<LoadedAsset> {
        if self.finished {
            return Err(ViewerError::LoaderDisconnected(self.label));
        }
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(ViewerError::LoaderDisconnected(self.label)))
    }
}

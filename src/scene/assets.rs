//! Visual asset loading.
//!
//! Textures load asynchronously from the navigator's point of view: the
//! scene requests every asset once at initialization and the render loop
//! polls the source for results each frame. A failed load is permanent for
//! the session; the object keeps its flat fallback colour.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;

use crate::error::AssetError;

/// Which scene object an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// The central overview body.
    Overview,
    /// The planet of the section at this index.
    Section(usize),
}

/// A loaded texture, opaque to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHandle {
    /// Path the texture was loaded from.
    pub path: String,
    /// Size of the encoded image.
    pub byte_len: usize,
}

/// Outcome of one asset request.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetEvent {
    /// Object the asset was requested for.
    pub key: AssetKey,
    /// The texture, or why it could not be loaded.
    pub result: Result<TextureHandle, AssetError>,
}

/// Something that can load textures for the scene.
pub trait AssetSource {
    /// Start loading `path` on behalf of `key`. Must not block on the
    /// result; completions are reported through [`poll`](Self::poll).
    fn request(&mut self, key: AssetKey, path: &str);

    /// Drain the results that completed since the last poll.
    fn poll(&mut self) -> Vec<AssetEvent>;
}

/// Source that never loads anything. Every object keeps its fallback
/// colour.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn request(&mut self, _key: AssetKey, _path: &str) {}

    fn poll(&mut self) -> Vec<AssetEvent> {
        Vec::new()
    }
}

/// Loads one texture given the root directory and the asset path.
type Loader = dyn Fn(&Path, &str) -> Result<TextureHandle, AssetError> + Send;

/// Loads textures from files under a root directory on a background
/// thread. Asset paths are resolved relative to the root, with any leading
/// `/` stripped.
///
/// Requests are queued to the `asset-loader` thread and results are
/// collected without blocking in [`poll`](AssetSource::poll). Dropping the
/// source closes the queue and joins the thread.
#[derive(Debug)]
pub struct DirectoryAssets {
    root: PathBuf,
    request_tx: Option<mpsc::Sender<(AssetKey, String)>>,
    result_rx: mpsc::Receiver<AssetEvent>,
    /// Requests that never reached a loader thread.
    rejected: Vec<AssetEvent>,
    worker: Option<JoinHandle<()>>,
}

impl DirectoryAssets {
    /// Source rooted at `root`. Spawns the loader thread.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_loader(root.into(), Box::new(read_texture))
    }

    fn with_loader(root: PathBuf, load: Box<Loader>) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<(AssetKey, String)>();
        let (result_tx, result_rx) = mpsc::channel();
        let worker_root = root.clone();

        let spawned = std::thread::Builder::new()
            .name("asset-loader".into())
            .spawn(move || {
                for (key, path) in request_rx {
                    let result = load(&worker_root, &path);
                    if result_tx.send(AssetEvent { key, result }).is_err() {
                        break;
                    }
                }
            });

        let (request_tx, worker) = match spawned {
            Ok(handle) => (Some(request_tx), Some(handle)),
            Err(e) => {
                log::error!("asset loader thread failed to start: {e}");
                (None, None)
            }
        };

        Self {
            root,
            request_tx,
            result_rx,
            rejected: Vec::new(),
            worker,
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirectoryAssets {
    fn request(&mut self, key: AssetKey, path: &str) {
        let queued = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send((key, path.to_owned())).is_ok());
        if !queued {
            self.rejected.push(AssetEvent {
                key,
                result: Err(AssetError::new(path, "loader not running")),
            });
        }
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        let mut events = std::mem::take(&mut self.rejected);
        events.extend(self.result_rx.try_iter());
        events
    }
}

impl Drop for DirectoryAssets {
    fn drop(&mut self) {
        drop(self.request_tx.take());
        if self.worker.take().is_some_and(|h| h.join().is_err()) {
            log::error!("asset loader thread panicked");
        }
    }
}

fn read_texture(root: &Path, path: &str) -> Result<TextureHandle, AssetError> {
    let file = root.join(path.trim_start_matches('/'));
    let bytes =
        std::fs::read(&file).map_err(|e| AssetError::new(path, e.to_string()))?;
    if bytes.is_empty() {
        return Err(AssetError::new(path, "file is empty"));
    }
    Ok(TextureHandle {
        path: path.to_owned(),
        byte_len: bytes.len(),
    })
}

//! Background loading of preview images for the selected pair
//!
//! Every new selection bumps a generation counter. Workers check it before
//! doing any real work and `poll` drops results from older generations, so a
//! slow load can never overwrite the image of a newer selection.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::selection::SelectionPair;

/// Shared placeholder for bodies without their own preview
pub const FALLBACK_IMAGE: &str = "preview.png";

/// Decoded RGBA8 pixels
#[derive(Debug, Clone, PartialEq)]
pub struct BodyImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl BodyImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| format!("Failed to guess format: {}", e))?;
        let img = reader
            .decode()
            .map_err(|e| format!("Failed to decode image: {}", e))?
            .to_rgba8();
        Ok(Self {
            width: img.width(),
            height: img.height(),
            rgba: img.into_raw(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_bytes(&bytes)
    }
}

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(Arc<BodyImage>),
    /// No file at the expected path
    Missing(PathBuf),
    Failed(String),
}

enum LoadOutcome {
    Loaded(BodyImage),
    Missing(PathBuf),
    Failed(String),
}

struct LoadResult {
    generation: u64,
    id: String,
    outcome: LoadOutcome,
}

pub struct ImagePrefetcher {
    assets_dir: PathBuf,
    generation: Arc<AtomicU64>,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
    current: Option<SelectionPair>,
    states: HashMap<String, ImageState>,
}

impl ImagePrefetcher {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            assets_dir: assets_dir.into(),
            generation: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
            current: None,
            states: HashMap::new(),
        }
    }

    /// Start loading the images of `pair`, superseding any earlier request
    pub fn request(&mut self, catalog: &Catalog, pair: &SelectionPair) {
        if self.current.as_ref() == Some(pair) {
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.current = Some(pair.clone());
        self.states.clear();

        for id in [&pair.first, &pair.second] {
            if self.states.contains_key(id.as_str()) {
                continue;
            }
            let Ok(body) = catalog.get(id) else {
                self.states
                    .insert(id.clone(), ImageState::Failed(format!("unknown body '{}'", id)));
                continue;
            };

            let file = body.image.as_deref().unwrap_or(FALLBACK_IMAGE);
            let path = self.assets_dir.join(file);
            self.states.insert(id.clone(), ImageState::Loading);
            log::debug!("prefetch #{generation}: {} from {}", id, path.display());

            let tx = self.tx.clone();
            let current = self.generation.clone();
            let id = id.clone();
            std::thread::spawn(move || {
                if current.load(Ordering::Relaxed) != generation {
                    return;
                }
                let outcome = if !path.is_file() {
                    LoadOutcome::Missing(path)
                } else {
                    match BodyImage::load(&path) {
                        Ok(image) => LoadOutcome::Loaded(image),
                        Err(e) => LoadOutcome::Failed(e),
                    }
                };
                let _ = tx.send(LoadResult { generation, id, outcome });
            });
        }
    }

    /// Apply finished loads of the current generation, returning how many
    pub fn poll(&mut self) -> usize {
        let current = self.generation();
        let mut applied = 0;

        while let Ok(result) = self.rx.try_recv() {
            if result.generation != current {
                log::debug!("prefetch: dropping stale result for {}", result.id);
                continue;
            }
            let state = match result.outcome {
                LoadOutcome::Loaded(image) => ImageState::Loaded(Arc::new(image)),
                LoadOutcome::Missing(path) => {
                    log::debug!("no preview for {} at {}", result.id, path.display());
                    ImageState::Missing(path)
                }
                LoadOutcome::Failed(e) => {
                    log::warn!("preview for {} unavailable: {}", result.id, e);
                    ImageState::Failed(e)
                }
            };
            self.states.insert(result.id, state);
            applied += 1;
        }

        applied
    }

    pub fn state(&self, id: &str) -> Option<&ImageState> {
        self.states.get(id)
    }

    /// Loaded image for `id`, if any
    pub fn image(&self, id: &str) -> Option<&Arc<BodyImage>> {
        match self.states.get(id) {
            Some(ImageState::Loaded(image)) => Some(image),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.states.values().any(|s| matches!(s, ImageState::Loading))
    }
}

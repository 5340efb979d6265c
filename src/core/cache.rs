//! The source cache: one built index per process, keyed by table path.
//!
//! An explicit object the caller owns and passes around, not module state.
//! One slot only: querying a different path replaces the previous index
//! rather than accumulating every table ever touched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::info;

use crate::ingest::{load_annotation_index, AnnotationIndex};
use crate::Result;

struct CacheSlot {
    path: PathBuf,
    index: Arc<AnnotationIndex>,
    built_at: DateTime<Utc>,
}

pub struct SourceCache {
    slot: Mutex<Option<CacheSlot>>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// The index for `path`, built on first use. The lock is held across
    /// construction, so concurrent cold starts on one path ingest once. A
    /// failed build leaves any previous slot in place.
    pub fn index_for(&self, path: &Path) -> Result<Arc<AnnotationIndex>> {
        let mut slot = self.slot.lock();
        if let Some(existing) = slot.as_ref() {
            if existing.path == path {
                return Ok(Arc::clone(&existing.index));
            }
        }

        info!(path = %path.display(), "building annotation index");
        let index = Arc::new(load_annotation_index(path)?);
        *slot = Some(CacheSlot {
            path: path.to_path_buf(),
            index: Arc::clone(&index),
            built_at: Utc::now(),
        });
        Ok(index)
    }

    /// When the cached slot was built, if any.
    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        self.slot.lock().as_ref().map(|s| s.built_at)
    }
}

impl Default for SourceCache {
    fn default() -> Self {
        Self::new()
    }
}

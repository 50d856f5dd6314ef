//! Directory-backed content stores with an explicit cache

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::errors::ContentError;
use crate::log::{debug, warn};

use super::{ContentDocument, MissionPackData, SeasonData, to_key};

/// Environment variable naming the content root
pub const CONTENT_DIR_ENV: &str = "DEPLOYMAP_CONTENT_DIR";
const DEFAULT_CONTENT_DIR: &str = "public";

/// Loaded documents keyed by `to_key(name)`
pub type Catalog<T> = Arc<BTreeMap<String, T>>;

/// All documents of one kind found in a directory.
///
/// Nothing is read until the first [`load`](ContentStore::load). A failed
/// read of the directory is cached as an empty catalog until
/// [`invalidate`](ContentStore::invalidate) is called.
#[derive(Debug)]
pub struct ContentStore<T> {
    dir: PathBuf,
    cache: Mutex<Option<Catalog<T>>>,
}

impl<T: ContentDocument> ContentStore<T> {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ContentStore {
            dir: dir.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every document, or return the cached catalog when `use_cache`
    /// is set and one exists. A fresh load always replaces the cache.
    pub fn load(&self, use_cache: bool) -> Catalog<T> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if use_cache {
            if let Some(catalog) = cache.as_ref() {
                return Arc::clone(catalog);
            }
        }

        let (documents, _skipped) = scan_directory::<T>(&self.dir);
        let catalog = Arc::new(documents);
        *cache = Some(Arc::clone(&catalog));
        catalog
    }

    /// Look one document up by key; always reloads from disk
    pub fn get_by_key(&self, key: &str) -> Option<T> {
        self.load(false).get(key).cloned()
    }

    /// Whether a catalog is currently cached
    pub fn is_cached(&self) -> bool {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn invalidate(&self) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Read every `*.json` file in `dir` as a `T`.
///
/// Returns the documents that loaded together with the errors for the files
/// that were skipped. A missing or unreadable directory yields nothing.
pub fn scan_directory<T: ContentDocument>(dir: &Path) -> (BTreeMap<String, T>, Vec<ContentError>) {
    let mut documents = BTreeMap::new();
    let mut skipped = Vec::new();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            warn!(dir = %dir.display(), error = %source, "could not read content directory");
            skipped.push(ContentError::Io {
                path: dir.display().to_string(),
                source,
            });
            return (documents, skipped);
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    for path in files {
        match load_file::<T>(&path) {
            Ok(doc) => {
                debug!(file = %path.display(), name = doc.name(), "loaded content");
                documents.insert(to_key(doc.name()), doc);
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping content file");
                skipped.push(err);
            }
        }
    }

    (documents, skipped)
}

fn load_file<T: ContentDocument>(path: &Path) -> Result<T, ContentError> {
    let file_name = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: file_name.clone(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| ContentError::json(&file_name, &raw, &e))?;
    if !T::matches_shape(&value) {
        return Err(ContentError::ShapeMismatch {
            name: file_name,
            expected: T::SHAPE,
        });
    }

    // Re-parse from text so errors inside the document keep their spans
    serde_json::from_str(&raw).map_err(|e| ContentError::json(&file_name, &raw, &e))
}

// ============================================================================
// Process-wide stores
// ============================================================================

/// Content root: `$DEPLOYMAP_CONTENT_DIR`, or `public` when unset
pub fn content_dir() -> PathBuf {
    std::env::var_os(CONTENT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR))
}

static SEASONS: LazyLock<ContentStore<SeasonData>> =
    LazyLock::new(|| ContentStore::new(content_dir().join("seasons")));

static MISSION_PACKS: LazyLock<ContentStore<MissionPackData>> =
    LazyLock::new(|| ContentStore::new(content_dir().join("mission_packs")));

/// Seasons under `<content root>/seasons`
pub fn seasons() -> &'static ContentStore<SeasonData> {
    &SEASONS
}

/// Mission packs under `<content root>/mission_packs`
pub fn mission_packs() -> &'static ContentStore<MissionPackData> {
    &MISSION_PACKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_empty() {
        let store: ContentStore<SeasonData> = ContentStore::new("/definitely/not/here");
        assert!(store.load(true).is_empty());
        assert!(store.is_cached());
        store.invalidate();
        assert!(!store.is_cached());
    }

    #[test]
    fn missing_directory_reports_io_error() {
        let (docs, skipped) = scan_directory::<MissionPackData>(Path::new("/definitely/not/here"));
        assert!(docs.is_empty());
        assert!(matches!(skipped.as_slice(), [ContentError::Io { .. }]));
    }
}

// Compiled-script cache probe

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Probe into the host runtime's compiled-script cache.
///
/// Answers "is this exact path's compiled form already resident". A hit
/// proves the file exists without a filesystem stat; a miss proves
/// nothing, and the filesystem pass remains the fallback.
pub trait CompiledCache {
    fn contains(&self, path: &Path) -> bool;
}

/// Probe for hosts without a compiled-script cache; never hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CompiledCache for NoCache {
    fn contains(&self, _path: &Path) -> bool {
        false
    }
}

/// In-process record of compiled scripts, shared with the host runtime.
///
/// The runtime records every script it compiles; resolver lookups then
/// see those paths without touching the filesystem. Interior-mutable so
/// a single record can sit behind shared handles.
#[derive(Debug, Default)]
pub struct MemoryCache {
    paths: RwLock<HashSet<PathBuf>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a compiled script
    pub fn record<P: Into<PathBuf>>(&self, path: P) {
        if let Ok(mut paths) = self.paths.write() {
            paths.insert(path.into());
        }
    }

    /// Forget a compiled script (e.g. after invalidation)
    pub fn evict(&self, path: &Path) {
        if let Ok(mut paths) = self.paths.write() {
            paths.remove(path);
        }
    }

    /// Number of recorded scripts
    pub fn len(&self) -> usize {
        self.paths.read().map(|paths| paths.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CompiledCache for MemoryCache {
    fn contains(&self, path: &Path) -> bool {
        self.paths
            .read()
            .map(|paths| paths.contains(path))
            .unwrap_or(false)
    }
}

impl<C: CompiledCache + ?Sized> CompiledCache for Arc<C> {
    fn contains(&self, path: &Path) -> bool {
        (**self).contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_never_hits() {
        let cache = NoCache;
        assert!(!cache.contains(Path::new("/srv/app/Kernel.kora")));
    }

    #[test]
    fn test_memory_cache_record_and_probe() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());

        cache.record("/srv/app/Kernel.kora");
        assert!(cache.contains(Path::new("/srv/app/Kernel.kora")));
        assert!(!cache.contains(Path::new("/srv/app/Env.kora")));
        assert_eq!(cache.len(), 1);

        cache.evict(Path::new("/srv/app/Kernel.kora"));
        assert!(!cache.contains(Path::new("/srv/app/Kernel.kora")));
    }

    #[test]
    fn test_shared_handle_sees_later_records() {
        let cache = Arc::new(MemoryCache::new());
        let probe: Arc<MemoryCache> = Arc::clone(&cache);

        cache.record("/srv/app/Late.kora");
        assert!(probe.contains(Path::new("/srv/app/Late.kora")));
    }
}

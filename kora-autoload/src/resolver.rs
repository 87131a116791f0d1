// Class-name-to-file-path resolution
// Prefix-mapped directory search with a compiled-cache fast path and an
// exact-match class map fallback

use crate::cache::{CompiledCache, NoCache};
use crate::class_map::{ClassMap, ClassMapSource};
use crate::error::AutoloadError;
use crate::manifest::AutoloadManifest;
use crate::prefix_map::PrefixMap;
use log::{debug, trace};
use once_cell::sync::OnceCell;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Kora source file extension
pub const SOURCE_EXT: &str = "kora";

/// Namespace separator in fully-qualified class names
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Resolves fully-qualified class names to source file paths.
///
/// Lookup order: the bucket of prefixes sharing the name's first
/// character, each matching prefix's directories probed against the
/// compiled-script cache before any filesystem stat; then the class map,
/// loaded from its source on first use and never again.
pub struct ClassFileResolver {
    prefixes: PrefixMap,
    cache: Box<dyn CompiledCache>,
    class_map_source: Option<Box<dyn ClassMapSource>>,
    class_map: OnceCell<ClassMap>,
}

impl ClassFileResolver {
    /// Create an empty resolver with no cache probe and no class map
    pub fn new() -> Self {
        Self {
            prefixes: PrefixMap::new(),
            cache: Box::new(NoCache),
            class_map_source: None,
            class_map: OnceCell::new(),
        }
    }

    /// Create a resolver pre-populated from a namespace manifest
    pub fn from_manifest(manifest: AutoloadManifest) -> Self {
        let mut resolver = Self::new();
        for entry in manifest.entries {
            resolver.set(&entry.prefix, entry.paths.into_paths());
        }
        resolver
    }

    /// Attach a compiled-script cache probe
    pub fn with_cache(mut self, cache: Box<dyn CompiledCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Attach the class map source consulted after prefix misses
    pub fn with_class_map_source(mut self, source: Box<dyn ClassMapSource>) -> Self {
        self.class_map_source = Some(source);
        self
    }

    /// Register `paths` as the base directories for `prefix`, replacing
    /// any previous registration of that exact prefix
    pub fn set(&mut self, prefix: &str, paths: Vec<PathBuf>) {
        self.prefixes.set(prefix, paths);
    }

    /// Find the source file defining `class`.
    ///
    /// `Ok(None)` means no registered prefix or class map entry knows the
    /// class; that is an expected outcome, since several resolvers may be
    /// chained. `Err` is reserved for class map source faults.
    pub fn find_file(&self, class: &str) -> Result<Option<PathBuf>, AutoloadError> {
        if class.is_empty() {
            return Ok(None);
        }

        let relative = relative_source_path(class);

        for (prefix, dirs) in self.prefixes.bucket_for(class) {
            if !class.starts_with(prefix.as_str()) {
                continue;
            }

            // Cache pass: a resident compiled form proves the file
            // exists, so no stat is needed.
            for dir in dirs {
                let candidate = dir.join(&relative);
                if self.cache.contains(&candidate) {
                    trace!("{class}: compiled-cache hit at {}", candidate.display());
                    return Ok(Some(candidate));
                }
            }

            // Filesystem pass over the same directories, same order.
            for dir in dirs {
                let candidate = dir.join(&relative);
                if candidate.exists() {
                    trace!("{class}: found on disk at {}", candidate.display());
                    return Ok(Some(candidate));
                }
            }
        }

        // No prefix candidate matched - fall back to the class map.
        if let Some(source) = &self.class_map_source {
            let map = self.class_map.get_or_try_init(|| {
                debug!("loading class map");
                source.load()
            })?;
            if let Some(path) = map.get(class) {
                trace!("{class}: class map entry {}", path.display());
                return Ok(Some(path.to_path_buf()));
            }
        }

        trace!("{class}: not found");
        Ok(None)
    }
}

impl Default for ClassFileResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a fully-qualified class name into its relative source path.
///
/// Namespace separators become directory separators, underscores in the
/// final segment become directory separators as well, and the source
/// extension is appended: `Net\Mail\Message` and the legacy flat name
/// `Net_Mail_Message` both map to `Net/Mail/Message.kora`.
fn relative_source_path(class: &str) -> PathBuf {
    let (namespace, leaf) = match class.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => (&class[..pos], &class[pos + 1..]),
        None => ("", class),
    };

    let separator = MAIN_SEPARATOR.to_string();
    let mut relative = String::new();
    if !namespace.is_empty() {
        relative.push_str(&namespace.replace(NAMESPACE_SEPARATOR, &separator));
        relative.push(MAIN_SEPARATOR);
    }
    relative.push_str(&leaf.replace('_', &separator));
    relative.push('.');
    relative.push_str(SOURCE_EXT);

    PathBuf::from(relative)
}

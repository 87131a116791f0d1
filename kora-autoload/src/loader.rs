// Class loading and the host runtime's resolution chain

use crate::error::AutoloadError;
use crate::manifest::AutoloadManifest;
use crate::resolver::ClassFileResolver;
use log::{debug, trace};
use std::path::Path;

/// Capability to read, compile, and execute a source unit at runtime.
///
/// The host runtime implements this. Ahead-of-time deployments would
/// implement it against pre-linked units, or replace the autoload chain
/// with imports generated at build time.
pub trait ScriptEngine {
    fn include(&mut self, path: &Path) -> anyhow::Result<()>;
}

/// A handler in the runtime's class-resolution chain.
///
/// `Ok(true)` means the handler loaded something that now defines
/// `class`; `Ok(false)` means "not mine", and the next handler gets its
/// turn.
pub trait ClassLoader {
    fn load_class(
        &self,
        class: &str,
        engine: &mut dyn ScriptEngine,
    ) -> Result<bool, AutoloadError>;
}

/// Resolver-backed loader: find the file, include it
pub struct Autoloader {
    resolver: ClassFileResolver,
}

impl Autoloader {
    pub fn new(resolver: ClassFileResolver) -> Self {
        Self { resolver }
    }

    /// Build a loader from a namespace manifest file, e.g. the
    /// `namespaces.json` emitted by the package tool
    pub fn from_manifest_file<P: AsRef<Path>>(path: P) -> Result<Self, AutoloadError> {
        let manifest = AutoloadManifest::from_file(path)?;
        Ok(Self::new(ClassFileResolver::from_manifest(manifest)))
    }

    pub fn resolver(&self) -> &ClassFileResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ClassFileResolver {
        &mut self.resolver
    }
}

impl ClassLoader for Autoloader {
    fn load_class(
        &self,
        class: &str,
        engine: &mut dyn ScriptEngine,
    ) -> Result<bool, AutoloadError> {
        let Some(path) = self.resolver.find_file(class)? else {
            return Ok(false);
        };

        engine
            .include(&path)
            .map_err(|source| AutoloadError::Include {
                path: path.clone(),
                source,
            })?;

        debug!("loaded {class} from {}", path.display());
        Ok(true)
    }
}

/// Handle identifying a registered loader, used to unregister it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderHandle(u64);

/// Ordered chain of class loaders owned by the composition root.
///
/// The subsystem that triggers class resolution owns the stack and
/// consults it explicitly; there is no process-global registry. Handlers
/// run in chain order and the first one to report success ends the walk.
#[derive(Default)]
pub struct LoaderStack {
    loaders: Vec<(LoaderHandle, Box<dyn ClassLoader>)>,
    next_handle: u64,
}

impl LoaderStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `loader` to the chain. With `prepend` it runs before every
    /// previously registered handler, otherwise after them.
    pub fn register(&mut self, loader: Box<dyn ClassLoader>, prepend: bool) -> LoaderHandle {
        let handle = LoaderHandle(self.next_handle);
        self.next_handle += 1;

        if prepend {
            self.loaders.insert(0, (handle, loader));
        } else {
            self.loaders.push((handle, loader));
        }
        handle
    }

    /// Remove a previously registered loader. Returns it if the handle
    /// was still registered.
    pub fn unregister(&mut self, handle: LoaderHandle) -> Option<Box<dyn ClassLoader>> {
        let index = self.loaders.iter().position(|(h, _)| *h == handle)?;
        Some(self.loaders.remove(index).1)
    }

    /// Walk the chain until a handler loads `class`.
    ///
    /// `Ok(false)` means every handler passed; that is an expected
    /// outcome, not a fault.
    pub fn load_class(
        &self,
        class: &str,
        engine: &mut dyn ScriptEngine,
    ) -> Result<bool, AutoloadError> {
        for (handle, loader) in &self.loaders {
            if loader.load_class(class, engine)? {
                trace!("{class}: handled by loader {handle:?}");
                return Ok(true);
            }
        }

        trace!("{class}: no loader claimed it");
        Ok(false)
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

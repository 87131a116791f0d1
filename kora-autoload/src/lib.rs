// kora-autoload - Class autoloader for the Kora runtime
// Resolves fully-qualified class names to source files via prefix-mapped
// directories, a compiled-cache fast path, and a class map fallback

pub mod cache;
pub mod class_map;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod prefix_map;
pub mod resolver;

pub use cache::{CompiledCache, MemoryCache, NoCache};
pub use class_map::{ClassMap, ClassMapFile, ClassMapSource};
pub use error::AutoloadError;
pub use loader::{Autoloader, ClassLoader, LoaderHandle, LoaderStack, ScriptEngine};
pub use manifest::{AutoloadManifest, NamespaceEntry, PathSpec};
pub use prefix_map::PrefixMap;
pub use resolver::{ClassFileResolver, NAMESPACE_SEPARATOR, SOURCE_EXT};

/// Autoloader version
pub const VERSION: &str = "0.1.0";

// Exact-match class map and its external source

use crate::error::AutoloadError;
use crate::manifest;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Exact-match fallback table: fully-qualified class name -> file path.
///
/// Consulted only after every prefix candidate has failed. Lookups are
/// whole-string matches; `Foo\Bar` never satisfies `Foo\Bar\Baz`.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    entries: HashMap<String, PathBuf>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, PathBuf>) -> Self {
        Self { entries }
    }

    pub fn get(&self, class: &str) -> Option<&Path> {
        self.entries.get(class).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Produces the class map on demand.
///
/// The resolver consults a source at most once: the first prefix-table
/// miss triggers the load, and the result is kept for the life of the
/// resolver.
pub trait ClassMapSource {
    fn load(&self) -> Result<ClassMap, AutoloadError>;
}

/// Class map backed by a classmap.json file
#[derive(Debug, Clone)]
pub struct ClassMapFile {
    path: PathBuf,
}

impl ClassMapFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClassMapSource for ClassMapFile {
    fn load(&self) -> Result<ClassMap, AutoloadError> {
        let entries = manifest::load_class_map(&self.path)?;
        Ok(ClassMap::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lookups_are_exact() {
        let mut entries = HashMap::new();
        entries.insert(
            "Foo\\Bar".to_string(),
            PathBuf::from("/srv/lib/Foo/Bar.kora"),
        );
        let map = ClassMap::from_entries(entries);

        assert_eq!(
            map.get("Foo\\Bar"),
            Some(Path::new("/srv/lib/Foo/Bar.kora"))
        );
        assert_eq!(map.get("Foo\\Bar\\Baz"), None);
        assert_eq!(map.get("Foo"), None);
    }

    #[test]
    fn test_file_source_loads_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("classmap.json");
        fs::write(&path, r#"{"Legacy_Widget": "/srv/legacy/Widget.kora"}"#)
            .expect("wrote classmap");

        let source = ClassMapFile::new(&path);
        let map = source.load().expect("loads");
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("Legacy_Widget"),
            Some(Path::new("/srv/legacy/Widget.kora"))
        );
    }

    #[test]
    fn test_file_source_propagates_faults() {
        let source = ClassMapFile::new("/nonexistent/classmap.json");
        assert!(matches!(
            source.load(),
            Err(AutoloadError::ManifestRead { .. })
        ));
    }
}

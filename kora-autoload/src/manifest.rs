// Autoload manifest parsing - namespaces.json and classmap.json

use crate::error::AutoloadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One or more base directories for a namespace prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathSpec {
    /// Normalize to an ordered list of directories
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            PathSpec::Single(path) => vec![path],
            PathSpec::Many(paths) => paths,
        }
    }
}

/// A namespace prefix and the directories searched for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceEntry {
    pub prefix: String,
    pub paths: PathSpec,
}

/// Namespace manifest (namespaces.json)
///
/// Serialized as an array, not an object: entry order decides search
/// order, and JSON objects carry no order guarantee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutoloadManifest {
    pub entries: Vec<NamespaceEntry>,
}

impl AutoloadManifest {
    /// Parse namespaces.json from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AutoloadError> {
        let content = fs::read_to_string(&path).map_err(|source| AutoloadError::ManifestRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        Self::from_str(&content, path.as_ref())
    }

    /// Parse namespaces.json from string
    pub fn from_str(content: &str, origin: &Path) -> Result<Self, AutoloadError> {
        serde_json::from_str(content).map_err(|source| AutoloadError::ManifestParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Write the manifest back to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AutoloadError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|source| AutoloadError::ManifestParse {
                path: path.as_ref().to_path_buf(),
                source,
            })?;

        fs::write(&path, content).map_err(|source| AutoloadError::ManifestWrite {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Load a class map file (classmap.json): exact class name -> file path
pub fn load_class_map<P: AsRef<Path>>(path: P) -> Result<HashMap<String, PathBuf>, AutoloadError> {
    let content = fs::read_to_string(&path).map_err(|source| AutoloadError::ManifestRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AutoloadError::ManifestParse {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

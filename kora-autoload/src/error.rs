// Autoloader error types

use std::path::PathBuf;
use thiserror::Error;

/// Faults surfaced by the autoloader.
///
/// An unresolvable class is not a fault: lookups report it as an absence
/// so the next handler in the chain can try. These variants cover the two
/// genuine fault points, the external map files and the script engine.
#[derive(Debug, Error)]
pub enum AutoloadError {
    /// A map file could not be read from disk
    #[error("failed to read {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A map file was not valid JSON for its schema
    #[error("failed to parse {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A map file could not be written back to disk
    #[error("failed to write {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script engine failed while including a resolved file
    #[error("failed to include {}: {source}", path.display())]
    Include {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

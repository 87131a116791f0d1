// Namespace prefix table bucketed by first character

use log::warn;
use std::collections::HashMap;
use std::path::PathBuf;

/// Prefix-to-directories table with single-character fan-out.
///
/// Entries live in a bucket keyed by the first character of their prefix,
/// so a lookup compares only the handful of prefixes that could possibly
/// match. Within a bucket, insertion order is search order; re-setting an
/// existing prefix replaces its directories without moving it.
#[derive(Debug, Clone, Default)]
pub struct PrefixMap {
    buckets: HashMap<char, Vec<(String, Vec<PathBuf>)>>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `paths` under `prefix`, replacing any prior entry for the
    /// exact same prefix. An empty prefix has no bucket and is rejected.
    pub fn set(&mut self, prefix: &str, paths: Vec<PathBuf>) {
        let Some(bucket) = prefix.chars().next() else {
            warn!("ignoring empty namespace prefix");
            return;
        };

        let entries = self.buckets.entry(bucket).or_default();
        match entries.iter_mut().find(|(existing, _)| existing == prefix) {
            Some(entry) => entry.1 = paths,
            None => entries.push((prefix.to_string(), paths)),
        }
    }

    /// All prefixes sharing a bucket with `name`'s first character, in
    /// insertion order. Empty when the bucket has never been touched.
    pub fn bucket_for(&self, name: &str) -> &[(String, Vec<PathBuf>)] {
        name.chars()
            .next()
            .and_then(|first| self.buckets.get(&first))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of registered prefixes across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_bucket_lookup() {
        let mut map = PrefixMap::new();
        map.set("App\\", vec![PathBuf::from("app/src")]);
        map.set("Auth\\", vec![PathBuf::from("auth/src")]);
        map.set("Net\\", vec![PathBuf::from("net/src")]);

        let bucket = map.bucket_for("App\\Kernel");
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].0, "App\\");
        assert_eq!(bucket[1].0, "Auth\\");

        assert_eq!(map.bucket_for("Net\\Socket").len(), 1);
        assert!(map.bucket_for("Zzz\\Nothing").is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut map = PrefixMap::new();
        map.set("Ab\\", vec![PathBuf::from("one")]);
        map.set("Aa\\", vec![PathBuf::from("two")]);
        map.set("Ac\\", vec![PathBuf::from("three")]);

        let prefixes: Vec<&str> = map
            .bucket_for("Anything")
            .iter()
            .map(|(p, _)| p.as_str())
            .collect();
        assert_eq!(prefixes, vec!["Ab\\", "Aa\\", "Ac\\"]);
    }

    #[test]
    fn test_reset_replaces_in_place() {
        let mut map = PrefixMap::new();
        map.set("Ab\\", vec![PathBuf::from("old")]);
        map.set("Aa\\", vec![PathBuf::from("other")]);
        map.set("Ab\\", vec![PathBuf::from("new"), PathBuf::from("newer")]);

        let bucket = map.bucket_for("Ab\\X");
        assert_eq!(bucket.len(), 2);
        // Still first in the bucket, with replaced paths
        assert_eq!(bucket[0].0, "Ab\\");
        assert_eq!(
            bucket[0].1,
            vec![PathBuf::from("new"), PathBuf::from("newer")]
        );
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let mut map = PrefixMap::new();
        map.set("", vec![PathBuf::from("nowhere")]);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}

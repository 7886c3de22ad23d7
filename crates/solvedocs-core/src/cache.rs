//! # Metadata Cache
//!
//! An in-memory mirror of the cache file: `slug -> QuestionMeta`.
//!
//! ## Design Principles
//!
//! - BTreeMap storage so the serialized file has a stable key order
//! - Integer-only statistics
//! - No file I/O here; the app layer reads and writes the JSON text

use crate::error::Result;
use crate::metadata::QuestionMeta;
use std::collections::BTreeMap;

// =============================================================================
// METADATA CACHE
// =============================================================================

/// Cache of previously fetched question metadata, keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct MetadataCache {
    /// Cache storage: slug -> metadata.
    entries: BTreeMap<String, QuestionMeta>,

    /// Statistics: total hits.
    hits: u64,

    /// Statistics: total misses.
    misses: u64,
}

impl MetadataCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the cache file contents.
    ///
    /// Blank input is treated as an empty cache.
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let entries = serde_json::from_str(text)?;
        Ok(Self {
            entries,
            ..Self::default()
        })
    }

    /// Serialize the entries as pretty-printed JSON (two-space indent).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Look up a slug, counting a hit or a miss.
    pub fn get(&mut self, slug: &str) -> Option<&QuestionMeta> {
        if let Some(meta) = self.entries.get(slug) {
            self.hits = self.hits.saturating_add(1);
            Some(meta)
        } else {
            self.misses = self.misses.saturating_add(1);
            None
        }
    }

    /// Look up a slug without touching the statistics.
    #[must_use]
    pub fn peek(&self, slug: &str) -> Option<&QuestionMeta> {
        self.entries.get(slug)
    }

    /// Insert or replace the metadata for a slug.
    pub fn insert(&mut self, slug: impl Into<String>, meta: QuestionMeta) {
        self.entries.insert(slug.into(), meta);
    }

    /// Remove a slug from the cache.
    pub fn remove(&mut self, slug: &str) -> Option<QuestionMeta> {
        self.entries.remove(slug)
    }

    /// Drop every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// All cached slugs in sorted order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All entries in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuestionMeta)> {
        self.entries.iter().map(|(slug, meta)| (slug.as_str(), meta))
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            hit_rate_percent: self.hit_rate_percent(),
        }
    }

    /// Calculate hit rate as integer percentage (0-100).
    #[must_use]
    pub fn hit_rate_percent(&self) -> u8 {
        let total = self.hits.saturating_add(self.misses);
        if total == 0 {
            0
        } else {
            ((self.hits.saturating_mul(100)) / total) as u8
        }
    }
}

// =============================================================================
// CACHE STATISTICS
// =============================================================================

/// Statistics about cache usage during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of entries.
    pub size: usize,

    /// Lookups answered from the cache.
    pub hits: u64,

    /// Lookups that needed the API.
    pub misses: u64,

    /// Hit rate as integer percentage (0-100).
    pub hit_rate_percent: u8,
}

// =============================================================================
// TESTS
// =============================================================================

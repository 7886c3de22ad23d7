//! # Metadata Resolution
//!
//! Cache first, then at most one API request per slug per run.
//!
//! Lookups that fail are logged and answered with empty metadata so a
//! flaky network never blocks regeneration. Only successful answers are
//! written to the cache file, immediately, so an interrupted run keeps what
//! it already fetched.

use crate::config::Config;
use crate::error::{CliError, Result};
use solvedocs_client::MetadataClient;
use solvedocs_core::{MetadataCache, QuestionMeta};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the cache file, or start empty when it does not exist yet.
pub fn load_cache(path: &Path) -> Result<MetadataCache> {
    if !path.exists() {
        return Ok(MetadataCache::new());
    }
    let text = fs::read_to_string(path).map_err(CliError::io(path))?;
    MetadataCache::from_json(&text).map_err(|source| CliError::InvalidCache {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the cache file, creating its directory if needed.
pub fn save_cache(cache: &MetadataCache, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(CliError::io(parent))?;
        }
    }
    fs::write(path, cache.to_json()?).map_err(CliError::io(path))
}

/// Resolves slugs to metadata through the cache file and the API.
#[derive(Debug)]
pub struct MetadataResolver {
    cache: MetadataCache,
    cache_path: PathBuf,
    /// `None` when running offline.
    client: Option<MetadataClient>,
    /// Slugs already attempted without success during this run.
    unresolved: BTreeSet<String>,
    requests: usize,
}

impl MetadataResolver {
    /// Build a resolver from the run configuration.
    pub fn load(config: &Config) -> Result<Self> {
        let client = if config.offline {
            None
        } else {
            Some(MetadataClient::with_timeout(
                config.endpoint.clone(),
                config.timeout,
            )?)
        };
        Self::with_client(&config.cache, client)
    }

    /// Build a resolver around an explicit client (or none for offline use).
    pub fn with_client(cache_path: &Path, client: Option<MetadataClient>) -> Result<Self> {
        let cache = load_cache(cache_path)?;
        tracing::debug!(path = %cache_path.display(), entries = cache.len(), "loaded metadata cache");
        Ok(Self {
            cache,
            cache_path: cache_path.to_path_buf(),
            client,
            unresolved: BTreeSet::new(),
            requests: 0,
        })
    }

    /// Metadata for a slug; empty when it cannot be obtained.
    ///
    /// Only a failure to write the cache file is an error.
    pub async fn resolve(&mut self, slug: &str) -> Result<QuestionMeta> {
        if let Some(meta) = self.cache.get(slug) {
            tracing::debug!(slug, "cache hit");
            return Ok(meta.clone());
        }
        if self.unresolved.contains(slug) {
            return Ok(QuestionMeta::empty());
        }

        let Some(client) = &self.client else {
            tracing::debug!(slug, "offline, no cached metadata");
            self.unresolved.insert(slug.to_string());
            return Ok(QuestionMeta::empty());
        };

        self.requests += 1;
        match client.question_detail(slug).await {
            Ok(Some(meta)) => {
                self.cache.insert(slug, meta.clone());
                self.save()?;
                Ok(meta)
            }
            Ok(None) => {
                tracing::warn!(slug, "no question data returned");
                self.unresolved.insert(slug.to_string());
                Ok(QuestionMeta::empty())
            }
            Err(error) => {
                tracing::warn!(slug, %error, "failed to fetch question details");
                self.unresolved.insert(slug.to_string());
                Ok(QuestionMeta::empty())
            }
        }
    }

    /// Persist the cache file.
    pub fn save(&self) -> Result<()> {
        save_cache(&self.cache, &self.cache_path)
    }

    #[must_use]
    pub fn cache(&self) -> &MetadataCache {
        &self.cache
    }

    /// Number of API requests made so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }
}

//! Translation cache with a fixed time-to-live
//!
//! Keys combine the language pair and the text (`"en-hi:hello"`). Entries
//! older than the TTL are ignored on lookup and overwritten on recompute; they
//! are never collected in the background.
//!
//! The persisted form is a JSON object of
//! `{key: {translation, confidence, timestamp}}` with RFC 3339 timestamps.
//! Entries that fail to parse are dropped on load.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

/// Default entry lifetime: 24 hours
pub const DEFAULT_TTL: TimeDelta = TimeDelta::hours(24);

/// A cached translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub translation: String,
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
}

/// Build the cache key for a request
pub fn cache_key(text: &str, source: &str, target: &str) -> String {
    format!("{}-{}:{}", source, target, text)
}

/// Language pair encoded in a cache key
fn key_languages(key: &str) -> Option<(&str, &str)> {
    let (pair, _) = key.split_once(':')?;
    pair.split_once('-')
}

#[derive(Debug, Clone)]
pub struct TranslationCache {
    entries: HashMap<String, CacheEntry>,
    ttl: TimeDelta,
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl TranslationCache {
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn is_stale(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now - entry.timestamp > self.ttl
    }

    /// Fresh entry for `key` as of `now`
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&CacheEntry> {
        self.entries
            .get(key)
            .filter(|entry| !self.is_stale(entry, now))
    }

    /// Entry for `key` regardless of age
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    /// Drop every entry whose source or target is `language`
    pub fn prune_language(&mut self, language: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| match key_languages(key) {
            Some((source, target)) => source != language && target != language,
            None => true,
        });
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the persisted JSON layout
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Restore from the persisted JSON layout, skipping malformed entries
    pub fn from_json(json: &str, ttl: TimeDelta) -> Self {
        let mut cache = Self::new(ttl);
        let map: Map<String, Value> = match serde_json::from_str(json) {
            Ok(map) => map,
            Err(e) => {
                warn!("discarding unreadable translation cache: {}", e);
                return cache;
            }
        };
        for (key, value) in map {
            match serde_json::from_value::<CacheEntry>(value) {
                Ok(entry) => cache.insert(key, entry),
                Err(e) => warn!(key = %key, "skipping malformed cache entry: {}", e),
            }
        }
        cache
    }
}

//! Offline language packs
//!
//! A [`PackManager`] owns the install state of every bundled language, the
//! dictionaries of installed packs and a [`TranslationCache`] of its own.
//! English is the pivot and is always installed; every other language starts
//! uninstalled until [`PackManager::install_pack`] runs its simulated download
//! to completion.
//!
//! Routes for [`PackManager::translate`]:
//! - `en → x`: pack `x`
//! - `x → en`: pack `x`, reversed
//! - `x → y`: `x → en`, then `en → y`; the confidence is the lower of the two
//!
//! State is persisted through a [`KeyValueStore`]: one status record per
//! language under `bhasha.offline.pack.{code}` and the cache under
//! `bhasha.offline.cache`. Unreadable records are treated as absent.

pub mod catalog;
pub mod matcher;

use crate::cache::{CacheEntry, TranslationCache, cache_key};
use crate::error::{PackError, PackResult};
use crate::store::KeyValueStore;
use bhasha::lexicon::{Lexicon, PIVOT_LANGUAGE, normalize_code};
use catalog::{CATALOG, PackSpec, canned_for, find_spec};
use chrono::{DateTime, TimeDelta, Utc};
use matcher::{CACHED_CONFIDENCE, EXACT_CONFIDENCE, PackMatch, match_text};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const PACK_KEY_PREFIX: &str = "bhasha.offline.pack.";
pub const CACHE_KEY: &str = "bhasha.offline.cache";

/// Tuning for the simulated download and the cache
#[derive(Debug, Clone)]
pub struct PackManagerConfig {
    /// Pause between two progress reports
    pub download_step_delay: Duration,
    /// Progress increment, in percent
    pub progress_step: u8,
    pub cache_ttl: TimeDelta,
}

impl Default for PackManagerConfig {
    fn default() -> Self {
        Self {
            download_step_delay: Duration::from_millis(100),
            progress_step: 10,
            cache_ttl: crate::cache::DEFAULT_TTL,
        }
    }
}

impl PackManagerConfig {
    /// No delay between progress steps
    pub fn instant() -> Self {
        Self {
            download_step_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// One installable language
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePack {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub size_bytes: u64,
    pub source: String,
    pub installed: bool,
    pub last_updated: Option<DateTime<Utc>>,
    /// Number of dictionary entries once installed
    pub entry_count: usize,
}

impl LanguagePack {
    fn from_spec(spec: &PackSpec) -> Self {
        Self {
            code: spec.code.to_string(),
            name: spec.name.to_string(),
            native_name: spec.native_name.to_string(),
            size_bytes: spec.size_bytes,
            source: spec.source.to_string(),
            installed: false,
            last_updated: None,
            entry_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSummary {
    pub total_declared_size: u64,
    pub used_size: u64,
    pub pack_count: usize,
    pub installed_count: usize,
}

/// Result of a pack-based translation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackTranslation {
    pub text: String,
    pub confidence: f32,
    pub from_cache: bool,
}

/// Persisted per-language record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackStatus {
    installed: bool,
    last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug)]
struct PackDictionary {
    from_english: Lexicon,
    to_english: Lexicon,
}

impl PackDictionary {
    fn load(spec: &PackSpec) -> Self {
        let from_english: Lexicon = spec.entries.iter().copied().collect();
        let to_english = from_english.reversed();
        Self {
            from_english,
            to_english,
        }
    }
}

#[derive(Debug)]
struct PackState {
    packs: Vec<LanguagePack>,
    dictionaries: HashMap<String, PackDictionary>,
}

impl PackState {
    fn pack(&self, code: &str) -> Option<&LanguagePack> {
        self.packs.iter().find(|pack| pack.code == code)
    }

    fn pack_mut(&mut self, code: &str) -> Option<&mut LanguagePack> {
        self.packs.iter_mut().find(|pack| pack.code == code)
    }

    fn require_installed(&self, code: &str) -> PackResult<()> {
        match self.pack(code) {
            None => Err(PackError::PackNotFound(code.to_string())),
            Some(pack) if !pack.installed => Err(PackError::PackNotInstalled(code.to_string())),
            Some(_) => Ok(()),
        }
    }

    fn mark_installed(&mut self, spec: &PackSpec, last_updated: Option<DateTime<Utc>>) {
        let dictionary = PackDictionary::load(spec);
        let entry_count = dictionary.from_english.len();
        self.dictionaries.insert(spec.code.to_string(), dictionary);
        if let Some(pack) = self.pack_mut(spec.code) {
            pack.installed = true;
            pack.last_updated = last_updated;
            pack.entry_count = entry_count;
        }
    }

    /// Translate one leg that has English on one side
    fn match_leg(&self, text: &str, source: &str, target: &str) -> PackMatch {
        let empty = Lexicon::new();
        let lexicon = if source == PIVOT_LANGUAGE {
            self.dictionaries.get(target).map(|d| &d.from_english)
        } else {
            self.dictionaries.get(source).map(|d| &d.to_english)
        };
        match_text(lexicon.unwrap_or(&empty), canned_for(source, target), text)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lifecycle and translation over the bundled language packs
pub struct PackManager {
    state: Mutex<PackState>,
    cache: Mutex<TranslationCache>,
    store: Arc<dyn KeyValueStore>,
    config: PackManagerConfig,
}

impl std::fmt::Debug for PackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PackManager {
    /// Restore install flags and the cache from `store`
    pub fn new(store: Arc<dyn KeyValueStore>, config: PackManagerConfig) -> Self {
        let mut state = PackState {
            packs: CATALOG.iter().map(LanguagePack::from_spec).collect(),
            dictionaries: HashMap::new(),
        };

        for spec in CATALOG {
            if spec.code == PIVOT_LANGUAGE {
                state.mark_installed(spec, None);
                continue;
            }
            if let Some(status) = read_status(store.as_ref(), spec.code)
                && status.installed
            {
                debug!(pack = spec.code, "restoring installed pack");
                state.mark_installed(spec, status.last_updated);
            }
        }

        let cache = match store.get(CACHE_KEY) {
            Some(json) => TranslationCache::from_json(&json, config.cache_ttl),
            None => TranslationCache::new(config.cache_ttl),
        };

        Self {
            state: Mutex::new(state),
            cache: Mutex::new(cache),
            store,
            config,
        }
    }

    pub fn config(&self) -> &PackManagerConfig {
        &self.config
    }

    pub fn list_packs(&self) -> Vec<LanguagePack> {
        lock(&self.state).packs.clone()
    }

    pub fn is_pack_installed(&self, language: &str) -> bool {
        let code = normalize_code(language);
        lock(&self.state)
            .pack(&code)
            .is_some_and(|pack| pack.installed)
    }

    /// Codes of installed packs, catalog order
    pub fn installed_languages(&self) -> Vec<String> {
        lock(&self.state)
            .packs
            .iter()
            .filter(|pack| pack.installed)
            .map(|pack| pack.code.clone())
            .collect()
    }

    pub fn storage_summary(&self) -> StorageSummary {
        let state = lock(&self.state);
        StorageSummary {
            total_declared_size: state.packs.iter().map(|pack| pack.size_bytes).sum(),
            used_size: state
                .packs
                .iter()
                .filter(|pack| pack.installed)
                .map(|pack| pack.size_bytes)
                .sum(),
            pack_count: state.packs.len(),
            installed_count: state.packs.iter().filter(|pack| pack.installed).count(),
        }
    }

    /// Download and install the pack for `language`
    ///
    /// `on_progress` receives increasing percentages ending at 100; returning
    /// `ControlFlow::Break` interrupts the download, which yields `Ok(false)`
    /// and leaves the pack uninstalled. The pack is only marked installed
    /// after the last step, so dropping the future part-way leaves no trace.
    /// Installing an installed pack reports 100 and returns `Ok(true)`.
    pub async fn install_pack<F>(&self, language: &str, mut on_progress: F) -> PackResult<bool>
    where
        F: FnMut(u8) -> ControlFlow<()>,
    {
        let code = normalize_code(language);
        let spec = find_spec(&code).ok_or_else(|| PackError::PackNotFound(code.clone()))?;

        if self.is_pack_installed(&code) {
            let _ = on_progress(100);
            return Ok(true);
        }

        info!(pack = %code, source = spec.source, "downloading language pack");
        let step = self.config.progress_step.clamp(1, 100);
        let mut progress = 0u8;
        loop {
            if on_progress(progress).is_break() {
                info!(pack = %code, progress, "language pack download interrupted");
                return Ok(false);
            }
            if progress == 100 {
                break;
            }
            if !self.config.download_step_delay.is_zero() {
                tokio::time::sleep(self.config.download_step_delay).await;
            }
            progress = progress.saturating_add(step).min(100);
        }

        let now = Utc::now();
        let status = PackStatus {
            installed: true,
            last_updated: Some(now),
        };
        self.write_status(&code, &status)?;
        lock(&self.state).mark_installed(spec, Some(now));
        info!(pack = %code, "language pack installed");
        Ok(true)
    }

    /// Uninstall the pack for `language`, pruning its cached translations
    ///
    /// Returns `Ok(false)` when the pack was not installed or is the pivot.
    pub fn remove_pack(&self, language: &str) -> PackResult<bool> {
        let code = normalize_code(language);
        if find_spec(&code).is_none() {
            return Err(PackError::PackNotFound(code));
        }
        if code == PIVOT_LANGUAGE || !self.is_pack_installed(&code) {
            return Ok(false);
        }

        self.store
            .remove(&pack_key(&code))
            .map_err(|e| PackError::Storage(e.to_string()))?;
        {
            let mut state = lock(&self.state);
            state.dictionaries.remove(&code);
            if let Some(pack) = state.pack_mut(&code) {
                pack.installed = false;
                pack.last_updated = None;
                pack.entry_count = 0;
            }
        }

        let mut cache = lock(&self.cache);
        let pruned = cache.prune_language(&code);
        self.persist_cache(&cache);
        info!(pack = %code, pruned, "language pack removed");
        Ok(true)
    }

    /// Translate with installed packs
    ///
    /// Fails with `PackNotFound` for a language without a pack and with
    /// `PackNotInstalled` when either side still needs downloading.
    pub fn translate(&self, text: &str, source: &str, target: &str) -> PackResult<PackTranslation> {
        let source = normalize_code(source);
        let target = normalize_code(target);

        let state = lock(&self.state);
        state.require_installed(&source)?;
        state.require_installed(&target)?;

        if source == target || text.trim().is_empty() {
            return Ok(PackTranslation {
                text: text.to_string(),
                confidence: EXACT_CONFIDENCE,
                from_cache: false,
            });
        }

        let key = cache_key(text, &source, &target);
        let now = Utc::now();
        {
            let cache = lock(&self.cache);
            match cache.get(&key, now) {
                Some(entry) => {
                    debug!(%key, "pack cache hit");
                    return Ok(PackTranslation {
                        text: entry.translation.clone(),
                        confidence: CACHED_CONFIDENCE,
                        from_cache: true,
                    });
                }
                None if cache.peek(&key).is_some() => debug!(%key, "stale pack cache entry"),
                None => {}
            }
        }

        let result = if source == PIVOT_LANGUAGE || target == PIVOT_LANGUAGE {
            state.match_leg(text, &source, &target)
        } else {
            let to_pivot = state.match_leg(text, &source, PIVOT_LANGUAGE);
            let from_pivot = state.match_leg(&to_pivot.text, PIVOT_LANGUAGE, &target);
            PackMatch {
                text: from_pivot.text,
                confidence: to_pivot.confidence.min(from_pivot.confidence),
            }
        };
        drop(state);

        let mut cache = lock(&self.cache);
        cache.insert(
            key,
            CacheEntry {
                translation: result.text.clone(),
                confidence: result.confidence,
                timestamp: now,
            },
        );
        self.persist_cache(&cache);

        Ok(PackTranslation {
            text: result.text,
            confidence: result.confidence,
            from_cache: false,
        })
    }

    /// Drop every cached translation
    pub fn clear_cache(&self) {
        let mut cache = lock(&self.cache);
        cache.clear();
        self.persist_cache(&cache);
    }

    pub fn cache_len(&self) -> usize {
        lock(&self.cache).len()
    }

    #[cfg(test)]
    fn insert_cache_entry(&self, key: String, entry: CacheEntry) {
        lock(&self.cache).insert(key, entry);
    }

    fn write_status(&self, code: &str, status: &PackStatus) -> PackResult<()> {
        let json = serde_json::to_string(status).map_err(|e| PackError::Storage(e.to_string()))?;
        self.store
            .set(&pack_key(code), &json)
            .map_err(|e| PackError::Storage(e.to_string()))
    }

    fn persist_cache(&self, cache: &TranslationCache) {
        let result = cache
            .to_json()
            .map_err(std::io::Error::other)
            .and_then(|json| self.store.set(CACHE_KEY, &json));
        if let Err(e) = result {
            warn!("failed to persist pack cache: {}", e);
        }
    }
}

fn pack_key(code: &str) -> String {
    format!("{}{}", PACK_KEY_PREFIX, code)
}

fn read_status(store: &dyn KeyValueStore, code: &str) -> Option<PackStatus> {
    let raw = store.get(&pack_key(code))?;
    serde_json::from_str(&raw)
        .inspect_err(|e| warn!(pack = code, "ignoring unreadable pack status: {}", e))
        .ok()
}

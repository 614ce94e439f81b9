//! Remote, offline-pack and dictionary translation for bhasha
//!
//! This crate layers three translation tiers behind one [`FallbackTranslator`]:
//! a remote HTTP endpoint ([`RemoteTranslator`]), downloadable offline language
//! packs ([`PackManager`]) and the built-in dictionary [`bhasha::Resolver`].
//!
//! # Workflow Example
//!
//! ```ignore
//! use bhasha::Resolver;
//! use bhasha_mt::{
//!     FallbackTranslator, JsonFileStore, MachineTranslator, PackManager, PackManagerConfig,
//!     RemoteTranslator,
//! };
//! use std::ops::ControlFlow;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Restore pack state
//!     let store = Arc::new(JsonFileStore::open("bhasha-store.json"));
//!     let packs = Arc::new(PackManager::new(store, PackManagerConfig::default()));
//!
//!     // 2. Download a pack for offline use
//!     packs.install_pack("hi", |p| { println!("{}%", p); ControlFlow::Continue(()) }).await?;
//!
//!     // 3. Translate, falling back when the endpoint is unreachable
//!     let remote: Option<Arc<dyn MachineTranslator>> =
//!         RemoteTranslator::from_env().ok().map(|r| Arc::new(r) as _);
//!     let chain = FallbackTranslator::new(remote, packs, Arc::new(Resolver::builtin()));
//!     let outcome = chain.translate("Good morning", "en", "hi", false).await;
//!
//!     println!("{} ({:?})", outcome.text, outcome.source);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod fallback;
pub mod mock;
pub mod packs;
pub mod remote;
pub mod store;
pub mod translator;

// Integration tests (only available during testing)
#[cfg(test)]
mod integration_tests;

// Re-export main types for convenient access
pub use cache::{CacheEntry, TranslationCache, cache_key};
pub use error::{MtError, MtResult, PackError, PackResult};
pub use fallback::{FallbackTranslator, TranslationOutcome, TranslationSource};
pub use mock::{MockMode, MockTranslator};
pub use packs::{
    LanguagePack, PackManager, PackManagerConfig, PackTranslation, StorageSummary,
};
pub use remote::{API_KEY_ENV, RemoteTranslator, URL_ENV, chunk_paragraphs};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use translator::{MachineTranslator, normalize_locale, validate_locale};

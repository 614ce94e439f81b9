//! Three-tier translation: remote provider, offline packs, built-in dictionary
//!
//! ```text
//! online + remote configured ── ok ──> Remote
//!            │ error / offline
//!            v
//! both packs installed ── ok ──> OfflinePack
//!            │ otherwise
//!            v
//! Resolver ──> Dictionary (never fails)
//! ```

use crate::packs::PackManager;
use crate::translator::MachineTranslator;
use bhasha::Resolver;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tier that produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TranslationSource {
    Remote,
    OfflinePack,
    Dictionary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationOutcome {
    pub text: String,
    pub source: TranslationSource,
    /// Heuristic score, only reported by offline packs
    pub confidence: Option<f32>,
}

pub struct FallbackTranslator {
    remote: Option<Arc<dyn MachineTranslator>>,
    packs: Arc<PackManager>,
    resolver: Arc<Resolver>,
}

impl FallbackTranslator {
    pub fn new(
        remote: Option<Arc<dyn MachineTranslator>>,
        packs: Arc<PackManager>,
        resolver: Arc<Resolver>,
    ) -> Self {
        Self {
            remote,
            packs,
            resolver,
        }
    }

    pub fn packs(&self) -> &Arc<PackManager> {
        &self.packs
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    pub fn remote_name(&self) -> Option<&str> {
        self.remote.as_deref().map(|remote| remote.provider_name())
    }

    /// Translate through the first tier that succeeds
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        offline: bool,
    ) -> TranslationOutcome {
        if let Some(remote) = self.remote.as_deref().filter(|_| !offline) {
            match remote.translate(text, source, target).await {
                Ok(translation) => {
                    return TranslationOutcome {
                        text: translation,
                        source: TranslationSource::Remote,
                        confidence: None,
                    };
                }
                Err(e) => warn!(
                    provider = remote.provider_name(),
                    "remote translation failed, using local fallback: {}", e
                ),
            }
        }

        if self.packs.is_pack_installed(source) && self.packs.is_pack_installed(target) {
            match self.packs.translate(text, source, target) {
                Ok(result) => {
                    return TranslationOutcome {
                        text: result.text,
                        source: TranslationSource::OfflinePack,
                        confidence: Some(result.confidence),
                    };
                }
                Err(e) => debug!("offline pack unavailable: {}", e),
            }
        }

        TranslationOutcome {
            text: self.resolver.resolve(text, source, target),
            source: TranslationSource::Dictionary,
            confidence: None,
        }
    }
}

//! Remote translation endpoint
//!
//! Long documents are split into chunks before they are sent: the text is
//! cut at blank lines into paragraphs, paragraphs over the size limit are cut
//! again between sentences, and the translated pieces are stitched back with
//! the same paragraph breaks.
//!
//! # Wire format
//!
//! ```text
//! POST {endpoint}
//! {"text": "...", "sourceLang": "en", "targetLang": "hi"}
//!
//! 200 OK
//! {"translation": "..."}
//! ```
//!
//! Any non-2xx status is an error; the fallback chain then translates locally.
//!
//! # Configuration
//!
//! [`RemoteTranslator::from_env`] reads `BHASHA_TRANSLATE_URL` (required) and
//! `BHASHA_TRANSLATE_API_KEY` (optional, sent as a bearer token).

use crate::error::{MtError, MtResult};
use crate::translator::{MachineTranslator, normalize_locale, validate_locale};
use async_trait::async_trait;
use bhasha::segmenter::split_sentences;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

pub const URL_ENV: &str = "BHASHA_TRANSLATE_URL";
pub const API_KEY_ENV: &str = "BHASHA_TRANSLATE_API_KEY";

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n\s*").expect("blank line regex is valid"));

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoteRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct RemoteResponse {
    translation: String,
}

/// HTTP client for the remote translation endpoint
#[derive(Clone)]
pub struct RemoteTranslator {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
    max_chunk_chars: usize,
}

impl RemoteTranslator {
    /// Default upper bound on characters sent in one request
    pub const DEFAULT_MAX_CHUNK_CHARS: usize = 4_500;

    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(endpoint: String, api_key: Option<String>) -> MtResult<Self> {
        if endpoint.trim().is_empty() {
            return Err(MtError::ConfigError("endpoint cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
            max_chunk_chars: Self::DEFAULT_MAX_CHUNK_CHARS,
        })
    }

    /// Create a provider from `BHASHA_TRANSLATE_URL` and `BHASHA_TRANSLATE_API_KEY`
    pub fn from_env() -> MtResult<Self> {
        let endpoint = std::env::var(URL_ENV).map_err(|_| {
            MtError::ConfigError(format!("{} environment variable not set", URL_ENV))
        })?;
        Self::new(endpoint, std::env::var(API_KEY_ENV).ok())
    }

    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars.max(1);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn translate_chunk(&self, text: &str, source: &str, target: &str) -> MtResult<String> {
        let body = RemoteRequest {
            text,
            source_lang: source,
            target_lang: target,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let parsed: RemoteResponse = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;
        Ok(parsed.translation)
    }
}

impl std::fmt::Debug for RemoteTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteTranslator")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("max_chunk_chars", &self.max_chunk_chars)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for RemoteTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let source = normalize_locale(source_locale);
        let target = normalize_locale(target_locale);
        let paragraphs = chunk_paragraphs(text, self.max_chunk_chars);
        debug!(
            paragraphs = paragraphs.len(),
            "sending {} chunk(s) to {}",
            paragraphs.iter().map(Vec::len).sum::<usize>(),
            self.endpoint
        );

        let mut translated = Vec::with_capacity(paragraphs.len());
        for pieces in &paragraphs {
            let mut parts = Vec::with_capacity(pieces.len());
            for piece in pieces {
                parts.push(self.translate_chunk(piece, &source, &target).await?);
            }
            translated.push(parts.join(" "));
        }
        Ok(translated.join("\n\n"))
    }

    fn provider_name(&self) -> &str {
        "Remote Translator"
    }
}

/// Split text into paragraphs of request-sized pieces
///
/// Paragraphs are separated by blank lines. A paragraph longer than
/// `max_chars` is split between sentences, packing as many whole sentences
/// into each piece as fit; a single sentence over the limit is sent alone.
pub fn chunk_paragraphs(text: &str, max_chars: usize) -> Vec<Vec<String>> {
    BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| {
            if paragraph.chars().count() <= max_chars {
                vec![paragraph.to_string()]
            } else {
                pack_sentences(paragraph, max_chars)
            }
        })
        .collect()
}

fn pack_sentences(paragraph: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(paragraph) {
        let len = sentence.chars().count();
        if !current.is_empty() && current_len + 1 + len > max_chars {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&sentence);
        current_len += len;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

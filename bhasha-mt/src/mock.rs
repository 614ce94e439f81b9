//! Mock Machine Translator for testing
//!
//! A deterministic, network-free stand-in for the remote provider. It records
//! every request so tests can check how text was chunked before it was sent.
//!
//! # Example
//!
//! ```ignore
//! use bhasha_mt::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "hello" → "hello_fr"
    Suffix,

    /// Predefined `(text, target_locale) → translation`, falling back to `Suffix`
    Mappings(HashMap<(String, String), String>),

    /// Simulate provider errors
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Every text received, in order
    requests: Mutex<Vec<String>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Texts received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        self.apply_delay().await;
        self.apply_translation(text, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_single_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "en", "fr").await.unwrap();
        assert_eq!(result, "hello_fr");
    }

    #[tokio::test]
    async fn test_suffix_batch_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let texts = vec!["hello".to_string(), "world".to_string()];
        let results = mock.translate_batch(&texts, "en", "hi").await.unwrap();
        assert_eq!(results, vec!["hello_hi", "world_hi"]);
    }

    #[tokio::test]
    async fn test_mapping_with_fallback() {
        let mut map = HashMap::new();
        map.insert(("hello".to_string(), "hi".to_string()), "नमस्ते".to_string());
        let mock = MockTranslator::new(MockMode::Mappings(map));
        assert_eq!(mock.translate("hello", "en", "hi").await.unwrap(), "नमस्ते");
        assert_eq!(mock.translate("unknown", "en", "hi").await.unwrap(), "unknown_hi");
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        match mock.translate("hello", "en", "fr").await {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected TranslationError"),
        }
    }

    #[tokio::test]
    async fn test_error_mode_batch_fails() {
        let mock = MockTranslator::new(MockMode::Error("Network error".to_string()));
        let texts = vec!["hello".to_string()];
        assert!(mock.translate_batch(&texts, "en", "fr").await.is_err());
    }

    #[tokio::test]
    async fn test_noop_returns_unchanged() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let result = mock.translate("Hello world", "en", "fr").await.unwrap();
        assert_eq!(result, "Hello world");
    }

    #[tokio::test]
    async fn test_requests_are_recorded_in_order() {
        let mock = MockTranslator::new(MockMode::NoOp);
        mock.translate("first", "en", "hi").await.unwrap();
        mock.translate("second", "en", "hi").await.unwrap();
        assert_eq!(mock.requests(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = std::time::Instant::now();
        let _ = mock.translate("hello", "en", "fr").await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
